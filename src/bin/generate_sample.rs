use std::path::PathBuf;

use anyhow::{Context, Result};
use gpa_ledger::data::model::{Category, Course};
use gpa_ledger::data::scoring::ScoreSummary;
use gpa_ledger::data::store::CourseStore;

/// (name, credit, score, category) per course, grouped by semester.
const CATALOG: &[(&str, &[(&str, f64, f64, Category)])] = &[
    (
        "2022-1",
        &[
            ("Calculus I", 5.0, 88.5, Category::Major),
            ("Introduction to Programming", 4.0, 92.0, Category::Major),
            ("Moral Education and Law", 3.0, 81.0, Category::Political),
            ("College English I", 2.0, 76.5, Category::General),
            ("Physical Education I", 1.0, 90.0, Category::Quality),
        ],
    ),
    (
        "2022-2",
        &[
            ("Calculus II", 5.0, 79.0, Category::Major),
            ("Linear Algebra", 3.0, 85.5, Category::Major),
            ("Modern Chinese History", 3.0, 73.0, Category::Political),
            ("College English II", 2.0, 82.0, Category::General),
            ("Physical Education II", 1.0, 95.0, Category::Quality),
        ],
    ),
    (
        "2023-1",
        &[
            ("Data Structures", 4.0, 91.5, Category::Major),
            ("Probability and Statistics", 3.0, 68.0, Category::Major),
            ("Principles of Marxism", 3.0, 77.5, Category::Political),
            ("Mental Health", 1.0, 93.0, Category::Quality),
            ("Film Appreciation", 1.5, 86.0, Category::General),
        ],
    ),
    (
        "2023-2",
        &[
            ("Operating Systems", 4.0, 89.0, Category::Major),
            ("Computer Networks", 3.5, 74.5, Category::Major),
            ("Situation and Policy", 1.0, 84.0, Category::Political),
            ("Innovation and Entrepreneurship", 2.0, 96.5, Category::Quality),
            ("History of Science", 2.0, 71.0, Category::General),
        ],
    ),
];

fn sample_courses() -> Vec<Course> {
    let mut courses = Vec::new();
    for (semester, entries) in CATALOG {
        for &(name, credit, score, category) in entries.iter() {
            // Physical education does not count toward the GPA.
            let selected = !name.starts_with("Physical Education");
            courses.push(Course::new(name, credit, score, selected, *semester, category));
        }
    }
    courses
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_score.csv"));

    let courses = sample_courses();

    let store = CourseStore::new(&output_path);
    store
        .save(&courses)
        .with_context(|| format!("writing {}", output_path.display()))?;

    let summary = ScoreSummary::compute(&courses);
    println!(
        "Wrote {} courses to {} (average {:.2}, standard 4-point GPA {:.2})",
        courses.len(),
        output_path.display(),
        summary.average_score,
        summary.standard_four
    );
    Ok(())
}
