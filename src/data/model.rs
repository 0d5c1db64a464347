use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category – the closed set of course classifications
// ---------------------------------------------------------------------------

/// Course classification used for grouping and per-category averages.
///
/// Persisted by its symbolic name (`MAJOR`, `POLITICAL`, ...), shown to the
/// user by its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Major,
    Political,
    Quality,
    General,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Major,
        Category::Political,
        Category::Quality,
        Category::General,
    ];

    /// Human-readable label used in the table and combo boxes.
    pub fn label(self) -> &'static str {
        match self {
            Category::Major => "Major Course",
            Category::Political => "Political Course",
            Category::Quality => "Quality Course",
            Category::General => "General Course",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Course – one row of the data file
// ---------------------------------------------------------------------------

/// A single course record.
///
/// Records are values: an edit builds a new `Course` and replaces the old one
/// by position instead of mutating it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    credit: f64,
    score: f64,
    selected: bool,
    semester: String,
    category: Category,
    is_major_course: bool,
}

impl Course {
    /// Build a record. No range checks happen here; see [`super::form`].
    pub fn new(
        name: impl Into<String>,
        credit: f64,
        score: f64,
        selected: bool,
        semester: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            credit,
            score,
            selected,
            semester: semester.into(),
            category,
            is_major_course: false,
        }
    }

    /// Copy of this record with the "counts toward GPA" flag replaced.
    pub fn with_selected(&self, selected: bool) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }

    /// Copy of this record with the major-course flag replaced.
    pub fn with_major_course(&self, is_major_course: bool) -> Self {
        Self {
            is_major_course,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit(&self) -> f64 {
        self.credit
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Whether the course counts toward the GPA aggregates.
    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn semester(&self) -> &str {
        &self.semester
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Leftover flag: not used by any computation and not persisted.
    pub fn is_major_course(&self) -> bool {
        self.is_major_course
    }

    /// Render the seven display columns of the course table.
    /// `position` is the 0-based row index; the first column is 1-based.
    pub fn table_row(&self, position: usize) -> [String; 7] {
        [
            (position + 1).to_string(),
            self.name.clone(),
            format_number(self.credit),
            format_number(self.score),
            self.category.label().to_string(),
            self.semester.clone(),
            if self.selected { "Yes" } else { "No" }.to_string(),
        ]
    }
}

/// Whole numbers keep one decimal place (`3.0`, not `3`).
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

// ---------------------------------------------------------------------------
// Grouping helpers
// ---------------------------------------------------------------------------

/// Courses grouped by semester label, semesters in lexicographic order.
pub fn courses_by_semester(courses: &[Course]) -> BTreeMap<&str, Vec<&Course>> {
    let mut groups: BTreeMap<&str, Vec<&Course>> = BTreeMap::new();
    for course in courses {
        groups.entry(course.semester()).or_default().push(course);
    }
    groups
}

/// Courses grouped by category, categories in declaration order.
pub fn courses_by_category(courses: &[Course]) -> BTreeMap<Category, Vec<&Course>> {
    let mut groups: BTreeMap<Category, Vec<&Course>> = BTreeMap::new();
    for course in courses {
        groups.entry(course.category()).or_default().push(course);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_row_layout() {
        let course = Course::new("Linear Algebra", 3.0, 92.5, true, "2023-1", Category::Major);
        let row = course.table_row(0);
        assert_eq!(
            row,
            [
                "1".to_string(),
                "Linear Algebra".to_string(),
                "3.0".to_string(),
                "92.5".to_string(),
                "Major Course".to_string(),
                "2023-1".to_string(),
                "Yes".to_string(),
            ]
        );
    }

    #[test]
    fn test_table_row_unselected() {
        let course = Course::new("Ethics", 2.0, 70.0, false, "2023-2", Category::Political);
        let row = course.table_row(4);
        assert_eq!(row[0], "5");
        assert_eq!(row[4], "Political Course");
        assert_eq!(row[6], "No");
    }

    #[test]
    fn test_with_selected_leaves_original_untouched() {
        let course = Course::new("Physics", 4.0, 81.0, true, "2022-2", Category::General);
        let toggled = course.with_selected(false);
        assert!(course.selected());
        assert!(!toggled.selected());
        assert_eq!(toggled.name(), "Physics");
    }

    #[test]
    fn test_major_flag_defaults_to_false() {
        let course = Course::new("Compilers", 3.0, 88.0, true, "2024-1", Category::Major);
        assert!(!course.is_major_course());
        assert!(course.with_major_course(true).is_major_course());
    }

    #[test]
    fn test_grouping() {
        let courses = vec![
            Course::new("A", 1.0, 80.0, true, "2023-2", Category::Major),
            Course::new("B", 1.0, 80.0, true, "2023-1", Category::General),
            Course::new("C", 1.0, 80.0, true, "2023-2", Category::General),
        ];
        let by_semester = courses_by_semester(&courses);
        let keys: Vec<&str> = by_semester.keys().copied().collect();
        assert_eq!(keys, vec!["2023-1", "2023-2"]);
        assert_eq!(by_semester["2023-2"].len(), 2);

        let by_category = courses_by_category(&courses);
        assert_eq!(by_category[&Category::General].len(), 2);
        assert!(!by_category.contains_key(&Category::Quality));
    }
}
