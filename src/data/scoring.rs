use std::collections::BTreeMap;

use super::model::{Category, Course};

// ---------------------------------------------------------------------------
// Grading tables
// ---------------------------------------------------------------------------

// (lower bound, points) pairs; a score earns the points of the first band
// whose lower bound it reaches. Scores below every bound fall through to the
// scale's floor value.

const STANDARD_FIVE_BANDS: &[(f64, f64)] = &[(90.0, 5.0), (80.0, 4.0), (70.0, 3.0), (60.0, 2.0)];
const STANDARD_FIVE_FLOOR: f64 = 1.0;

const STANDARD_FOUR_BANDS: &[(f64, f64)] = &[(90.0, 4.0), (80.0, 3.0), (70.0, 2.0), (60.0, 1.0)];
const STANDARD_FOUR_FLOOR: f64 = 0.0;

const PKU_BANDS: &[(f64, f64)] = &[
    (90.0, 4.0),
    (85.0, 3.7),
    (82.0, 3.3),
    (78.0, 3.0),
    (75.0, 2.7),
    (72.0, 2.3),
    (68.0, 2.0),
    (64.0, 1.5),
    (60.0, 1.0),
];
const PKU_FLOOR: f64 = 0.0;

fn band_points(score: f64, bands: &[(f64, f64)], floor: f64) -> f64 {
    bands
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

// ---------------------------------------------------------------------------
// GradeScale – the five weighting formulas
// ---------------------------------------------------------------------------

/// A mapping from a numeric score to the value averaged over courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GradeScale {
    /// The raw score itself (credit-weighted average score).
    Percentage,
    /// 5.0 / 4.0 / 3.0 / 2.0 / 1.0 at 90 / 80 / 70 / 60 / below.
    StandardFive,
    /// 4.0 / 3.0 / 2.0 / 1.0 / 0.0 at 90 / 80 / 70 / 60 / below.
    StandardFour,
    /// Ten-band PKU 4-point scale.
    Pku,
    /// `max(0, (score - 50) / 10)`.
    Linear,
}

impl GradeScale {
    /// The four point-based scales drawn in the chart.
    pub const GPA_SCALES: [GradeScale; 4] = [
        GradeScale::StandardFive,
        GradeScale::StandardFour,
        GradeScale::Pku,
        GradeScale::Linear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GradeScale::Percentage => "Average Score",
            GradeScale::StandardFive => "Standard 5-Point",
            GradeScale::StandardFour => "Standard 4-Point",
            GradeScale::Pku => "PKU 4-Point",
            GradeScale::Linear => "Linear",
        }
    }

    /// Points earned by a single score on this scale.
    pub fn points(self, score: f64) -> f64 {
        match self {
            GradeScale::Percentage => score,
            GradeScale::StandardFive => band_points(score, STANDARD_FIVE_BANDS, STANDARD_FIVE_FLOOR),
            GradeScale::StandardFour => band_points(score, STANDARD_FOUR_BANDS, STANDARD_FOUR_FLOOR),
            GradeScale::Pku => band_points(score, PKU_BANDS, PKU_FLOOR),
            GradeScale::Linear => ((score - 50.0) / 10.0).max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Credit-weighted mean of `scale.points(score)` over the given courses.
/// Returns `0.0` when the total credit is zero.
fn weighted_mean<'a>(courses: impl IntoIterator<Item = &'a Course>, scale: GradeScale) -> f64 {
    let (weighted, credits) = courses.into_iter().fold((0.0, 0.0), |(w, c), course| {
        (
            w + scale.points(course.score()) * course.credit(),
            c + course.credit(),
        )
    });
    if credits == 0.0 {
        0.0
    } else {
        weighted / credits
    }
}

/// Aggregate over the courses that count toward the GPA.
pub fn grade_average(courses: &[Course], scale: GradeScale) -> f64 {
    weighted_mean(courses.iter().filter(|c| c.selected()), scale)
}

/// Credit-weighted average score of the counted courses in one category.
pub fn category_average(courses: &[Course], category: Category) -> f64 {
    weighted_mean(
        courses
            .iter()
            .filter(|c| c.selected() && c.category() == category),
        GradeScale::Percentage,
    )
}

/// Every number shown in the summary panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSummary {
    pub average_score: f64,
    pub standard_five: f64,
    pub standard_four: f64,
    pub pku: f64,
    pub linear: f64,
    pub category_averages: BTreeMap<Category, f64>,
}

impl ScoreSummary {
    pub fn compute(courses: &[Course]) -> Self {
        ScoreSummary {
            average_score: grade_average(courses, GradeScale::Percentage),
            standard_five: grade_average(courses, GradeScale::StandardFive),
            standard_four: grade_average(courses, GradeScale::StandardFour),
            pku: grade_average(courses, GradeScale::Pku),
            linear: grade_average(courses, GradeScale::Linear),
            category_averages: Category::ALL
                .iter()
                .map(|&cat| (cat, category_average(courses, cat)))
                .collect(),
        }
    }

    /// Value for one scale, as stored in this summary.
    pub fn get(&self, scale: GradeScale) -> f64 {
        match scale {
            GradeScale::Percentage => self.average_score,
            GradeScale::StandardFive => self.standard_five,
            GradeScale::StandardFour => self.standard_four,
            GradeScale::Pku => self.pku,
            GradeScale::Linear => self.linear,
        }
    }

    pub fn category(&self, category: Category) -> f64 {
        self.category_averages.get(&category).copied().unwrap_or(0.0)
    }
}
