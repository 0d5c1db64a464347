use thiserror::Error;

use super::model::{Category, Course};

/// Reasons the add/edit dialog refuses its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Course name must not be empty")]
    EmptyName,

    #[error("Semester must not be empty")]
    EmptySemester,

    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    #[error("Credit must be greater than 0")]
    NonPositiveCredit,

    #[error("Score must be between 0 and 100")]
    ScoreOutOfRange,
}

/// Raw contents of the add/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm {
    pub name: String,
    pub credit: String,
    pub score: String,
    pub selected: bool,
    pub semester: String,
    pub category: Category,
    pub is_major_course: bool,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            credit: String::new(),
            score: String::new(),
            selected: true,
            semester: String::new(),
            category: Category::Major,
            is_major_course: false,
        }
    }
}

impl CourseForm {
    /// Pre-fill the dialog from an existing record.
    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name().to_string(),
            credit: course.credit().to_string(),
            score: course.score().to_string(),
            selected: course.selected(),
            semester: course.semester().to_string(),
            category: course.category(),
            is_major_course: course.is_major_course(),
        }
    }

    /// Validate the input and build the record it describes.
    pub fn to_course(&self) -> Result<Course, ValidationError> {
        let name = self.name.trim();
        let semester = self.semester.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if semester.is_empty() {
            return Err(ValidationError::EmptySemester);
        }

        let credit = parse_number("Credit", &self.credit)?;
        let score = parse_number("Score", &self.score)?;
        if credit <= 0.0 {
            return Err(ValidationError::NonPositiveCredit);
        }
        if !(0.0..=100.0).contains(&score) {
            return Err(ValidationError::ScoreOutOfRange);
        }

        Ok(
            Course::new(name, credit, score, self.selected, semester, self.category)
                .with_major_course(self.is_major_course),
        )
    }
}

fn parse_number(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        // "NaN" and "inf" parse as f64 but are not usable numbers.
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotANumber {
            field,
            input: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CourseForm {
        CourseForm {
            name: "  Operating Systems ".to_string(),
            credit: "3.5".to_string(),
            score: " 88 ".to_string(),
            selected: true,
            semester: "2024-1".to_string(),
            category: Category::Major,
            is_major_course: true,
        }
    }

    #[test]
    fn test_valid_form_trims_input() {
        let course = filled().to_course().unwrap();
        assert_eq!(course.name(), "Operating Systems");
        assert_eq!(course.credit(), 3.5);
        assert_eq!(course.score(), 88.0);
        assert_eq!(course.semester(), "2024-1");
        assert!(course.is_major_course());
    }

    #[test]
    fn test_empty_name_and_semester() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.to_course(), Err(ValidationError::EmptyName));

        let mut form = filled();
        form.semester = String::new();
        assert_eq!(form.to_course(), Err(ValidationError::EmptySemester));
    }

    #[test]
    fn test_non_numeric_fields() {
        let mut form = filled();
        form.credit = "three".to_string();
        assert_eq!(
            form.to_course(),
            Err(ValidationError::NotANumber {
                field: "Credit",
                input: "three".to_string()
            })
        );

        let mut form = filled();
        form.score = "NaN".to_string();
        assert!(matches!(
            form.to_course(),
            Err(ValidationError::NotANumber { field: "Score", .. })
        ));
    }

    #[test]
    fn test_credit_must_be_positive() {
        let mut form = filled();
        form.credit = "0".to_string();
        assert_eq!(form.to_course(), Err(ValidationError::NonPositiveCredit));
        form.credit = "-1".to_string();
        assert_eq!(form.to_course(), Err(ValidationError::NonPositiveCredit));
    }

    #[test]
    fn test_score_range_is_inclusive() {
        let mut form = filled();
        form.score = "100".to_string();
        assert!(form.to_course().is_ok());
        form.score = "0".to_string();
        assert!(form.to_course().is_ok());
        form.score = "100.5".to_string();
        assert_eq!(form.to_course(), Err(ValidationError::ScoreOutOfRange));
        form.score = "-0.1".to_string();
        assert_eq!(form.to_course(), Err(ValidationError::ScoreOutOfRange));
    }

    #[test]
    fn test_from_course_round_trips() {
        let course = Course::new("Statistics", 2.0, 76.5, false, "2023-2", Category::General);
        let form = CourseForm::from_course(&course);
        assert_eq!(form.credit, "2");
        assert_eq!(form.to_course().unwrap(), course);
    }
}
