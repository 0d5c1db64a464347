use super::model::{Category, Course, courses_by_semester};

// ---------------------------------------------------------------------------
// Filter predicate: search text, semester and category
// ---------------------------------------------------------------------------

/// What the table currently shows. Empty search and `None` selections mean
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    /// Case-insensitive substring of the course name.
    pub search: String,
    pub semester: Option<String>,
    pub category: Option<Category>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        let needle = self.search.to_lowercase();
        if !course.name().to_lowercase().contains(&needle) {
            return false;
        }
        if let Some(semester) = &self.semester {
            if course.semester() != semester {
                return false;
            }
        }
        if let Some(category) = self.category {
            if course.category() != category {
                return false;
            }
        }
        true
    }

    /// Drop a semester selection that no longer exists in the list.
    pub fn retain_known_semester(&mut self, semesters: &[String]) {
        if let Some(semester) = &self.semester {
            if !semesters.contains(semester) {
                self.semester = None;
            }
        }
    }
}

/// Return positions (into the full list) of courses passing the filter.
///
/// Table actions act on these positions, so an edit or delete on a filtered
/// view always reaches the intended course.
pub fn filtered_indices(courses: &[Course], filter: &CourseFilter) -> Vec<usize> {
    courses
        .iter()
        .enumerate()
        .filter(|(_, course)| filter.matches(course))
        .map(|(i, _)| i)
        .collect()
}

/// Unique semester labels in lexicographic order.
pub fn semesters(courses: &[Course]) -> Vec<String> {
    courses_by_semester(courses)
        .into_keys()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Vec<Course> {
        vec![
            Course::new("Data Structures", 4.0, 90.0, true, "2023-1", Category::Major),
            Course::new("Marxist Theory", 3.0, 80.0, true, "2023-2", Category::Political),
            Course::new("Databases", 3.0, 85.0, false, "2023-2", Category::Major),
            Course::new("Tennis", 1.0, 92.0, true, "2022-2", Category::Quality),
        ]
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let courses = courses();
        assert_eq!(
            filtered_indices(&courses, &CourseFilter::default()),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = CourseFilter {
            search: "DATA".to_string(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&courses(), &filter), vec![0, 2]);
    }

    #[test]
    fn test_filters_combine() {
        let filter = CourseFilter {
            search: "data".to_string(),
            semester: Some("2023-2".to_string()),
            category: Some(Category::Major),
        };
        assert_eq!(filtered_indices(&courses(), &filter), vec![2]);

        let filter = CourseFilter {
            category: Some(Category::General),
            ..Default::default()
        };
        assert!(filtered_indices(&courses(), &filter).is_empty());
    }

    #[test]
    fn test_semesters_are_sorted_and_unique() {
        assert_eq!(semesters(&courses()), vec!["2022-2", "2023-1", "2023-2"]);
    }

    #[test]
    fn test_retain_known_semester() {
        let mut filter = CourseFilter {
            semester: Some("2021-1".to_string()),
            ..Default::default()
        };
        filter.retain_known_semester(&semesters(&courses()));
        assert_eq!(filter.semester, None);

        let mut filter = CourseFilter {
            semester: Some("2023-1".to_string()),
            ..Default::default()
        };
        filter.retain_known_semester(&semesters(&courses()));
        assert_eq!(filter.semester.as_deref(), Some("2023-1"));
    }
}
