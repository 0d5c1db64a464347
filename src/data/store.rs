use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{Category, Course};

/// Column titles of the data file, in the fixed column order.
pub const HEADERS: [&str; 6] = [
    "Course Name",
    "Credit",
    "Score",
    "Counts Toward GPA",
    "Semester",
    "Course Type",
];

/// File used when nothing else is configured.
pub const DEFAULT_FILE_NAME: &str = "score.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to open, read or write the backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read or write {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

// ---------------------------------------------------------------------------
// Row layout
// ---------------------------------------------------------------------------

/// On-disk shape of a course. Fields are (de)serialized positionally, so the
/// header text never influences parsing.
#[derive(Debug, Serialize, Deserialize)]
struct CourseRow {
    name: String,
    credit: f64,
    score: f64,
    selected: bool,
    semester: String,
    category: Category,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        CourseRow {
            name: course.name().to_string(),
            credit: course.credit(),
            score: course.score(),
            selected: course.selected(),
            semester: course.semester().to_string(),
            category: course.category(),
        }
    }
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course::new(
            row.name,
            row.credit,
            row.score,
            row.selected,
            row.semester,
            row.category,
        )
    }
}

// ---------------------------------------------------------------------------
// CourseStore – whole-file load / save
// ---------------------------------------------------------------------------

/// Reads and writes the complete course list to a single CSV spreadsheet.
///
/// Every save rewrites the whole file. There is no locking: if another
/// program edits the file between a load and a save, its changes are lost.
#[derive(Debug, Clone)]
pub struct CourseStore {
    path: PathBuf,
}

impl CourseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every well-formed course from the backing file.
    ///
    /// A missing file is created with only the header row. Rows that fail
    /// to parse are skipped with a warning; I/O failures abort the load.
    pub fn load(&self) -> StoreResult<Vec<Course>> {
        if !self.path.exists() {
            log::info!("{} not found, creating an empty one", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        // Row widths are checked per record, so a header of another width
        // does not poison every data row.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        let mut courses = Vec::new();
        let mut skipped = 0usize;

        for (row_no, result) in reader.records().enumerate() {
            // Data rows are numbered from 1; the header is not counted.
            let row_no = row_no + 1;
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(self.csv_error(e)),
                Err(e) => {
                    log::warn!("Skipping row {row_no} of {}: {e}", self.path.display());
                    skipped += 1;
                    continue;
                }
            };
            if record.len() != HEADERS.len() {
                log::warn!(
                    "Skipping row {row_no} of {}: expected {} fields, found {}",
                    self.path.display(),
                    HEADERS.len(),
                    record.len()
                );
                skipped += 1;
                continue;
            }
            match record.deserialize::<CourseRow>(None) {
                Ok(row) => courses.push(Course::from(row)),
                Err(e) => {
                    log::warn!("Skipping row {row_no} of {}: {e}", self.path.display());
                    skipped += 1;
                }
            }
        }

        log::info!(
            "Loaded {} courses from {} ({skipped} rows skipped)",
            courses.len(),
            self.path.display()
        );
        Ok(courses)
    }

    /// Overwrite the backing file with the header and one row per course.
    pub fn save(&self, courses: &[Course]) -> StoreResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        writer
            .write_record(HEADERS)
            .map_err(|e| self.csv_error(e))?;
        for course in courses {
            writer
                .serialize(CourseRow::from(course))
                .map_err(|e| self.csv_error(e))?;
        }
        writer.flush().map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        log::debug!("Saved {} courses to {}", courses.len(), self.path.display());
        Ok(())
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> CourseStore {
        CourseStore::new(dir.path().join(DEFAULT_FILE_NAME))
    }

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("Calculus I", 5.0, 91.5, true, "2022-1", Category::Major),
            Course::new("Modern History", 2.0, 78.0, true, "2022-1", Category::Political),
            Course::new("Swimming", 1.0, 60.0, false, "2022-2", Category::Quality),
            Course::new("Art, Music & Film", 1.5, 85.25, true, "2023-1", Category::General),
        ]
    }

    #[test]
    fn test_load_creates_missing_file_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let courses = store.load().unwrap();
        assert!(courses.is_empty());

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content.trim_end(),
            "Course Name,Credit,Score,Counts Toward GPA,Semester,Course Type"
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let courses = sample_courses();

        store.save(&courses).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, courses);
    }

    #[test]
    fn test_round_trip_drops_major_flag() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let course =
            Course::new("Databases", 3.0, 88.0, true, "2023-2", Category::Major).with_major_course(true);

        store.save(std::slice::from_ref(&course)).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![course.with_major_course(false)]);
    }

    #[test]
    fn test_category_written_by_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&sample_courses()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Calculus I,5.0,91.5,true,2022-1,MAJOR");
        assert!(lines[4].ends_with(",GENERAL"));
        assert!(!content.contains("Major Course"));
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&sample_courses()).unwrap();

        let shorter = vec![Course::new("Only", 2.0, 75.0, true, "2024-1", Category::General)];
        store.save(&shorter).unwrap();
        assert_eq!(store.load().unwrap(), shorter);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let content = "\
Course Name,Credit,Score,Counts Toward GPA,Semester,Course Type
Algorithms,4,95,true,2023-1,MAJOR
Broken,four,95,true,2023-1,MAJOR
Unknown Type,2,80,true,2023-1,ELECTIVE
Too Short,2,80
Not A Bool,2,80,maybe,2023-1,GENERAL
Sociology,2,72.5,false,2023-2,QUALITY
";
        fs::write(store.path(), content).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded,
            vec![
                Course::new("Algorithms", 4.0, 95.0, true, "2023-1", Category::Major),
                Course::new("Sociology", 2.0, 72.5, false, "2023-2", Category::Quality),
            ]
        );
    }

    #[test]
    fn test_load_ignores_header_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "a,b,c,d,e,f\nOptics,3,66,true,2021-2,GENERAL\n").unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded,
            vec![Course::new("Optics", 3.0, 66.0, true, "2021-2", Category::General)]
        );
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::new(dir.path().join("missing").join(DEFAULT_FILE_NAME));

        let err = store.save(&sample_courses()).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_header_width_does_not_affect_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let content = "\
Course Name,Credit,Score,Counts Toward GPA,Semester
Optics,3,66,true,2021-2,GENERAL
Too Short,2,80,true,2021-2
Too Long,2,80,true,2021-2,MAJOR,extra
Ethics,1,88,false,2021-2,POLITICAL
";
        fs::write(store.path(), content).unwrap();

        assert_eq!(
            store.load().unwrap(),
            vec![
                Course::new("Optics", 3.0, 66.0, true, "2021-2", Category::General),
                Course::new("Ethics", 1.0, 88.0, false, "2021-2", Category::Political),
            ]
        );
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::new(dir.path());
        assert!(matches!(store.load(), Err(StoreError::Csv { .. })));
    }
}
