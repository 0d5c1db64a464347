use std::path::{Path, PathBuf};

use gpa_ledger::data::filter::{CourseFilter, filtered_indices, semesters};
use gpa_ledger::data::form::CourseForm;
use gpa_ledger::data::model::Course;
use gpa_ledger::data::scoring::ScoreSummary;
use gpa_ledger::data::store::CourseStore;

use crate::color::Palette;

// ---------------------------------------------------------------------------
// Dialog state
// ---------------------------------------------------------------------------

/// Whether the course dialog creates a new record or replaces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    /// Position of the record being edited.
    Edit(usize),
}

/// An open add/edit dialog.
#[derive(Debug, Clone)]
pub struct CourseDialog {
    pub mode: DialogMode,
    pub form: CourseForm,
    /// Validation message shown inside the dialog.
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    store: CourseStore,

    /// Every course, in file order.
    pub courses: Vec<Course>,

    /// Search / semester / category selection.
    pub filter: CourseFilter,

    /// Positions of courses passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Unique semesters for the filter combo box (cached).
    pub semesters: Vec<String>,

    /// Aggregates over the whole list (cached).
    pub summary: ScoreSummary,

    /// Highlighted table row, as a position into `courses`.
    pub selected: Option<usize>,

    pub dialog: Option<CourseDialog>,

    /// Course awaiting delete confirmation.
    pub pending_delete: Option<usize>,

    pub palette: Palette,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state and load the backing file. A load error leaves the
    /// list empty and is reported in the status line.
    pub fn open(store: CourseStore) -> Self {
        let mut state = Self {
            store,
            courses: Vec::new(),
            filter: CourseFilter::default(),
            visible_indices: Vec::new(),
            semesters: Vec::new(),
            summary: ScoreSummary::default(),
            selected: None,
            dialog: None,
            pending_delete: None,
            palette: Palette::default(),
            status_message: None,
        };
        state.reload();
        state
    }

    pub fn data_path(&self) -> &Path {
        self.store.path()
    }

    /// Re-read the backing file, keeping the current list on failure.
    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(courses) => {
                self.courses = courses;
                self.forget_positions();
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load courses: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.refresh();
    }

    /// Switch to another data file. On failure the current file stays active.
    pub fn open_file(&mut self, path: PathBuf) {
        let store = CourseStore::new(path);
        match store.load() {
            Ok(courses) => {
                log::info!("Switched to {}", store.path().display());
                self.store = store;
                self.courses = courses;
                self.forget_positions();
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to open {}: {e}", store.path().display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.refresh();
    }

    /// Write the current list to a new file and keep using that file.
    pub fn save_as(&mut self, path: PathBuf) {
        let store = CourseStore::new(path);
        match store.save(&self.courses) {
            Ok(()) => {
                log::info!("Saved {} courses to {}", self.courses.len(), store.path().display());
                self.store = store;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    // -- Mutations: each one rewrites the whole file --

    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
        self.persist();
    }

    /// Replace the course at `index`. Out-of-range indices are ignored.
    pub fn update_course(&mut self, index: usize, course: Course) {
        let Some(slot) = self.courses.get_mut(index) else {
            log::debug!("update_course: no course at {index}");
            return;
        };
        *slot = course;
        self.persist();
    }

    /// Remove the course at `index`. Out-of-range indices are ignored.
    pub fn remove_course(&mut self, index: usize) {
        if index >= self.courses.len() {
            log::debug!("remove_course: no course at {index}");
            return;
        }
        self.courses.remove(index);
        self.selected = self.selected.and_then(|s| shift_after_removal(s, index));
        self.pending_delete = self
            .pending_delete
            .and_then(|s| shift_after_removal(s, index));
        if let Some(CourseDialog {
            mode: DialogMode::Edit(edited),
            ..
        }) = self.dialog
        {
            match shift_after_removal(edited, index) {
                Some(shifted) => {
                    if let Some(dialog) = &mut self.dialog {
                        dialog.mode = DialogMode::Edit(shifted);
                    }
                }
                None => self.dialog = None,
            }
        }
        self.persist();
    }

    /// Drop every stored position after the list was replaced wholesale.
    /// An open add dialog holds no position and stays open.
    fn forget_positions(&mut self) {
        self.selected = None;
        self.pending_delete = None;
        if matches!(
            self.dialog,
            Some(CourseDialog {
                mode: DialogMode::Edit(_),
                ..
            })
        ) {
            self.dialog = None;
        }
    }

    /// Flip whether the course at `index` counts toward the GPA.
    pub fn toggle_selection(&mut self, index: usize) {
        let Some(course) = self.courses.get(index) else {
            log::debug!("toggle_selection: no course at {index}");
            return;
        };
        let toggled = course.with_selected(!course.selected());
        self.update_course(index, toggled);
    }

    /// Save the list and recompute every cache. A failed save keeps the
    /// in-memory change and reports the error.
    fn persist(&mut self) {
        match self.store.save(&self.courses) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                log::error!("Failed to save courses: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.refresh();
    }

    /// Recompute summary, semester list and visible rows.
    pub fn refresh(&mut self) {
        self.summary = ScoreSummary::compute(&self.courses);
        self.semesters = semesters(&self.courses);
        self.filter.retain_known_semester(&self.semesters);
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    /// A selected row hidden by the filter is deselected.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.courses, &self.filter);
        if let Some(selected) = self.selected {
            if !self.visible_indices.contains(&selected) {
                self.selected = None;
            }
        }
    }

    // -- Dialogs --

    pub fn begin_add(&mut self) {
        self.dialog = Some(CourseDialog {
            mode: DialogMode::Add,
            form: CourseForm::default(),
            error: None,
        });
    }

    pub fn begin_edit(&mut self, index: usize) {
        if let Some(course) = self.courses.get(index) {
            self.dialog = Some(CourseDialog {
                mode: DialogMode::Edit(index),
                form: CourseForm::from_course(course),
                error: None,
            });
        }
    }

    /// Validate the open dialog; on success apply it and close the dialog,
    /// otherwise keep it open with the error message.
    pub fn submit_dialog(&mut self) {
        let Some(dialog) = &mut self.dialog else {
            return;
        };
        match dialog.form.to_course() {
            Ok(course) => {
                let mode = dialog.mode;
                self.dialog = None;
                match mode {
                    DialogMode::Add => self.add_course(course),
                    DialogMode::Edit(index) => self.update_course(index, course),
                }
            }
            Err(e) => dialog.error = Some(e.to_string()),
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn request_delete(&mut self, index: usize) {
        if index < self.courses.len() {
            self.pending_delete = Some(index);
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(index) = self.pending_delete.take() {
            self.remove_course(index);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

/// Where a stored position ends up after `removed` is taken out of the list;
/// `None` when it pointed at the removed course itself.
fn shift_after_removal(position: usize, removed: usize) -> Option<usize> {
    match position.cmp(&removed) {
        std::cmp::Ordering::Less => Some(position),
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Greater => Some(position - 1),
    }
}
