use eframe::egui::{self, Color32, RichText, Ui};
use gpa_ledger::data::model::{Category, courses_by_category};
use gpa_ledger::data::scoring::GradeScale;

use crate::state::{AppState, DialogMode};

// ---------------------------------------------------------------------------
// Left side panel – filters and summary
// ---------------------------------------------------------------------------

/// Render the left panel: filter widgets followed by the score summary.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;

    ui.strong("Search course");
    changed |= ui
        .add(egui::TextEdit::singleline(&mut state.filter.search).hint_text("name contains…"))
        .changed();
    ui.add_space(4.0);

    ui.strong("Semester");
    let semester_text = state
        .filter
        .semester
        .clone()
        .unwrap_or_else(|| "All semesters".to_string());
    egui::ComboBox::from_id_salt("semester_filter")
        .selected_text(semester_text)
        .show_ui(ui, |ui: &mut Ui| {
            changed |= ui
                .selectable_value(&mut state.filter.semester, None, "All semesters")
                .changed();
            for semester in &state.semesters {
                changed |= ui
                    .selectable_value(
                        &mut state.filter.semester,
                        Some(semester.clone()),
                        semester.as_str(),
                    )
                    .changed();
            }
        });
    ui.add_space(4.0);

    ui.strong("Course type");
    let category_text = state
        .filter
        .category
        .map(|c| c.label())
        .unwrap_or("All types");
    egui::ComboBox::from_id_salt("category_filter")
        .selected_text(category_text)
        .show_ui(ui, |ui: &mut Ui| {
            changed |= ui
                .selectable_value(&mut state.filter.category, None, "All types")
                .changed();
            for category in Category::ALL {
                changed |= ui
                    .selectable_value(&mut state.filter.category, Some(category), category.label())
                    .changed();
            }
        });

    if changed {
        state.refilter();
    }

    ui.add_space(12.0);
    summary(ui, state);
}

/// GPA and per-category averages, two decimals each.
fn summary(ui: &mut Ui, state: &AppState) {
    ui.heading("GPA");
    ui.separator();

    let summary = &state.summary;
    egui::Grid::new("gpa_summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for scale in [
                GradeScale::Percentage,
                GradeScale::StandardFive,
                GradeScale::StandardFour,
                GradeScale::Pku,
                GradeScale::Linear,
            ] {
                ui.label(scale.label());
                ui.monospace(format!("{:.2}", summary.get(scale)));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.heading("By course type");
    ui.separator();

    let groups = courses_by_category(&state.courses);
    egui::Grid::new("category_summary")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for category in Category::ALL {
                let count = groups.get(&category).map_or(0, Vec::len);
                ui.label(RichText::new(category.label()).color(state.palette.category(category)));
                ui.monospace(format!("{:.2}", summary.category(category)));
                ui.weak(format!("{count} courses"));
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Save As…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("Add course").clicked() {
            state.begin_add();
        }
        let selected = state.selected;
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Edit"))
            .clicked()
        {
            if let Some(index) = selected {
                state.begin_edit(index);
            }
        }
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Toggle GPA"))
            .clicked()
        {
            if let Some(index) = selected {
                state.toggle_selection(index);
            }
        }
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("Delete"))
            .clicked()
        {
            if let Some(index) = selected {
                state.request_delete(index);
            }
        }

        ui.separator();

        ui.label(format!(
            "{} courses, {} visible  ·  {}",
            state.courses.len(),
            state.visible_indices.len(),
            state.data_path().display()
        ));

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

/// Render the add/edit window if one is open.
pub fn course_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = &mut state.dialog else {
        return;
    };

    let title = match dialog.mode {
        DialogMode::Add => "Add course",
        DialogMode::Edit(_) => "Edit course",
    };
    let mut submit = false;
    let mut cancel = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            let form = &mut dialog.form;
            egui::Grid::new("course_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label("Course name");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("Credit");
                    ui.text_edit_singleline(&mut form.credit);
                    ui.end_row();

                    ui.label("Score");
                    ui.text_edit_singleline(&mut form.score);
                    ui.end_row();

                    ui.label("Counts toward GPA");
                    ui.checkbox(&mut form.selected, "");
                    ui.end_row();

                    ui.label("Semester");
                    ui.add(egui::TextEdit::singleline(&mut form.semester).hint_text("e.g. 2023-1"));
                    ui.end_row();

                    ui.label("Course type");
                    egui::ComboBox::from_id_salt("form_category")
                        .selected_text(form.category.label())
                        .show_ui(ui, |ui: &mut Ui| {
                            for category in Category::ALL {
                                ui.selectable_value(&mut form.category, category, category.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Major course");
                    ui.checkbox(&mut form.is_major_course, "");
                    ui.end_row();
                });

            if let Some(error) = &dialog.error {
                ui.add_space(4.0);
                ui.label(RichText::new(error).color(Color32::RED));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("OK").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        state.submit_dialog();
    } else if cancel {
        state.cancel_dialog();
    }
}

/// Render the delete confirmation window if a delete is pending.
pub fn delete_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(index) = state.pending_delete else {
        return;
    };
    let Some(course) = state.courses.get(index) else {
        state.cancel_delete();
        return;
    };

    let message = format!("Delete \"{}\" ({})?", course.name(), course.semester());
    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Confirm delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Delete").clicked() {
                    confirm = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        state.confirm_delete();
    } else if cancel {
        state.cancel_delete();
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open course file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_file(path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save courses as")
        .add_filter("CSV", &["csv"])
        .set_file_name("score.csv")
        .save_file();

    if let Some(path) = file {
        state.save_as(path);
    }
}
