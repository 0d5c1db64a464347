use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const COLUMN_TITLES: [&str; 7] = [
    "#",
    "Course Name",
    "Credit",
    "Score",
    "Course Type",
    "Semester",
    "Counts Toward GPA",
];

/// Something the user asked for from a table row, applied after rendering.
enum RowAction {
    Select(usize),
    Edit(usize),
    Toggle(usize),
    Delete(usize),
}

// ---------------------------------------------------------------------------
// Course table (central panel)
// ---------------------------------------------------------------------------

/// Render the visible courses. Click selects a row, double-click edits it,
/// right-click opens a context menu.
pub fn course_table(ui: &mut Ui, state: &mut AppState) {
    if state.courses.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No courses yet  (Add course)");
        });
        return;
    }

    let mut action: Option<RowAction> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(32.0))
        .column(Column::remainder().at_least(160.0))
        .columns(Column::auto().at_least(60.0), 4)
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in COLUMN_TITLES {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            // Row numbers count visible rows, like the table the user sees.
            for (position, &index) in state.visible_indices.iter().enumerate() {
                let course = &state.courses[index];
                let cells = course.table_row(position);
                let category_color = state.palette.category(course.category());

                body.row(20.0, |mut row| {
                    row.set_selected(state.selected == Some(index));
                    for (col, text) in cells.iter().enumerate() {
                        row.col(|ui: &mut Ui| {
                            if col == 4 {
                                ui.label(RichText::new(text).color(category_color));
                            } else {
                                ui.label(text.as_str());
                            }
                        });
                    }

                    let response = row.response();
                    if response.double_clicked() {
                        action = Some(RowAction::Edit(index));
                    } else if response.clicked() {
                        action = Some(RowAction::Select(index));
                    }
                    response.context_menu(|ui: &mut Ui| {
                        if ui.button("Edit").clicked() {
                            action = Some(RowAction::Edit(index));
                            ui.close_menu();
                        }
                        if ui.button("Toggle GPA").clicked() {
                            action = Some(RowAction::Toggle(index));
                            ui.close_menu();
                        }
                        if ui.button("Delete").clicked() {
                            action = Some(RowAction::Delete(index));
                            ui.close_menu();
                        }
                    });
                });
            }
        });

    match action {
        Some(RowAction::Select(index)) => state.selected = Some(index),
        Some(RowAction::Edit(index)) => {
            state.selected = Some(index);
            state.begin_edit(index);
        }
        Some(RowAction::Toggle(index)) => state.toggle_selection(index),
        Some(RowAction::Delete(index)) => state.request_delete(index),
        None => {}
    }
}
