use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GpaLedgerApp {
    pub state: AppState,
}

impl GpaLedgerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GpaLedgerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and row actions ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters and summary ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        panels::side_panel(ui, &mut self.state);
                    });
            });

        // ---- Bottom panel: GPA chart ----
        egui::TopBottomPanel::bottom("chart_panel")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::gpa_chart(ui, &self.state);
            });

        // ---- Central panel: course table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::course_table(ui, &mut self.state);
        });

        // ---- Modal windows ----
        panels::course_dialog(ctx, &mut self.state);
        panels::delete_dialog(ctx, &mut self.state);
    }
}
