mod app;
mod color;
mod state;
mod ui;

use app::GpaLedgerApp;
use eframe::egui;
use gpa_ledger::config::AppConfig;
use gpa_ledger::data::store::CourseStore;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Ignoring configuration: {e:#}");
        AppConfig::default()
    });
    log::info!("Using data file {}", config.data_file.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GPA Ledger",
        options,
        Box::new(move |_cc| {
            let state = AppState::open(CourseStore::new(config.data_file));
            Ok(Box::new(GpaLedgerApp::new(state)))
        }),
    )
}
