use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};
use gpa_ledger::data::scoring::GradeScale;

use crate::state::AppState;

/// Upper end of the value axis; the largest scale tops out at 5.0.
const AXIS_MAX: f64 = 5.0;

// ---------------------------------------------------------------------------
// GPA bar chart (bottom of the central panel)
// ---------------------------------------------------------------------------

/// One bar per point-based scale, on a fixed 0–5 axis.
pub fn gpa_chart(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;

    let charts: Vec<BarChart> = GradeScale::GPA_SCALES
        .iter()
        .enumerate()
        .map(|(i, &scale)| {
            let value = summary.get(scale);
            let bar = Bar::new(i as f64, value)
                .width(0.6)
                .name(format!("{}: {value:.2}", scale.label()))
                .fill(state.palette.scale(scale));
            BarChart::new(vec![bar])
                .name(scale.label())
                .color(state.palette.scale(scale))
        })
        .collect();

    Plot::new("gpa_chart")
        .legend(Legend::default())
        .x_axis_label("Scale")
        .y_axis_label("GPA")
        .include_y(0.0)
        .include_y(AXIS_MAX)
        .x_axis_formatter(|mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > f64::EPSILON || i < 0.0 {
                return String::new();
            }
            GradeScale::GPA_SCALES
                .get(i as usize)
                .map(|s| s.label().to_string())
                .unwrap_or_default()
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
