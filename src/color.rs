use std::collections::BTreeMap;

use eframe::egui::Color32;
use gpa_ledger::data::model::Category;
use gpa_ledger::data::scoring::GradeScale;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Start at royal blue rather than red.
            let hue = 225.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed colour assignments
// ---------------------------------------------------------------------------

/// Colours for categories (table text, summary labels) and GPA bars.
#[derive(Debug, Clone)]
pub struct Palette {
    categories: BTreeMap<Category, Color32>,
    scales: BTreeMap<GradeScale, Color32>,
}

impl Default for Palette {
    fn default() -> Self {
        let categories = Category::ALL
            .iter()
            .copied()
            .zip(generate_palette(Category::ALL.len()))
            .collect();
        let scales = GradeScale::GPA_SCALES
            .iter()
            .copied()
            .zip(generate_palette(GradeScale::GPA_SCALES.len()))
            .collect();
        Self { categories, scales }
    }
}

impl Palette {
    pub fn category(&self, category: Category) -> Color32 {
        self.categories
            .get(&category)
            .copied()
            .unwrap_or(Color32::GRAY)
    }

    pub fn scale(&self, scale: GradeScale) -> Color32 {
        self.scales.get(&scale).copied().unwrap_or(Color32::LIGHT_BLUE)
    }
}
