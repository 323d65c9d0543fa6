use std::collections::BTreeMap;

use eframe::egui::Color32;
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
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Tag colours: tag → Color32
// ---------------------------------------------------------------------------

/// Stable colour per tag, assigned in vocabulary order.
#[derive(Debug, Clone, Default)]
pub struct TagColors {
    mapping: BTreeMap<String, Color32>,
}

impl TagColors {
    pub fn new(vocabulary: &[String]) -> Self {
        let mapping = vocabulary
            .iter()
            .cloned()
            .zip(generate_palette(vocabulary.len()))
            .collect();
        TagColors { mapping }
    }

    /// Grey for tags outside the vocabulary.
    pub fn color_for(&self, tag: &str) -> Color32 {
        self.mapping.get(tag).copied().unwrap_or(Color32::GRAY)
    }

    /// True when exactly `vocabulary` is mapped.
    pub fn covers(&self, vocabulary: &[String]) -> bool {
        self.mapping.len() == vocabulary.len()
            && vocabulary.iter().all(|t| self.mapping.contains_key(t))
    }
}
