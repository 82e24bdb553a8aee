use std::collections::{BTreeMap, BTreeSet};

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
// Color mapping: category name → Color32
// ---------------------------------------------------------------------------

/// Maps each category of the catalogue's index to a distinct colour.
///
/// Built from the unfiltered index, so a category keeps its colour while the
/// user narrows the selection.
#[derive(Debug, Clone)]
pub struct CategoryColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl Default for CategoryColorMap {
    fn default() -> Self {
        CategoryColorMap {
            mapping: BTreeMap::new(),
            default_color: Color32::GRAY,
        }
    }
}

impl CategoryColorMap {
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();
        CategoryColorMap {
            mapping,
            ..Default::default()
        }
    }

    /// Colour for a raw category name.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Colour for a chart label (capitalised category name).
    pub fn color_for_label(&self, label: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(name, _)| crate::data::format::capitalize_first(name) == label)
            .map_or(self.default_color, |(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
