use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use chem_dash::data::aggregate::CategoryTally;

/// Dashboard accent (borders, headings, scatter points).
pub const ACCENT: Color32 = Color32::from_rgb(0x3f, 0xc1, 0xc9);

/// KPI card fills for dark and light mode, in card order.
pub const KPI_FILLS_DARK: [Color32; 4] = [
    Color32::from_rgb(0x17, 0x4d, 0x56),
    Color32::from_rgb(0x35, 0x23, 0x22),
    Color32::from_rgb(0x1b, 0x5b, 0x53),
    Color32::from_rgb(0x32, 0x1e, 0x40),
];
pub const KPI_FILLS_LIGHT: [Color32; 4] = [
    Color32::from_rgb(0x36, 0xa2, 0xeb),
    Color32::from_rgb(0xff, 0x9a, 0x76),
    Color32::from_rgb(0x06, 0xd6, 0xa0),
    Color32::from_rgb(0x6a, 0x4c, 0x93),
];

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from the accent hue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 183.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.52);
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
// Color mapping: equipment type → Color32
// ---------------------------------------------------------------------------

/// Maps equipment categories to distinct colours for the type-mix chart.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
}

impl CategoryColors {
    /// One colour per category, assigned in tally order.
    pub fn new(tally: &CategoryTally) -> Self {
        let palette = generate_palette(tally.len());
        let mapping = tally
            .iter()
            .zip(palette)
            .map(|((category, _), c)| (category.clone(), c))
            .collect();
        CategoryColors { mapping }
    }

    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(ACCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let colours = generate_palette(6);
        assert_eq!(colours.len(), 6);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_category_uses_accent() {
        let tally = vec![("Pump".to_string(), 3), ("Valve".to_string(), 1)];
        let colors = CategoryColors::new(&tally);
        assert_ne!(colors.color_for("Pump"), colors.color_for("Valve"));
        assert_eq!(colors.color_for("Reactor"), ACCENT);
    }
}
