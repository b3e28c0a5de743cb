use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::ColorImage;

use chem_dash::data::aggregate::DashboardSummary;

/// Write a viewport screenshot as PNG.
pub fn save_snapshot(image: &ColorImage, path: &Path) -> Result<()> {
    let [width, height] = image.size;
    let pixels: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, pixels)
        .context("screenshot size does not match its pixel data")?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Write the computed summary as pretty-printed JSON.
pub fn save_summary_json(summary: &DashboardSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serializing summary")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
