use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use chem_dash::data::aggregate::DashboardSummary;
use chem_dash::data::model::pretty;

use crate::color::{CategoryColors, ACCENT};

const CHART_HEIGHT: f32 = 280.0;
const SCATTER_HEIGHT: f32 = 360.0;

/// Label for an x-axis grid mark sitting on a bar index, empty elsewhere.
fn category_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Show `bars` in a fixed (no pan/zoom) plot, labelled by bar index.
fn show_category_chart(ui: &mut Ui, id: &str, labels: Vec<String>, chart: BarChart) {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn section_header(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).size(16.0).strong());
    ui.separator();
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Equipment count per type, one colour per category.
pub fn type_mix_chart(ui: &mut Ui, summary: &DashboardSummary, colors: &CategoryColors) {
    section_header(ui, "Equipment Type Mix");

    let bars: Vec<Bar> = summary
        .type_mix
        .iter()
        .enumerate()
        .map(|(i, (category, count))| {
            Bar::new(i as f64, *count as f64)
                .name(category)
                .fill(colors.color_for(category))
                .width(0.7)
        })
        .collect();
    let labels = summary.type_mix.iter().map(|(c, _)| c.clone()).collect();

    show_category_chart(ui, "type_mix", labels, BarChart::new(bars).name("Count"));
}

/// Flowrate histogram.
pub fn flow_histogram_chart(ui: &mut Ui, summary: &DashboardSummary) {
    section_header(ui, "Flowrate Distribution");

    let histogram = &summary.flow_histogram;
    if histogram.is_empty() {
        ui.label("No numeric flowrate values.");
        return;
    }

    let bars: Vec<Bar> = histogram
        .buckets()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, count as f64)
                .name(label)
                .fill(ACCENT.gamma_multiply(0.6))
                .width(0.9)
        })
        .collect();

    show_category_chart(
        ui,
        "flow_histogram",
        histogram.labels.clone(),
        BarChart::new(bars).name("Count").color(ACCENT),
    );
}

/// Pressure vs temperature scatter.
pub fn scatter_chart(ui: &mut Ui, summary: &DashboardSummary) {
    section_header(ui, "Pressure vs Temperature");

    let points = Points::new(PlotPoints::from(summary.scatter.clone()))
        .name("Equipment")
        .color(ACCENT)
        .radius(4.0);

    Plot::new("pressure_temperature")
        .height(SCATTER_HEIGHT)
        .x_axis_label("Pressure")
        .y_axis_label("Temperature")
        .label_formatter(|_name, value| {
            format!("P: {} • T: {}", pretty(Some(value.x), 2), pretty(Some(value.y), 2))
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(points);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_only_on_bar_positions() {
        let labels = vec!["Pump".to_string(), "Valve".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Pump");
        assert_eq!(category_label(&labels, 1.0000000001), "Valve");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
