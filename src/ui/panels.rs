use eframe::egui::{self, Color32, RichText, Stroke, Ui};

use chem_dash::data::aggregate::DashboardSummary;
use chem_dash::data::model::pretty;

use crate::color::{ACCENT, KPI_FILLS_DARK, KPI_FILLS_LIGHT};
use crate::export;
use crate::state::{AppState, StatusKind, View};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title row and the action toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(
            RichText::new("Chemical Equipment Dashboard")
                .size(28.0)
                .strong()
                .color(ACCENT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.dark_mode { "☀ Light" } else { "🌙 Dark" };
            if ui.button(label).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
    ui.label("Overview of Type mix, Flowrate distribution, and Pressure–Temperature relationships.");

    let has_rows = state.dataset.as_ref().is_some_and(|ds| !ds.is_empty());

    egui::menu::bar(ui, |ui: &mut Ui| {
        if ui.button("Upload CSV").clicked() {
            open_file_dialog(state);
        }

        let table_label = match state.view {
            View::Dashboard => "View Table",
            View::Table => "Back to Dashboard",
        };
        if ui.add_enabled(has_rows, egui::Button::new(table_label)).clicked() {
            state.toggle_table();
        }

        if ui
            .add_enabled(has_rows, egui::Button::new("Export PNG"))
            .clicked()
        {
            export_snapshot_dialog(ui.ctx(), state);
        }
        if ui
            .add_enabled(state.summary.is_some(), egui::Button::new("Export summary JSON"))
            .clicked()
        {
            export_summary_dialog(state);
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = ds.source.as_deref().unwrap_or("dataset");
            ui.label(format!("{source}: {} rows", ds.len()));
        }

        if state.upload.is_some() {
            ui.spinner();
        }
        if let Some((kind, msg)) = &state.status {
            let color = match kind {
                StatusKind::Info => ui.visuals().text_color(),
                StatusKind::Success => Color32::from_rgb(0x06, 0xd6, 0xa0),
                StatusKind::Error => Color32::RED,
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// One headline number with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    pub hint: String,
}

/// The four dashboard KPIs, in display order.
pub fn kpis(summary: &DashboardSummary) -> [Kpi; 4] {
    let (flow, press, temp) = (&summary.flow, &summary.pressure, &summary.temperature);
    [
        Kpi {
            label: "Total Equipment",
            value: summary.row_count.to_string(),
            hint: "Entries parsed".to_string(),
        },
        Kpi {
            label: "Avg Flowrate",
            value: pretty(flow.mean, 2),
            hint: format!("P50 {} • P90 {}", pretty(flow.p50, 2), pretty(flow.p90, 2)),
        },
        Kpi {
            label: "Avg Pressure",
            value: pretty(press.mean, 2),
            hint: format!("Min {} • Max {}", pretty(press.min, 2), pretty(press.max, 2)),
        },
        Kpi {
            label: "Avg Temperature",
            value: pretty(temp.mean, 2),
            hint: format!("P10 {} • P90 {}", pretty(temp.p10, 2), pretty(temp.p90, 2)),
        },
    ]
}

/// Render the KPI row.
pub fn kpi_row(ui: &mut Ui, summary: &DashboardSummary, dark_mode: bool) {
    let fills = if dark_mode { KPI_FILLS_DARK } else { KPI_FILLS_LIGHT };
    let cards = kpis(summary);

    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for ((col, kpi), fill) in cols.iter_mut().zip(&cards).zip(fills) {
            egui::Frame::group(col.style())
                .fill(fill)
                .stroke(Stroke::new(2.5, ACCENT))
                .show(col, |ui: &mut Ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(kpi.label).size(13.0).color(Color32::WHITE));
                    ui.label(
                        RichText::new(&kpi.value)
                            .size(28.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.label(RichText::new(&kpi.hint).size(12.0).color(Color32::WHITE));
                });
        }
    });
}

/// Warn about roles whose column could not be resolved.
pub fn missing_columns_note(ui: &mut Ui, summary: &DashboardSummary) {
    let missing = summary.columns.missing_roles();
    if missing.is_empty() {
        return;
    }
    let names: Vec<&str> = missing.iter().map(|r| r.label()).collect();
    ui.label(
        RichText::new(format!("No column found for: {}", names.join(", ")))
            .color(Color32::from_rgb(0xff, 0xd1, 0x66)),
    );
}

/// Shown before any data has been loaded.
pub fn empty_state(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        egui::Frame::group(ui.style())
            .stroke(Stroke::new(2.5, ACCENT))
            .show(ui, |ui: &mut Ui| {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.heading("Upload a CSV to get started");
                    ui.label(
                        "CSV should have: Equipment Name, Type, Flowrate, Pressure, Temperature.",
                    );
                });
            });
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Select CSV file")
        .add_filter("CSV files", &["csv"])
        .add_filter("Text files", &["txt"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

/// Ask for a target path, then request a screenshot of the next frame.
fn export_snapshot_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save dashboard as PNG")
        .set_file_name("dashboard.png")
        .add_filter("PNG", &["png"])
        .save_file();

    if let Some(path) = file {
        state.pending_snapshot = Some(path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }
}

fn export_summary_dialog(state: &mut AppState) {
    let Some(summary) = &state.summary else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Save summary as JSON")
        .set_file_name("summary.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match export::save_summary_json(summary, &path) {
            Ok(()) => {
                log::info!("Wrote summary to {}", path.display());
                state.set_status(StatusKind::Success, format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save summary: {e:#}");
                state.set_status(StatusKind::Error, format!("Error: {e:#}"));
            }
        }
    }
}
