use std::time::Duration;

use eframe::egui::{self, ScrollArea, Ui};

use chem_dash::config::AppConfig;

use crate::export;
use crate::state::{AppState, StatusKind, View};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChemDashApp {
    pub state: AppState,
}

impl ChemDashApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Write a pending screenshot once the viewport has delivered it.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let image = ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = image else {
            return;
        };
        let Some(path) = self.state.pending_snapshot.take() else {
            return;
        };
        match export::save_snapshot(&image, &path) {
            Ok(()) => {
                log::info!("Wrote dashboard snapshot to {}", path.display());
                self.state
                    .set_status(StatusKind::Success, format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save snapshot: {e:#}");
                self.state.set_status(StatusKind::Error, format!("Error: {e:#}"));
            }
        }
    }
}

impl eframe::App for ChemDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.poll_upload() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        self.handle_screenshot(ctx);

        ctx.set_visuals(if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // ---- Top panel: title + actions ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: dashboard or table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &self.state;
            match (&state.dataset, &state.summary, state.view) {
                (Some(ds), _, View::Table) if !ds.is_empty() => {
                    table::data_table(ui, ds);
                }
                (Some(ds), Some(summary), _) if !ds.is_empty() => {
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui: &mut Ui| {
                            panels::missing_columns_note(ui, summary);
                            panels::kpi_row(ui, summary, state.dark_mode);
                            ui.add_space(16.0);
                            ui.columns(2, |cols: &mut [Ui]| {
                                plot::type_mix_chart(&mut cols[0], summary, &state.category_colors);
                                plot::flow_histogram_chart(&mut cols[1], summary);
                            });
                            ui.add_space(10.0);
                            plot::scatter_chart(ui, summary);
                        });
                }
                _ => panels::empty_state(ui),
            }
        });
    }
}
