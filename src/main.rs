mod app;
mod color;
mod export;
mod state;
mod ui;

use std::path::PathBuf;

use app::ChemDashApp;
use chem_dash::config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!(
        "Upload endpoint: {} ({})",
        config.upload.url,
        if config.upload.enabled { "enabled" } else { "disabled" }
    );

    // Optional CSV to open at startup.
    let initial = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chemical Equipment Dashboard",
        options,
        Box::new(move |_cc| {
            let mut app = ChemDashApp::new(config);
            if let Some(path) = initial {
                app.state.open_path(&path);
            }
            Ok(Box::new(app))
        }),
    )
}
