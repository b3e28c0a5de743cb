use std::path::{Path, PathBuf};

use chem_dash::config::AppConfig;
use chem_dash::data::aggregate::DashboardSummary;
use chem_dash::data::model::Dataset;
use chem_dash::upload::{spawn_upload, UploadClient, UploadHandle};

use crate::color::CategoryColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Table,
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Everything derived from `dataset` (recomputed on every load).
    pub summary: Option<DashboardSummary>,

    /// Bar colours for the type-mix chart.
    pub category_colors: CategoryColors,

    pub view: View,
    pub dark_mode: bool,

    /// Status / error message shown in the UI.
    pub status: Option<(StatusKind, String)>,

    /// Upload in flight, if any.
    pub upload: Option<UploadHandle>,

    /// A screenshot was requested and should be written here.
    pub pending_snapshot: Option<PathBuf>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            dataset: None,
            summary: None,
            category_colors: CategoryColors::default(),
            view: View::Dashboard,
            dark_mode: true,
            status: None,
            upload: None,
            pending_snapshot: None,
        }
    }

    /// Ingest a newly loaded dataset and recompute the summary.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let summary = DashboardSummary::compute(&dataset, &self.config.summary);
        log::debug!(
            "Summary: {} rows, {} categories, {} scatter points",
            summary.row_count,
            summary.type_mix.len(),
            summary.scatter.len()
        );

        let missing = summary.columns.missing_roles();
        if !missing.is_empty() {
            log::warn!("Columns not found for: {missing:?}");
        }

        self.category_colors = CategoryColors::new(&summary.type_mix);
        self.summary = Some(summary);
        self.dataset = Some(dataset);
        self.view = View::Dashboard;
    }

    /// Load `path` locally, then hand the raw file to the upload worker.
    /// The upload never affects what the dashboard shows.
    pub fn open_path(&mut self, path: &Path) {
        match chem_dash::data::loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with headers {:?}",
                    dataset.len(),
                    dataset.headers
                );
                self.set_dataset(dataset);
                self.status = None;
                self.start_upload(path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.set_status(StatusKind::Error, format!("Error: {e:#}"));
            }
        }
    }

    fn start_upload(&mut self, path: &Path) {
        if !self.config.upload.enabled {
            return;
        }
        match UploadClient::new(&self.config.upload) {
            Ok(client) => {
                let handle = spawn_upload(client, path.to_path_buf());
                self.set_status(
                    StatusKind::Info,
                    format!("Uploading {}…", handle.file_name),
                );
                self.upload = Some(handle);
            }
            Err(e) => {
                log::error!("Could not create upload client: {e}");
                self.set_status(StatusKind::Error, format!("Error uploading file: {e}"));
            }
        }
    }

    /// Check the in-flight upload; returns true while one is still running.
    pub fn poll_upload(&mut self) -> bool {
        let Some(handle) = &self.upload else {
            return false;
        };
        let Some(outcome) = handle.poll() else {
            return true;
        };
        let file_name = handle.file_name.clone();
        self.upload = None;

        match outcome {
            Ok(receipt) => {
                log::info!("Upload succeeded: {receipt:?}");
                self.set_status(
                    StatusKind::Success,
                    format!("{file_name} uploaded successfully!"),
                );
            }
            Err(e) => {
                log::error!("Upload of {file_name} failed: {e}");
                self.set_status(StatusKind::Error, format!("Error uploading file: {e}"));
            }
        }
        false
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some((kind, message.into()));
    }

    /// Flip between the dashboard and the table (only with data loaded).
    pub fn toggle_table(&mut self) {
        if self.dataset.as_ref().is_some_and(|ds| !ds.is_empty()) {
            self.view = match self.view {
                View::Dashboard => View::Table,
                View::Table => View::Dashboard,
            };
        }
    }
}
