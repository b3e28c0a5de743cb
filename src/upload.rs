use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::UploadConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upload worker stopped without reporting a result")]
    Disconnected,
}

pub type UploadResult<T> = Result<T, UploadError>;

/// Record returned by the ingestion endpoint for a stored dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UploadReceipt {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub uploaded_at: Option<String>,
    pub file: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Forwards raw CSV files to the remote ingestion endpoint.
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: Client,
    url: String,
}

impl UploadClient {
    pub fn new(config: &UploadConfig) -> UploadResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the file as `multipart/form-data` with fields `name` (file name)
    /// and `file` (raw bytes). No retries.
    pub fn upload_file(&self, path: &Path) -> UploadResult<UploadReceipt> {
        let bytes = std::fs::read(path).map_err(|source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = file_name(path);

        let form = Form::new()
            .text("name", name.clone())
            .part("file", Part::bytes(bytes).file_name(name));

        let response = self.client.post(&self.url).multipart(form).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(UploadError::Server {
                status: status.as_u16(),
                body,
            });
        }
        parse_receipt(&body)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset.csv".to_string())
}

/// Decode a success body. An empty body is accepted as an empty receipt.
fn parse_receipt(body: &str) -> UploadResult<UploadReceipt> {
    if body.trim().is_empty() {
        return Ok(UploadReceipt::default());
    }
    Ok(serde_json::from_str(body)?)
}

// ---------------------------------------------------------------------------
// Background upload
// ---------------------------------------------------------------------------

/// An upload running on a worker thread.
pub struct UploadHandle {
    pub file_name: String,
    rx: Receiver<UploadResult<UploadReceipt>>,
}

impl UploadHandle {
    /// The outcome, once available. Never blocks; returns `None` while the
    /// upload is still in flight.
    pub fn poll(&self) -> Option<UploadResult<UploadReceipt>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(UploadError::Disconnected)),
        }
    }
}

/// Start uploading `path` in the background.
pub fn spawn_upload(client: UploadClient, path: PathBuf) -> UploadHandle {
    let (tx, rx) = mpsc::channel();
    let name = file_name(&path);

    thread::spawn(move || {
        log::info!("Uploading {} to {}", path.display(), client.url());
        let result = client.upload_file(&path);
        // The receiver may be gone if a newer upload replaced this one.
        let _ = tx.send(result);
    });

    UploadHandle {
        file_name: name,
        rx,
    }
}
