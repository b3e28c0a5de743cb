use std::str::FromStr;
use std::time::Duration;

use crate::data::aggregate::SummaryOptions;

pub const DEFAULT_UPLOAD_URL: &str = "http://127.0.0.1:8000/api/datasets/";
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

const ENV_UPLOAD_URL: &str = "CHEM_DASH_UPLOAD_URL";
const ENV_UPLOAD: &str = "CHEM_DASH_UPLOAD";
const ENV_UPLOAD_TIMEOUT: &str = "CHEM_DASH_UPLOAD_TIMEOUT_SECS";
const ENV_HISTOGRAM_BUCKETS: &str = "CHEM_DASH_HISTOGRAM_BUCKETS";
const ENV_SCATTER_CAP: &str = "CHEM_DASH_SCATTER_CAP";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Where and how uploaded CSV files are forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub enabled: bool,
    pub url: String,
    pub timeout: Duration,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            enabled: true,
            url: DEFAULT_UPLOAD_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
        }
    }
}

/// Application settings, read from `CHEM_DASH_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub upload: UploadConfig,
    pub summary: SummaryOptions,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Malformed values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();

        let url = lookup(ENV_UPLOAD_URL)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.upload.url);

        let enabled = match lookup(ENV_UPLOAD) {
            None => defaults.upload.enabled,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => true,
                "0" | "false" | "off" | "no" => false,
                _ => {
                    log::warn!("{ENV_UPLOAD}={raw:?} is not a boolean, keeping uploads enabled");
                    defaults.upload.enabled
                }
            },
        };

        let timeout_secs = parse_positive(&lookup, ENV_UPLOAD_TIMEOUT, DEFAULT_UPLOAD_TIMEOUT_SECS);
        let histogram_buckets = parse_positive(
            &lookup,
            ENV_HISTOGRAM_BUCKETS,
            defaults.summary.histogram_buckets,
        );
        let scatter_cap = parse_positive(&lookup, ENV_SCATTER_CAP, defaults.summary.scatter_cap);

        AppConfig {
            upload: UploadConfig {
                enabled,
                url,
                timeout: Duration::from_secs(timeout_secs),
            },
            summary: SummaryOptions {
                histogram_buckets,
                scatter_cap,
            },
        }
    }
}

/// Parse a strictly positive integer variable, falling back to `default`.
fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + PartialOrd + Default + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(v) if v > T::default() => v,
        _ => {
            log::warn!("{key}={raw:?} is not a positive integer, using {default}");
            default
        }
    }
}
