//! Chemical equipment dashboard core.
//!
//! Turns a CSV of process equipment (name, type, flowrate, pressure,
//! temperature) into the summary the desktop dashboard draws: column
//! resolution, numeric coercion, descriptive statistics, histogram buckets,
//! type mix and pressure/temperature scatter points. [`upload`] forwards the
//! raw file to a remote ingestion endpoint; [`config`] reads runtime settings.

pub mod config;
pub mod data;
pub mod upload;
