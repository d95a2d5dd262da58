//! Pipeline driver and export tooling for the `siglab` engine.
//!
//! Runs the four-stage pipeline (waveform, noise, sum, convolution) from a
//! plain config, histograms a selected stage, and dumps sample and
//! probability tables as CSV alongside a JSON entropy summary.

pub mod config;
pub mod export;
pub mod pipeline;

pub use config::LabConfig;
pub use export::{write_probability_csv, write_samples_csv, write_summary_json, RunSummary};
pub use pipeline::{run, LabRun, Stage};
