use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use siglab::{FormulaParams, NoiseParams};

/// Runtime configuration for one lab run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Number of waveform samples
    pub signal_count: usize,
    /// Spacing between consecutive sample points
    pub signal_step: f64,
    /// Scale of the waveform's Gaussian envelope
    pub signal_amplitude: f64,
    /// Standard deviation of the envelope
    pub signal_spread: f64,
    /// Center of the envelope
    pub signal_location: f64,
    /// Number of noise samples; defaults to the waveform count
    pub noise_count: usize,
    /// Mean of the noise distribution
    pub noise_mean: f64,
    /// Standard deviation of the noise distribution
    pub noise_stddev: f64,
    /// Optional acceptance interval for noise draws
    pub noise_bounds: Option<(f64, f64)>,
    /// Nominal histogram bin count
    pub bins: usize,
    /// RNG seed for reproducibility
    pub seed: u64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            signal_count: 1000,
            signal_step: 0.1,
            signal_amplitude: 500.0,
            signal_spread: 10.0,
            signal_location: 50.0,
            noise_count: 1000,
            noise_mean: 5.0,
            noise_stddev: 2.0,
            noise_bounds: None,
            bins: 100,
            seed: 42,
        }
    }
}

impl LabConfig {
    /// Reads a JSON config; fields left out fall back to the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.formula_params().validate()?;
        self.noise_params().validate()?;
        anyhow::ensure!(self.bins >= 1, "bins must be at least 1");
        Ok(())
    }

    pub fn formula_params(&self) -> FormulaParams {
        FormulaParams {
            count: self.signal_count,
            step: self.signal_step,
            amplitude: self.signal_amplitude,
            spread: self.signal_spread,
            location: self.signal_location,
        }
    }

    pub fn noise_params(&self) -> NoiseParams {
        NoiseParams {
            count: self.noise_count,
            mean: self.noise_mean,
            stddev: self.noise_stddev,
            bounds: self.noise_bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LabConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(LabConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_bins_fail_validation() {
        let config = LabConfig {
            bins: 0,
            ..LabConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn engine_parameter_errors_surface_through_validate() {
        let config = LabConfig {
            signal_spread: 0.0,
            ..LabConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LabConfig {
            noise_stddev: -2.0,
            ..LabConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LabConfig {
            noise_bounds: Some((3.0, 3.0)),
            ..LabConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: LabConfig = serde_json::from_str(r#"{"signal_count": 32, "bins": 8}"#).unwrap();
        assert_eq!(config.signal_count, 32);
        assert_eq!(config.bins, 8);
        assert_eq!(config.noise_mean, 5.0);
        assert_eq!(config.seed, 42);
    }
}
