//! Signal sources: a chirped Gaussian pulse, a triangle wave, and Gaussian noise.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::buffer::SignalBuffer;
use crate::error::SignalError;

/// Rejection-sampling draw budget per requested sample before giving up.
pub const MAX_DRAWS_PER_SAMPLE: usize = 10_000;

/// Parameters for the chirped-pulse formula generator.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaParams {
    /// Number of samples to produce
    pub count: usize,
    /// Spacing between consecutive sample points
    pub step: f64,
    /// Scale of the Gaussian envelope
    pub amplitude: f64,
    /// Standard deviation of the envelope
    pub spread: f64,
    /// Center of the envelope
    pub location: f64,
}

impl Default for FormulaParams {
    fn default() -> Self {
        Self {
            count: 1000,
            step: 0.1,
            amplitude: 500.0,
            spread: 10.0,
            location: 50.0,
        }
    }
}

impl FormulaParams {
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.count == 0 {
            return Err(SignalError::InvalidParameter(
                "count must be at least 1".to_string(),
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SignalError::InvalidParameter(
                "step must be finite and > 0".to_string(),
            ));
        }
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(SignalError::InvalidParameter(
                "spread must be finite and > 0".to_string(),
            ));
        }
        if !self.amplitude.is_finite() || !self.location.is_finite() {
            return Err(SignalError::InvalidParameter(
                "amplitude and location must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for the Gaussian noise generator.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseParams {
    /// Number of samples to produce
    pub count: usize,
    /// Mean of the underlying normal distribution
    pub mean: f64,
    /// Standard deviation of the underlying normal distribution
    pub stddev: f64,
    /// Optional acceptance interval; draws outside it are rejected and redrawn
    pub bounds: Option<(f64, f64)>,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            count: 1000,
            mean: 5.0,
            stddev: 2.0,
            bounds: None,
        }
    }
}

impl NoiseParams {
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.count == 0 {
            return Err(SignalError::InvalidParameter(
                "count must be at least 1".to_string(),
            ));
        }
        if !self.mean.is_finite() {
            return Err(SignalError::InvalidParameter(
                "mean must be finite".to_string(),
            ));
        }
        if !self.stddev.is_finite() || self.stddev <= 0.0 {
            return Err(SignalError::InvalidParameter(
                "stddev must be finite and > 0".to_string(),
            ));
        }
        if let Some((low, high)) = self.bounds {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(SignalError::InvalidParameter(
                    "bounds must be finite with low < high".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Gaussian-envelope pulse modulated by a quadratic-phase cosine.
///
/// Sample `k` is taken at `x = k * step`:
///
/// ```text
/// envelope(x) = amplitude * exp(-(x - location)^2 / (2 spread^2)) / (spread sqrt(2 pi))
/// phase(x)    = cos((x - count*step/2)^2 / 20)
/// sample(x)   = envelope(x) * phase(x)
/// ```
pub fn formula_signal(params: &FormulaParams) -> Result<SignalBuffer, SignalError> {
    params.validate()?;

    let norm = params.spread * (2.0 * std::f64::consts::PI).sqrt();
    let center = params.count as f64 * params.step / 2.0;

    let mut samples = Vec::with_capacity(params.count);
    for k in 0..params.count {
        let x = k as f64 * params.step;
        let deviation = x - params.location;
        let envelope = params.amplitude
            * (-(deviation * deviation) / (2.0 * params.spread * params.spread)).exp()
            / norm;
        let chirp = x - center;
        let phase = (chirp * chirp / 20.0).cos();
        samples.push(envelope * phase);
    }

    Ok(SignalBuffer::from_samples(samples))
}

/// Single triangle ramp peaking at `height` halfway through the buffer.
pub fn triangle_signal(count: usize, height: f64) -> Result<SignalBuffer, SignalError> {
    if count < 2 {
        return Err(SignalError::InvalidParameter(
            "count must be at least 2".to_string(),
        ));
    }
    if !height.is_finite() {
        return Err(SignalError::InvalidParameter(
            "height must be finite".to_string(),
        ));
    }

    let half = (count / 2) as f64;
    let samples = (0..count)
        .map(|k| height / half * (half - (k as f64 - half).abs()))
        .collect();

    Ok(SignalBuffer::from_samples(samples))
}

/// Draws `count` independent samples from `Normal(mean, stddev)`.
///
/// With `bounds` set, draws outside the acceptance interval are rejected and
/// redrawn. The loop is budgeted at [`MAX_DRAWS_PER_SAMPLE`] underlying draws
/// per requested sample; a degenerate acceptance region fails with
/// [`SignalError::SamplingExhausted`] instead of spinning forever.
pub fn noise_signal<R: Rng>(params: &NoiseParams, rng: &mut R) -> Result<SignalBuffer, SignalError> {
    params.validate()?;

    // Cannot fail: stddev was validated finite and positive.
    let dist = Normal::new(params.mean, params.stddev).unwrap();

    let mut samples = Vec::with_capacity(params.count);
    match params.bounds {
        None => {
            for _ in 0..params.count {
                samples.push(dist.sample(rng));
            }
        }
        Some((low, high)) => {
            let budget = params.count.saturating_mul(MAX_DRAWS_PER_SAMPLE);
            let mut draws = 0;
            while samples.len() < params.count {
                if draws == budget {
                    return Err(SignalError::SamplingExhausted { draws });
                }
                let draw = dist.sample(rng);
                draws += 1;
                if low <= draw && draw <= high {
                    samples.push(draw);
                }
            }
        }
    }

    Ok(SignalBuffer::from_samples(samples))
}
