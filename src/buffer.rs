//! Sample storage for one pipeline stage.

use crate::error::SignalError;

/// An ordered run of amplitude samples with extrema captured at construction.
///
/// Buffers are immutable: every producing operation (formula, noise, sum,
/// convolution) returns a fresh buffer, so the cached extrema can never go
/// stale and concurrent readers never observe a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBuffer {
    samples: Vec<f64>,
    extrema: Option<(f64, f64)>,
}

impl SignalBuffer {
    /// Wraps a sample sequence, scanning it once for extrema.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        let extrema = if samples.is_empty() {
            None
        } else {
            let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
            let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some((min, max))
        };
        Self { samples, extrema }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Smallest sample. Fails on an empty buffer, which has no extrema.
    pub fn min(&self) -> Result<f64, SignalError> {
        self.extrema
            .map(|(min, _)| min)
            .ok_or(SignalError::EmptyBuffer)
    }

    /// Largest sample. Fails on an empty buffer, which has no extrema.
    pub fn max(&self) -> Result<f64, SignalError> {
        self.extrema
            .map(|(_, max)| max)
            .ok_or(SignalError::EmptyBuffer)
    }

    /// Amplitude span `|max - min|`, zero for a constant buffer.
    pub fn range(&self) -> Result<f64, SignalError> {
        let (min, max) = self.extrema.ok_or(SignalError::EmptyBuffer)?;
        Ok((max - min).abs())
    }
}
