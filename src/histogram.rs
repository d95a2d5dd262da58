//! Amplitude binning into empirical probability distributions.

use std::collections::BTreeMap;

use crate::buffer::SignalBuffer;
use crate::combinators::linear_convolution;
use crate::entropy::shannon_entropy;
use crate::error::SignalError;

/// A discrete empirical probability distribution over amplitude bins.
///
/// `edges[i]` is the lower amplitude edge of bin `i` (strictly increasing),
/// `mass[i]` the fraction of samples that landed in it. Every sample lands in
/// exactly one bin, so the masses sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    mass: Vec<f64>,
    bin_width: f64,
}

impl Histogram {
    /// Bins a buffer into `bin_count` nominal buckets of equal width.
    ///
    /// Bucket keys are `floor(sample / bin_width)`, and every integer key
    /// between `floor(min / bin_width)` and `floor(max / bin_width)` is
    /// emitted even when empty, so the axis has no gaps. Because the keys are
    /// floor-aligned rather than anchored at `min`, the output usually spans
    /// one more bucket than nominally requested; `len()` reports the actual
    /// count. A constant buffer has no amplitude spread to divide, so it
    /// collapses to a single bin of mass 1 with the width treated as 1.
    pub fn from_buffer(buffer: &SignalBuffer, bin_count: usize) -> Result<Self, SignalError> {
        if bin_count == 0 {
            return Err(SignalError::InvalidParameter(
                "bin count must be at least 1".to_string(),
            ));
        }

        let min = buffer.min()?;
        let max = buffer.max()?;
        let range = buffer.range()?;

        let bin_width = if range == 0.0 {
            1.0
        } else {
            range / bin_count as f64
        };

        let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
        for &sample in buffer.samples() {
            let key = (sample / bin_width).floor() as i64;
            *counts.entry(key).or_insert(0) += 1;
        }

        // Synthesize empty buckets so the occupied key range is contiguous.
        let low = (min / bin_width).floor() as i64;
        let high = (max / bin_width).floor() as i64;
        for key in low..=high {
            counts.entry(key).or_insert(0);
        }

        let total = buffer.len() as f64;
        let mut edges = Vec::with_capacity(counts.len());
        let mut mass = Vec::with_capacity(counts.len());
        for (key, count) in counts {
            edges.push(key as f64 * bin_width);
            mass.push(count as f64 / total);
        }

        Ok(Self {
            edges,
            mass,
            bin_width,
        })
    }

    /// Lower amplitude edge of each bin, ascending.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Empirical probability mass of each bin.
    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Number of emitted bins, including synthesized empty ones.
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    /// Shannon entropy of the mass sequence, in bits.
    pub fn entropy(&self) -> f64 {
        shannon_entropy(&self.mass)
    }
}

/// Approximates the amplitude distribution of the sum of two independent
/// signals by convolving their histograms' mass sequences.
///
/// Both histograms are recomputed fresh at the same bin count, then combined
/// with [`linear_convolution`]. The result's edges are the synthetic index
/// sequence `0, 1, ..., 2m - 2` (`m` being the shorter histogram length) with
/// a bin width of 1; callers needing physical amplitude units must rescale.
pub fn convolve_histograms(
    a: &SignalBuffer,
    b: &SignalBuffer,
    bin_count: usize,
) -> Result<Histogram, SignalError> {
    let hist_a = Histogram::from_buffer(a, bin_count)?;
    let hist_b = Histogram::from_buffer(b, bin_count)?;

    let mass = linear_convolution(hist_a.mass(), hist_b.mass());
    let edges = (0..mass.len()).map(|i| i as f64).collect();

    Ok(Histogram {
        edges,
        mass,
        bin_width: 1.0,
    })
}
