//! Siglab - synthetic signal laboratory
//!
//! Generates synthetic waveforms and Gaussian noise, combines buffers by
//! elementwise sum and discrete linear convolution, and characterizes
//! amplitude distributions through histogram binning and Shannon entropy.
//!
//! Every producing operation is a pure function returning a fresh
//! [`SignalBuffer`] or [`Histogram`]; nothing is cached across calls.

pub mod buffer;
pub mod combinators;
pub mod entropy;
pub mod error;
pub mod generators;
pub mod histogram;

// Re-export main types
pub use buffer::SignalBuffer;
pub use combinators::{convolve, linear_convolution, sum};
pub use entropy::shannon_entropy;
pub use error::SignalError;
pub use generators::{
    formula_signal, noise_signal, triangle_signal, FormulaParams, NoiseParams,
};
pub use histogram::{convolve_histograms, Histogram};
