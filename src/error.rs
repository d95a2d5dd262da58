use thiserror::Error;

/// Errors surfaced synchronously by generators, combinators, and the
/// histogram engine. Nothing is retried internally except the bounded
/// noise rejection loop, which gives up with [`SignalError::SamplingExhausted`].
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{context} requires non-empty operands")]
    InvalidArity { context: &'static str },
    #[error("empty buffer has no extrema")]
    EmptyBuffer,
    #[error("bounded sampling exhausted its draw budget after {draws} draws")]
    SamplingExhausted { draws: usize },
}
