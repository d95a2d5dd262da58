//! Operations deriving a new buffer from existing ones.

use crate::buffer::SignalBuffer;
use crate::error::SignalError;

/// Elementwise sum of one or more buffers.
///
/// The result is truncated to the shortest operand; samples beyond it are
/// discarded. Zero operands or a length-0 operand is an arity error.
pub fn sum(buffers: &[&SignalBuffer]) -> Result<SignalBuffer, SignalError> {
    if buffers.is_empty() || buffers.iter().any(|buffer| buffer.is_empty()) {
        return Err(SignalError::InvalidArity { context: "sum" });
    }

    let min_len = buffers
        .iter()
        .map(|buffer| buffer.len())
        .min()
        .unwrap_or(0);

    let mut samples = Vec::with_capacity(min_len);
    for i in 0..min_len {
        samples.push(buffers.iter().map(|buffer| buffer.samples()[i]).sum());
    }

    Ok(SignalBuffer::from_samples(samples))
}

/// Full discrete linear convolution of two buffers.
///
/// Both operands are truncated to the shorter length `n` first, matching the
/// sum combinator's policy; the result has `2n - 1` samples.
pub fn convolve(a: &SignalBuffer, b: &SignalBuffer) -> Result<SignalBuffer, SignalError> {
    if a.is_empty() || b.is_empty() {
        return Err(SignalError::InvalidArity {
            context: "convolution",
        });
    }

    Ok(SignalBuffer::from_samples(linear_convolution(
        a.samples(),
        b.samples(),
    )))
}

/// Linear convolution of two slices truncated to their common length `n`:
/// `out[k] = sum_j a[k - j] * b[j]` for `k` in `[0, 2n - 2]`.
///
/// Shared by [`convolve`] and by the histogram convolution, which runs it
/// over probability mass sequences. Empty input yields an empty vector.
pub fn linear_convolution(a: &[f64], b: &[f64]) -> Vec<f64> {
    let n = a.len().min(b.len());
    if n == 0 {
        return Vec::new();
    }
    let a = &a[..n];
    let b = &b[..n];

    let mut out = vec![0.0; 2 * n - 1];
    for (k, slot) in out.iter_mut().enumerate() {
        let j_first = k.saturating_sub(n - 1);
        let j_last = k.min(n - 1);
        let mut acc = 0.0;
        for j in j_first..=j_last {
            acc += a[k - j] * b[j];
        }
        *slot = acc;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(samples: &[f64]) -> SignalBuffer {
        SignalBuffer::from_samples(samples.to_vec())
    }

    #[test]
    fn sum_truncates_to_the_shortest_operand() {
        let a = buffer(&[1.0, 2.0, 3.0]);
        let b = buffer(&[10.0, 20.0]);
        let result = sum(&[&a, &b]).unwrap();
        assert_eq!(result.samples(), &[11.0, 22.0]);
    }

    #[test]
    fn sum_is_order_independent() {
        let a = buffer(&[1.0, 2.0, 3.0]);
        let b = buffer(&[0.5, -0.5, 4.0]);
        let ab = sum(&[&a, &b]).unwrap();
        let ba = sum(&[&b, &a]).unwrap();
        assert_eq!(ab.samples(), ba.samples());
    }

    #[test]
    fn sum_of_one_buffer_copies_it() {
        let a = buffer(&[2.0, 4.0]);
        let result = sum(&[&a]).unwrap();
        assert_eq!(result.samples(), a.samples());
    }

    #[test]
    fn sum_rejects_zero_and_empty_operands() {
        assert!(matches!(
            sum(&[]),
            Err(SignalError::InvalidArity { .. })
        ));

        let a = buffer(&[1.0]);
        let empty = buffer(&[]);
        assert!(matches!(
            sum(&[&a, &empty]),
            Err(SignalError::InvalidArity { .. })
        ));
    }

    #[test]
    fn convolution_matches_hand_computed_values() {
        // By the definition out[k] = sum_j a[k-j]*b[j]:
        // out[0] = 1*3, out[1] = 2*3 + 1*4, out[2] = 2*4.
        let a = buffer(&[1.0, 2.0]);
        let b = buffer(&[3.0, 4.0]);
        let result = convolve(&a, &b).unwrap();
        assert_eq!(result.samples(), &[3.0, 10.0, 8.0]);
    }

    #[test]
    fn convolution_length_is_twice_min_less_one() {
        let a = buffer(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = buffer(&[1.0, 1.0, 1.0]);
        let result = convolve(&a, &b).unwrap();
        assert_eq!(result.len(), 2 * 3 - 1);
    }

    #[test]
    fn convolution_is_commutative() {
        let a = buffer(&[0.5, -1.0, 2.0, 0.25]);
        let b = buffer(&[3.0, 0.0, -2.0, 1.5]);
        let ab = convolve(&a, &b).unwrap();
        let ba = convolve(&b, &a).unwrap();
        for (x, y) in ab.samples().iter().zip(ba.samples()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn single_sample_operands_convolve_to_their_product() {
        let a = buffer(&[3.0]);
        let b = buffer(&[-0.5]);
        let result = convolve(&a, &b).unwrap();
        assert_eq!(result.samples(), &[-1.5]);
    }

    #[test]
    fn convolve_rejects_empty_operands() {
        let a = buffer(&[1.0]);
        let empty = buffer(&[]);
        assert!(matches!(
            convolve(&a, &empty),
            Err(SignalError::InvalidArity { .. })
        ));
    }
}
