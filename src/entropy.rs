//! Shannon entropy of probability mass sequences.

/// `H = -sum(p * log2(p))` over bins with positive mass, in bits.
///
/// Zero-mass bins are skipped, following the convention `0 * log2(0) = 0`;
/// the explicit guard keeps `log2` away from zero arguments.
pub fn shannon_entropy(mass: &[f64]) -> f64 {
    let mut h = 0.0;
    for &p in mass {
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    h
}
