use crate::error::{check_len, Result};

/// Inner product of two equal-length slices.
///
/// A length mismatch is a topology bug in the caller and fails with
/// `DimensionMismatch` instead of producing a silent zero.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_len("dot operand", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}
