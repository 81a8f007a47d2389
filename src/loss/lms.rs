/// Least-mean-squares loss over an error vector `e = target - output`.
pub struct LmsLoss;

impl LmsLoss {
    /// Scalar LMS: 0.5 · Σ e²
    pub fn loss(error: &[f64]) -> f64 {
        0.5 * error.iter().map(|e| e * e).sum::<f64>()
    }

    /// Writes the per-output error `expected - predicted` into `error`.
    pub fn error_into(error: &mut [f64], predicted: &[f64], expected: &[f64]) {
        for ((e, d), y) in error.iter_mut().zip(expected).zip(predicted) {
            *e = d - y;
        }
    }
}
