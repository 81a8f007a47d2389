use thiserror::Error;

/// Errors surfaced by network construction, training and prediction.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A supplied vector does not match the width the network declares for it.
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("training set is empty")]
    EmptyDataset,

    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::DimensionMismatch { what, expected, actual })
    }
}
