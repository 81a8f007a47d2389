use serde::{Serialize, Deserialize};

/// Summary returned by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Online updates actually applied; fewer than requested if the sample
    /// stream ran dry.
    pub steps: usize,
    /// Mean per-sample loss over the whole run.
    pub mean_loss: f64,
    /// Mean per-sample loss over the last logging window (or the whole run
    /// when logging is disabled).
    pub recent_loss: f64,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}
