use serde::{Serialize, Deserialize};

use crate::error::Result;

/// How a fixed table of samples is walked during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleOrder {
    /// Row after row, wrapping around.
    Cyclic,
    /// A uniformly random row every step.
    #[default]
    Random,
}

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `steps`         — number of online updates, one sample each
/// - `learning_rate` — step size η, must be finite and positive
/// - `log_every`     — emit a progress line every this many steps; `0` disables it
/// - `order`         — how table-backed datasets are sampled
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub steps: usize,
    pub learning_rate: f64,
    pub log_every: usize,
    pub order: SampleOrder,
}

impl TrainConfig {
    pub fn new(steps: usize, learning_rate: f64) -> Self {
        TrainConfig {
            steps,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            steps: 10_000,
            learning_rate: 0.5,
            log_every: 1_000,
            order: SampleOrder::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: TrainConfig = serde_json::from_str(r#"{"steps": 500, "order": "cyclic"}"#).unwrap();
        assert_eq!(config.steps, 500);
        assert_eq!(config.order, SampleOrder::Cyclic);
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.log_every, 1_000);
    }
}
