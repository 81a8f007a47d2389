use std::time::Instant;

use tracing::{debug, info};

use crate::activation::activation::Activation;
use crate::error::Result;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::dataset::Sample;
use crate::train::report::TrainReport;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Drives `config.steps` online updates of `network`, one per sample drawn
/// from `samples`.
///
/// # Arguments
/// - `network` — modified in place
/// - `samples` — sample stream; training stops early if it runs out
/// - `config`  — step count, learning rate and logging cadence
///
/// # Errors
/// The first failing step (wrong sample width, bad learning rate) aborts the
/// run. Updates applied by earlier steps are kept.
pub fn train_loop<A, I>(network: &mut Network<A>, samples: I, config: &TrainConfig) -> Result<TrainReport>
where
    A: Activation,
    I: IntoIterator<Item = Sample>,
{
    let optimizer = Sgd::new(config.learning_rate);
    let t_start = Instant::now();

    debug!(
        topology = %network.topology(),
        steps = config.steps,
        learning_rate = config.learning_rate,
        "training started"
    );

    let mut steps = 0;
    let mut total_loss = 0.0;
    let mut window = LossWindow::default();

    for sample in samples.into_iter().take(config.steps) {
        let loss = optimizer.step(network, &sample.input, &sample.target)?;
        steps += 1;
        total_loss += loss;
        window.push(loss);

        if config.log_every > 0 && steps % config.log_every == 0 {
            info!(step = steps, loss = window.mean(), "training progress");
            window.reset();
        }
    }

    let mean_loss = if steps > 0 { total_loss / steps as f64 } else { 0.0 };
    let recent_loss = if window.count > 0 { window.mean() } else { window.last_mean };
    let elapsed_ms = t_start.elapsed().as_millis() as u64;

    info!(steps, mean_loss, elapsed_ms, "training finished");

    Ok(TrainReport {
        steps,
        mean_loss,
        recent_loss,
        elapsed_ms,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Running mean of the loss since the last progress line.
#[derive(Default)]
struct LossWindow {
    sum: f64,
    count: usize,
    last_mean: f64,
}

impl LossWindow {
    fn push(&mut self, loss: f64) {
        self.sum += loss;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.sum / self.count as f64 }
    }

    fn reset(&mut self) {
        self.last_mean = self.mean();
        self.sum = 0.0;
        self.count = 0;
    }
}
