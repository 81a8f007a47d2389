use crate::activation::activation::Activation;
use crate::error::Result;
use crate::network::network::Network;

/// Plain online stochastic gradient descent: one update per sample, no momentum.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update for a single `(input, target)` pair and
    /// returns the loss measured before the update.
    pub fn step<A: Activation>(&self, network: &mut Network<A>, input: &[f64], target: &[f64]) -> Result<f64> {
        network.train(input, target, self.learning_rate)?;
        Ok(network.loss())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::error::NetworkError;

    #[test]
    fn step_reports_pre_update_loss() {
        let mut net = Network::from_weights(
            &[1, 1],
            ActivationFunction::Sigmoid,
            vec![vec![vec![0.0, 0.0]]],
        )
        .unwrap();
        // Output is exactly 0.5 before the first update.
        let loss = Sgd::new(0.5).step(&mut net, &[1.0], &[1.0]).unwrap();
        assert_eq!(loss, 0.125);
        assert!(net.predict(&[1.0]).unwrap()[0] > 0.5);
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        let mut net = Network::new(&[1, 1]).unwrap();
        for lr in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Sgd::new(lr).step(&mut net, &[1.0], &[1.0]),
                Err(NetworkError::InvalidLearningRate(_))
            ));
        }
    }
}
