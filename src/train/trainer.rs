use crate::{
    activation::activation::Activation,
    error::{check_len, Result},
    network::network::Network,
    optim::sgd::Sgd,
};

/// One in-order online pass over `inputs`; returns the mean per-sample loss.
///
/// Every pair gets its own gradient step, so the loss of a sample is the one
/// measured just before its own update.
///
/// Fails with `DimensionMismatch` before any step if the two slices differ in
/// length.
pub fn train_network<A: Activation>(
    network: &mut Network<A>,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    optimizer: &Sgd,
) -> Result<f64> {
    check_len("expected outputs", inputs.len(), expected_outputs.len())?;
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let mut total_loss = 0.0;
    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        total_loss += optimizer.step(network, input, expected)?;
    }

    Ok(total_loss / inputs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::error::NetworkError;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn repeated_passes_lower_mean_loss() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut net = Network::with_rng(&[2, 3, 1], ActivationFunction::Sigmoid, &mut rng).unwrap();
        let inputs = vec![vec![0.0, 1.0], vec![1.0, 1.0]];
        let expected = vec![vec![0.9], vec![0.1]];
        let sgd = Sgd::new(0.5);

        let first = train_network(&mut net, &inputs, &expected, &sgd).unwrap();
        let mut last = first;
        for _ in 0..500 {
            last = train_network(&mut net, &inputs, &expected, &sgd).unwrap();
        }
        assert!(last < first, "{last} !< {first}");
    }

    #[test]
    fn mismatched_sample_aborts_pass() {
        let mut net = Network::new(&[2, 1]).unwrap();
        let inputs = vec![vec![0.0, 1.0], vec![1.0]];
        let expected = vec![vec![1.0], vec![0.0]];
        assert!(train_network(&mut net, &inputs, &expected, &Sgd::new(0.1)).is_err());
    }

    #[test]
    fn unpaired_targets_are_rejected_before_training() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut net = Network::with_rng(&[2, 2, 1], ActivationFunction::Sigmoid, &mut rng).unwrap();
        let before = net.weights().to_vec();
        let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
        let expected = vec![vec![0.0]];

        assert!(matches!(
            train_network(&mut net, &inputs, &expected, &Sgd::new(0.5)),
            Err(NetworkError::DimensionMismatch { expected: 4, actual: 1, .. })
        ));
        assert_eq!(net.weights(), before.as_slice());
    }
}
