use ferrite_mlp::{ActivationFunction, Network, NetworkError};
use rand::{rngs::StdRng, SeedableRng};

fn trained_network() -> Network {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = Network::with_rng(&[3, 4, 2], ActivationFunction::Sigmoid, &mut rng).unwrap();
    for _ in 0..10 {
        network.train(&[0.1, 0.5, 0.9], &[1.0, 0.0], 0.3).unwrap();
    }
    network
}

fn weight_bits(network: &Network) -> Vec<u64> {
    network.weights().iter().flat_map(|m| m.data.iter().map(|w| w.to_bits())).collect()
}

#[test]
fn wrong_input_width_fails_train_and_keeps_weights() {
    let mut network = trained_network();
    let before = weight_bits(&network);

    for input in [vec![], vec![0.1, 0.5], vec![0.1, 0.5, 0.9, 1.3]] {
        match network.train(&input, &[1.0, 0.0], 0.3) {
            Err(NetworkError::DimensionMismatch { expected, actual, .. }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, input.len());
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }
    assert_eq!(weight_bits(&network), before);
}

#[test]
fn wrong_target_width_fails_train_and_keeps_weights() {
    let mut network = trained_network();
    let before = weight_bits(&network);
    let loss = network.loss();

    assert!(matches!(
        network.train(&[0.1, 0.5, 0.9], &[1.0], 0.3),
        Err(NetworkError::DimensionMismatch { expected: 2, actual: 1, .. })
    ));
    assert_eq!(weight_bits(&network), before);
    assert_eq!(network.loss(), loss);
}

#[test]
fn wrong_input_width_fails_predict() {
    let network = trained_network();
    assert!(matches!(
        network.predict(&[0.1, 0.5]),
        Err(NetworkError::DimensionMismatch { expected: 3, actual: 2, .. })
    ));
}

#[test]
fn network_stays_usable_after_rejected_call() {
    let mut network = trained_network();
    let reference = trained_network();
    let _ = network.train(&[0.1], &[1.0, 0.0], 0.3);

    // Same seed, same history: the failed call must not have diverged anything.
    let input = [0.2, 0.4, 0.6];
    assert_eq!(network.predict(&input).unwrap(), reference.predict(&input).unwrap());
    network.train(&input, &[0.0, 1.0], 0.3).unwrap();
}
