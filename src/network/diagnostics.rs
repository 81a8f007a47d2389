use std::fmt;

use crate::activation::activation::Activation;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Borrowed, printable view over every buffer of a [`Network`].
///
/// Sections are printed in the order weights (W), sensitivities (S),
/// induced values (I), layer outputs (O), error (E) and the last weight
/// adjustment (Δw).
pub struct Diagnostics<'a, A> {
    network: &'a Network<A>,
}

impl<'a, A: Activation> Diagnostics<'a, A> {
    pub(crate) fn new(network: &'a Network<A>) -> Self {
        Diagnostics { network }
    }
}

impl<A: Activation> fmt::Display for Diagnostics<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let net = self.network;
        writeln!(f, "topology {}", net.topology())?;
        write_matrices(f, "W", net.weights())?;
        write_layers(f, "S", net.sensitivities(), 1)?;
        write_layers(f, "I", net.induced_values(), 1)?;
        write_layers(f, "O", net.layer_outputs(), 0)?;
        section(f, "E")?;
        writeln!(f, "  {:?}", net.error())?;
        write_matrices(f, "Δw", net.adjustments())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "---------- {title} ----------")
}

fn write_matrices(f: &mut fmt::Formatter<'_>, title: &str, matrices: &[Matrix]) -> fmt::Result {
    section(f, title)?;
    for (t, m) in matrices.iter().enumerate() {
        writeln!(f, "layer {}:", t + 1)?;
        for (i, row) in m.rows_iter().enumerate() {
            writeln!(f, "  neuron {i}: bias {:.6} weights {:?}", row[0], &row[1..])?;
        }
    }
    Ok(())
}

fn write_layers(f: &mut fmt::Formatter<'_>, title: &str, layers: &[Vec<f64>], first: usize) -> fmt::Result {
    section(f, title)?;
    for (l, values) in layers.iter().enumerate() {
        writeln!(f, "layer {}: {:?}", l + first, values)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::activation::activation::ActivationFunction;
    use crate::network::network::Network;

    #[test]
    fn dump_lists_every_section() {
        let mut net = Network::from_weights(
            &[1, 1],
            ActivationFunction::Sigmoid,
            vec![vec![vec![0.5, -0.25]]],
        )
        .unwrap();
        net.train(&[1.0], &[1.0], 0.5).unwrap();

        let dump = net.diagnostics().to_string();
        for title in ["W", "S", "I", "O", "E", "Δw"] {
            assert!(dump.contains(&format!("---------- {title} ----------")), "missing {title}");
        }
        assert!(dump.starts_with("topology [1-1]"));
        assert!(dump.contains("layer 0: [1.0]"));
    }
}
