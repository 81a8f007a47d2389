use rand::Rng;
use tracing::{debug, trace};

use crate::activation::activation::{Activation, ActivationFunction};
use crate::error::{check_len, NetworkError, Result};
use crate::loss::lms::LmsLoss;
use crate::math::{matrix::Matrix, vector::dot};
use crate::network::diagnostics::Diagnostics;
use crate::network::topology::Topology;

/// A fully-connected feed-forward network trained by online backpropagation.
///
/// Transition `t` connects layer `t` to layer `t + 1`. Its weight matrix has
/// one row per neuron of layer `t + 1`; column 0 of a row is that neuron's
/// bias and columns `1..` weight the outputs of layer `t` in order.
///
/// Every buffer is sized from the topology once, at construction, and then
/// overwritten in place by each call. An instance is meant to be driven by a
/// single caller at a time; independent replicas should each own a network.
#[derive(Debug, Clone)]
pub struct Network<A = ActivationFunction> {
    topology: Topology,
    activation: A,
    weights: Vec<Matrix>,
    adjustments: Vec<Matrix>,
    /// One entry per layer; entry 0 is the last input seen by `forward`.
    outputs: Vec<Vec<f64>>,
    /// One entry per non-input layer.
    induced: Vec<Vec<f64>>,
    /// One entry per non-input layer.
    sensitivities: Vec<Vec<f64>>,
    error: Vec<f64>,
}

impl Network<ActivationFunction> {
    /// Sigmoid network with weights drawn uniformly from [0, 1).
    pub fn new(layout: &[usize]) -> Result<Self> {
        Network::with_activation(layout, ActivationFunction::Sigmoid)
    }
}

impl<A: Activation> Network<A> {
    pub fn with_activation(layout: &[usize], activation: A) -> Result<Self> {
        Network::with_rng(layout, activation, &mut rand::thread_rng())
    }

    /// Draws the initial weights from `rng`; pass a seeded RNG for
    /// reproducible networks.
    pub fn with_rng<R: Rng + ?Sized>(layout: &[usize], activation: A, rng: &mut R) -> Result<Self> {
        let topology = Topology::new(layout)?;
        let weights = (0..topology.num_transitions())
            .map(|t| {
                let (rows, cols) = topology.weight_shape(t);
                Matrix::random(rows, cols, &mut *rng)
            })
            .collect();
        Ok(Network::allocate(topology, activation, weights))
    }

    /// Builds a network from explicit weights, `weights[t][i]` being the row
    /// `[bias, w_1, ..., w_n]` of neuron `i` in layer `t + 1`.
    pub fn from_weights(layout: &[usize], activation: A, weights: Vec<Vec<Vec<f64>>>) -> Result<Self> {
        let topology = Topology::new(layout)?;
        check_len("weight tensor", topology.num_transitions(), weights.len())?;

        let mut matrices = Vec::with_capacity(weights.len());
        for (t, rows) in weights.into_iter().enumerate() {
            let (expected_rows, expected_cols) = topology.weight_shape(t);
            check_len("weight matrix", expected_rows, rows.len())?;
            for row in &rows {
                check_len("weight row", expected_cols, row.len())?;
            }
            // Shapes were checked above, so the rows are neither ragged nor empty.
            let m = Matrix::from_rows(rows).ok_or_else(|| {
                NetworkError::InvalidTopology(format!("weight matrix {t} is empty"))
            })?;
            matrices.push(m);
        }
        Ok(Network::allocate(topology, activation, matrices))
    }

    fn allocate(topology: Topology, activation: A, weights: Vec<Matrix>) -> Self {
        let adjustments = weights.iter().map(|w| Matrix::zeros(w.rows, w.cols)).collect();
        let outputs = topology.widths().iter().map(|&n| vec![0.0; n]).collect();
        let hidden_and_output = || -> Vec<Vec<f64>> {
            topology.widths()[1..].iter().map(|&n| vec![0.0; n]).collect()
        };
        let induced = hidden_and_output();
        let sensitivities = hidden_and_output();
        // Infinity marks "no error computed yet".
        let error = vec![f64::INFINITY; topology.output_width()];

        debug!(topology = %topology, "network allocated");

        Network {
            activation,
            weights,
            adjustments,
            outputs,
            induced,
            sensitivities,
            error,
            topology,
        }
    }

    /// Feeds `input` through every layer in order, caching induced values
    /// and outputs for the backward pass.
    pub fn forward(&mut self, input: &[f64]) -> Result<()> {
        check_len("input", self.topology.input_width(), input.len())?;
        self.outputs[0].copy_from_slice(input);

        for t in 0..self.weights.len() {
            let (done, rest) = self.outputs.split_at_mut(t + 1);
            propagate_layer(
                &self.activation,
                &self.weights[t],
                &done[t],
                &mut self.induced[t],
                &mut rest[0],
            )?;
        }
        Ok(())
    }

    /// `error[i] = target[i] - output[i]` against the last forward pass.
    pub fn compute_error(&mut self, target: &[f64]) -> Result<()> {
        check_len("target", self.topology.output_width(), target.len())?;
        let output = &self.outputs[self.outputs.len() - 1];
        LmsLoss::error_into(&mut self.error, output, target);
        Ok(())
    }

    /// Backpropagates the error, output layer first.
    pub fn compute_sensitivity(&mut self) {
        let last = self.sensitivities.len() - 1;
        let act = &self.activation;

        for ((s, e), v) in self.sensitivities[last].iter_mut().zip(&self.error).zip(&self.induced[last]) {
            *s = e * act.derivative(*v);
        }

        // Layer t + 1 needs the already computed sensitivities of layer t + 2,
        // carried by weight matrix t + 1.
        for t in (0..last).rev() {
            let (lower, upper) = self.sensitivities.split_at_mut(t + 1);
            let downstream = &upper[0];
            let w = &self.weights[t + 1];

            for (i, (s, v)) in lower[t].iter_mut().zip(&self.induced[t]).enumerate() {
                let acc: f64 = downstream.iter().enumerate().map(|(k, d)| w.get(k, i + 1) * d).sum();
                *s = acc * act.derivative(*v);
            }
        }
    }

    /// Fills the adjustment buffer with `η·δ` for biases and `η·δ·y` for weights.
    pub fn compute_adjustment(&mut self, learning_rate: f64) -> Result<()> {
        check_learning_rate(learning_rate)?;

        for (t, adj) in self.adjustments.iter_mut().enumerate() {
            let upstream = &self.outputs[t];
            for (i, &delta) in self.sensitivities[t].iter().enumerate() {
                let step = learning_rate * delta;
                let row = adj.row_mut(i);
                row[0] = step;
                for (dw, y) in row[1..].iter_mut().zip(upstream) {
                    *dw = step * y;
                }
            }
        }
        Ok(())
    }

    pub fn apply_adjustment(&mut self) {
        for (w, adj) in self.weights.iter_mut().zip(&self.adjustments) {
            *w += adj;
        }
    }

    /// One online gradient step on a single sample.
    ///
    /// All arguments are validated before any buffer is touched, so a failed
    /// call leaves the network exactly as it was.
    pub fn train(&mut self, input: &[f64], target: &[f64], learning_rate: f64) -> Result<()> {
        check_len("input", self.topology.input_width(), input.len())?;
        check_len("target", self.topology.output_width(), target.len())?;
        check_learning_rate(learning_rate)?;

        self.forward(input)?;
        self.compute_error(target)?;
        self.compute_sensitivity();
        self.compute_adjustment(learning_rate)?;
        self.apply_adjustment();

        trace!(loss = self.loss(), "train step");
        Ok(())
    }

    /// Half the sum of squared errors of the most recent `compute_error`.
    /// Infinite until the first error has been computed.
    pub fn loss(&self) -> f64 {
        LmsLoss::loss(&self.error)
    }

    /// Evaluates the network on `input` using local scratch buffers.
    ///
    /// Shares the per-layer kernel with `forward`, so the result is bit-identical
    /// to `output()` after `forward(input)`. Training caches are left alone.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        check_len("input", self.topology.input_width(), input.len())?;

        let mut current = input.to_vec();
        for (t, w) in self.weights.iter().enumerate() {
            let width = self.topology.width(t + 1);
            let mut induced = vec![0.0; width];
            let mut next = vec![0.0; width];
            propagate_layer(&self.activation, w, &current, &mut induced, &mut next)?;
            current = next;
        }
        Ok(current)
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn activation(&self) -> &A {
        &self.activation
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn adjustments(&self) -> &[Matrix] {
        &self.adjustments
    }

    pub fn layer_outputs(&self) -> &[Vec<f64>] {
        &self.outputs
    }

    pub fn induced_values(&self) -> &[Vec<f64>] {
        &self.induced
    }

    pub fn sensitivities(&self) -> &[Vec<f64>] {
        &self.sensitivities
    }

    pub fn error(&self) -> &[f64] {
        &self.error
    }

    /// Output layer activations cached by the last `forward`.
    pub fn output(&self) -> &[f64] {
        &self.outputs[self.outputs.len() - 1]
    }

    /// A printable dump of every buffer.
    pub fn diagnostics(&self) -> Diagnostics<'_, A> {
        Diagnostics::new(self)
    }
}

/// Computes one layer: `induced[i] = w[i][1..]·input + w[i][0]`, `output[i] = f(induced[i])`.
fn propagate_layer<A: Activation>(
    activation: &A,
    weights: &Matrix,
    input: &[f64],
    induced: &mut [f64],
    output: &mut [f64],
) -> Result<()> {
    for ((row, v), y) in weights.rows_iter().zip(induced.iter_mut()).zip(output.iter_mut()) {
        *v = dot(&row[1..], input)? + row[0];
        *y = activation.function(*v);
    }
    Ok(())
}

fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if learning_rate.is_finite() && learning_rate > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidLearningRate(learning_rate))
    }
}
