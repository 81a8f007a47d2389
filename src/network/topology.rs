use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::{NetworkError, Result};

/// Ordered layer widths, input first and output last.
///
/// Always holds at least two entries and no zero widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology(Vec<usize>);

impl Topology {
    pub fn new(layout: &[usize]) -> Result<Topology> {
        if layout.len() < 2 {
            return Err(NetworkError::InvalidTopology(format!(
                "need at least an input and an output layer, got {} layer(s)",
                layout.len()
            )));
        }
        if let Some(l) = layout.iter().position(|&w| w == 0) {
            return Err(NetworkError::InvalidTopology(format!("layer {l} has zero width")));
        }
        Ok(Topology(layout.to_vec()))
    }

    pub fn widths(&self) -> &[usize] {
        &self.0
    }

    pub fn width(&self, layer: usize) -> usize {
        self.0[layer]
    }

    /// Number of weight matrices, one per adjacent pair of layers.
    pub fn num_transitions(&self) -> usize {
        self.0.len() - 1
    }

    pub fn input_width(&self) -> usize {
        self.0[0]
    }

    pub fn output_width(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// `(rows, cols)` of the weight matrix feeding layer `t + 1`; column 0 is the bias.
    pub fn weight_shape(&self, t: usize) -> (usize, usize) {
        (self.0[t + 1], self.0[t] + 1)
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = NetworkError;

    fn try_from(layout: Vec<usize>) -> Result<Topology> {
        Topology::new(&layout)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(t: Topology) -> Vec<usize> {
        t.0
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<String> = self.0.iter().map(|w| w.to_string()).collect();
        write!(f, "[{}]", widths.join("-"))
    }
}
