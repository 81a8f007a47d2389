use rand::Rng;

use crate::error::{NetworkError, Result};
use crate::train::train_config::SampleOrder;

/// One `(input, target)` training pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, target }
    }
}

/// The four rows of the XOR truth table.
pub fn xor_table() -> Vec<Sample> {
    [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]
        .into_iter()
        .map(|(a, b)| Sample::new(vec![a, b], vec![xor(a, b)]))
        .collect()
}

fn xor(a: f64, b: f64) -> f64 {
    if a != b { 1.0 } else { 0.0 }
}

/// Endless stream of random XOR pairs with independent uniform bits.
pub struct XorSampler<R> {
    rng: R,
}

impl<R: Rng> XorSampler<R> {
    pub fn new(rng: R) -> Self {
        XorSampler { rng }
    }
}

impl<R: Rng> Iterator for XorSampler<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let a = if self.rng.gen::<bool>() { 1.0 } else { 0.0 };
        let b = if self.rng.gen::<bool>() { 1.0 } else { 0.0 };
        Some(Sample::new(vec![a, b], vec![xor(a, b)]))
    }
}

/// Endless stream of `x ↦ sin x` pairs with `x` uniform in [0, 1).
///
/// On that interval `sin x` stays inside (0, 1), so a sigmoid output layer
/// can represent it.
pub struct SineSampler<R> {
    rng: R,
}

impl<R: Rng> SineSampler<R> {
    pub fn new(rng: R) -> Self {
        SineSampler { rng }
    }
}

impl<R: Rng> Iterator for SineSampler<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let x: f64 = self.rng.gen();
        Some(Sample::new(vec![x], vec![x.sin()]))
    }
}

/// Endless stream over a fixed table, walked in the given `SampleOrder`.
pub struct TableSampler<R> {
    table: Vec<Sample>,
    order: SampleOrder,
    cursor: usize,
    rng: R,
}

impl<R: Rng> TableSampler<R> {
    pub fn new(table: Vec<Sample>, order: SampleOrder, rng: R) -> Result<Self> {
        if table.is_empty() {
            return Err(NetworkError::EmptyDataset);
        }
        Ok(TableSampler { table, order, cursor: 0, rng })
    }
}

impl<R: Rng> Iterator for TableSampler<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let idx = match self.order {
            SampleOrder::Cyclic => {
                let idx = self.cursor;
                self.cursor = (self.cursor + 1) % self.table.len();
                idx
            }
            SampleOrder::Random => self.rng.gen_range(0..self.table.len()),
        };
        Some(self.table[idx].clone())
    }
}
