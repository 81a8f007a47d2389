use rand::{rngs::StdRng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::network::Network;
use crate::network::topology::Topology;

/// A serializable description of a network architecture.
///
/// Only the shape of the network lives here: layer widths, the activation
/// shared by every layer, and an optional seed for the initial weights.
/// Trained weights are never written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, used in logs.
    pub name: String,
    /// Layer widths, input first.
    pub layout: Topology,
    #[serde(default)]
    pub activation: ActivationFunction,
    /// Seeds the weight initialisation; `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    pub fn new(name: impl Into<String>, layout: &[usize]) -> Result<NetworkSpec> {
        Ok(NetworkSpec {
            name: name.into(),
            layout: Topology::new(layout)?,
            activation: ActivationFunction::default(),
            seed: None,
        })
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Network<ActivationFunction> {
    /// Allocates a fresh, untrained network with the architecture in `spec`.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Self> {
        let layout = spec.layout.widths();
        match spec.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Network::with_rng(layout, spec.activation, &mut rng)
            }
            None => Network::with_activation(layout, spec.activation),
        }
    }
}
