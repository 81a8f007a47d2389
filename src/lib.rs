pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{Activation, ActivationFunction};
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use network::topology::Topology;
pub use loss::lms::LmsLoss;
pub use optim::sgd::Sgd;
pub use train::{train_loop, train_network, Sample, TrainConfig, TrainReport};
