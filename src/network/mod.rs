pub mod diagnostics;
pub mod network;
pub mod spec;
pub mod topology;

pub use diagnostics::Diagnostics;
pub use network::Network;
pub use spec::NetworkSpec;
pub use topology::Topology;
