pub mod dataset;
pub mod loop_fn;
pub mod report;
pub mod train_config;
pub mod trainer;

pub use dataset::{xor_table, Sample, SineSampler, TableSampler, XorSampler};
pub use loop_fn::train_loop;
pub use report::TrainReport;
pub use train_config::{SampleOrder, TrainConfig};
pub use trainer::train_network;
