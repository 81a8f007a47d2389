pub mod lms;

pub use lms::LmsLoss;
