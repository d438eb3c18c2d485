mod dataset;
pub mod models;

pub use dataset::{DataQuality, Dataset};
pub use models::*;
