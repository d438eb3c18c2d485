pub mod models;
pub mod render;

pub use models::*;
pub use render::{render, OutputFormat};
