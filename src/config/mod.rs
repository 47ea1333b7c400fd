//! Configuration model for readmequick.
//!
//! This module defines the Config struct that represents `readmequick.yaml`.
//! A missing file means "all defaults"; unknown fields are ignored; values
//! are validated on load.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::{ModelConfig, Provider};
