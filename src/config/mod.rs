//! Configuration for dotairc.
//!
//! This module defines the Config struct that represents `.dotairc.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and resolution of the effective template
//! directory and output path from flags, config, and built-in defaults.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT};
pub use operations::Settings;
