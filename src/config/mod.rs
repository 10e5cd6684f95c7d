//! Configuration module for filesort
//!
//! Provides CLI argument parsing and the runtime settings of a sort run.

mod settings;

pub use settings::*;
