//! Core sort engine module
//!
//! Provides the recursive walk, its per-run report, and the top-level
//! sorter that drives one run.

mod report;
mod sorter;
mod walker;

pub use report::*;
pub use sorter::*;
pub use walker::*;
