//! File system operations module
//!
//! Extension bucket naming and the per-file copy into a bucket.

mod bucket;
mod operations;

pub use bucket::*;
pub use operations::*;
