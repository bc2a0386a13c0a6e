//! Persistence and presentation of articles and results.
//!
//! # Submodules
//!
//! - [`json`]: Reads and writes article arrays in the data directory
//! - [`console`]: Renders verification and similarity reports for stdout

pub mod console;
pub mod json;
