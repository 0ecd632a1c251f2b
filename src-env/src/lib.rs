//! Environment utilities and constants for stochbench
//!
//! Results of a benchmark run live under `<root>/results/<benchmark_name>/`,
//! where `<root>` is `STOCHBENCH_DIR` when set and the current directory
//! otherwise.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
