//! Test function implementations organized by category
//!
//! - `unimodal`: single-optimum functions (bowl and valley shaped)
//! - `multimodal`: functions with many local minima
//!
//! Pairwise functions (those summing over `(x[i], x[i+1])`) are defined for
//! any dimension; with a single dimension the sum is empty.

pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use multimodal::*;
pub use unimodal::*;
