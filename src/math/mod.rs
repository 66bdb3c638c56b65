//! Mathematical utilities for the tiling engine

/// Golden-ratio constants and the ratio provider interface
pub mod phi;
/// Exact rotations by multiples of 36 degrees
pub mod rotation;

pub use phi::{PurePhi, RatioProvider};
