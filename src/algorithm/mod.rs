//! Substitution engine and generation orchestration

/// Golden-ratio deflation of rhombus tiles
pub mod deflation;
/// Whole-run orchestration across generations
pub mod executor;
/// Named initial tile configurations
pub mod seeds;
