//! Analysis of generated tile sets

/// Per-generation tile counts, growth ratios, and bounds
pub mod statistics;
