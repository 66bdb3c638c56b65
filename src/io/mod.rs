//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types, warnings, and the outcome carrier
pub mod error;
/// JSON export of compiled geometry
pub mod export;
/// PNG preview rendering
pub mod image;
/// Progress display across generations
pub mod progress;
