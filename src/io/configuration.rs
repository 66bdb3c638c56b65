//! Tiling constants and runtime configuration defaults

// Seed selection
/// Seed configuration used when none is given
pub const DEFAULT_SEED_NAME: &str = "star";
/// Seed configuration substituted for unknown names
pub const FALLBACK_SEED_NAME: &str = "single-thick";

/// Reference quadrance of the seed tiles
pub const DEFAULT_QUADRANCE: f64 = 1.0;

/// Deflation passes applied when none is given
pub const DEFAULT_GENERATIONS: u32 = 4;

// Tile count grows by roughly φ² ≈ 2.618 per pass; a ten-tile seed reaches
// about a million tiles at this depth
/// Maximum number of deflation passes accepted by the API
pub const MAX_GENERATIONS: u32 = 12;

// Numerical tolerances
/// Tolerance for comparing decoded and re-encoded tiles
pub const CODEC_TOLERANCE: f64 = 1e-9;
/// Orientation residual (degrees) above which encoding logs a diagnostic
pub const ROTATION_RESIDUAL_WARN_DEGREES: f64 = 1.0;

// Output settings
/// Geometry JSON written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "tiling.json";
/// Side length of the PNG preview in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 1024;
/// Largest accepted PNG preview side length
pub const MAX_IMAGE_SIZE: u32 = 16_384;
/// Blank border around the rendered tiling in pixels
pub const IMAGE_MARGIN_PX: u32 = 8;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
