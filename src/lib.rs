//! Penrose rhombus tiling generator built on golden-ratio deflation
//!
//! A named seed configuration is deflated a bounded number of generations,
//! each pass replacing every rhombus with smaller rhombi at scale 1/φ, and the
//! resulting tile set is compiled into flat vertex/edge/face geometry for
//! rendering or export.

#![forbid(unsafe_code)]

/// Substitution engine, seed configurations, and generation orchestration
pub mod algorithm;
/// Tile statistics gathered across generations
pub mod analysis;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Golden-ratio constants and exact pentagonal rotations
pub mod math;
/// Points, prototiles, tile encoding, and compiled geometry
pub mod spatial;

pub use algorithm::executor::{GenerationCount, generate};
pub use io::error::{Outcome, Result, TilingError, TilingWarning};
pub use spatial::geometry::CompiledGeometry;
pub use spatial::tiles::{Tile, TileKind, TileSet};
