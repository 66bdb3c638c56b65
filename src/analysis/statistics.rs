//! Tile counts, growth ratios, and bounds of a tile set
//!
//! Under deflation the thick/thin ratio tends to φ and the per-generation
//! growth factor to φ², which makes these numbers a quick sanity check on a
//! run as well as a summary for the CLI.

use crate::math::phi::RatioProvider;
use crate::spatial::codec::TileCodec;
use crate::spatial::point::Point2;
use crate::spatial::tiles::{TileKind, TileSet};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner
    pub min: Point2,
    /// Upper-right corner
    pub max: Point2,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for no points
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(
            Self {
                min: first,
                max: first,
            },
            |bounds, p| Self {
                min: Point2::new(bounds.min.x.min(p.x), bounds.min.y.min(p.y)),
                max: Point2::new(bounds.max.x.max(p.x), bounds.max.y.max(p.y)),
            },
        ))
    }

    /// Horizontal extent
    pub const fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub const fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint of the box
    pub fn center(&self) -> Point2 {
        self.min.lerp(self.max, 0.5)
    }
}

/// Summary of one tile set
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileStatistics {
    /// Total number of tiles
    pub tile_count: usize,
    /// Number of thick rhombi
    pub thick_count: usize,
    /// Number of thin rhombi
    pub thin_count: usize,
    /// Number of tiles of any other kind
    pub other_count: usize,
    /// Sum of tile quadrances, proportional to covered area within one kind
    pub total_quadrance: f64,
    /// Bounds of all decoded tile vertices
    pub bounds: Option<Bounds>,
}

impl TileStatistics {
    /// Count `tiles` by kind and measure their extent through `codec`
    pub fn from_tiles<P: RatioProvider>(tiles: &TileSet, codec: &TileCodec<P>) -> Self {
        let thick_count = tiles.count_of(TileKind::ThickRhombus);
        let thin_count = tiles.count_of(TileKind::ThinRhombus);

        Self {
            tile_count: tiles.len(),
            thick_count,
            thin_count,
            other_count: tiles.len() - thick_count - thin_count,
            total_quadrance: tiles.iter().map(|tile| tile.quadrance).sum(),
            bounds: Bounds::from_points(tiles.iter().flat_map(|tile| codec.decode(tile))),
        }
    }

    /// Thick rhombi per thin rhombus, `None` without thin rhombi
    pub fn thick_thin_ratio(&self) -> Option<f64> {
        (self.thin_count > 0).then(|| self.thick_count as f64 / self.thin_count as f64)
    }

    /// Tile count relative to `previous`, `None` if `previous` was empty
    pub fn growth_ratio(&self, previous: &Self) -> Option<f64> {
        (previous.tile_count > 0).then(|| self.tile_count as f64 / previous.tile_count as f64)
    }
}
