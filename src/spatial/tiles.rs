//! Tile kinds, compact tile descriptors, and ordered tile sets
//!
//! A tile is stored as (kind, quadrance, rotation step, position) rather than
//! as explicit vertices. The codec turns a descriptor into vertices on demand,
//! which keeps deflation passes cheap to copy and exact to compare.

use crate::math::rotation::normalize_step;
use crate::spatial::point::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a tile
///
/// Only the two rhombi take part in substitution. Kites, darts and the
/// Robinson triangles are standalone prototiles that deflation passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Rhombus with 72° and 108° angles
    ThickRhombus,
    /// Rhombus with 36° and 144° angles
    ThinRhombus,
    /// Convex quadrilateral with angles 72°, 72°, 72°, 144°
    Kite,
    /// Concave quadrilateral with angles 72°, 36°, 216°, 36°
    Dart,
    /// Golden triangle with a 36° apex
    RobinsonLarge,
    /// Golden gnomon with a 108° apex
    RobinsonSmall,
}

impl TileKind {
    /// Every tile kind, substitution participants first
    pub const ALL: [Self; 6] = [
        Self::ThickRhombus,
        Self::ThinRhombus,
        Self::Kite,
        Self::Dart,
        Self::RobinsonLarge,
        Self::RobinsonSmall,
    ];

    /// Whether the deflation engine has substitution rules for this kind
    pub const fn supports_deflation(self) -> bool {
        matches!(self, Self::ThickRhombus | Self::ThinRhombus)
    }

    /// Number of polygon vertices for this kind
    pub const fn vertex_count(self) -> usize {
        match self {
            Self::RobinsonLarge | Self::RobinsonSmall => 3,
            Self::ThickRhombus | Self::ThinRhombus | Self::Kite | Self::Dart => 4,
        }
    }

    /// Stable lowercase identifier
    pub const fn name(self) -> &'static str {
        match self {
            Self::ThickRhombus => "thick_rhombus",
            Self::ThinRhombus => "thin_rhombus",
            Self::Kite => "kite",
            Self::Dart => "dart",
            Self::RobinsonLarge => "robinson_large",
            Self::RobinsonSmall => "robinson_small",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact tile descriptor
///
/// Tiles with equal kind, quadrance and rotation step are congruent up to
/// translation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Shape of the tile
    pub kind: TileKind,
    /// Squared length of the short diagonal (rhombi) or reference edge
    pub quadrance: f64,
    /// Orientation as a multiple of 36°, always in `0..10`
    pub rotation_step: u8,
    /// Centroid of the tile's vertices
    pub position: Point2,
}

impl Tile {
    /// Create a tile, reducing `rotation_step` modulo ten
    pub fn new(kind: TileKind, quadrance: f64, rotation_step: i64, position: Point2) -> Self {
        Self {
            kind,
            quadrance,
            rotation_step: normalize_step(rotation_step),
            position,
        }
    }

    /// A tile of `kind` at the origin in canonical orientation
    pub fn at_origin(kind: TileKind, quadrance: f64) -> Self {
        Self::new(kind, quadrance, 0, Point2::ORIGIN)
    }

    /// Equality with a tolerance on the floating-point fields
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.kind == other.kind
            && self.rotation_step == other.rotation_step
            && (self.quadrance - other.quadrance).abs() <= tolerance
            && self.position.approx_eq(other.position, tolerance)
    }
}

/// Ordered list of tiles
///
/// Order is stable for rendering but carries no meaning. Deflation never
/// mutates a set; each pass yields a new one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// An empty tile set
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// An empty tile set with room for `capacity` tiles
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
        }
    }

    /// Append a tile
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Append every tile from `tiles`
    pub fn extend_from_slice(&mut self, tiles: &[Tile]) {
        self.tiles.extend_from_slice(tiles);
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Borrow the tiles in order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over the tiles in order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of tiles of `kind`
    pub fn count_of(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| tile.kind == kind).count()
    }

    /// Take ownership of the underlying vector
    pub fn into_vec(self) -> Vec<Tile> {
        self.tiles
    }
}

impl From<Vec<Tile>> for TileSet {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl IntoIterator for TileSet {
    type Item = Tile;
    type IntoIter = std::vec::IntoIter<Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
