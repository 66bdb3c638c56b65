//! Spatial data structures for tiles and their geometry
//!
//! This module contains spatial-related functionality including:
//! - Points and vector arithmetic in the plane
//! - Prototile polygons in canonical orientation
//! - The compact tile descriptor and its vertex codec
//! - Flattened geometry for renderers

/// Tile descriptor encoding and decoding
pub mod codec;
/// Compilation of tile sets into flat vertex/edge/face geometry
pub mod geometry;
/// Two-dimensional points and vector arithmetic
pub mod point;
/// Canonical prototile polygons
pub mod prototile;
/// Tile kinds, tile descriptors, and tile sets
pub mod tiles;

pub use codec::TileCodec;
pub use point::Point2;
pub use tiles::{Tile, TileKind, TileSet};
