//! Compilation of tile sets into flat vertex/edge/face geometry
//!
//! Each tile contributes its own vertices; nothing is merged across tiles, so
//! an edge shared by two neighbours appears once per tile. Renderers get a
//! simple, index-stable layout in exchange for the duplication.

use crate::math::phi::{PurePhi, RatioProvider};
use crate::spatial::codec::TileCodec;
use crate::spatial::point::Point2;
use crate::spatial::tiles::{TileKind, TileSet};
use serde::{Deserialize, Serialize};

/// Vertex range and kind of one compiled tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Shape of the tile, for colouring by type
    pub kind: TileKind,
    /// Index of the tile's first vertex in [`CompiledGeometry::vertices`]
    pub vertex_start: u32,
    /// Number of consecutive vertices belonging to the tile
    pub vertex_count: u32,
}

/// Summary counts and per-tile records
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryMetadata {
    /// Number of compiled tiles
    pub tile_count: usize,
    /// Number of thick rhombi
    pub thick_count: usize,
    /// Number of thin rhombi
    pub thin_count: usize,
    /// One record per tile, in tile-set order
    pub per_tile: Vec<TileRecord>,
}

/// Renderer-neutral geometry for a finished tile set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompiledGeometry {
    /// Every tile's vertices, concatenated
    pub vertices: Vec<Point2>,
    /// Boundary edges as vertex index pairs
    pub edges: Vec<[u32; 2]>,
    /// Face polygons with outward winding; empty unless faces were requested
    pub faces: Vec<Vec<u32>>,
    /// Counts and per-tile vertex ranges
    pub metadata: GeometryMetadata,
}

impl CompiledGeometry {
    /// Vertices of the tile described by `record`
    pub fn tile_vertices(&self, record: &TileRecord) -> &[Point2] {
        let start = record.vertex_start as usize;
        let end = start + record.vertex_count as usize;
        self.vertices.get(start..end).unwrap_or(&[])
    }
}

/// Flattens tile sets through a [`TileCodec`]
#[derive(Clone, Copy, Debug)]
pub struct TileGeometryCompiler<P = PurePhi> {
    codec: TileCodec<P>,
}

impl Default for TileGeometryCompiler<PurePhi> {
    fn default() -> Self {
        Self::new(TileCodec::default())
    }
}

impl<P: RatioProvider> TileGeometryCompiler<P> {
    /// Create a compiler decoding tiles with `codec`
    pub const fn new(codec: TileCodec<P>) -> Self {
        Self { codec }
    }

    /// Compile `tiles` in order, adding one face per tile when `face_visible`
    pub fn compile(&self, tiles: &TileSet, face_visible: bool) -> CompiledGeometry {
        let vertex_estimate = tiles.len() * 4;
        let mut geometry = CompiledGeometry {
            vertices: Vec::with_capacity(vertex_estimate),
            edges: Vec::with_capacity(vertex_estimate),
            faces: Vec::with_capacity(if face_visible { tiles.len() } else { 0 }),
            metadata: GeometryMetadata {
                tile_count: tiles.len(),
                thick_count: 0,
                thin_count: 0,
                per_tile: Vec::with_capacity(tiles.len()),
            },
        };

        for tile in tiles {
            let corners = self.codec.decode(tile);
            let start = geometry.vertices.len() as u32;
            let count = corners.len() as u32;
            geometry.vertices.extend(corners);

            for offset in 0..count {
                let next = (offset + 1) % count;
                geometry.edges.push([start + offset, start + next]);
            }

            if face_visible {
                let face = std::iter::once(start)
                    .chain((1..count).rev().map(|offset| start + offset))
                    .collect();
                geometry.faces.push(face);
            }

            match tile.kind {
                TileKind::ThickRhombus => geometry.metadata.thick_count += 1,
                TileKind::ThinRhombus => geometry.metadata.thin_count += 1,
                TileKind::Kite | TileKind::Dart | TileKind::RobinsonLarge | TileKind::RobinsonSmall => {}
            }

            geometry.metadata.per_tile.push(TileRecord {
                kind: tile.kind,
                vertex_start: start,
                vertex_count: count,
            });
        }

        geometry
    }
}
