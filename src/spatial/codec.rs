//! Conversion between compact tile descriptors and explicit vertices
//!
//! Decoding is exact up to floating-point evaluation: template, rotate by a
//! table entry, translate. Encoding recovers the orientation by measuring the
//! direction from the centroid to V0 and snapping it to the nearest 36° step,
//! the one place where measurement error could enter the pipeline.

use crate::io::configuration::ROTATION_RESIDUAL_WARN_DEGREES;
use crate::math::phi::{PurePhi, RatioProvider};
use crate::math::rotation::snap_degrees;
use crate::spatial::point::{Point2, centroid};
use crate::spatial::prototile::{quad_template, template_vertices};
use crate::spatial::tiles::{Tile, TileKind};

/// Direction of V0 from the centroid for a tile at rotation step zero
const CANONICAL_APEX_DEGREES: f64 = 90.0;

/// Encodes and decodes tiles against the canonical prototile templates
#[derive(Clone, Copy, Debug)]
pub struct TileCodec<P = PurePhi> {
    provider: P,
}

impl Default for TileCodec<PurePhi> {
    fn default() -> Self {
        Self::new(PurePhi::new())
    }
}

impl<P: RatioProvider> TileCodec<P> {
    /// Create a codec drawing its constants from `provider`
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The ratio provider backing this codec
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Explicit vertices of `tile`, clockwise from V0
    pub fn decode(&self, tile: &Tile) -> Vec<Point2> {
        template_vertices(&self.provider, tile.kind, tile.quadrance)
            .into_iter()
            .map(|v| self.place(v, tile))
            .collect()
    }

    /// The four vertices `[V0, V1, V2, V3]` of a quadrilateral tile
    ///
    /// Returns `None` for the triangular kinds.
    pub fn decode_quad(&self, tile: &Tile) -> Option<[Point2; 4]> {
        quad_template(&self.provider, tile.kind, tile.quadrance)
            .map(|quad| quad.map(|v| self.place(v, tile)))
    }

    /// Recover a tile descriptor from its vertices
    ///
    /// `vertices` must start at V0. The quadrance is taken as given rather
    /// than measured.
    pub fn encode(&self, vertices: &[Point2], kind: TileKind, quadrance: f64) -> Tile {
        self.encode_measured(vertices, kind, quadrance).0
    }

    /// Like [`Self::encode`], also returning the orientation residual
    ///
    /// The residual is the signed angle in degrees between the measured V0
    /// direction and the snapped rotation step.
    pub fn encode_measured(
        &self,
        vertices: &[Point2],
        kind: TileKind,
        quadrance: f64,
    ) -> (Tile, f64) {
        let position = centroid(vertices);
        let apex = vertices.first().copied().unwrap_or(position);
        let measured = (apex - position).angle_degrees();
        let (step, residual) = snap_degrees(measured - CANONICAL_APEX_DEGREES);

        if residual.abs() > ROTATION_RESIDUAL_WARN_DEGREES {
            tracing::debug!(
                kind = %kind,
                measured,
                step,
                residual,
                "orientation snapped with a large residual"
            );
        }

        (
            Tile::new(kind, quadrance, i64::from(step), position),
            residual,
        )
    }

    fn place(&self, vertex: Point2, tile: &Tile) -> Point2 {
        self.provider.rotate_by_step(vertex, tile.rotation_step) + tile.position
    }
}
