//! Golden-ratio deflation of rhombus tiles
//!
//! Each rhombus is decoded to its vertices V0 (acute, top), V1 (obtuse,
//! right), V2 (acute, bottom), V3 (obtuse, left). Division points are placed
//! at parameter 1/φ along edges and the V1–V3 diagonal, the children are
//! assembled from those points and re-encoded at quadrance × (1/φ)².
//!
//! | parent | children                         |
//! |--------|----------------------------------|
//! | thick  | thick `[V0,A,P,D]`, thick `[V2,C,Q,B]`, thin `[P,A,Q,C]` |
//! | thin   | thick `[V0,A,P,B]`, thin `[P,C,V2,D]` |
//!
//! Kites, darts and Robinson triangles have no rules here and pass through
//! unchanged with an [`TilingWarning::UnsupportedDeflation`].

use crate::io::error::{Outcome, TilingWarning};
use crate::math::phi::{PurePhi, RatioProvider};
use crate::spatial::codec::TileCodec;
use crate::spatial::point::Point2;
use crate::spatial::tiles::{Tile, TileKind, TileSet};

/// Substitution engine for Penrose rhombi
#[derive(Clone, Copy, Debug)]
pub struct DeflationEngine<P = PurePhi> {
    codec: TileCodec<P>,
}

impl Default for DeflationEngine<PurePhi> {
    fn default() -> Self {
        Self::new(PurePhi::new())
    }
}

impl<P: RatioProvider> DeflationEngine<P> {
    /// Create an engine around `provider`
    ///
    /// The provider's constants are logged once here at debug level.
    pub fn new(provider: P) -> Self {
        tracing::debug!(
            phi = provider.phi(),
            inv_phi = provider.inv_phi(),
            phi_squared = provider.phi_squared(),
            phi_fourth = provider.phi_fourth(),
            "deflation engine constants"
        );
        Self {
            codec: TileCodec::new(provider),
        }
    }

    /// The codec used to decode parents and encode children
    pub const fn codec(&self) -> &TileCodec<P> {
        &self.codec
    }

    /// Quadrance of the children of a tile with quadrance `quadrance`
    pub fn child_quadrance(&self, quadrance: f64) -> f64 {
        let inv_phi = self.codec.provider().inv_phi();
        quadrance * inv_phi * inv_phi
    }

    /// Replace one tile with its children
    ///
    /// Unsupported kinds come back as a single unchanged tile plus one warning.
    pub fn deflate_tile(&self, tile: &Tile) -> Outcome<Vec<Tile>> {
        match tile.kind {
            TileKind::ThickRhombus => self.codec.decode_quad(tile).map_or_else(
                || Self::pass_through(tile),
                |quad| Outcome::clean(self.deflate_thick(quad, tile.quadrance).to_vec()),
            ),
            TileKind::ThinRhombus => self.codec.decode_quad(tile).map_or_else(
                || Self::pass_through(tile),
                |quad| Outcome::clean(self.deflate_thin(quad, tile.quadrance).to_vec()),
            ),
            TileKind::Kite | TileKind::Dart | TileKind::RobinsonLarge | TileKind::RobinsonSmall => {
                Self::pass_through(tile)
            }
        }
    }

    /// Deflate every tile of `tiles` into a new set
    ///
    /// Tiles are processed in order and their children kept contiguous, so the
    /// output order is a refinement of the input order.
    pub fn deflate(&self, tiles: &TileSet) -> Outcome<TileSet> {
        let thick = tiles.count_of(TileKind::ThickRhombus);
        let thin = tiles.count_of(TileKind::ThinRhombus);
        let mut outcome = Outcome::clean(TileSet::with_capacity(
            3 * thick + 2 * thin + (tiles.len() - thick - thin),
        ));

        for tile in tiles {
            let (children, warnings) = self.deflate_tile(tile).into_parts();
            outcome.value.extend_from_slice(&children);
            outcome.warnings.extend(warnings);
        }

        tracing::trace!(
            parents = tiles.len(),
            children = outcome.value.len(),
            "deflation pass complete"
        );
        outcome
    }

    fn deflate_thick(&self, [v0, v1, v2, v3]: [Point2; 4], quadrance: f64) -> [Tile; 3] {
        let t = self.codec.provider().inv_phi();
        let child_q = self.child_quadrance(quadrance);

        let p = v1.lerp(v3, t);
        let q = v3.lerp(v1, t);
        let a = v0.lerp(v1, t);
        let b = v1.lerp(v2, t);
        let c = v2.lerp(v3, t);
        let d = v3.lerp(v0, t);

        [
            self.codec
                .encode(&[v0, a, p, d], TileKind::ThickRhombus, child_q),
            self.codec
                .encode(&[v2, c, q, b], TileKind::ThickRhombus, child_q),
            self.codec
                .encode(&[p, a, q, c], TileKind::ThinRhombus, child_q),
        ]
    }

    fn deflate_thin(&self, [v0, v1, v2, v3]: [Point2; 4], quadrance: f64) -> [Tile; 2] {
        let t = self.codec.provider().inv_phi();
        let child_q = self.child_quadrance(quadrance);

        let p = v1.lerp(v3, t);
        let a = v0.lerp(v1, t);
        let b = v0.lerp(v3, t);
        let c = v2.lerp(v1, t);
        let d = v2.lerp(v3, t);

        [
            self.codec
                .encode(&[v0, a, p, b], TileKind::ThickRhombus, child_q),
            self.codec
                .encode(&[p, c, v2, d], TileKind::ThinRhombus, child_q),
        ]
    }

    // No P2 (kite/dart) substitution rules
    fn pass_through(tile: &Tile) -> Outcome<Vec<Tile>> {
        let mut outcome = Outcome::clean(vec![*tile]);
        outcome.warn(TilingWarning::UnsupportedDeflation { kind: tile.kind });
        outcome
    }
}
