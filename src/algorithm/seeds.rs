//! Named initial tile configurations
//!
//! Seeds are small hand-built tile sets that deflation grows into patches.
//! Multi-tile seeds use the even rotation steps {0, 2, 4, 6, 8}, i.e. 72°
//! apart, so five acute 72° corners close a full turn.

use crate::io::error::{Outcome, TilingWarning};
use crate::math::phi::{PurePhi, RatioProvider};
use crate::spatial::codec::TileCodec;
use crate::spatial::point::Point2;
use crate::spatial::prototile::kite_vertices;
use crate::spatial::tiles::{Tile, TileKind, TileSet};
use std::fmt;

const STAR_STEPS: [i64; 5] = [0, 2, 4, 6, 8];
const CARTWHEEL_THIN_STEPS: [i64; 5] = [1, 3, 5, 7, 9];

/// Known seed configurations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedConfiguration {
    /// One thick rhombus at the origin
    SingleThick,
    /// One thin rhombus at the origin
    SingleThin,
    /// One kite at the origin
    SingleKite,
    /// One dart at the origin
    SingleDart,
    /// Five thick rhombi at the origin, 72° apart
    Star,
    /// Five kites with apexes meeting at the origin
    Sun,
    /// The star plus five thin rhombi offset by 36°
    Cartwheel,
}

impl SeedConfiguration {
    /// Every known configuration
    pub const ALL: [Self; 7] = [
        Self::SingleThick,
        Self::SingleThin,
        Self::SingleKite,
        Self::SingleDart,
        Self::Star,
        Self::Sun,
        Self::Cartwheel,
    ];

    /// Name accepted by [`SeedFactory::build`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SingleThick => "single-thick",
            Self::SingleThin => "single-thin",
            Self::SingleKite => "single-kite",
            Self::SingleDart => "single-dart",
            Self::Star => "star",
            Self::Sun => "sun",
            Self::Cartwheel => "cartwheel",
        }
    }

    /// Look up a configuration by name, ignoring case and surrounding space
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|config| config.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for SeedConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds seed tile sets at a chosen quadrance
#[derive(Clone, Copy, Debug)]
pub struct SeedFactory<P = PurePhi> {
    codec: TileCodec<P>,
}

impl Default for SeedFactory<PurePhi> {
    fn default() -> Self {
        Self::new(TileCodec::default())
    }
}

impl<P: RatioProvider> SeedFactory<P> {
    /// Create a factory positioning tiles with `codec`
    pub const fn new(codec: TileCodec<P>) -> Self {
        Self { codec }
    }

    /// Build the seed called `name` at quadrance `quadrance`
    ///
    /// Unknown names yield the single thick rhombus and one
    /// [`TilingWarning::UnknownSeed`].
    pub fn build(&self, name: &str, quadrance: f64) -> Outcome<TileSet> {
        SeedConfiguration::from_name(name).map_or_else(
            || {
                let mut outcome = Outcome::clean(
                    self.build_configuration(SeedConfiguration::SingleThick, quadrance),
                );
                outcome.warn(TilingWarning::UnknownSeed {
                    name: name.to_string(),
                });
                outcome
            },
            |config| Outcome::clean(self.build_configuration(config, quadrance)),
        )
    }

    /// Build a known configuration
    pub fn build_configuration(&self, config: SeedConfiguration, quadrance: f64) -> TileSet {
        match config {
            SeedConfiguration::SingleThick => single(TileKind::ThickRhombus, quadrance),
            SeedConfiguration::SingleThin => single(TileKind::ThinRhombus, quadrance),
            SeedConfiguration::SingleKite => single(TileKind::Kite, quadrance),
            SeedConfiguration::SingleDart => single(TileKind::Dart, quadrance),
            SeedConfiguration::Star => star(quadrance).collect(),
            SeedConfiguration::Sun => self.sun(quadrance),
            SeedConfiguration::Cartwheel => star(quadrance)
                .chain(CARTWHEEL_THIN_STEPS.into_iter().map(|step| {
                    Tile::new(TileKind::ThinRhombus, quadrance, step, Point2::ORIGIN)
                }))
                .collect(),
        }
    }

    // Each kite is shifted so its rotated apex lands on the origin
    fn sun(&self, quadrance: f64) -> TileSet {
        let [apex, ..] = kite_vertices(self.codec.provider(), quadrance);
        STAR_STEPS
            .into_iter()
            .map(|step| {
                let kite = Tile::new(TileKind::Kite, quadrance, step, Point2::ORIGIN);
                let offset = self
                    .codec
                    .provider()
                    .rotate_by_step(apex, kite.rotation_step);
                Tile { position: -offset, ..kite }
            })
            .collect()
    }
}

fn single(kind: TileKind, quadrance: f64) -> TileSet {
    TileSet::from(vec![Tile::at_origin(kind, quadrance)])
}

fn star(quadrance: f64) -> impl Iterator<Item = Tile> {
    STAR_STEPS
        .into_iter()
        .map(move |step| Tile::new(TileKind::ThickRhombus, quadrance, step, Point2::ORIGIN))
}
