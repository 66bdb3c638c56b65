use crate::{
    algorithm::deflation::DeflationEngine,
    algorithm::seeds::SeedFactory,
    analysis::statistics::TileStatistics,
    io::configuration::{
        DEFAULT_GENERATIONS, DEFAULT_QUADRANCE, DEFAULT_SEED_NAME, MAX_GENERATIONS,
    },
    io::error::{Outcome, Result, TilingWarning, invalid_parameter},
    math::phi::{PurePhi, RatioProvider},
    spatial::codec::TileCodec,
    spatial::tiles::TileSet,
};

/// Number of deflation passes, bounded by [`MAX_GENERATIONS`]
///
/// Tile count grows by about φ² per pass, so the bound is enforced where the
/// count enters the API rather than left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationCount(u32);

impl GenerationCount {
    /// No deflation: the seed itself
    pub const ZERO: Self = Self(0);

    /// Validate a generation count
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `generations` exceeds [`MAX_GENERATIONS`]
    pub fn new(generations: u32) -> Result<Self> {
        if generations > MAX_GENERATIONS {
            return Err(invalid_parameter(
                "generations",
                &generations,
                &format!("must be at most {MAX_GENERATIONS}"),
            ));
        }
        Ok(Self(generations))
    }

    /// The validated count
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for GenerationCount {
    type Error = crate::io::error::TilingError;

    fn try_from(generations: u32) -> Result<Self> {
        Self::new(generations)
    }
}

/// Parameters of one tiling run
#[derive(Clone, Debug, PartialEq)]
pub struct TilingConfig {
    /// Seed configuration name
    pub seed: String,
    /// Reference quadrance of the seed tiles
    pub quadrance: f64,
    /// Number of deflation passes
    pub generations: GenerationCount,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED_NAME.to_string(),
            quadrance: DEFAULT_QUADRANCE,
            generations: GenerationCount(DEFAULT_GENERATIONS),
        }
    }
}

/// Drives a seed through successive deflation passes
///
/// Each call to [`Self::execute_generation`] replaces the current tile set
/// with its deflation; the previous set is dropped. Statistics of every
/// generation, the seed included, are kept in [`Self::history`].
pub struct TilingExecutor<P = PurePhi> {
    engine: DeflationEngine<P>,
    tiles: TileSet,
    generation: u32,
    target: GenerationCount,
    history: Vec<TileStatistics>,
    warnings: Vec<TilingWarning>,
}

impl TilingExecutor<PurePhi> {
    /// Build the seed for `config` using the default constants
    pub fn new(config: &TilingConfig) -> Self {
        Self::with_provider(config, PurePhi::new())
    }
}

impl<P: RatioProvider + Clone> TilingExecutor<P> {
    /// Build the seed for `config` with constants from `provider`
    pub fn with_provider(config: &TilingConfig, provider: P) -> Self {
        let factory = SeedFactory::new(TileCodec::new(provider.clone()));
        let engine = DeflationEngine::new(provider);
        let (tiles, warnings) = factory.build(&config.seed, config.quadrance).into_parts();
        let seed_stats = TileStatistics::from_tiles(&tiles, engine.codec());

        tracing::info!(
            seed = %config.seed,
            quadrance = config.quadrance,
            generations = config.generations.get(),
            tiles = tiles.len(),
            "seed built"
        );

        Self {
            engine,
            tiles,
            generation: 0,
            target: config.generations,
            history: vec![seed_stats],
            warnings,
        }
    }

    /// Apply one deflation pass
    ///
    /// Returns `false` without doing anything once the configured number of
    /// generations has been reached.
    pub fn execute_generation(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        let (next, warnings) = self.engine.deflate(&self.tiles).into_parts();
        self.tiles = next;
        self.generation += 1;
        self.warnings.extend(warnings);

        let stats = TileStatistics::from_tiles(&self.tiles, self.engine.codec());
        tracing::info!(
            generation = self.generation,
            tiles = stats.tile_count,
            thick = stats.thick_count,
            thin = stats.thin_count,
            "generation complete"
        );
        self.history.push(stats);

        true
    }

    /// Run every remaining generation
    pub fn run(&mut self) {
        while self.execute_generation() {}
    }

    /// Whether the configured number of generations has been applied
    pub const fn is_complete(&self) -> bool {
        self.generation >= self.target.get()
    }

    /// Current tile set
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Number of passes applied so far
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Configured number of passes
    pub const fn target(&self) -> GenerationCount {
        self.target
    }

    /// Statistics per generation, starting with the seed
    pub fn history(&self) -> &[TileStatistics] {
        &self.history
    }

    /// Warnings raised so far, seed construction included
    pub fn warnings(&self) -> &[TilingWarning] {
        &self.warnings
    }

    /// The deflation engine, for access to its codec
    pub const fn engine(&self) -> &DeflationEngine<P> {
        &self.engine
    }

    /// Consume the executor, keeping the tiles and warnings
    pub fn into_outcome(self) -> Outcome<TileSet> {
        Outcome {
            value: self.tiles,
            warnings: self.warnings,
        }
    }
}

/// Build `seed` at `quadrance0` and deflate it `generations` times
///
/// # Errors
///
/// Returns `InvalidParameter` if `generations` exceeds [`MAX_GENERATIONS`];
/// the check happens before any tile is built.
#[tracing::instrument]
pub fn generate(seed: &str, quadrance0: f64, generations: u32) -> Result<Outcome<TileSet>> {
    let config = TilingConfig {
        seed: seed.to_string(),
        quadrance: quadrance0,
        generations: GenerationCount::new(generations)?,
    };
    let mut executor = TilingExecutor::new(&config);
    executor.run();
    Ok(executor.into_outcome())
}
