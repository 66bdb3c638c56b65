//! Command-line interface for generating, exporting, and previewing tilings

use crate::algorithm::executor::{GenerationCount, TilingConfig, TilingExecutor};
use crate::algorithm::seeds::SeedConfiguration;
use crate::analysis::statistics::TileStatistics;
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_IMAGE_SIZE, DEFAULT_OUTPUT_PATH, DEFAULT_QUADRANCE,
    DEFAULT_SEED_NAME, FALLBACK_SEED_NAME, MAX_IMAGE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{TilingDocument, export_json};
use crate::io::image::export_geometry_as_png;
use crate::io::progress::GenerationProgress;
use crate::spatial::geometry::TileGeometryCompiler;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "penrosetile")]
#[command(
    author,
    version,
    about = "Generate Penrose rhombus tilings by golden-ratio deflation"
)]
/// Command-line arguments for the tiling generator
pub struct Cli {
    /// Seed configuration: single-thick, single-thin, single-kite, single-dart, star, sun, cartwheel
    #[arg(short, long, default_value = DEFAULT_SEED_NAME)]
    pub seed: String,

    /// Number of deflation passes
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u32,

    /// Reference quadrance of the seed tiles (squared short diagonal for rhombi)
    #[arg(short = 'Q', long, default_value_t = DEFAULT_QUADRANCE, allow_negative_numbers = true)]
    pub quadrance: f64,

    /// Emit edges only, without face polygons
    #[arg(long)]
    pub no_faces: bool,

    /// Geometry JSON output path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Also render a PNG preview to this path
    #[arg(short, long, value_name = "PNG")]
    pub image: Option<PathBuf>,

    /// Side length of the PNG preview in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub size: u32,

    /// Suppress progress output and warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-generation details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Most detailed log level to emit
    pub const fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }

    /// Whether face polygons are compiled
    pub const fn face_visible(&self) -> bool {
        !self.no_faces
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the arguments into a run configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `generations` exceeds the supported maximum
    /// - `quadrance` is not a finite positive number
    /// - `size` is zero or above the supported maximum
    pub fn tiling_config(&self) -> Result<TilingConfig> {
        if !self.quadrance.is_finite() || self.quadrance <= 0.0 {
            return Err(invalid_parameter(
                "quadrance",
                &self.quadrance,
                &"must be finite and positive",
            ));
        }
        if self.size == 0 || self.size > MAX_IMAGE_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_IMAGE_SIZE}"),
            ));
        }

        Ok(TilingConfig {
            seed: self.seed.clone(),
            quadrance: self.quadrance,
            generations: GenerationCount::new(self.generations)?,
        })
    }

    /// Name of the seed that will actually be built
    pub fn resolved_seed_name(&self) -> &'static str {
        SeedConfiguration::from_name(&self.seed).map_or(FALLBACK_SEED_NAME, SeedConfiguration::name)
    }
}

/// Runs one generation request end to end: deflate, compile, export
pub struct TilingRunner {
    cli: Cli,
}

impl TilingRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the tiling and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, JSON export, or PNG export fails
    pub fn run(&self) -> Result<TileStatistics> {
        let config = self.cli.tiling_config()?;
        let mut executor = TilingExecutor::new(&config);

        let total = config.generations.get();
        let progress = if self.cli.should_show_progress() {
            GenerationProgress::new(total)
        } else {
            GenerationProgress::hidden(total)
        };
        while executor.execute_generation() {
            progress.update(executor.generation(), executor.tiles().len());
        }
        progress.finish(executor.tiles().len());

        let compiler = TileGeometryCompiler::new(*executor.engine().codec());
        let geometry = compiler.compile(executor.tiles(), self.cli.face_visible());
        let statistics = executor
            .history()
            .last()
            .copied()
            .unwrap_or_else(|| TileStatistics::from_tiles(executor.tiles(), executor.engine().codec()));

        let document = TilingDocument {
            seed: self.cli.resolved_seed_name(),
            generations: executor.generation(),
            quadrance: config.quadrance,
            statistics: &statistics,
            geometry: &geometry,
        };
        export_json(&document, &self.cli.output)?;

        if let Some(ref image_path) = self.cli.image {
            export_geometry_as_png(&geometry, self.cli.size, image_path)?;
        }

        tracing::info!(
            tiles = statistics.tile_count,
            vertices = geometry.vertices.len(),
            edges = geometry.edges.len(),
            warnings = executor.warnings().len(),
            "tiling written"
        );
        self.report(&statistics);

        Ok(statistics)
    }

    // Allow print for the end-of-run summary
    #[allow(clippy::print_stderr)]
    fn report(&self, statistics: &TileStatistics) {
        if self.cli.quiet {
            return;
        }
        eprintln!(
            "{} tiles ({} thick, {} thin) -> {}",
            statistics.tile_count,
            statistics.thick_count,
            statistics.thin_count,
            self.cli.output.display()
        );
        if let Some(ref image_path) = self.cli.image {
            eprintln!("preview -> {}", image_path.display());
        }
    }
}
