//! CLI entry point for the Penrose tiling generator

use clap::Parser;
use penrosetile::io::cli::{Cli, TilingRunner};

fn main() -> penrosetile::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    TilingRunner::new(cli).run()?;
    Ok(())
}
