//! JSON export of compiled geometry together with the run parameters

use crate::analysis::statistics::TileStatistics;
use crate::io::error::{Result, TilingError};
use crate::spatial::geometry::CompiledGeometry;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything written for one run: parameters, summary, and geometry
#[derive(Debug, Serialize)]
pub struct TilingDocument<'a> {
    /// Seed configuration actually built
    pub seed: &'a str,
    /// Number of deflation passes applied
    pub generations: u32,
    /// Reference quadrance of the seed tiles
    pub quadrance: f64,
    /// Statistics of the final generation
    pub statistics: &'a TileStatistics,
    /// Compiled vertex/edge/face data
    pub geometry: &'a CompiledGeometry,
}

/// Write `document` as pretty-printed JSON to `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or flushed
/// - Serialization fails
pub fn export_json(document: &TilingDocument<'_>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| TilingError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| TilingError::Export {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| TilingError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "flush",
        source: e,
    })?;

    tracing::debug!(
        path = %output_path.display(),
        vertices = document.geometry.vertices.len(),
        "geometry exported"
    );
    Ok(())
}
