//! Tests for JSON export of compiled geometry

#[cfg(test)]
mod tests {
    use penrosetile::algorithm::executor::generate;
    use penrosetile::analysis::statistics::TileStatistics;
    use penrosetile::io::error::TilingError;
    use penrosetile::io::export::{TilingDocument, export_json};
    use penrosetile::spatial::codec::TileCodec;
    use penrosetile::spatial::geometry::TileGeometryCompiler;
    use std::fs;

    // Tests that the written document carries parameters, statistics, and geometry
    // Verified by skipping the statistics field
    #[test]
    fn test_export_writes_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("tiling.json");

        let tiles = generate("single-thin", 1.0, 1).unwrap().value;
        let geometry = TileGeometryCompiler::default().compile(&tiles, true);
        let statistics = TileStatistics::from_tiles(&tiles, &TileCodec::default());
        let document = TilingDocument {
            seed: "single-thin",
            generations: 1,
            quadrance: 1.0,
            statistics: &statistics,
            geometry: &geometry,
        };

        export_json(&document, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["seed"], "single-thin");
        assert_eq!(json["generations"], 1);
        assert_eq!(json["statistics"]["tile_count"], 2);
        assert_eq!(json["geometry"]["vertices"].as_array().unwrap().len(), 8);
        assert_eq!(json["geometry"]["faces"].as_array().unwrap().len(), 2);
        assert!(text.contains('\n'), "output is pretty-printed");
    }

    // Tests that a path under a regular file reports a file system error
    #[test]
    fn test_export_into_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let tiles = generate("single-thick", 1.0, 0).unwrap().value;
        let geometry = TileGeometryCompiler::default().compile(&tiles, false);
        let statistics = TileStatistics::from_tiles(&tiles, &TileCodec::default());
        let document = TilingDocument {
            seed: "single-thick",
            generations: 0,
            quadrance: 1.0,
            statistics: &statistics,
            geometry: &geometry,
        };

        let error = export_json(&document, &blocker.join("tiling.json")).unwrap_err();
        assert!(matches!(error, TilingError::FileSystem { .. }));
    }
}
