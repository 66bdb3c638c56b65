//! Tests for canonical prototile polygons

#[cfg(test)]
mod tests {
    use penrosetile::math::phi::{PurePhi, RatioProvider};
    use penrosetile::spatial::point::{Point2, centroid};
    use penrosetile::spatial::prototile::{
        Prototile, interior_angles, quad_template, template_vertices, thick_rhombus_vertices,
        thin_rhombus_vertices,
    };
    use penrosetile::spatial::tiles::TileKind;

    const EPS: f64 = 1e-9;

    fn assert_angles(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "angles {actual:?} != {expected:?}");
        }
    }

    fn edge_lengths(vertices: &[Point2]) -> Vec<f64> {
        let next = vertices.iter().cycle().skip(1);
        vertices
            .iter()
            .zip(next)
            .map(|(a, b)| a.quadrance_to(*b).sqrt())
            .collect()
    }

    // Tests the interior angles of every kind, walking clockwise from V0
    // Verified by using the thin diagonal ratio for the thick rhombus
    #[test]
    fn test_interior_angles_by_kind() {
        let p = PurePhi::new();
        let expected: [(TileKind, &[f64]); 6] = [
            (TileKind::ThickRhombus, &[72.0, 108.0, 72.0, 108.0]),
            (TileKind::ThinRhombus, &[36.0, 144.0, 36.0, 144.0]),
            (TileKind::Kite, &[72.0, 72.0, 144.0, 72.0]),
            (TileKind::Dart, &[72.0, 36.0, 216.0, 36.0]),
            (TileKind::RobinsonLarge, &[36.0, 72.0, 72.0]),
            (TileKind::RobinsonSmall, &[108.0, 36.0, 36.0]),
        ];

        for (kind, angles) in expected {
            let tile = Prototile::for_kind(&p, kind, 2.0, true);
            assert_eq!(tile.vertices.len(), kind.vertex_count());
            assert_angles(&tile.interior_angles(), angles);
        }
    }

    // Tests that the short diagonal of each rhombus joins V1 and V3 with
    // length √Q and that all four edges are equal
    #[test]
    fn test_rhombus_diagonals_and_edges() {
        let p = PurePhi::new();
        let q = 3.0;

        for vertices in [thick_rhombus_vertices(&p, q), thin_rhombus_vertices(&p, q)] {
            let [v0, v1, v2, v3] = vertices;
            assert!((v1.quadrance_to(v3) - q).abs() < EPS);
            assert!(v0.quadrance_to(v2) > q, "V0-V2 is the long diagonal");
            assert!(v1.y.abs() < EPS && v3.y.abs() < EPS);

            let edges = edge_lengths(&vertices);
            for edge in &edges {
                assert!((edge - edges[0]).abs() < EPS);
            }
        }
    }

    // Tests kite and dart edge lengths: long φ√Q from the apex, short √Q at the tail
    #[test]
    fn test_kite_dart_edges() {
        let p = PurePhi::new();
        let q: f64 = 4.0;
        let short = q.sqrt();
        let long = p.phi() * short;

        for kind in [TileKind::Kite, TileKind::Dart] {
            let edges = edge_lengths(&template_vertices(&p, kind, q));
            let expected = [long, short, short, long];
            for (e, x) in edges.iter().zip(expected) {
                assert!((e - x).abs() < EPS, "{kind}: {edges:?}");
            }
        }
    }

    #[test]
    fn test_robinson_triangle_edges() {
        let p = PurePhi::new();
        let q = 1.0;

        let large = edge_lengths(&template_vertices(&p, TileKind::RobinsonLarge, q));
        assert!((large[0] - p.phi()).abs() < EPS);
        assert!((large[1] - 1.0).abs() < EPS);
        assert!((large[2] - p.phi()).abs() < EPS);

        let small = edge_lengths(&template_vertices(&p, TileKind::RobinsonSmall, q));
        assert!((small[0] - 1.0).abs() < EPS);
        assert!((small[1] - p.phi()).abs() < EPS);
        assert!((small[2] - 1.0).abs() < EPS);
    }

    // Tests that templates are centred with V0 straight above the centroid
    #[test]
    fn test_templates_centered_with_apex_up() {
        let p = PurePhi::new();
        for kind in TileKind::ALL {
            let vertices = template_vertices(&p, kind, 1.5);
            assert!(centroid(&vertices).approx_eq(Point2::ORIGIN, EPS), "{kind}");
            let apex = vertices[0];
            assert!(apex.x.abs() < EPS && apex.y > 0.0, "{kind}");
        }
    }

    // Tests edge loop and reversed face indices
    // Verified by emitting the face in boundary order
    #[test]
    fn test_edges_and_face() {
        let p = PurePhi::new();
        let tile = Prototile::thick_rhombus(&p, 1.0, true);

        assert_eq!(tile.edges, vec![[0, 1], [1, 2], [2, 3], [3, 0]]);
        assert_eq!(tile.face, Some(vec![0, 3, 2, 1]));

        let hidden = Prototile::thin_rhombus(&p, 1.0, false);
        assert_eq!(hidden.edges.len(), 4);
        assert!(hidden.face.is_none());

        let triangle = Prototile::robinson_small(&p, 1.0, true);
        assert_eq!(triangle.edges, vec![[0, 1], [1, 2], [2, 0]]);
        assert_eq!(triangle.face, Some(vec![0, 2, 1]));
    }

    // Tests that the reversed face winds counter-clockwise (positive area)
    #[test]
    fn test_face_winding_is_outward() {
        let p = PurePhi::new();
        for tile in [
            Prototile::kite(&p, 1.0, true),
            Prototile::dart(&p, 1.0, true),
            Prototile::robinson_large(&p, 1.0, true),
        ] {
            let face = tile.face.clone().unwrap();
            let loop_points: Vec<Point2> = face.iter().map(|&i| tile.vertices[i]).collect();
            let next = loop_points.iter().cycle().skip(1);
            let twice_area: f64 = loop_points
                .iter()
                .zip(next)
                .map(|(a, b)| a.x * b.y - b.x * a.y)
                .sum();
            assert!(twice_area > 0.0, "{}", tile.kind);
        }
    }

    #[test]
    fn test_quad_template_excludes_triangles() {
        let p = PurePhi::new();
        assert!(quad_template(&p, TileKind::Kite, 1.0).is_some());
        assert!(quad_template(&p, TileKind::RobinsonLarge, 1.0).is_none());
        assert!(quad_template(&p, TileKind::RobinsonSmall, 1.0).is_none());
    }

    #[test]
    fn test_free_interior_angles_on_square() {
        let square = [
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        assert_angles(&interior_angles(&square), &[90.0, 90.0, 90.0, 90.0]);
    }
}
