//! Tests for point arithmetic and centroids

#[cfg(test)]
mod tests {
    use penrosetile::spatial::point::{Point2, centroid};

    #[test]
    fn test_vector_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(-3.0, 0.5);

        assert_eq!(a + b, Point2::new(-2.0, 2.5));
        assert_eq!(a - b, Point2::new(4.0, 1.5));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(-a, Point2::new(-1.0, -2.0));
        assert!((a.dot(b) - (-2.0)).abs() < 1e-12);
        assert!((a.quadrance_to(b) - 18.25).abs() < 1e-12);
        assert_eq!(Point2::default(), Point2::ORIGIN);
    }

    // Tests interpolation endpoints and the golden division point
    #[test]
    fn test_lerp() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, -5.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert!(a.lerp(b, 1.0).approx_eq(b, 1e-12));
        assert!(a.lerp(b, 0.5).approx_eq(Point2::new(5.0, -2.5), 1e-12));

        let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
        let golden = a.lerp(b, inv_phi);
        let ratio = a.quadrance_to(golden).sqrt() / golden.quadrance_to(b).sqrt();
        assert!((ratio - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_degrees() {
        assert!((Point2::new(0.0, 1.0).angle_degrees() - 90.0).abs() < 1e-12);
        assert!((Point2::new(-1.0, 0.0).angle_degrees() - 180.0).abs() < 1e-12);
        assert!((Point2::new(0.0, -2.0).angle_degrees() + 90.0).abs() < 1e-12);
    }

    // Tests centroid of a square and the empty fallback
    #[test]
    fn test_centroid() {
        let square = [
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 1.0),
            Point2::new(3.0, 3.0),
            Point2::new(1.0, 3.0),
        ];
        assert!(centroid(&square).approx_eq(Point2::new(2.0, 2.0), 1e-12));
        assert_eq!(centroid(&[]), Point2::ORIGIN);
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = Point2::new(1.0, 1.0);
        assert!(a.approx_eq(Point2::new(1.0 + 1e-10, 1.0 - 1e-10), 1e-9));
        assert!(!a.approx_eq(Point2::new(1.0 + 1e-8, 1.0), 1e-9));
    }
}
