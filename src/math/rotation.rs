//! Exact rotations by multiples of 36 degrees
//!
//! The ten orientations of a Penrose rhombus are the multiples of 36°. Their
//! sines and cosines are all ± one of cos 36°, sin 36°, cos 72°, sin 72°, 0 or
//! 1, so a rotation table built from those four values rotates without ever
//! calling `sin`/`cos`.

use crate::spatial::point::Point2;

/// Number of distinct rotation steps in a full turn
pub const ROTATION_STEPS: u8 = 10;

/// Angle covered by one rotation step
pub const STEP_DEGREES: f64 = 36.0;

/// Reduce any integer step to the canonical range `0..ROTATION_STEPS`
pub fn normalize_step(step: i64) -> u8 {
    step.rem_euclid(i64::from(ROTATION_STEPS)) as u8
}

// Fractional steps are rounded to this many parts before snapping, so that
// exact half-step angles do not depend on the last bit of an atan2 result
const SNAP_QUANTUM: f64 = 1e9;

/// Snap an angle in degrees to the nearest rotation step
///
/// Returns the normalized step and the signed residual in degrees between
/// `degrees` and the snapped orientation. An angle exactly halfway between two
/// steps snaps to the counter-clockwise one.
pub fn snap_degrees(degrees: f64) -> (u8, f64) {
    let turned = degrees.rem_euclid(360.0);
    let fractional = ((turned / STEP_DEGREES) * SNAP_QUANTUM).round() / SNAP_QUANTUM;
    let steps = fractional.round();
    let residual = steps.mul_add(-STEP_DEGREES, turned);
    (normalize_step(steps as i64), residual)
}

/// Cosine/sine pairs for each of the ten rotation steps
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTable {
    units: [Point2; ROTATION_STEPS as usize],
}

impl RotationTable {
    /// Build the table from the four pentagonal constants
    pub const fn from_pentagonal(cos36: f64, sin36: f64, cos72: f64, sin72: f64) -> Self {
        Self {
            units: [
                Point2::new(1.0, 0.0),
                Point2::new(cos36, sin36),
                Point2::new(cos72, sin72),
                Point2::new(-cos72, sin72),
                Point2::new(-cos36, sin36),
                Point2::new(-1.0, 0.0),
                Point2::new(-cos36, -sin36),
                Point2::new(-cos72, -sin72),
                Point2::new(cos72, -sin72),
                Point2::new(cos36, -sin36),
            ],
        }
    }

    /// Unit vector pointing at `step` × 36°; steps wrap modulo ten
    pub fn unit(&self, step: u8) -> Point2 {
        let index = usize::from(step % ROTATION_STEPS);
        self.units
            .get(index)
            .copied()
            .unwrap_or(Point2::new(1.0, 0.0))
    }

    /// Rotate `point` counter-clockwise about the origin by `step` × 36°
    pub fn rotate(&self, point: Point2, step: u8) -> Point2 {
        let Point2 { x: c, y: s } = self.unit(step);
        Point2::new(
            point.x.mul_add(c, -(point.y * s)),
            point.x.mul_add(s, point.y * c),
        )
    }
}
