//! Golden-ratio constants for pentagonal geometry
//!
//! Every constant is derived from a single cached √5 through algebraic
//! identities (φ² = φ + 1, 1/φ = φ − 1, φ⁴ = 3φ + 2), so the only irrational
//! evaluations are √5 and the two radicals behind sin 36° and sin 72°.

use crate::math::rotation::RotationTable;
use crate::spatial::point::Point2;
use std::fmt;

/// Source of the exact ratios the tiling engine is built on
///
/// Implementations must satisfy the golden-ratio identities to floating
/// precision; the engine never re-derives them with transcendental functions.
pub trait RatioProvider {
    /// The golden ratio φ = (1 + √5) / 2
    fn phi(&self) -> f64;
    /// 1/φ, obtained as φ − 1
    fn inv_phi(&self) -> f64;
    /// φ², obtained as φ + 1
    fn phi_squared(&self) -> f64;
    /// φ⁴, obtained as 3φ + 2
    fn phi_fourth(&self) -> f64;
    /// cos 36° = φ / 2
    fn cos36(&self) -> f64;
    /// sin 36° = √(10 − 2√5) / 4
    fn sin36(&self) -> f64;
    /// cos 72° = (φ − 1) / 2
    fn cos72(&self) -> f64;
    /// sin 72° = √(10 + 2√5) / 4
    fn sin72(&self) -> f64;
    /// Rotate `point` about the origin by `step` × 36° counter-clockwise
    fn rotate_by_step(&self, point: Point2, step: u8) -> Point2;
}

/// Golden-ratio constants computed once and carried by value
///
/// Construct one instance and hand it to the codec, engine, and seed factory;
/// there is no process-wide cache.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PurePhi {
    phi: f64,
    sin36: f64,
    sin72: f64,
    rotations: RotationTable,
}

impl Default for PurePhi {
    fn default() -> Self {
        Self::new()
    }
}

impl PurePhi {
    /// Evaluate √5 and the pentagonal radicals, then derive everything else
    pub fn new() -> Self {
        let sqrt5 = 5.0_f64.sqrt();
        let phi = 0.5 * (1.0 + sqrt5);
        let sin36 = 2.0_f64.mul_add(-sqrt5, 10.0).sqrt() / 4.0;
        let sin72 = 2.0_f64.mul_add(sqrt5, 10.0).sqrt() / 4.0;
        let cos36 = phi / 2.0;
        let cos72 = (phi - 1.0) / 2.0;

        Self {
            phi,
            sin36,
            sin72,
            rotations: RotationTable::from_pentagonal(cos36, sin36, cos72, sin72),
        }
    }

    /// Precomputed unit vectors for the ten rotation steps
    pub const fn rotations(&self) -> &RotationTable {
        &self.rotations
    }
}

impl RatioProvider for PurePhi {
    fn phi(&self) -> f64 {
        self.phi
    }

    fn inv_phi(&self) -> f64 {
        self.phi - 1.0
    }

    fn phi_squared(&self) -> f64 {
        self.phi + 1.0
    }

    fn phi_fourth(&self) -> f64 {
        3.0_f64.mul_add(self.phi, 2.0)
    }

    fn cos36(&self) -> f64 {
        self.phi / 2.0
    }

    fn sin36(&self) -> f64 {
        self.sin36
    }

    fn cos72(&self) -> f64 {
        (self.phi - 1.0) / 2.0
    }

    fn sin72(&self) -> f64 {
        self.sin72
    }

    fn rotate_by_step(&self, point: Point2, step: u8) -> Point2 {
        self.rotations.rotate(point, step)
    }
}

impl fmt::Display for PurePhi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "φ={:.15} 1/φ={:.15} φ²={:.15} φ⁴={:.15} sin36={:.15} sin72={:.15}",
            self.phi(),
            self.inv_phi(),
            self.phi_squared(),
            self.phi_fourth(),
            self.sin36,
            self.sin72
        )
    }
}
