//! Two-dimensional points and the vector arithmetic used by the codec

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or displacement) in the tiling plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, increasing upwards
    pub y: f64,
}

impl Point2 {
    /// The origin of the plane
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            t.mul_add(other.x - self.x, self.x),
            t.mul_add(other.y - self.y, self.y),
        )
    }

    /// Squared distance to `other`
    pub fn quadrance_to(self, other: Self) -> f64 {
        let d = other - self;
        d.dot(d)
    }

    /// Dot product treating both points as vectors
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Direction of this vector in degrees, measured counter-clockwise from +x
    pub fn angle_degrees(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Arithmetic mean of `points`, or the origin when there are none
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::ORIGIN;
    }
    let sum = points.iter().fold(Point2::ORIGIN, |acc, &p| acc + p);
    let n = points.len() as f64;
    Point2::new(sum.x / n, sum.y / n)
}
