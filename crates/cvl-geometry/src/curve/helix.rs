//! Helix curve.

use std::f64::consts::TAU;

use cvl_math::{Point3, Vector3};

use super::Curve;

/// A circular helix around the axis through `center` parallel to z.
///
/// `P(t) = center + (radius * cos(t), radius * sin(t), step * t / (2*PI))`
///
/// `step` is the pitch: the z gained over one full 2π turn. A step of 0
/// degenerates to a circle in the plane `z = center.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helix {
    center: Point3,
    radius: f64,
    step: f64,
}

impl Helix {
    pub fn new(center: Point3, radius: f64, step: f64) -> Self {
        Self {
            center,
            radius,
            step,
        }
    }

    /// Radius of the helix cylinder.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Pitch per full turn.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Curve for Helix {
    fn point_at(&self, t: f64) -> Point3 {
        Point3::new(
            self.center.x + self.radius * t.cos(),
            self.center.y + self.radius * t.sin(),
            self.center.z + self.step * t / TAU,
        )
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        Vector3::new(
            -self.radius * t.sin(),
            self.radius * t.cos(),
            self.step / TAU,
        )
    }

    fn center(&self) -> Point3 {
        self.center
    }
}
