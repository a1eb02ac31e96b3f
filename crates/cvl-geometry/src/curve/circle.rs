//! Circle curve.

use cvl_math::{Point3, Vector3};

use super::Curve;

/// A circle in the plane `z = center.z`, parameterized by angle in radians.
///
/// `P(t) = center + (radius * cos(t), radius * sin(t), 0)`
///
/// A radius of 0 degenerates to the center point; a negative radius mirrors
/// the point through the center. Neither is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point3,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Radius of the circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        Point3::new(
            self.center.x + self.radius * t.cos(),
            self.center.y + self.radius * t.sin(),
            self.center.z,
        )
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }

    fn center(&self) -> Point3 {
        self.center
    }

    fn is_closed(&self) -> bool {
        true
    }
}
