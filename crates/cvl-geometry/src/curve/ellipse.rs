//! Ellipse curve.

use cvl_math::{Point3, Vector3};

use super::Curve;

/// An axis-aligned ellipse in the plane `z = center.z`.
///
/// `P(t) = center + (x_radius * cos(t), y_radius * sin(t), 0)`
///
/// The semi-axes are independent; either may be 0 (degenerate segment or
/// point). Not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point3,
    x_radius: f64,
    y_radius: f64,
}

impl Ellipse {
    pub fn new(center: Point3, x_radius: f64, y_radius: f64) -> Self {
        Self {
            center,
            x_radius,
            y_radius,
        }
    }

    /// Semi-axis pair `(x_radius, y_radius)`.
    pub fn radii(&self) -> (f64, f64) {
        (self.x_radius, self.y_radius)
    }
}

impl Curve for Ellipse {
    fn point_at(&self, t: f64) -> Point3 {
        Point3::new(
            self.center.x + self.x_radius * t.cos(),
            self.center.y + self.y_radius * t.sin(),
            self.center.z,
        )
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        Vector3::new(-self.x_radius * t.sin(), self.y_radius * t.cos(), 0.0)
    }

    fn center(&self) -> Point3 {
        self.center
    }

    fn is_closed(&self) -> bool {
        true
    }
}
