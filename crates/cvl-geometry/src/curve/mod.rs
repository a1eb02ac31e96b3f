//! Curve trait and the closed set of curve kinds.

mod circle;
mod ellipse;
mod helix;

use cvl_math::{Point3, Vector3};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

/// Trait for parametric curves in 3D space.
///
/// Every operation is a total function: any finite parameter is valid, no
/// range is enforced, and periodic curves wrap naturally through the
/// trigonometric functions. Non-finite inputs propagate NaN/infinity
/// through the result rather than raising an error.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the first derivative at parameter `t`.
    ///
    /// The analytic derivative of [`point_at`](Curve::point_at) with respect
    /// to `t`; a tangent vector, not normalized.
    fn derivative_at(&self, t: f64) -> Vector3;

    /// The fixed center of the curve, set at construction.
    fn center(&self) -> Point3;

    /// Whether the curve is closed (one period returns to the start).
    fn is_closed(&self) -> bool {
        false
    }
}

/// The closed set of curve variants.
///
/// Mixed collections store `CurveKind` values; selecting a concrete variant
/// is an exhaustive match on the tag, never a downcast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveKind {
    Circle(Circle),
    Ellipse(Ellipse),
    Helix(Helix),
}

impl CurveKind {
    /// The circle payload, if this variant is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            CurveKind::Circle(circle) => Some(circle),
            _ => None,
        }
    }
}

impl Curve for CurveKind {
    fn point_at(&self, t: f64) -> Point3 {
        match self {
            CurveKind::Circle(circle) => circle.point_at(t),
            CurveKind::Ellipse(ellipse) => ellipse.point_at(t),
            CurveKind::Helix(helix) => helix.point_at(t),
        }
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        match self {
            CurveKind::Circle(circle) => circle.derivative_at(t),
            CurveKind::Ellipse(ellipse) => ellipse.derivative_at(t),
            CurveKind::Helix(helix) => helix.derivative_at(t),
        }
    }

    fn center(&self) -> Point3 {
        match self {
            CurveKind::Circle(circle) => circle.center(),
            CurveKind::Ellipse(ellipse) => ellipse.center(),
            CurveKind::Helix(helix) => helix.center(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            CurveKind::Circle(circle) => circle.is_closed(),
            CurveKind::Ellipse(ellipse) => ellipse.is_closed(),
            CurveKind::Helix(helix) => helix.is_closed(),
        }
    }
}

impl From<Circle> for CurveKind {
    fn from(circle: Circle) -> Self {
        CurveKind::Circle(circle)
    }
}

impl From<Ellipse> for CurveKind {
    fn from(ellipse: Ellipse) -> Self {
        CurveKind::Ellipse(ellipse)
    }
}

impl From<Helix> for CurveKind {
    fn from(helix: Helix) -> Self {
        CurveKind::Helix(helix)
    }
}
