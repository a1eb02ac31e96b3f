//! CurveLab geometry: parametric curves and collection operations.

pub mod curve;
pub mod ops;

pub use curve::{Circle, Curve, CurveKind, Ellipse, Helix};
pub use ops::{collect_circles, sort_by_radius, sum_of_radii};
