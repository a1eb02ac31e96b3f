//! CurveLab math foundation.
//!
//! Curves live in plain Cartesian 3D space over `f64`. Points and vectors
//! are `glam` double-precision vectors; no validation of NaN or infinity is
//! performed anywhere, non-finite values propagate per IEEE semantics.

pub use glam::DVec3;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
