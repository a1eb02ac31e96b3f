//! CurveLab generator: random curve collections within caller bounds.

pub mod error;
pub mod generate;

pub use error::{GenError, Result};
pub use generate::{random_curves, CurveBounds};
