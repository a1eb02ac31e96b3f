//! Random sampling of mixed curve collections.

use cvl_geometry::{Circle, CurveKind, Ellipse, Helix};
use cvl_math::Point3;
use rand::Rng;

use crate::error::{GenError, Result};

/// Bounds for random curve generation.
///
/// Parameters are sampled as integers below each magnitude bound and widened
/// to `f64`, so generated curves carry integer-valued coordinates, radii and
/// steps.
#[derive(Debug, Clone, Copy)]
pub struct CurveBounds {
    /// Minimum number of generated elements (inclusive).
    pub min_count: usize,
    /// Maximum number of generated elements (inclusive).
    pub max_count: usize,
    /// Exclusive upper bound on center coordinate magnitudes.
    pub max_coordinate: usize,
    /// Exclusive upper bound on radii.
    pub max_radius: usize,
    /// Exclusive upper bound on the helix step.
    pub max_step: usize,
}

impl CurveBounds {
    fn validate(&self) -> Result<()> {
        if self.min_count > self.max_count {
            return Err(GenError::EmptyCountRange {
                min: self.min_count,
                max: self.max_count,
            });
        }
        if self.max_coordinate == 0 {
            return Err(GenError::ZeroBound("max_coordinate"));
        }
        if self.max_radius == 0 {
            return Err(GenError::ZeroBound("max_radius"));
        }
        if self.max_step == 0 {
            return Err(GenError::ZeroBound("max_step"));
        }
        Ok(())
    }
}

/// Generates a random mixed collection of curves within `bounds`.
///
/// Each element is one of the three variants, chosen uniformly. Circle and
/// ellipse centers lie in the `z = 0` plane; helix centers get a random z.
///
/// # Errors
///
/// Returns an error if the count range is empty or any magnitude bound is 0.
pub fn random_curves<R: Rng>(bounds: &CurveBounds, rng: &mut R) -> Result<Vec<CurveKind>> {
    bounds.validate()?;
    let count = rng.random_range(bounds.min_count..=bounds.max_count);
    let mut curves = Vec::with_capacity(count);
    for _ in 0..count {
        curves.push(random_curve(bounds, rng));
    }
    Ok(curves)
}

fn sample<R: Rng>(rng: &mut R, max: usize) -> f64 {
    rng.random_range(0..max) as f64
}

fn planar_center<R: Rng>(rng: &mut R, bounds: &CurveBounds) -> Point3 {
    Point3::new(
        sample(rng, bounds.max_coordinate),
        sample(rng, bounds.max_coordinate),
        0.0,
    )
}

fn random_curve<R: Rng>(bounds: &CurveBounds, rng: &mut R) -> CurveKind {
    match rng.random_range(0..3) {
        0 => CurveKind::Circle(Circle::new(
            planar_center(rng, bounds),
            sample(rng, bounds.max_radius),
        )),
        1 => CurveKind::Ellipse(Ellipse::new(
            planar_center(rng, bounds),
            sample(rng, bounds.max_radius),
            sample(rng, bounds.max_radius),
        )),
        _ => {
            let center = Point3::new(
                sample(rng, bounds.max_coordinate),
                sample(rng, bounds.max_coordinate),
                sample(rng, bounds.max_coordinate),
            );
            CurveKind::Helix(Helix::new(
                center,
                sample(rng, bounds.max_radius),
                sample(rng, bounds.max_step),
            ))
        }
    }
}
