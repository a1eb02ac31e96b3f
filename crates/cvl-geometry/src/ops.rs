//! Operations over heterogeneous curve collections.

use rayon::prelude::*;

use crate::curve::{Circle, CurveKind};

/// Collects the circle elements of a mixed curve sequence.
///
/// Non-circle variants are skipped; relative order is preserved.
pub fn collect_circles(curves: &[CurveKind]) -> Vec<Circle> {
    curves
        .iter()
        .filter_map(CurveKind::as_circle)
        .copied()
        .collect()
}

/// Sorts circles in place, ascending by radius.
///
/// The sort is stable: circles with equal radii keep their input order.
/// Comparison uses `f64::total_cmp`, so a NaN radius orders after every
/// finite radius instead of producing an inconsistent comparator.
pub fn sort_by_radius(circles: &mut [Circle]) {
    circles.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
}

/// Sums circle radii with a parallel reduction.
///
/// Rayon workers accumulate thread-local partial sums over disjoint slices
/// of the input and combine them with plain addition. Since floating-point
/// addition is not associative, the result may differ from a sequential sum
/// in the last bits of precision. An empty input sums to 0.
pub fn sum_of_radii(circles: &[Circle]) -> f64 {
    circles.par_iter().map(Circle::radius).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve, Ellipse, Helix};
    use approx::assert_relative_eq;
    use cvl_math::DVec3;

    fn circle(radius: f64) -> CurveKind {
        CurveKind::from(Circle::new(DVec3::ZERO, radius))
    }

    fn mixed_curves() -> Vec<CurveKind> {
        vec![
            circle(3.0),
            circle(1.0),
            CurveKind::from(Ellipse::new(DVec3::ZERO, 2.0, 1.0)),
            CurveKind::from(Helix::new(DVec3::ZERO, 4.0, 1.0)),
            circle(2.0),
        ]
    }

    #[test]
    fn test_collect_keeps_only_circles_in_order() {
        let circles = collect_circles(&mixed_curves());
        let radii: Vec<f64> = circles.iter().map(Circle::radius).collect();
        assert_eq!(radii, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_collect_from_empty_and_circle_free_inputs() {
        assert!(collect_circles(&[]).is_empty());
        let no_circles = vec![CurveKind::from(Helix::new(DVec3::ZERO, 1.0, 1.0))];
        assert!(collect_circles(&no_circles).is_empty());
    }

    #[test]
    fn test_sort_ascending_by_radius() {
        let mut circles = collect_circles(&mixed_curves());
        sort_by_radius(&mut circles);
        for pair in circles.windows(2) {
            assert!(pair[0].radius() <= pair[1].radius());
        }
        let radii: Vec<f64> = circles.iter().map(Circle::radius).collect();
        assert_eq!(radii, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_keeps_tied_radii_in_input_order() {
        let mut circles = vec![
            Circle::new(DVec3::new(1.0, 0.0, 0.0), 2.0),
            Circle::new(DVec3::new(2.0, 0.0, 0.0), 1.0),
            Circle::new(DVec3::new(3.0, 0.0, 0.0), 2.0),
        ];
        sort_by_radius(&mut circles);
        assert_eq!(circles[0].center().x, 2.0);
        assert_eq!(circles[1].center().x, 1.0);
        assert_eq!(circles[2].center().x, 3.0);
    }

    #[test]
    fn test_sum_of_radii_scenario() {
        let circles = collect_circles(&mixed_curves());
        assert_relative_eq!(sum_of_radii(&circles), 6.0);
    }

    #[test]
    fn test_sum_of_empty_and_singleton() {
        assert_eq!(sum_of_radii(&[]), 0.0);
        assert_eq!(sum_of_radii(&[Circle::new(DVec3::ZERO, 7.5)]), 7.5);
    }

    #[test]
    fn test_parallel_sum_matches_sequential() {
        let circles: Vec<Circle> = (0..1000)
            .map(|i| Circle::new(DVec3::ZERO, 0.1 + i as f64 * 0.01))
            .collect();
        let sequential: f64 = circles.iter().map(Circle::radius).sum();
        assert_relative_eq!(sum_of_radii(&circles), sequential, epsilon = 1e-9);
    }

    #[test]
    fn test_sum_invariant_under_reordering() {
        let mut circles = collect_circles(&mixed_curves());
        let before = sum_of_radii(&circles);
        circles.reverse();
        assert_relative_eq!(sum_of_radii(&circles), before, epsilon = 1e-12);
    }

    #[test]
    fn test_sort_does_not_touch_evaluation() {
        let mut circles = collect_circles(&mixed_curves());
        let first_before = circles[0];
        sort_by_radius(&mut circles);
        let moved = circles
            .iter()
            .find(|c| c.radius() == first_before.radius())
            .copied()
            .unwrap();
        assert_eq!(moved.point_at(0.5), first_before.point_at(0.5));
    }
}
