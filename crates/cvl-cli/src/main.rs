//! CurveLab demo CLI
//!
//! Generates a random mixed collection of curves, prints every curve's point
//! and first derivative at t = PI/4, then selects the circles, sorts them by
//! radius, and prints the sum of radii.
//!
//! # Usage
//!
//! ```bash
//! # Random collection
//! cvl-curves
//!
//! # Reproducible collection
//! cvl-curves --seed 42
//! ```

use std::f64::consts::FRAC_PI_4;
use std::process;

use cvl_gen::{random_curves, CurveBounds};
use cvl_geometry::{collect_circles, sort_by_radius, sum_of_radii, Circle, Curve, CurveKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn print_usage() {
    eprintln!(
        r#"CurveLab demo CLI

USAGE:
    cvl-curves [--seed <u64>]

OPTIONS:
    --seed <u64>    Seed the random generator for a reproducible run
    --help          Show this help message
"#
    );
}

fn parse_seed(args: &mut impl Iterator<Item = String>) -> u64 {
    let Some(value) = args.next() else {
        eprintln!("--seed requires a value");
        process::exit(1);
    };
    value.parse().unwrap_or_else(|_| {
        eprintln!("invalid seed: {value}");
        process::exit(1);
    })
}

fn print_points_and_derivatives(curves: &[CurveKind], t: f64) {
    for curve in curves {
        let p = curve.point_at(t);
        let d = curve.derivative_at(t);
        println!("Point x: {} y: {} z: {}", p.x, p.y, p.z);
        println!("Derivative x: {} y: {} z: {}", d.x, d.y, d.z);
    }
}

fn main() {
    let mut seed = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--seed" => seed = Some(parse_seed(&mut args)),
            other => {
                eprintln!("unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
    }

    let bounds = CurveBounds {
        min_count: 5,
        max_count: 10,
        max_coordinate: 100,
        max_radius: 50,
        max_step: 10,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let curves = random_curves(&bounds, &mut rng).unwrap_or_else(|err| {
        eprintln!("curve generation failed: {err}");
        process::exit(1);
    });
    println!("--- Generated {} curves ---", curves.len());

    print_points_and_derivatives(&curves, FRAC_PI_4);
    println!("--- Points and derivatives printed at t = PI/4 ---");

    let mut circles = collect_circles(&curves);
    println!("--- Selected {} circles ---", circles.len());

    sort_by_radius(&mut circles);
    let radii: Vec<f64> = circles.iter().map(Circle::radius).collect();
    println!("--- Radii sorted ascending: {radii:?} ---");

    println!("--- Sum of radii: {} ---", sum_of_radii(&circles));
}
