//! Offset Profile: offsets a rounded wall outline to both sides and prints
//! the sampled polylines.
//!
//! Usage:
//! ```text
//! cargo run --example offset_profile              # distance 0.2
//! cargo run --example offset_profile -- 0.5       # custom distance
//! RUST_LOG=offcurve=trace cargo run --example offset_profile
//! ```

use std::f64::consts::FRAC_PI_2;

use offcurve::geometry::{Arc, Curve, Line, Segment};
use offcurve::math::{Point2, Vector2};
use offcurve::operations::offset::OffsetChain2D;
use offcurve::tessellation::{sample_chain, SamplingParams};
use offcurve::Result;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and offcurve.
    // Override with RUST_LOG env var (e.g. RUST_LOG=offcurve=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("offset_profile=info".parse().unwrap_or_default())
        .add_directive("offcurve=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let distance = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<f64>().unwrap_or_else(|_| {
            warn!(%arg, "not a number, using 0.2");
            0.2
        }),
        None => 0.2,
    };

    let spine = rounded_wall();
    let params = SamplingParams::new(0.25, FRAC_PI_2 / 8.0)?;

    for (side, d) in [("right", distance), ("left", -distance)] {
        let (segments, outcomes) = OffsetChain2D::new(spine.clone(), d).execute_with_outcomes()?;
        for (i, outcome) in outcomes.iter().enumerate() {
            info!(side, segment = i, ?outcome, p0 = %segments[i].p0(), p1 = %segments[i].p1());
        }
        let polyline = sample_chain(&segments, &params);
        println!("# {side} offset {d} ({} points, length {:.4})", polyline.len(), polyline.length());
        for p in &polyline.points {
            println!("{:.6} {:.6}", p.x, p.y);
        }
    }
    Ok(())
}

/// An open wall: straight run, rounded corner, S-bend of two arcs, straight run.
fn rounded_wall() -> Vec<Segment> {
    vec![
        Line::new(Point2::new(0.0, 0.0), Vector2::new(3.0, 0.0)).into(),
        Arc::new(Point2::new(3.0, 1.0), 1.0, -FRAC_PI_2, FRAC_PI_2).into(),
        Arc::new(Point2::new(5.0, 1.0), 1.0, std::f64::consts::PI, -FRAC_PI_2).into(),
        Line::new(Point2::new(5.0, 2.0), Vector2::new(2.0, 0.0)).into(),
    ]
}
