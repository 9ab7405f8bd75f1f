//! Walk through a profile analysis session on a synthetic climb.
//!
//! Run with: cargo run --example profile_summary

use std::sync::Arc;

use slope_sense::{ClickOutcome, ProfileSeries, ProfileSession};

fn main() {
    // 6km out-and-back over a hill, one sample every 20m
    let distances: Vec<f64> = (0..=300).map(|i| i as f64 * 20.0).collect();
    let elevations: Vec<f64> = distances
        .iter()
        .map(|d| 420.0 + 180.0 * (d / 6000.0 * std::f64::consts::PI).sin())
        .collect();

    let series = match ProfileSeries::from_columns(&distances, &elevations) {
        Ok(series) => series,
        Err(e) => {
            eprintln!("Invalid track: {}", e);
            return;
        }
    };

    println!("Profile Summary Example\n");
    println!(
        "Track: {} samples, {:.1} km\n",
        series.len(),
        series.total_distance() / 1000.0
    );

    let mut session = ProfileSession::new(Arc::new(series));

    // Hover previews the sample under the pointer
    session.hover(Some(1234.0)).ok();
    if let Some(p) = session.preview() {
        println!("Hover at 1234m -> {:.0}m, {:.1}m elevation", p.distance, p.elevation);
    }

    // Clicks add waypoints, clicking the same spot again removes it
    for x in [1500.0, 4500.0, 4510.0] {
        match session.click(x) {
            ClickOutcome::Added { waypoint } => {
                println!("Click at {:.0}m -> added {:.0}m", x, waypoint.distance)
            }
            ClickOutcome::Removed => println!("Click at {:.0}m -> removed", x),
        }
    }

    match session.find_extrema(41) {
        Ok(n) => println!("Extrema window 41 -> {} points\n", n),
        Err(e) => println!("Extrema rejected: {}\n", e),
    }

    match session.summary() {
        Ok(summary) => {
            println!("{}", summary);
            println!(
                "\nSum of segment grades: {:.1}%",
                summary.total_gradient * 100.0
            );
        }
        Err(e) => println!("No summary: {}", e),
    }
}
