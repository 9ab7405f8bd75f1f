//! Compare sequential and parallel extrema detection on a long noisy track.
//!
//! Run with: cargo run --example parallel_extrema --features parallel

use std::time::Instant;

use slope_sense::{detect_extrema, detect_extrema_parallel, ProfileSeries};

fn main() {
    // 200km at 5m resolution with rolling terrain and sensor noise
    let n = 40_000;
    let distances: Vec<f64> = (0..n).map(|i| i as f64 * 5.0).collect();
    let elevations: Vec<f64> = (0..n)
        .map(|i| {
            let x = i as f64;
            800.0 + 300.0 * (x / 3000.0).sin() + 40.0 * (x / 170.0).cos() + 2.0 * (x * 1.7).sin()
        })
        .collect();

    let series = ProfileSeries::from_columns(&distances, &elevations)
        .expect("synthetic track is valid");

    println!("Extrema detection over {} samples\n", series.len());

    for window in [3, 81, 401, 1001] {
        let start = Instant::now();
        let sequential = detect_extrema(&series, window).expect("valid window");
        let seq_time = start.elapsed();

        let start = Instant::now();
        let parallel = detect_extrema_parallel(&series, window).expect("valid window");
        let par_time = start.elapsed();

        assert_eq!(sequential, parallel);
        println!(
            "window {:>5}: {:>6} points | sequential {:>9.2?} | parallel {:>9.2?}",
            window,
            sequential.len(),
            seq_time,
            par_time
        );
    }
}
