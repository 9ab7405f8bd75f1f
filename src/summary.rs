//! # Segment Summary
//!
//! Splits the profile at the selected waypoints and reports the length and
//! gradient of every piece.
//!
//! ## Algorithm
//! 1. Sort waypoints by distance (stable: equal distances keep their order)
//! 2. Bracket them with the profile start `(0, first elevation)` and end
//!    `(total distance, last elevation)`
//! 3. For each consecutive pair: `length = Δdistance`,
//!    `gradient = Δelevation / length`, or `0.0` for zero-length segments
//!
//! `total_gradient` is the plain sum of the segment gradients, not a
//! distance-weighted average. The overall slope of the track is reported
//! separately as `net_gradient`.

use std::fmt;

use log::{info, warn};

use crate::error::{ProfileError, Result};
use crate::{ProfileSeries, Waypoint};

/// The span between two consecutive boundary points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Segment length in meters. Never negative as long as every waypoint
    /// lies within the profile's distance range.
    pub length: f64,
    /// Elevation change per meter (0.05 = 5% grade)
    pub gradient: f64,
}

impl Segment {
    fn between(start: Waypoint, end: Waypoint) -> Self {
        let length = end.distance - start.distance;
        let gradient = if length > 0.0 {
            (end.elevation - start.elevation) / length
        } else {
            0.0
        };
        Self { length, gradient }
    }
}

/// Result of [`summarize`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// One segment more than there are waypoints, in distance order
    pub segments: Vec<Segment>,
    /// Sum of segment lengths; equals the profile's total distance
    pub total_distance: f64,
    /// Sum of segment gradients (not an average grade)
    pub total_gradient: f64,
    /// (last elevation - first elevation) / total distance
    pub net_gradient: f64,
}

/// Build the segment summary for a set of waypoints.
///
/// Fails with [`ProfileError::EmptySelection`] when `waypoints` is empty.
///
/// Waypoints are expected to come from this series (snapped clicks or
/// extrema), so their distances lie in `[0, total_distance]`. A waypoint
/// outside that range is not rejected; it produces a segment with negative
/// length and zero gradient.
///
/// # Example
///
/// ```rust
/// use slope_sense::{ProfileSeries, Waypoint, summarize};
///
/// let series = ProfileSeries::from_columns(
///     &[0.0, 100.0, 200.0, 300.0, 400.0],
///     &[0.0, 10.0, 30.0, 10.0, 0.0],
/// ).unwrap();
///
/// let summary = summarize(&series, &[Waypoint::new(200.0, 30.0)]).unwrap();
/// assert_eq!(summary.segments.len(), 2);
/// assert_eq!(summary.total_distance, 400.0);
/// ```
pub fn summarize(series: &ProfileSeries, waypoints: &[Waypoint]) -> Result<Summary> {
    if waypoints.is_empty() {
        warn!("[SlopeSense] Summary requested with no waypoints");
        return Err(ProfileError::EmptySelection);
    }

    let mut sorted = waypoints.to_vec();
    sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let first = series.first_sample();
    let last = series.last_sample();
    let start = Waypoint::new(0.0, first.elevation);
    let end = Waypoint::new(series.total_distance(), last.elevation);

    let mut boundaries = Vec::with_capacity(sorted.len() + 2);
    boundaries.push(start);
    boundaries.extend(sorted);
    boundaries.push(end);

    let segments: Vec<Segment> = boundaries
        .windows(2)
        .map(|w| Segment::between(w[0], w[1]))
        .collect();

    let total_distance: f64 = segments.iter().map(|s| s.length).sum();
    let total_gradient: f64 = segments.iter().map(|s| s.gradient).sum();
    let net_gradient = if series.total_distance() > 0.0 {
        (last.elevation - first.elevation) / series.total_distance()
    } else {
        0.0
    };

    info!(
        "[SlopeSense] Summary: {} waypoints -> {} segments over {:.0}m",
        waypoints.len(),
        segments.len(),
        total_distance
    );

    Ok(Summary {
        segments,
        total_distance,
        total_gradient,
        net_gradient,
    })
}

/// Format a gradient as a signed percentage with one decimal, e.g. `+4.5%`.
///
/// Non-negative grades get an explicit `+`; negative zero prints as `+0.0%`.
pub fn format_grade(gradient: f64) -> String {
    let percent = gradient * 100.0;
    if gradient >= 0.0 {
        format!("+{:.1}%", percent.abs())
    } else {
        format!("{:.1}%", percent)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            writeln!(
                f,
                "{}) {:.1} km at {} grade",
                i + 1,
                segment.length / 1000.0,
                format_grade(segment.gradient)
            )?;
        }
        write!(
            f,
            "\nTotal: {:.1} km and {:.1}% grade",
            self.total_distance / 1000.0,
            self.net_gradient * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn hills() -> ProfileSeries {
        ProfileSeries::from_columns(
            &[0.0, 100.0, 200.0, 300.0, 400.0],
            &[0.0, 10.0, 30.0, 10.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_single_peak_summary() {
        let summary = summarize(&hills(), &[Waypoint::new(200.0, 30.0)]).unwrap();

        assert_eq!(summary.segments.len(), 2);
        assert_eq!(summary.segments[0].length, 200.0);
        assert!((summary.segments[0].gradient - 0.15).abs() < EPS);
        assert_eq!(summary.segments[1].length, 200.0);
        assert!((summary.segments[1].gradient + 0.15).abs() < EPS);
        assert!((summary.total_distance - 400.0).abs() < EPS);
        assert!(summary.total_gradient.abs() < EPS);
        assert!(summary.net_gradient.abs() < EPS);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(summarize(&hills(), &[]), Err(ProfileError::EmptySelection));
    }

    #[test]
    fn test_unsorted_input() {
        let waypoints = [Waypoint::new(300.0, 10.0), Waypoint::new(100.0, 10.0)];
        let summary = summarize(&hills(), &waypoints).unwrap();

        let lengths: Vec<f64> = summary.segments.iter().map(|s| s.length).collect();
        assert_eq!(lengths, vec![100.0, 200.0, 100.0]);
        assert!((summary.segments[0].gradient - 0.1).abs() < EPS);
        assert!(summary.segments[1].gradient.abs() < EPS);
        assert!((summary.segments[2].gradient + 0.1).abs() < EPS);
    }

    #[test]
    fn test_total_gradient_is_sum_not_average() {
        let series = ProfileSeries::from_columns(
            &[0.0, 100.0, 1000.0],
            &[0.0, 10.0, 10.0],
        )
        .unwrap();
        let summary = summarize(&series, &[Waypoint::new(100.0, 10.0)]).unwrap();
        // 10% over 100m then flat for 900m
        assert!((summary.total_gradient - 0.1).abs() < EPS);
        assert!((summary.net_gradient - 0.01).abs() < EPS);
    }

    #[test]
    fn test_coincident_waypoints_have_zero_gradient() {
        let waypoints = [Waypoint::new(200.0, 30.0), Waypoint::new(200.0, 30.0)];
        let summary = summarize(&hills(), &waypoints).unwrap();
        assert_eq!(summary.segments.len(), 3);
        assert_eq!(summary.segments[1], Segment { length: 0.0, gradient: 0.0 });
        assert!(summary.segments.iter().all(|s| s.gradient.is_finite()));
    }

    #[test]
    fn test_waypoints_at_boundaries() {
        let waypoints = [Waypoint::new(0.0, 0.0), Waypoint::new(400.0, 0.0)];
        let summary = summarize(&hills(), &waypoints).unwrap();
        assert_eq!(summary.segments[0], Segment { length: 0.0, gradient: 0.0 });
        assert_eq!(summary.segments[2], Segment { length: 0.0, gradient: 0.0 });
        assert_eq!(summary.segments[1].length, 400.0);
    }

    #[test]
    fn test_lengths_sum_to_total_distance() {
        let distances: Vec<f64> = (0..500).map(|i| i as f64 * 13.7).collect();
        let elevations: Vec<f64> = (0..500).map(|i| (i as f64 * 0.1).sin() * 50.0).collect();
        let series = ProfileSeries::from_columns(&distances, &elevations).unwrap();

        let waypoints: Vec<Waypoint> = [431, 7, 250, 99, 498]
            .iter()
            .map(|&i| Waypoint::new(distances[i], elevations[i]))
            .collect();
        let summary = summarize(&series, &waypoints).unwrap();

        let expected = series.total_distance();
        assert!((summary.total_distance - expected).abs() <= expected * EPS);
        assert!(summary.segments.iter().all(|s| s.length >= 0.0));
    }

    #[test]
    fn test_waypoint_past_end_gives_negative_length() {
        let summary = summarize(&hills(), &[Waypoint::new(500.0, 3.0)]).unwrap();
        assert_eq!(summary.segments[0].length, 500.0);
        assert_eq!(summary.segments[1], Segment { length: -100.0, gradient: 0.0 });
        assert!((summary.total_distance - 400.0).abs() < EPS);
    }

    #[test]
    fn test_stable_sort_on_equal_distance() {
        let waypoints = [Waypoint::new(200.0, 20.0), Waypoint::new(200.0, 30.0)];
        let summary = summarize(&hills(), &waypoints).unwrap();
        // start -> (200,20) -> (200,30) -> end
        assert!((summary.segments[0].gradient - 0.1).abs() < EPS);
        assert!((summary.segments[2].gradient + 0.15).abs() < EPS);
    }

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(0.15), "+15.0%");
        assert_eq!(format_grade(0.0), "+0.0%");
        assert_eq!(format_grade(-0.0437), "-4.4%");
        assert_eq!(format_grade(-0.0), "+0.0%");
    }

    #[test]
    fn test_display_report() {
        let summary = summarize(&hills(), &[Waypoint::new(200.0, 30.0)]).unwrap();
        assert_eq!(
            summary.to_string(),
            "1) 0.2 km at +15.0% grade\n2) 0.2 km at -15.0% grade\n\nTotal: 0.4 km and 0.0% grade"
        );
    }
}
