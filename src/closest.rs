//! # Closest Point Lookup
//!
//! Maps an arbitrary x-coordinate (a distance, typically from a click or a
//! pointer position) onto the samples of a [`ProfileSeries`].
//!
//! | Function | Use |
//! |----------|-----|
//! | [`nearest_index_exact`] | Snapping a click to a concrete sample |
//! | [`nearest_distance_monotonic`] | Cheap hover tracking |
//! | [`elevation_at_distance`] | Elevation for a distance returned above |
//!
//! The two nearest functions can disagree. The monotonic variant walks
//! forward from the first sample and stops at the first step that does not
//! get closer, so it settles on a repeated distance or on a local minimum of
//! `|distance - x|`. Queries that need the true nearest sample must use
//! [`nearest_index_exact`].

use log::debug;

use crate::error::{ProfileError, Result};
use crate::ProfileSeries;

/// Index of the sample whose distance is closest to `x`.
///
/// Ties (including runs of repeated distances) resolve to the smallest index.
/// Distances are sorted, so this is a binary search rather than a full scan.
///
/// # Example
///
/// ```rust
/// use slope_sense::{ProfileSeries, nearest_index_exact};
///
/// let series = ProfileSeries::from_columns(
///     &[0.0, 100.0, 200.0],
///     &[5.0, 6.0, 7.0],
/// ).unwrap();
///
/// assert_eq!(nearest_index_exact(&series, 140.0), 1);
/// assert_eq!(nearest_index_exact(&series, 150.0), 1); // tie -> lower index
/// assert_eq!(nearest_index_exact(&series, 999.0), 2);
/// ```
pub fn nearest_index_exact(series: &ProfileSeries, x: f64) -> usize {
    let samples = series.samples();
    // First sample at or beyond x. It is also the first of its run of
    // repeated distances, since everything before it is < x.
    let right = samples.partition_point(|s| s.distance < x);

    if right == 0 {
        return 0;
    }
    if right == samples.len() {
        return first_index_of(series, samples[right - 1].distance);
    }

    let left = first_index_of(series, samples[right - 1].distance);
    let left_gap = x - samples[left].distance;
    let right_gap = samples[right].distance - x;

    if left_gap <= right_gap {
        left
    } else {
        right
    }
}

/// Distance of the first local minimum of `|distance - x|` scanning forward
/// from the first sample.
///
/// This is an approximation kept for hover tracking: it stops at the first
/// step that does not strictly improve, so it never advances past a repeated
/// distance and returns the first sample's distance when `x` lies at or
/// before the start.
pub fn nearest_distance_monotonic(series: &ProfileSeries, x: f64) -> f64 {
    let mut distances = series.distances();
    // Series always holds at least 2 samples
    let mut closest = distances.next().unwrap_or(0.0);
    let mut min_gap = (closest - x).abs();

    for distance in distances {
        let gap = (distance - x).abs();
        if gap < min_gap {
            min_gap = gap;
            closest = distance;
        } else {
            break;
        }
    }

    closest
}

/// Elevation of the first sample whose distance equals `distance` exactly.
///
/// Only meant for distances previously returned by this module; anything
/// else is a caller bug and yields [`ProfileError::Lookup`].
pub fn elevation_at_distance(series: &ProfileSeries, distance: f64) -> Result<f64> {
    let samples = series.samples();
    let idx = samples.partition_point(|s| s.distance < distance);

    match samples.get(idx) {
        Some(s) if s.distance == distance => Ok(s.elevation),
        _ => {
            debug!("[SlopeSense] No sample at distance {}", distance);
            Err(ProfileError::Lookup(distance))
        }
    }
}

fn first_index_of(series: &ProfileSeries, distance: f64) -> usize {
    series.samples().partition_point(|s| s.distance < distance)
}
