//! # Local Extrema Detection
//!
//! Marks samples that are the highest or lowest point of the window centered
//! on them.
//!
//! ## Algorithm
//! 1. `h = window_size / 2`
//! 2. For every index `i` in `[h, len - h)`, look at elevations `[i - h, i + h]`
//! 3. Emit sample `i` when its elevation equals the window maximum or minimum
//!
//! Equal values are not deduplicated: every sample of a flat top (or of a
//! flat stretch narrower than the window) is emitted on its own. Long flat or
//! noisy stretches therefore produce dense output; larger windows thin it out.
//! Output is in index order, which is also distance order.

use log::{debug, warn};

use crate::error::{ProfileError, Result};
use crate::{ProfileSeries, Sample, Waypoint};

/// Smallest window that has a sample on each side of its center.
pub const MIN_WINDOW_SIZE: usize = 3;

/// Detect local extrema over a sliding window of `window_size` samples.
///
/// Fails with [`ProfileError::InvalidWindow`] when `window_size < 3`. A
/// series with fewer than 3 samples yields no extrema.
///
/// # Example
///
/// ```rust
/// use slope_sense::{ProfileSeries, Waypoint, detect_extrema};
///
/// let series = ProfileSeries::from_columns(
///     &[0.0, 100.0, 200.0, 300.0, 400.0],
///     &[0.0, 10.0, 30.0, 10.0, 0.0],
/// ).unwrap();
///
/// let peaks = detect_extrema(&series, 3).unwrap();
/// assert_eq!(peaks, vec![Waypoint::new(200.0, 30.0)]);
/// ```
pub fn detect_extrema(series: &ProfileSeries, window_size: usize) -> Result<Vec<Waypoint>> {
    let half = half_window(window_size)?;
    let samples = series.samples();
    if samples.len() < MIN_WINDOW_SIZE {
        return Ok(vec![]);
    }

    let extrema: Vec<Waypoint> = centers(samples.len(), half)
        .filter_map(|i| extremum_at(samples, i, half))
        .collect();

    debug!(
        "[SlopeSense] {} extrema with window {} over {} samples",
        extrema.len(),
        window_size,
        samples.len()
    );

    Ok(extrema)
}

/// Same as [`detect_extrema`], scanning windows in parallel.
///
/// Output order is preserved. Worth it for long tracks with large windows.
#[cfg(feature = "parallel")]
pub fn detect_extrema_parallel(
    series: &ProfileSeries,
    window_size: usize,
) -> Result<Vec<Waypoint>> {
    use rayon::prelude::*;

    let half = half_window(window_size)?;
    let samples = series.samples();
    if samples.len() < MIN_WINDOW_SIZE {
        return Ok(vec![]);
    }

    let extrema: Vec<Waypoint> = centers(samples.len(), half)
        .into_par_iter()
        .filter_map(|i| extremum_at(samples, i, half))
        .collect();

    debug!(
        "[SlopeSense] {} extrema (parallel) with window {}",
        extrema.len(),
        window_size
    );

    Ok(extrema)
}

fn half_window(window_size: usize) -> Result<usize> {
    if window_size < MIN_WINDOW_SIZE {
        warn!("[SlopeSense] Rejected extrema window {}", window_size);
        return Err(ProfileError::InvalidWindow(window_size));
    }
    Ok(window_size / 2)
}

/// Window centers that have `half` samples on both sides.
fn centers(len: usize, half: usize) -> std::ops::Range<usize> {
    half..len.saturating_sub(half)
}

fn extremum_at(samples: &[Sample], i: usize, half: usize) -> Option<Waypoint> {
    let window = &samples[i - half..=i + half];
    let (min, max) = window.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), s| (min.min(s.elevation), max.max(s.elevation)),
    );

    let elevation = samples[i].elevation;
    if elevation == max || elevation == min {
        Some(samples[i].into())
    } else {
        None
    }
}
