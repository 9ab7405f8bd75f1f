//! # Slope Sense
//!
//! Elevation profile analysis for GPS tracks.
//!
//! This library provides:
//! - A validated distance/elevation series built from a loaded track
//! - Nearest-sample lookup for clicks and hover tracking
//! - Sliding-window local extrema detection
//! - Waypoint selection with toggle and undo
//! - Segmented gradient summaries between waypoints
//!
//! Track parsing, geodesic distance and rendering are left to the caller: the
//! engine works on a plain, non-decreasing distance column paired with
//! elevations.
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel extrema detection with rayon
//! - **`serde`** - Serialize/deserialize the plain data types
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use slope_sense::{ProfileSeries, Waypoint, summarize};
//!
//! let series = ProfileSeries::from_columns(
//!     &[0.0, 100.0, 200.0, 300.0, 400.0],
//!     &[0.0, 10.0, 30.0, 10.0, 0.0],
//! ).unwrap();
//!
//! let summary = summarize(&series, &[Waypoint::new(200.0, 30.0)]).unwrap();
//! assert_eq!(summary.segments.len(), 2);
//! assert!((summary.segments[0].gradient - 0.15).abs() < 1e-12);
//! println!("{}", summary);
//! ```

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

pub mod error;
pub use error::{ProfileError, Result};

pub mod series;
pub use series::ProfileSeries;

pub mod closest;
pub use closest::{elevation_at_distance, nearest_distance_monotonic, nearest_index_exact};

pub mod extrema;
pub use extrema::detect_extrema;
#[cfg(feature = "parallel")]
pub use extrema::detect_extrema_parallel;

pub mod waypoints;
pub use waypoints::{WaypointEntry, WaypointSet};

pub mod summary;
pub use summary::{format_grade, summarize, Segment, Summary};

pub mod session;
pub use session::{ClickOutcome, ProfileSession};

#[cfg(feature = "ffi")]
pub mod ffi;

// ============================================================================
// Core Types
// ============================================================================

/// One sample of the profile: cumulative distance along the track (meters)
/// and the elevation recorded there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub distance: f64,
    pub elevation: f64,
}

impl Sample {
    pub fn new(distance: f64, elevation: f64) -> Self {
        Self { distance, elevation }
    }
}

/// A point of interest on the profile.
///
/// Clicked waypoints are always snapped to an existing sample, extrema
/// waypoints are copied from the sample that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub distance: f64,
    pub elevation: f64,
}

impl Waypoint {
    pub fn new(distance: f64, elevation: f64) -> Self {
        Self { distance, elevation }
    }
}

impl From<Sample> for Waypoint {
    fn from(sample: Sample) -> Self {
        Self::new(sample.distance, sample.elevation)
    }
}

/// Configuration for profile validation and waypoint selection.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileConfig {
    /// Minimum total track distance (meters). Shorter tracks are rejected.
    /// Default: 100.0
    pub min_track_distance: f64,

    /// Clicks within `total_distance / selection_tolerance_divisor` of an
    /// existing waypoint remove it instead of adding a new one.
    /// Default: 300.0
    pub selection_tolerance_divisor: f64,

    /// Extrema window used when the caller has not picked one.
    /// Smaller windows produce more points. Default: 80
    pub default_window_size: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            min_track_distance: 100.0,
            selection_tolerance_divisor: 300.0,
            default_window_size: 80,
        }
    }
}

impl ProfileConfig {
    /// Check that the track minimum and the tolerance divisor are positive
    /// and finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_track_distance.is_finite() && self.min_track_distance > 0.0) {
            return Err(ProfileError::InvalidProfile(format!(
                "min_track_distance must be positive, got {}",
                self.min_track_distance
            )));
        }
        if !(self.selection_tolerance_divisor.is_finite() && self.selection_tolerance_divisor > 0.0) {
            return Err(ProfileError::InvalidProfile(format!(
                "selection_tolerance_divisor must be positive, got {}",
                self.selection_tolerance_divisor
            )));
        }
        Ok(())
    }

    /// Selection radius for a track of the given length.
    pub fn selection_tolerance(&self, total_distance: f64) -> f64 {
        total_distance / self.selection_tolerance_divisor
    }
}
