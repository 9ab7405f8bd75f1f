//! Per-user analysis session.
//!
//! A [`ProfileSession`] bundles the shared, read-only [`ProfileSeries`] with
//! the mutable state one user builds on top of it: the selected waypoints and
//! the hover preview point. It maps the interactions of a profile view
//! (click, hover, find extrema, undo, summary) onto the engine functions.
//!
//! Calls must be serialized by the owner. The FFI layer wraps a session in a
//! mutex; the series itself can be shared across sessions through `Arc`.

use std::sync::Arc;

use log::{debug, info};

use crate::closest::{elevation_at_distance, nearest_distance_monotonic, nearest_index_exact};
use crate::error::Result;
use crate::extrema::detect_extrema;
use crate::summary::{summarize, Summary};
use crate::waypoints::WaypointSet;
use crate::{ProfileConfig, ProfileSeries, Waypoint};

/// What a click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum ClickOutcome {
    /// A new waypoint snapped to the nearest sample was added.
    Added { waypoint: Waypoint },
    /// An existing waypoint within the selection tolerance was removed.
    Removed,
}

#[derive(Debug, Clone)]
pub struct ProfileSession {
    series: Arc<ProfileSeries>,
    waypoints: WaypointSet,
    preview: Option<Waypoint>,
    config: ProfileConfig,
}

impl ProfileSession {
    pub fn new(series: Arc<ProfileSeries>) -> Self {
        Self {
            series,
            waypoints: WaypointSet::new(),
            preview: None,
            config: ProfileConfig::default(),
        }
    }

    /// Fails with [`InvalidProfile`](crate::ProfileError::InvalidProfile) when `config` does not
    /// validate.
    pub fn with_config(series: Arc<ProfileSeries>, config: ProfileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(series)
        })
    }

    /// Handle a click at distance `x`.
    ///
    /// The click is snapped to the nearest sample. If a waypoint lies within
    /// `total_distance / selection_tolerance_divisor` of the snapped point it
    /// is removed, otherwise the snapped point is added. Clears the preview.
    pub fn click(&mut self, x: f64) -> ClickOutcome {
        self.preview = None;

        let idx = nearest_index_exact(&self.series, x);
        let snapped = Waypoint::from(self.series.samples()[idx]);
        let tolerance = self.config.selection_tolerance(self.series.total_distance());

        if self.waypoints.toggle_near(snapped.distance, tolerance) {
            return ClickOutcome::Removed;
        }

        debug!(
            "[SlopeSense] Added waypoint at {:.1}m ({:.1}m)",
            snapped.distance, snapped.elevation
        );
        self.waypoints.add(snapped);
        ClickOutcome::Added { waypoint: snapped }
    }

    /// Track the pointer. `None` means the pointer left the profile.
    ///
    /// Returns whether the preview point changed, so callers redraw only
    /// when needed.
    pub fn hover(&mut self, x: Option<f64>) -> Result<bool> {
        let next = match x {
            Some(x) => {
                let distance = nearest_distance_monotonic(&self.series, x);
                let elevation = elevation_at_distance(&self.series, distance)?;
                Some(Waypoint::new(distance, elevation))
            }
            None => None,
        };

        let changed = next != self.preview;
        self.preview = next;
        Ok(changed)
    }

    /// Detect extrema and add them as one batch. Returns the number of
    /// points added; an empty detection adds nothing.
    pub fn find_extrema(&mut self, window_size: usize) -> Result<usize> {
        let extrema = detect_extrema(&self.series, window_size)?;
        let count = extrema.len();
        if count > 0 {
            info!(
                "[SlopeSense] Added {} extrema (window {})",
                count, window_size
            );
            self.waypoints.add_batch(extrema);
        }
        Ok(count)
    }

    /// [`find_extrema`](Self::find_extrema) with the configured default window.
    pub fn find_extrema_default(&mut self) -> Result<usize> {
        self.find_extrema(self.config.default_window_size as usize)
    }

    /// Remove the most recent selection. Returns false when there was none.
    pub fn undo(&mut self) -> bool {
        self.waypoints.undo_last().is_some()
    }

    pub fn summary(&self) -> Result<Summary> {
        summarize(&self.series, &self.waypoints.flatten())
    }

    /// Selected waypoints, flattened in selection order.
    pub fn waypoints(&self) -> Vec<Waypoint> {
        self.waypoints.flatten()
    }

    pub fn waypoint_set(&self) -> &WaypointSet {
        &self.waypoints
    }

    pub fn preview(&self) -> Option<Waypoint> {
        self.preview
    }

    pub fn series(&self) -> &Arc<ProfileSeries> {
        &self.series
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }
}
