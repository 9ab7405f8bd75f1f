//! FFI bindings for mobile platforms (iOS/Android).
//!
//! Exposes a [`ProfileHandle`] object: one analysis session behind a mutex,
//! so a UI thread and a worker thread can both drive it. The series is
//! immutable and shared by reference count.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;

use crate::error::ProfileError;
use crate::session::{ClickOutcome, ProfileSession};
use crate::summary::Summary;
use crate::{ProfileConfig, ProfileSeries, Waypoint};

/// Initialize logging for Android
#[cfg(target_os = "android")]
fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("SlopeSenseRust"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    // No-op on non-Android platforms
}

#[derive(uniffi::Object)]
pub struct ProfileHandle {
    session: Mutex<ProfileSession>,
}

impl ProfileHandle {
    fn lock(&self) -> MutexGuard<'_, ProfileSession> {
        // Recover from a poisoned lock
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl ProfileHandle {
    /// Create a session from the track loader's distance and elevation columns.
    #[uniffi::constructor]
    pub fn new(distances: Vec<f64>, elevations: Vec<f64>) -> Result<Arc<Self>, ProfileError> {
        Self::with_config(distances, elevations, ProfileConfig::default())
    }

    #[uniffi::constructor]
    pub fn with_config(
        distances: Vec<f64>,
        elevations: Vec<f64>,
        config: ProfileConfig,
    ) -> Result<Arc<Self>, ProfileError> {
        init_logging();
        info!(
            "[SlopeSenseRust] Creating profile handle with {} samples",
            distances.len()
        );

        let series = ProfileSeries::from_columns_with_config(&distances, &elevations, &config)?;
        let session = ProfileSession::with_config(Arc::new(series), config)?;
        Ok(Arc::new(Self {
            session: Mutex::new(session),
        }))
    }

    pub fn click(&self, x: f64) -> ClickOutcome {
        self.lock().click(x)
    }

    /// Returns whether the preview point changed.
    pub fn hover(&self, x: Option<f64>) -> Result<bool, ProfileError> {
        self.lock().hover(x)
    }

    pub fn preview(&self) -> Option<Waypoint> {
        self.lock().preview()
    }

    /// Returns the number of waypoints added.
    pub fn find_extrema(&self, window_size: u32) -> Result<u32, ProfileError> {
        let added = self.lock().find_extrema(window_size as usize)?;
        Ok(added as u32)
    }

    pub fn undo(&self) -> bool {
        self.lock().undo()
    }

    pub fn waypoints(&self) -> Vec<Waypoint> {
        self.lock().waypoints()
    }

    pub fn summary(&self) -> Result<Summary, ProfileError> {
        self.lock().summary()
    }

    /// Human-readable summary report.
    pub fn summary_text(&self) -> Result<String, ProfileError> {
        Ok(self.lock().summary()?.to_string())
    }

    pub fn total_distance(&self) -> f64 {
        self.lock().series().total_distance()
    }
}

/// Default configuration, for platforms that build a config field by field.
#[uniffi::export]
pub fn default_profile_config() -> ProfileConfig {
    ProfileConfig::default()
}
