//! Error types for profile analysis.

use thiserror::Error;

/// Errors produced by the profile analysis engine.
///
/// Only `InvalidProfile` ends a session. `InvalidWindow` and `EmptySelection`
/// reject a single user action; `Lookup` means the caller passed a distance it
/// did not get from this profile.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Error))]
#[cfg_attr(feature = "ffi", uniffi(flat_error))]
pub enum ProfileError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    #[error("extrema window must be at least 3 samples, got {0}")]
    InvalidWindow(usize),
    #[error("no waypoints selected")]
    EmptySelection,
    #[error("distance {0} is not a sample distance of this profile")]
    Lookup(f64),
}

impl ProfileError {
    /// Whether the caller can retry the action with a different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidWindow(_) | Self::EmptySelection)
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
