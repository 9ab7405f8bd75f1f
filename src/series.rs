//! Immutable distance/elevation series.

use log::info;

use crate::error::{ProfileError, Result};
use crate::{ProfileConfig, Sample};

/// The ordered samples of one track.
///
/// Invariants, checked once at construction:
/// - at least 2 samples, all values finite
/// - the first distance is 0 and distances never decrease
/// - the total distance reaches `ProfileConfig::min_track_distance`
///
/// Repeated distances (zero-length steps) are allowed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProfileSeries {
    samples: Vec<Sample>,
}

impl ProfileSeries {
    /// Build a series using the default configuration.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        Self::with_config(samples, &ProfileConfig::default())
    }

    /// Build a series from separate distance and elevation columns.
    pub fn from_columns(distances: &[f64], elevations: &[f64]) -> Result<Self> {
        Self::from_columns_with_config(distances, elevations, &ProfileConfig::default())
    }

    pub fn from_columns_with_config(
        distances: &[f64],
        elevations: &[f64],
        config: &ProfileConfig,
    ) -> Result<Self> {
        if distances.len() != elevations.len() {
            return Err(ProfileError::InvalidProfile(format!(
                "{} distances but {} elevations",
                distances.len(),
                elevations.len()
            )));
        }
        let samples = distances
            .iter()
            .zip(elevations)
            .map(|(&d, &e)| Sample::new(d, e))
            .collect();
        Self::with_config(samples, config)
    }

    /// Build a series, validating it against `config`.
    pub fn with_config(samples: Vec<Sample>, config: &ProfileConfig) -> Result<Self> {
        config.validate()?;

        if samples.len() < 2 {
            return Err(ProfileError::InvalidProfile(format!(
                "need at least 2 samples, got {}",
                samples.len()
            )));
        }

        if let Some(i) = samples
            .iter()
            .position(|s| !s.distance.is_finite() || !s.elevation.is_finite())
        {
            return Err(ProfileError::InvalidProfile(format!(
                "sample {} is not finite",
                i
            )));
        }

        if samples[0].distance != 0.0 {
            return Err(ProfileError::InvalidProfile(format!(
                "first distance must be 0, got {}",
                samples[0].distance
            )));
        }

        if let Some(i) = samples
            .windows(2)
            .position(|w| w[1].distance < w[0].distance)
        {
            return Err(ProfileError::InvalidProfile(format!(
                "distance decreases at sample {}",
                i + 1
            )));
        }

        let total = samples[samples.len() - 1].distance;
        if total < config.min_track_distance {
            return Err(ProfileError::InvalidProfile(format!(
                "track is {:.1}m long, minimum is {:.0}m",
                total, config.min_track_distance
            )));
        }

        info!(
            "[SlopeSense] Loaded profile: {} samples, {:.0}m",
            samples.len(),
            total
        );

        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: construction rejects empty series.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at index `i`, or `None` past the end.
    pub fn at(&self, i: usize) -> Option<Sample> {
        self.samples.get(i).copied()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Distance of the last sample.
    pub fn total_distance(&self) -> f64 {
        self.last_sample().distance
    }

    pub fn first_sample(&self) -> Sample {
        self.samples[0]
    }

    pub fn last_sample(&self) -> Sample {
        self.samples[self.samples.len() - 1]
    }

    pub fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.distance)
    }

    pub fn elevations(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.elevation)
    }
}
