//! Viewport configuration.
//!
//! `CropConfig` is the immutable geometry policy handed to the gesture
//! controller: the viewport aspect ratio and the number of simultaneous
//! touch points the controller tracks. Validation happens here, at the
//! configuration boundary; the controller itself never sees an invalid
//! value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Touch points tracked by default, matching the usual two-finger pinch.
pub const DEFAULT_MAX_TOUCH_POINTS: usize = 2;

/// Error types for configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The aspect ratio is negative or not finite. Zero is accepted as
    /// the "match the source image" sentinel.
    #[error("aspect ratio must be positive or 0 for source-derived, got {0}")]
    InvalidAspectRatio(f32),

    /// The touch point limit must allow at least one contact.
    #[error("touch point limit must be at least 1")]
    ZeroTouchLimit,
}

/// Viewport geometry policy: aspect ratio and touch point limit.
///
/// An `aspect_ratio` of 0.0 means "derive from the source image"; it is
/// resolved by the session when an image is present, never stored as the
/// controller's effective ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropConfig {
    aspect_ratio: f32,
    max_touch_points: usize,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 0.0,
            max_touch_points: DEFAULT_MAX_TOUCH_POINTS,
        }
    }
}

impl CropConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAspectRatio` for a negative or
    /// non-finite ratio, `ConfigError::ZeroTouchLimit` for a zero touch
    /// point limit.
    pub fn new(aspect_ratio: f32, max_touch_points: usize) -> Result<Self, ConfigError> {
        validate_ratio(aspect_ratio)?;
        if max_touch_points == 0 {
            return Err(ConfigError::ZeroTouchLimit);
        }
        Ok(Self {
            aspect_ratio,
            max_touch_points,
        })
    }

    /// The configured aspect ratio; 0.0 means "match the source image".
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Maximum simultaneous touch points the controller tracks.
    pub fn max_touch_points(&self) -> usize {
        self.max_touch_points
    }

    /// Replace the aspect ratio wholesale.
    ///
    /// Callers are expected to reset the controller afterwards; the
    /// config itself has no downstream side effects.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAspectRatio` for a negative or
    /// non-finite ratio.
    pub fn set_aspect_ratio(&mut self, ratio: f32) -> Result<(), ConfigError> {
        validate_ratio(ratio)?;
        self.aspect_ratio = ratio;
        Ok(())
    }
}

fn validate_ratio(ratio: f32) -> Result<(), ConfigError> {
    if ratio.is_finite() && ratio >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidAspectRatio(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CropConfig::default();
        assert_eq!(config.aspect_ratio(), 0.0);
        assert_eq!(config.max_touch_points(), DEFAULT_MAX_TOUCH_POINTS);
    }

    #[test]
    fn test_new_accepts_sentinel_zero() {
        let config = CropConfig::new(0.0, 2).unwrap();
        assert_eq!(config.aspect_ratio(), 0.0);
    }

    #[test]
    fn test_new_accepts_positive_ratio() {
        let config = CropConfig::new(1.5, 4).unwrap();
        assert_eq!(config.aspect_ratio(), 1.5);
        assert_eq!(config.max_touch_points(), 4);
    }

    #[test]
    fn test_new_rejects_negative_ratio() {
        assert!(matches!(
            CropConfig::new(-1.0, 2),
            Err(ConfigError::InvalidAspectRatio(_))
        ));
    }

    #[test]
    fn test_new_rejects_non_finite_ratio() {
        assert!(CropConfig::new(f32::NAN, 2).is_err());
        assert!(CropConfig::new(f32::INFINITY, 2).is_err());
    }

    #[test]
    fn test_new_rejects_zero_touch_limit() {
        assert!(matches!(
            CropConfig::new(1.0, 0),
            Err(ConfigError::ZeroTouchLimit)
        ));
    }

    #[test]
    fn test_set_aspect_ratio() {
        let mut config = CropConfig::default();
        config.set_aspect_ratio(2.0).unwrap();
        assert_eq!(config.aspect_ratio(), 2.0);

        assert!(config.set_aspect_ratio(-0.5).is_err());
        // Rejected values leave the previous ratio in place
        assert_eq!(config.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidAspectRatio(-1.0);
        assert_eq!(
            err.to_string(),
            "aspect ratio must be positive or 0 for source-derived, got -1"
        );
    }
}
