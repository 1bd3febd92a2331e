//! Capture format types.
//!
//! A capture format pairs a resolution with the fps range a device claims
//! to support at that resolution.

use crate::error::{CameraError, Result};
use std::fmt;

/// Inclusive frames-per-second range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsRange {
    /// Lowest supported frame rate
    pub min: u32,
    /// Highest supported frame rate
    pub max: u32,
}

impl FpsRange {
    /// Minimum valid FPS value
    const MIN_FPS: u32 = 1;
    /// Maximum valid FPS value
    const MAX_FPS: u32 = 240;

    /// Creates a validated fps range
    ///
    /// # Arguments
    /// * `min` - Lowest frame rate (at least 1)
    /// * `max` - Highest frame rate (at most 240, not below `min`)
    ///
    /// # Returns
    /// * `Ok(FpsRange)` - Successfully created range
    /// * `Err(CameraError::Config)` - If the bounds are out of order or out of limits
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min < Self::MIN_FPS {
            return Err(CameraError::Config(format!(
                "Minimum fps must be at least {}, got {}",
                Self::MIN_FPS,
                min
            )));
        }
        if max > Self::MAX_FPS {
            return Err(CameraError::Config(format!(
                "Maximum fps must be at most {}, got {}",
                Self::MAX_FPS,
                max
            )));
        }
        if min > max {
            return Err(CameraError::Config(format!(
                "Minimum fps {} exceeds maximum fps {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Checks whether a frame rate lies inside the range
    pub fn contains(&self, fps: u32) -> bool {
        fps >= self.min && fps <= self.max
    }
}

impl fmt::Display for FpsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} fps", self.min, self.max)
    }
}

/// One supported capture configuration of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureFormat {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Supported frame rates at this resolution
    pub fps: FpsRange,
}

impl CaptureFormat {
    /// Creates a capture format record
    pub fn new(width: u32, height: u32, fps: FpsRange) -> Self {
        Self { width, height, fps }
    }

    /// Returns a string representation of the resolution
    pub fn resolution_string(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl fmt::Display for CaptureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ {}", self.width, self.height, self.fps)
    }
}
