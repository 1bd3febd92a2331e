//! Enumerator configuration types.
//!
//! Provides tunable settings for device enumeration: the synthesized fps
//! range for external devices and native probing bounds.

use crate::constants::{probing, uvc_formats};
use crate::error::{CameraError, Result};
use crate::format::FpsRange;
use std::time::Duration;

/// Device enumeration configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EnumeratorConfig {
    /// Fps range attached to every synthesized external-device format.
    /// The UVC backend reports resolutions only, so these bounds are a
    /// documented approximation rather than a discovered capability.
    pub uvc_fps: FpsRange,
    /// Time allowed for opening one native device during a scan
    pub probe_timeout: Duration,
    /// Highest /dev/videoN id considered during a native scan
    pub max_scan_device_id: i32,
}

impl EnumeratorConfig {
    /// Minimum valid probe timeout
    const MIN_PROBE_TIMEOUT: Duration = Duration::from_millis(10);
    /// Maximum valid probe timeout
    const MAX_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
    /// Minimum valid scan bound
    const MIN_SCAN_DEVICE_ID: i32 = 2;
    /// Maximum valid scan bound
    const MAX_SCAN_DEVICE_ID: i32 = 64;

    /// Creates a configuration with a custom external-device fps range
    ///
    /// # Arguments
    /// * `uvc_fps` - Range reported for synthesized external formats
    pub fn new(uvc_fps: FpsRange) -> Self {
        Self {
            uvc_fps,
            ..Self::default()
        }
    }

    /// Sets the native probe timeout with validation
    ///
    /// # Returns
    /// * `Ok(EnumeratorConfig)` - Successfully set timeout
    /// * `Err(CameraError::Config)` - If the timeout is outside 10ms-5s
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Result<Self> {
        if !(Self::MIN_PROBE_TIMEOUT..=Self::MAX_PROBE_TIMEOUT).contains(&timeout) {
            return Err(CameraError::Config(format!(
                "Probe timeout must be between {:?} and {:?}, got {:?}",
                Self::MIN_PROBE_TIMEOUT,
                Self::MAX_PROBE_TIMEOUT,
                timeout
            )));
        }
        self.probe_timeout = timeout;
        Ok(self)
    }

    /// Sets the native scan bound with validation
    ///
    /// # Returns
    /// * `Ok(EnumeratorConfig)` - Successfully set bound
    /// * `Err(CameraError::Config)` - If the bound is outside 2-64
    pub fn with_scan_limit(mut self, max_scan_device_id: i32) -> Result<Self> {
        if !(Self::MIN_SCAN_DEVICE_ID..=Self::MAX_SCAN_DEVICE_ID).contains(&max_scan_device_id) {
            return Err(CameraError::Config(format!(
                "Scan limit must be between {} and {}, got {}",
                Self::MIN_SCAN_DEVICE_ID,
                Self::MAX_SCAN_DEVICE_ID,
                max_scan_device_id
            )));
        }
        self.max_scan_device_id = max_scan_device_id;
        Ok(self)
    }
}

/// Default configuration (fps 1-30 for external devices, 100ms probes)
impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            uvc_fps: FpsRange {
                min: uvc_formats::SYNTHESIZED_FPS_MIN,
                max: uvc_formats::SYNTHESIZED_FPS_MAX,
            },
            probe_timeout: probing::PROBE_TIMEOUT,
            max_scan_device_id: probing::MAX_SCAN_DEVICE_ID,
        }
    }
}
