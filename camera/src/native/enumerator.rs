//! Built-in camera enumerator.
//!
//! Answers device queries for cameras wired into the machine, backed by
//! the scanner in [`super::detection`]. Names returned here never carry
//! the external-device prefix, so the unified enumerator routes them back
//! without ambiguity.

use super::detection::{DeviceScanner, NativeDevice};
use crate::capturer::{NativeCapturer, VideoCapturer};
use crate::config::EnumeratorConfig;
use crate::constants::resolutions;
use crate::error::{CameraError, Result};
use crate::events::CameraEventsHandler;
use crate::format::{CaptureFormat, FpsRange};
use crate::traits::CameraEnumerator;
use logging::Logger;
use opencv::prelude::*;
use opencv::videoio::{CAP_ANY, VideoCapture};

/// Enumerator for built-in cameras
pub struct NativeCameraEnumerator {
    /// Snapshot from the most recent scan
    devices: Vec<NativeDevice>,
    config: EnumeratorConfig,
    logger: Logger,
}

impl NativeCameraEnumerator {
    /// Creates an enumerator that has not scanned yet
    pub fn new(config: EnumeratorConfig, logger: Logger) -> Self {
        Self {
            devices: Vec::new(),
            config,
            logger: logger.for_component("Native"),
        }
    }

    /// Fps range attached to built-in capture formats
    fn native_fps() -> FpsRange {
        FpsRange {
            min: resolutions::NATIVE_FPS_MIN,
            max: resolutions::NATIVE_FPS_MAX,
        }
    }

    /// Standard resolutions capped by the probed maximum
    ///
    /// Falls back to the probed maximum itself when the device is smaller
    /// than every standard entry, so no device ends up formatless.
    fn format_ladder(max_width: u32, max_height: u32) -> Vec<CaptureFormat> {
        let fps = Self::native_fps();
        let mut formats: Vec<CaptureFormat> = resolutions::STANDARD
            .iter()
            .filter(|(width, height)| *width <= max_width && *height <= max_height)
            .map(|(width, height)| CaptureFormat::new(*width, *height, fps))
            .collect();

        if formats.is_empty() {
            formats.push(CaptureFormat::new(max_width, max_height, fps));
        }

        formats
    }

    /// Looks a device up in the current snapshot, rescanning when the name
    /// is unknown so queries also work before the first enumeration
    fn find_device(&self, device_name: &str) -> Result<NativeDevice> {
        if let Some(device) = self.devices.iter().find(|d| d.name == device_name) {
            return Ok(device.clone());
        }

        let scanned = DeviceScanner::scan(&self.config, &self.logger)?;
        scanned
            .into_iter()
            .find(|device| device.name == device_name)
            .ok_or_else(|| {
                CameraError::Camera(format!("Unknown camera device: {}", device_name))
            })
    }

    /// Verifies the device still opens before a capturer is handed out;
    /// a snapshot entry may be unplugged or busy by now
    fn confirm_openable(&self, device: &NativeDevice) -> Result<()> {
        let mut capture = VideoCapture::new(device.device_id, CAP_ANY)?;
        let opened = capture.is_opened()?;
        let _ = capture.release();

        if opened {
            Ok(())
        } else {
            Err(CameraError::Camera(format!(
                "Device {} ({}) exists but could not be opened",
                device.device_id, device.name
            )))
        }
    }

    fn name_suggests_back(device_name: &str) -> bool {
        let lowered = device_name.to_lowercase();
        lowered.contains("back") || lowered.contains("rear")
    }
}

impl CameraEnumerator for NativeCameraEnumerator {
    fn device_names(&mut self) -> Result<Vec<String>> {
        self.devices = DeviceScanner::scan(&self.config, &self.logger)?;
        Ok(self.devices.iter().map(|device| device.name.clone()).collect())
    }

    /// V4L2 exposes no lens-facing attribute, so facing is inferred from
    /// the card name and defaults to front
    fn is_front_facing(&self, device_name: &str) -> bool {
        !Self::name_suggests_back(device_name)
    }

    fn is_back_facing(&self, device_name: &str) -> bool {
        Self::name_suggests_back(device_name)
    }

    fn supported_formats(&self, device_name: &str) -> Result<Vec<CaptureFormat>> {
        let device = self.find_device(device_name)?;
        Ok(Self::format_ladder(device.max_width, device.max_height))
    }

    fn create_capturer(
        &self,
        device_name: &str,
        events: Box<dyn CameraEventsHandler>,
    ) -> Result<Box<dyn VideoCapturer>> {
        let device = self.find_device(device_name)?;
        self.confirm_openable(&device)?;

        self.logger.info(&format!(
            "Creating capturer for {} (device id {})",
            device.name, device.device_id
        ));
        Ok(Box::new(NativeCapturer::new(
            device.name,
            device.device_id,
            events,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;
    use tempfile::tempdir;

    fn create_test_logger() -> Logger {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_native.log");
        Logger::new(log_path, LogLevel::Debug).unwrap()
    }

    #[test]
    fn test_format_ladder_caps_at_probed_maximum() {
        let formats = NativeCameraEnumerator::format_ladder(1920, 1080);

        assert_eq!(formats.len(), 3);
        assert_eq!(formats[0].resolution_string(), "640x480");
        assert_eq!(formats[1].resolution_string(), "1280x720");
        assert_eq!(formats[2].resolution_string(), "1920x1080");
    }

    #[test]
    fn test_format_ladder_keeps_tiny_devices_usable() {
        let formats = NativeCameraEnumerator::format_ladder(320, 240);

        assert_eq!(formats.len(), 1);
        assert_eq!(formats[0].width, 320);
        assert_eq!(formats[0].height, 240);
    }

    #[test]
    fn test_format_ladder_fps_range() {
        let formats = NativeCameraEnumerator::format_ladder(1280, 720);

        assert!(!formats.is_empty());
        for format in formats {
            assert_eq!(format.fps.min, resolutions::NATIVE_FPS_MIN);
            assert_eq!(format.fps.max, resolutions::NATIVE_FPS_MAX);
        }
    }

    #[test]
    fn test_facing_heuristic() {
        let enumerator =
            NativeCameraEnumerator::new(EnumeratorConfig::default(), create_test_logger());

        assert!(enumerator.is_front_facing("Integrated Camera"));
        assert!(!enumerator.is_back_facing("Integrated Camera"));

        assert!(enumerator.is_back_facing("USB Rear Camera"));
        assert!(!enumerator.is_front_facing("USB Rear Camera"));

        assert!(enumerator.is_back_facing("back camera"));
    }

    #[test]
    fn test_unknown_device_queries_fail() {
        let enumerator =
            NativeCameraEnumerator::new(EnumeratorConfig::default(), create_test_logger());

        assert!(enumerator
            .supported_formats("No Such Camera zz9")
            .is_err());
        assert!(enumerator
            .create_capturer(
                "No Such Camera zz9",
                Box::new(crate::events::NoopEventsHandler)
            )
            .is_err());
    }

    #[test]
    fn test_device_names_scans_without_error() {
        let mut enumerator =
            NativeCameraEnumerator::new(EnumeratorConfig::default(), create_test_logger());
        // Hardware-dependent result, but the scan itself must not fail
        assert!(enumerator.device_names().is_ok());
    }
}
