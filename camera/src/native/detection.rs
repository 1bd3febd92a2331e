//! Built-in camera discovery and probing.
//!
//! Scans the platform video device namespace, opens each candidate briefly
//! and records the name and maximum resolution of every usable device.

use crate::config::EnumeratorConfig;
use crate::constants::probing;
use crate::error::Result;
use logging::Logger;
use opencv::prelude::*;
use opencv::videoio::{CAP_ANY, VideoCapture};
use std::time::Instant;

/// One probed built-in camera
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeDevice {
    /// OpenCV device index
    pub device_id: i32,
    /// Human-readable device name, unique within one scan
    pub name: String,
    /// Largest frame width the device reported
    pub max_width: u32,
    /// Largest frame height the device reported
    pub max_height: u32,
}

/// Built-in camera scanner
pub struct DeviceScanner;

impl DeviceScanner {
    /// Scans the system for usable built-in cameras
    ///
    /// On Linux the candidate set comes from /dev/video* nodes; elsewhere a
    /// range of common device indices is tried. Each candidate is opened
    /// briefly and dropped again, and unresponsive devices are skipped.
    ///
    /// # Arguments
    /// * `config` - Probe timeout and scan bounds
    /// * `logger` - Logger for scan progress
    ///
    /// # Returns
    /// * `Ok(Vec<NativeDevice>)` - All usable devices, in device id order
    /// * `Err` - If the device namespace itself cannot be read
    pub fn scan(config: &EnumeratorConfig, logger: &Logger) -> Result<Vec<NativeDevice>> {
        let candidate_ids = Self::candidate_device_ids(config)?;
        logger.debug(&format!(
            "Probing {} candidate video device(s)",
            candidate_ids.len()
        ));

        let mut devices: Vec<NativeDevice> = Vec::new();

        for device_id in candidate_ids {
            let Some(mut device) = Self::probe_device(device_id, config, logger) else {
                logger.debug(&format!("Device {} is not usable", device_id));
                continue;
            };
            device.name = Self::unique_name(device.name, device_id, &devices);
            logger.info(&format!(
                "Device {}: {} - max {}x{}",
                device_id, device.name, device.max_width, device.max_height
            ));
            devices.push(device);
        }

        if devices.is_empty() {
            logger.warn("No built-in cameras found");
        }

        Ok(devices)
    }

    /// Probes a single device, returning None when it is absent or unusable
    fn probe_device(
        device_id: i32,
        config: &EnumeratorConfig,
        logger: &Logger,
    ) -> Option<NativeDevice> {
        let start = Instant::now();

        Self::device_node_present(device_id)?;
        let mut capture = Self::open_within_timeout(device_id, start, config)?;
        let (max_width, max_height) = Self::probed_resolution(&capture, device_id, logger);
        let name = Self::card_name(device_id);
        let _ = capture.release();

        Some(NativeDevice {
            device_id,
            name,
            max_width,
            max_height,
        })
    }

    /// Cheap existence check before paying the OpenCV open cost
    #[cfg(target_os = "linux")]
    fn device_node_present(device_id: i32) -> Option<()> {
        use std::path::Path;
        Path::new(&format!("/dev/video{}", device_id))
            .exists()
            .then_some(())
    }

    #[cfg(not(target_os = "linux"))]
    fn device_node_present(_device_id: i32) -> Option<()> {
        Some(())
    }

    /// Opens a capture device, giving up when the open stalls past the
    /// configured probe timeout
    fn open_within_timeout(
        device_id: i32,
        start: Instant,
        config: &EnumeratorConfig,
    ) -> Option<VideoCapture> {
        let mut capture = VideoCapture::new(device_id, CAP_ANY).ok()?;

        if start.elapsed() > config.probe_timeout || !capture.is_opened().unwrap_or(false) {
            let _ = capture.release();
            return None;
        }

        Some(capture)
    }

    /// Reads the maximum resolution, replacing implausible values
    fn probed_resolution(capture: &VideoCapture, device_id: i32, logger: &Logger) -> (u32, u32) {
        let width = capture
            .get(opencv::videoio::CAP_PROP_FRAME_WIDTH)
            .unwrap_or(0.0) as u32;
        let height = capture
            .get(opencv::videoio::CAP_PROP_FRAME_HEIGHT)
            .unwrap_or(0.0) as u32;

        Self::validate_resolution(width, height, device_id, logger)
    }

    /// Keeps reported resolutions within a sane envelope; broken drivers
    /// report zero or garbage dimensions
    fn validate_resolution(width: u32, height: u32, device_id: i32, logger: &Logger) -> (u32, u32) {
        if width > 0
            && height > 0
            && width <= probing::MAX_REPORTED_WIDTH
            && height <= probing::MAX_REPORTED_HEIGHT
        {
            (width, height)
        } else {
            logger.debug(&format!(
                "Device {} reported invalid resolution {}x{}, using {}x{}",
                device_id, width, height, probing::FALLBACK_WIDTH, probing::FALLBACK_HEIGHT
            ));
            (probing::FALLBACK_WIDTH, probing::FALLBACK_HEIGHT)
        }
    }

    /// Candidate device ids to probe, cheapest source first
    ///
    /// V4L2 gives each camera an even capture node (video0, video2) and an
    /// odd metadata node (video1, video3); only even ids are real capture
    /// devices, so odd ids are skipped outright.
    #[cfg(target_os = "linux")]
    fn candidate_device_ids(config: &EnumeratorConfig) -> Result<Vec<i32>> {
        use std::fs;

        let mut device_ids = Vec::with_capacity(4);

        for entry in fs::read_dir("/dev")?.flatten() {
            if let Some(name) = entry.file_name().to_str()
                && let Some(id_str) = name.strip_prefix("video")
                && let Ok(id) = id_str.parse::<i32>()
                && id % 2 == 0
                && id < config.max_scan_device_id
            {
                device_ids.push(id);
            }
        }

        device_ids.sort_unstable();

        // Device 0 is worth one probe even when /dev lists no video nodes
        if device_ids.is_empty() {
            device_ids.push(0);
        }

        Ok(device_ids)
    }

    /// Candidate device ids on platforms without a device namespace to list
    #[cfg(not(target_os = "linux"))]
    fn candidate_device_ids(config: &EnumeratorConfig) -> Result<Vec<i32>> {
        Ok((0..config.max_scan_device_id.min(4)).collect())
    }

    /// Readable device name, falling back to a generated one
    fn card_name(device_id: i32) -> String {
        #[cfg(target_os = "linux")]
        {
            if let Ok(name) = Self::sysfs_card_name(device_id)
                && !name.is_empty()
            {
                return name;
            }
        }

        format!("Camera {}", device_id)
    }

    /// Reads the driver-reported card name from sysfs
    #[cfg(target_os = "linux")]
    fn sysfs_card_name(device_id: i32) -> std::io::Result<String> {
        use std::fs;
        let path = format!("/sys/class/video4linux/video{}/name", device_id);
        let name = fs::read_to_string(path)?;
        Ok(name.trim().to_string())
    }

    /// Disambiguates repeated card names within one scan
    ///
    /// Two cameras of the same model report identical card names, and the
    /// enumerator keys every later lookup on the name alone.
    fn unique_name(name: String, device_id: i32, seen: &[NativeDevice]) -> String {
        if seen.iter().any(|device| device.name == name) {
            format!("{} (video{})", name, device_id)
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;
    use tempfile::tempdir;

    fn create_test_logger() -> Logger {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_detection.log");
        Logger::new(log_path, LogLevel::Debug).unwrap()
    }

    #[test]
    fn test_candidate_ids_sorted_and_bounded() {
        let config = EnumeratorConfig::default();
        let ids = DeviceScanner::candidate_device_ids(&config).unwrap();

        assert!(!ids.is_empty());
        assert!(ids.iter().all(|&id| id >= 0 && id < config.max_scan_device_id));
        for i in 1..ids.len() {
            assert!(ids[i] >= ids[i - 1]);
        }
    }

    #[test]
    fn test_candidate_ids_stay_under_scan_limit() {
        let config = EnumeratorConfig::default().with_scan_limit(2).unwrap();
        let ids = DeviceScanner::candidate_device_ids(&config).unwrap();

        assert!(ids.iter().all(|&id| id < 2));
    }

    #[test]
    fn test_unique_name_keeps_first_occurrence() {
        let name = DeviceScanner::unique_name("HD Webcam".to_string(), 0, &[]);
        assert_eq!(name, "HD Webcam");
    }

    #[test]
    fn test_unique_name_tags_duplicates_with_node() {
        let seen = vec![NativeDevice {
            device_id: 0,
            name: "HD Webcam".to_string(),
            max_width: 1280,
            max_height: 720,
        }];

        let name = DeviceScanner::unique_name("HD Webcam".to_string(), 2, &seen);
        assert_eq!(name, "HD Webcam (video2)");
    }

    #[test]
    fn test_validate_resolution_keeps_plausible_values() {
        let logger = create_test_logger();
        assert_eq!(
            DeviceScanner::validate_resolution(1920, 1080, 0, &logger),
            (1920, 1080)
        );
    }

    #[test]
    fn test_validate_resolution_replaces_garbage() {
        let logger = create_test_logger();
        let fallback = (probing::FALLBACK_WIDTH, probing::FALLBACK_HEIGHT);

        assert_eq!(DeviceScanner::validate_resolution(0, 1080, 0, &logger), fallback);
        assert_eq!(
            DeviceScanner::validate_resolution(1920, 0, 0, &logger),
            fallback
        );
        assert_eq!(
            DeviceScanner::validate_resolution(100_000, 100, 0, &logger),
            fallback
        );
    }

    #[test]
    fn test_scan_does_not_panic() {
        let logger = create_test_logger();
        let result = DeviceScanner::scan(&EnumeratorConfig::default(), &logger);
        // May or may not find hardware, but the scan itself must succeed
        assert!(result.is_ok());
    }
}
