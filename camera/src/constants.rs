//! Shared constants for camera enumeration

/// Reserved device-name prefix marking external UVC cameras.
///
/// Public contract: callers may classify device names by this prefix alone,
/// so it must stay stable across releases.
pub const UVC_NAME_PREFIX: &str = "uvc-camera:";

/// Format synthesis for external devices
pub mod uvc_formats {
    /// Lower fps bound reported for external devices. The UVC backend only
    /// reports resolutions, so the fps range is synthesized.
    pub const SYNTHESIZED_FPS_MIN: u32 = 1;
    /// Upper fps bound reported for external devices.
    pub const SYNTHESIZED_FPS_MAX: u32 = 30;
}

/// Native device probing
pub mod probing {
    use std::time::Duration;

    /// Upper bound for opening a single device during a scan.
    pub const PROBE_TIMEOUT: Duration = Duration::from_millis(100);
    /// Highest /dev/videoN id considered during a scan.
    pub const MAX_SCAN_DEVICE_ID: i32 = 20;
    /// Width reported when a device returns nonsense dimensions.
    pub const FALLBACK_WIDTH: u32 = 640;
    /// Height reported when a device returns nonsense dimensions.
    pub const FALLBACK_HEIGHT: u32 = 480;
    /// Largest believable reported width (8K).
    pub const MAX_REPORTED_WIDTH: u32 = 7680;
    /// Largest believable reported height (8K).
    pub const MAX_REPORTED_HEIGHT: u32 = 4320;
}

/// Capture format ladders for native devices
pub mod resolutions {
    /// Standard resolutions offered for a native device, capped by the
    /// maximum the probe observed.
    pub const STANDARD: [(u32, u32); 5] = [
        (640, 480),
        (1280, 720),
        (1920, 1080),
        (2560, 1440),
        (3840, 2160),
    ];
    /// Lower fps bound for native format records.
    pub const NATIVE_FPS_MIN: u32 = 15;
    /// Upper fps bound for native format records.
    pub const NATIVE_FPS_MAX: u32 = 60;
}
