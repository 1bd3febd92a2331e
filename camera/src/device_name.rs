//! Device-name scheme separating native cameras from external UVC cameras.
//!
//! Callers only ever see opaque name strings. Internally every name is
//! parsed exactly once into a [`CameraIdentity`] and all dispatch happens
//! on the variant, never on repeated prefix tests.

use crate::constants::UVC_NAME_PREFIX;

/// Returns true when a device name denotes an external UVC camera.
///
/// Classification is by the reserved prefix alone; no backend is consulted.
/// Exposed so callers that only handle name strings (e.g. a bridging layer)
/// can classify devices the same way the enumerator does.
///
/// The prefix is reserved: a native backend must not emit names starting
/// with it, and any name that does is routed to the UVC backend.
pub fn is_uvc_device_name(device_name: &str) -> bool {
    device_name.starts_with(UVC_NAME_PREFIX)
}

/// Builds the public device name for a UVC device path.
pub fn external_device_name(device_path: &str) -> String {
    format!("{}{}", UVC_NAME_PREFIX, device_path)
}

/// A device name parsed at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraIdentity<'a> {
    /// Built-in camera, carrying the native backend's own name
    Native(&'a str),
    /// External UVC camera, carrying the device path after the prefix
    External(&'a str),
}

impl<'a> CameraIdentity<'a> {
    /// Parses a device name into its identity
    pub fn parse(device_name: &'a str) -> Self {
        match device_name.strip_prefix(UVC_NAME_PREFIX) {
            Some(path) => CameraIdentity::External(path),
            None => CameraIdentity::Native(device_name),
        }
    }

    /// True for external UVC identities
    pub fn is_external(&self) -> bool {
        matches!(self, CameraIdentity::External(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_names_are_external() {
        assert!(is_uvc_device_name("uvc-camera:/dev/bus/usb/001/004"));
        assert!(is_uvc_device_name("uvc-camera:"));
    }

    #[test]
    fn test_unprefixed_names_are_native() {
        assert!(!is_uvc_device_name("Integrated Camera"));
        assert!(!is_uvc_device_name(""));
        assert!(!is_uvc_device_name("/dev/bus/usb/001/004"));
    }

    #[test]
    fn test_near_miss_prefixes_are_native() {
        // Exact prefix only: missing colon, different case, leading space
        assert!(!is_uvc_device_name("uvc-camera/dev/bus/usb/001/004"));
        assert!(!is_uvc_device_name("UVC-CAMERA:/dev/bus/usb/001/004"));
        assert!(!is_uvc_device_name(" uvc-camera:/dev/bus/usb/001/004"));
    }

    #[test]
    fn test_external_name_round_trip() {
        let name = external_device_name("/dev/bus/usb/003/007");
        assert_eq!(name, "uvc-camera:/dev/bus/usb/003/007");
        assert!(is_uvc_device_name(&name));

        match CameraIdentity::parse(&name) {
            CameraIdentity::External(path) => assert_eq!(path, "/dev/bus/usb/003/007"),
            CameraIdentity::Native(_) => panic!("Expected external identity"),
        }
    }

    #[test]
    fn test_parse_native() {
        let identity = CameraIdentity::parse("HD Webcam");
        assert_eq!(identity, CameraIdentity::Native("HD Webcam"));
        assert!(!identity.is_external());
    }

    #[test]
    fn test_parse_bare_prefix_has_empty_path() {
        // Degenerate but syntactically external
        assert_eq!(
            CameraIdentity::parse("uvc-camera:"),
            CameraIdentity::External("")
        );
    }
}
