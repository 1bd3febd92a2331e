//! Error types for camera enumeration.
//!
//! This module defines all possible errors that can occur while
//! discovering devices, querying formats, and constructing capturers.

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, CameraError>;

/// Error type for camera enumeration operations
#[derive(Debug)]
pub enum CameraError {
    /// Configuration error
    Config(String),
    /// I/O error
    Io(io::Error),
    /// Native camera backend error
    Camera(String),
    /// External UVC backend error
    Uvc(String),
    /// Capturer requested for an external device the registry has no id for.
    /// Signals a logic error: enumeration was never run, or the device
    /// disappeared from the most recent enumeration.
    UnregisteredDevice(String),
    /// OpenCV error
    OpenCv(opencv::Error),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Config(msg) => write!(f, "Config error: {}", msg),
            CameraError::Io(err) => write!(f, "I/O error: {}", err),
            CameraError::Camera(msg) => write!(f, "Camera error: {}", msg),
            CameraError::Uvc(msg) => write!(f, "UVC backend error: {}", msg),
            CameraError::UnregisteredDevice(name) => {
                write!(f, "No device id registered for camera: {}", name)
            }
            CameraError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<io::Error> for CameraError {
    fn from(err: io::Error) -> Self {
        CameraError::Io(err)
    }
}

impl From<opencv::Error> for CameraError {
    fn from(err: opencv::Error) -> Self {
        CameraError::OpenCv(err)
    }
}

impl From<uvc::Error> for CameraError {
    fn from(err: uvc::Error) -> Self {
        CameraError::Uvc(format!("{:?}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = CameraError::Config("Invalid fps range".to_string());
        assert_eq!(err.to_string(), "Config error: Invalid fps range");
    }

    #[test]
    fn test_error_display_uvc() {
        let err = CameraError::Uvc("NoDevice".to_string());
        assert_eq!(err.to_string(), "UVC backend error: NoDevice");
    }

    #[test]
    fn test_error_display_unregistered_names_device() {
        let err = CameraError::UnregisteredDevice("uvc-camera:/dev/bus/usb/001/004".to_string());
        let rendered = err.to_string();
        assert!(rendered.contains("uvc-camera:/dev/bus/usb/001/004"));
        assert!(rendered.contains("No device id registered"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no /dev");
        let err: CameraError = io_err.into();

        match err {
            CameraError::Io(_) => (),
            _ => panic!("Expected CameraError::Io"),
        }
    }

    #[test]
    fn test_error_is_error_trait() {
        let err = CameraError::Camera("gone".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
