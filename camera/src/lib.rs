//! Camera Enumeration Module
//!
//! Presents built-in cameras and externally attached UVC cameras as one
//! device list behind opaque device names. Built-in discovery goes through
//! OpenCV on the platform capture stack, external discovery through
//! libuvc, and a reserved name prefix routes every per-device query to
//! the backend that owns the device.

pub mod capturer;
pub mod config;
pub mod constants;
pub mod device_name;
pub mod enumerator;
pub mod error;
pub mod events;
pub mod format;
pub mod manager;
pub mod native;
pub mod registry;
pub mod traits;
pub mod uvc;

// Re-export commonly used types
pub use error::{CameraError, Result};

// Enumeration exports
pub use config::EnumeratorConfig;
pub use enumerator::UnifiedCameraEnumerator;
pub use format::{CaptureFormat, FpsRange};
pub use manager::{CameraDescriptor, CameraManager};
pub use registry::UvcDeviceRegistry;
pub use traits::{CameraEnumerator, UvcBackend, UvcDeviceDesc, UvcSession};

// Device name exports
pub use constants::UVC_NAME_PREFIX;
pub use device_name::{CameraIdentity, external_device_name, is_uvc_device_name};

// Capture exports
pub use capturer::{CaptureBinding, NativeCapturer, UvcCapturer, VideoCapturer};
pub use events::{CameraEventsHandler, NoopEventsHandler};

// Backend exports
pub use crate::native::NativeCameraEnumerator;
pub use crate::uvc::LibuvcBackend;
