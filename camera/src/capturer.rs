//! Capturer handles.
//!
//! A capturer is an opaque handle binding one enumerated device to the
//! backend that will eventually drive it. Construction resolves the
//! binding; frame delivery and start/stop live in the capture pipeline,
//! not here.

use crate::events::CameraEventsHandler;

/// Backend binding a capturer was constructed around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureBinding {
    /// Built-in camera driven through the native backend
    Native {
        /// Native backend device id (/dev/videoN)
        device_id: i32,
    },
    /// External camera driven through the UVC backend
    Uvc {
        /// UVC backend device id (bus and address derived)
        device_id: i32,
    },
}

/// Opaque capture-session handle bound to one device
pub trait VideoCapturer {
    /// The device name this capturer was constructed for.
    fn device_name(&self) -> &str;

    /// The resolved backend binding.
    fn binding(&self) -> CaptureBinding;

    /// The lifecycle handler attached at construction, if any.
    ///
    /// Native capturers carry the caller-supplied handler; UVC capturers
    /// have none.
    fn events(&self) -> Option<&dyn CameraEventsHandler> {
        None
    }
}

/// Capturer handle for a built-in camera
pub struct NativeCapturer {
    device_name: String,
    device_id: i32,
    events: Box<dyn CameraEventsHandler>,
}

impl NativeCapturer {
    /// Binds a native device id and attaches the caller's event handler
    pub fn new(device_name: String, device_id: i32, events: Box<dyn CameraEventsHandler>) -> Self {
        Self {
            device_name,
            device_id,
            events,
        }
    }
}

impl VideoCapturer for NativeCapturer {
    fn device_name(&self) -> &str {
        &self.device_name
    }

    fn binding(&self) -> CaptureBinding {
        CaptureBinding::Native {
            device_id: self.device_id,
        }
    }

    fn events(&self) -> Option<&dyn CameraEventsHandler> {
        Some(self.events.as_ref())
    }
}

impl Drop for NativeCapturer {
    /// Releasing the handle counts as closing the camera.
    fn drop(&mut self) {
        self.events.on_camera_closed();
    }
}

/// Capturer handle for an external UVC camera
pub struct UvcCapturer {
    device_name: String,
    device_id: i32,
}

impl UvcCapturer {
    /// Binds the device id the registry recorded for this name
    pub fn new(device_name: String, device_id: i32) -> Self {
        Self {
            device_name,
            device_id,
        }
    }
}

impl VideoCapturer for UvcCapturer {
    fn device_name(&self) -> &str {
        &self.device_name
    }

    fn binding(&self) -> CaptureBinding {
        CaptureBinding::Uvc {
            device_id: self.device_id,
        }
    }
}
