//! Camera management module
//!
//! Handles camera discovery and capturer lifecycle over an enumerator.

use crate::capturer::VideoCapturer;
use crate::device_name::is_uvc_device_name;
use crate::enumerator::UnifiedCameraEnumerator;
use crate::error::{CameraError, Result};
use crate::events::CameraEventsHandler;
use crate::format::CaptureFormat;
use crate::traits::CameraEnumerator;
use logging::Logger;

/// One discovered camera as the manager presents it
#[derive(Debug, Clone)]
pub struct CameraDescriptor {
    /// Opaque device name to use in every follow-up call
    pub name: String,
    /// True when the device is an externally attached UVC camera
    pub external: bool,
    /// Facing as the owning backend reports it
    pub front_facing: bool,
    /// Facing as the owning backend reports it
    pub back_facing: bool,
}

/// Manages camera discovery and the active capturer
pub struct CameraManager {
    /// Enumerator answering all device queries
    enumerator: Box<dyn CameraEnumerator>,
    /// Cached list of discovered cameras
    devices: Vec<CameraDescriptor>,
    /// Currently open capturer
    active: Option<Box<dyn VideoCapturer>>,
    /// Logger instance
    logger: Logger,
}

impl CameraManager {
    /// Creates a manager over a caller-supplied enumerator
    pub fn new(enumerator: Box<dyn CameraEnumerator>, logger: Logger) -> Self {
        Self {
            enumerator,
            devices: Vec::new(),
            active: None,
            logger: logger.for_component("CameraManager"),
        }
    }

    /// Creates a manager over the production unified enumerator
    pub fn with_defaults(logger: Logger) -> Self {
        let enumerator = UnifiedCameraEnumerator::with_defaults(logger.clone());
        Self::new(Box::new(enumerator), logger)
    }

    /// Discovers all available cameras across both backends
    pub fn discover(&mut self) -> Result<Vec<CameraDescriptor>> {
        self.logger.info("Discovering available cameras...");

        let names = self.enumerator.device_names()?;

        let mut devices = Vec::with_capacity(names.len());
        for name in names {
            let external = is_uvc_device_name(&name);
            let front_facing = self.enumerator.is_front_facing(&name);
            let back_facing = self.enumerator.is_back_facing(&name);
            devices.push(CameraDescriptor {
                name,
                external,
                front_facing,
                back_facing,
            });
        }
        self.devices = devices;

        self.logger
            .info(&format!("Discovered {} camera(s)", self.devices.len()));

        Ok(self.devices.clone())
    }

    /// Cameras found by the most recent discovery
    pub fn devices(&self) -> &[CameraDescriptor] {
        &self.devices
    }

    /// Device to open when the caller expresses no preference: the first
    /// external camera when one is attached, the first camera otherwise
    pub fn default_device(&self) -> Option<&CameraDescriptor> {
        self.devices
            .iter()
            .find(|device| device.external)
            .or_else(|| self.devices.first())
    }

    /// Lists the capture formats a discovered camera supports
    pub fn supported_formats(&self, device_name: &str) -> Result<Vec<CaptureFormat>> {
        self.enumerator.supported_formats(device_name)
    }

    /// Opens a camera by name
    ///
    /// At most one camera is open at a time; a second open is rejected
    /// until the first is closed.
    pub fn open_camera(
        &mut self,
        device_name: &str,
        events: Box<dyn CameraEventsHandler>,
    ) -> Result<()> {
        if self.active.is_some() {
            self.logger.warn("Camera already open");
            return Err(CameraError::Camera("A camera is already open".to_string()));
        }

        self.logger.info(&format!("Opening camera {}", device_name));
        let capturer = self.enumerator.create_capturer(device_name, events)?;
        self.active = Some(capturer);

        Ok(())
    }

    /// Closes the open camera, if any
    pub fn close_camera(&mut self) {
        if let Some(capturer) = self.active.take() {
            self.logger
                .info(&format!("Closing camera {}", capturer.device_name()));
            drop(capturer);
        }
    }

    /// Checks if a camera is currently open
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// The open capturer, if any
    pub fn active_capturer(&self) -> Option<&dyn VideoCapturer> {
        self.active.as_deref()
    }
}
