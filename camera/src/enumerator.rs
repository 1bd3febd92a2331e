//! Unified camera enumerator.
//!
//! Merges the native camera backend and the external UVC backend into one
//! device list and routes every per-device query to the right backend by
//! parsing the device name once.

use crate::capturer::{UvcCapturer, VideoCapturer};
use crate::config::EnumeratorConfig;
use crate::device_name::{CameraIdentity, external_device_name};
use crate::error::{CameraError, Result};
use crate::events::CameraEventsHandler;
use crate::format::CaptureFormat;
use crate::native::NativeCameraEnumerator;
use crate::registry::UvcDeviceRegistry;
use crate::traits::{CameraEnumerator, UvcBackend, UvcDeviceDesc, UvcSession};
use crate::uvc::LibuvcBackend;
use logging::Logger;

/// Camera enumerator merging built-in and external UVC cameras
///
/// Native devices come first in enumeration order, external devices are
/// appended with prefixed names, and the id registry is rebuilt from
/// scratch on every enumeration. A physical device visible to both
/// backends appears twice under different names; no deduplication is
/// attempted.
///
/// Enumeration is best-effort on the UVC side: a failing UVC backend
/// reduces the result to the native list. Format lookup and capturer
/// construction are strict and surface backend failures to the caller.
pub struct UnifiedCameraEnumerator {
    native: Box<dyn CameraEnumerator>,
    uvc: Box<dyn UvcBackend>,
    registry: UvcDeviceRegistry,
    config: EnumeratorConfig,
    logger: Logger,
}

impl UnifiedCameraEnumerator {
    /// Creates an enumerator over the given backends
    ///
    /// # Arguments
    /// * `native` - Built-in camera enumerator, queried first
    /// * `uvc` - External UVC backend, queried per operation
    /// * `config` - Fps synthesis and probing settings
    /// * `logger` - Logger instance
    pub fn new(
        native: Box<dyn CameraEnumerator>,
        uvc: Box<dyn UvcBackend>,
        config: EnumeratorConfig,
        logger: Logger,
    ) -> Self {
        Self {
            native,
            uvc,
            registry: UvcDeviceRegistry::new(),
            config,
            logger: logger.for_component("Enumerator"),
        }
    }

    /// Creates an enumerator over the production backends
    ///
    /// Native devices are discovered through OpenCV/V4L2, external devices
    /// through libuvc, with the default configuration.
    pub fn with_defaults(logger: Logger) -> Self {
        let config = EnumeratorConfig::default();
        let native = NativeCameraEnumerator::new(config.clone(), logger.clone());
        let uvc = LibuvcBackend::new(logger.clone());
        Self::new(Box::new(native), Box::new(uvc), config, logger)
    }

    /// One scoped UVC query: the session opens here and drops on return,
    /// so the backend is released exactly once on every path.
    fn query_external_devices(&self) -> Result<Vec<UvcDeviceDesc>> {
        let session = self.uvc.open()?;
        session.attached_devices()
    }

    fn query_preview_sizes(&self) -> Result<Vec<(u32, u32)>> {
        let session = self.uvc.open()?;
        session.preview_sizes()
    }
}

impl CameraEnumerator for UnifiedCameraEnumerator {
    fn device_names(&mut self) -> Result<Vec<String>> {
        let mut names = self.native.device_names()?;
        self.logger
            .debug(&format!("Native backend reported {} device(s)", names.len()));

        // A UVC failure degrades to zero external devices; the native
        // portion of the list is always returned.
        let external = match self.query_external_devices() {
            Ok(devices) => devices,
            Err(e) => {
                self.logger.error(&format!(
                    "UVC device query failed, listing native devices only: {}",
                    e
                ));
                Vec::new()
            }
        };

        let mut entries = Vec::with_capacity(external.len());
        for device in &external {
            let name = external_device_name(&device.device_path);
            match &device.product {
                Some(product) => self.logger.info(&format!(
                    "UVC device {} ({}) listed as {}",
                    device.device_id, product, name
                )),
                None => self
                    .logger
                    .info(&format!("UVC device {} listed as {}", device.device_id, name)),
            }
            entries.push((name.clone(), device.device_id));
            names.push(name);
        }
        self.registry.rebuild(entries);
        self.logger.debug(&format!(
            "UVC registry rebuilt with {} device(s)",
            self.registry.len()
        ));

        Ok(names)
    }

    fn is_front_facing(&self, device_name: &str) -> bool {
        match CameraIdentity::parse(device_name) {
            // Category default for cameras with unknown physical
            // orientation, not a hardware claim.
            CameraIdentity::External(_) => true,
            CameraIdentity::Native(_) => self.native.is_front_facing(device_name),
        }
    }

    fn is_back_facing(&self, device_name: &str) -> bool {
        match CameraIdentity::parse(device_name) {
            CameraIdentity::External(_) => false,
            CameraIdentity::Native(_) => self.native.is_back_facing(device_name),
        }
    }

    fn supported_formats(&self, device_name: &str) -> Result<Vec<CaptureFormat>> {
        match CameraIdentity::parse(device_name) {
            CameraIdentity::External(_) => {
                // Unlike enumeration, failures here surface to the caller.
                let sizes = self.query_preview_sizes()?;
                let formats: Vec<CaptureFormat> = sizes
                    .into_iter()
                    .map(|(width, height)| CaptureFormat::new(width, height, self.config.uvc_fps))
                    .collect();
                self.logger.debug(&format!(
                    "Synthesized {} format(s) for {}",
                    formats.len(),
                    device_name
                ));
                Ok(formats)
            }
            CameraIdentity::Native(_) => self.native.supported_formats(device_name),
        }
    }

    fn create_capturer(
        &self,
        device_name: &str,
        events: Box<dyn CameraEventsHandler>,
    ) -> Result<Box<dyn VideoCapturer>> {
        match CameraIdentity::parse(device_name) {
            CameraIdentity::External(path) => {
                let device_id = self
                    .registry
                    .id_for(device_name)
                    .ok_or_else(|| CameraError::UnregisteredDevice(device_name.to_string()))?;
                self.logger.info(&format!(
                    "Creating UVC capturer for {} (device id {})",
                    path, device_id
                ));
                Ok(Box::new(UvcCapturer::new(device_name.to_string(), device_id)))
            }
            CameraIdentity::Native(_) => self.native.create_capturer(device_name, events),
        }
    }
}
