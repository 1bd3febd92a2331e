//! libuvc-backed external camera access.
//!
//! The libuvc handle types borrow from their context, so nothing libuvc
//! ever crosses a function boundary here: each query opens its own
//! context, walks the device list and returns plain owned data, releasing
//! every USB handle before it returns.

use crate::error::Result;
use crate::traits::{UvcBackend, UvcDeviceDesc, UvcSession};
use logging::Logger;

/// External camera backend over libuvc
pub struct LibuvcBackend {
    logger: Logger,
}

impl LibuvcBackend {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: logger.for_component("UVC"),
        }
    }
}

impl UvcBackend for LibuvcBackend {
    fn open(&self) -> Result<Box<dyn UvcSession>> {
        Ok(Box::new(LibuvcSession {
            logger: self.logger.clone(),
        }))
    }
}

/// One short-lived query session against the USB bus
///
/// Holds no USB state of its own. A libuvc context is a libusb handshake,
/// cheap enough to set up again for the single query each session serves.
pub struct LibuvcSession {
    logger: Logger,
}

impl UvcSession for LibuvcSession {
    fn attached_devices(&self) -> Result<Vec<UvcDeviceDesc>> {
        let context = uvc::Context::new()?;

        let mut found = Vec::new();
        for device in context.devices()? {
            let product = device.description().ok().and_then(|desc| desc.product);
            found.push(UvcDeviceDesc::from_usb_location(
                device.bus_number(),
                device.device_address(),
                product,
            ));
        }

        self.logger
            .debug(&format!("libuvc reported {} attached device(s)", found.len()));
        Ok(found)
    }

    fn preview_sizes(&self) -> Result<Vec<(u32, u32)>> {
        let context = uvc::Context::new()?;

        // Sizes come from the first attached camera, matching the
        // unfiltered query the enumerator issues.
        let mut devices = context.devices()?;
        let Some(device) = devices.next() else {
            return Ok(Vec::new());
        };
        let handle = device.open()?;

        let mut sizes: Vec<(u32, u32)> = Vec::new();
        for format in handle.supported_formats() {
            for frame in format.supported_formats() {
                let size = (u32::from(frame.width()), u32::from(frame.height()));
                if !sizes.contains(&size) {
                    sizes.push(size);
                }
            }
        }

        self.logger
            .debug(&format!("Device advertises {} preview size(s)", sizes.len()));
        Ok(sizes)
    }
}

impl Drop for LibuvcSession {
    fn drop(&mut self) {
        self.logger.debug("UVC session released");
    }
}
