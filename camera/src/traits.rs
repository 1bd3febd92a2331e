//! Enumeration traits and backend seams
//!
//! This module defines the core traits the enumeration layer is built
//! around: the enumerator surface exposed to callers and the session-based
//! interface consumed from the UVC backend. Production implementations and
//! test doubles plug in behind the same seams.

use crate::capturer::VideoCapturer;
use crate::error::Result;
use crate::events::CameraEventsHandler;
use crate::format::CaptureFormat;

/// Trait for camera enumerators
///
/// Implemented both by the native backend and by the unified enumerator
/// that merges backends, so a caller can hold either behind one type.
///
/// # Responsibilities
/// - Produce the ordered device-name list
/// - Answer per-device facing and format queries
/// - Construct capturer handles for enumerated devices
pub trait CameraEnumerator {
    /// Enumerates devices and returns their names in presentation order
    ///
    /// Takes `&mut self` because enumeration refreshes internal state
    /// (device snapshots, id registries); all read-side queries are `&self`.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Device names, possibly empty
    /// * `Err` - If the native backend fails critically
    fn device_names(&mut self) -> Result<Vec<String>>;

    /// Reports whether a device faces the user
    ///
    /// Total over all input strings; unknown names get the backend's
    /// default answer rather than an error.
    fn is_front_facing(&self, device_name: &str) -> bool;

    /// Reports whether a device faces away from the user
    fn is_back_facing(&self, device_name: &str) -> bool;

    /// Lists the capture formats a device supports
    ///
    /// # Returns
    /// * `Ok(Vec<CaptureFormat>)` - Supported formats; empty when the
    ///   backend reports none (not an error)
    /// * `Err` - If the backend query fails or the device is unknown
    fn supported_formats(&self, device_name: &str) -> Result<Vec<CaptureFormat>>;

    /// Constructs a capturer handle bound to a device
    ///
    /// # Arguments
    /// * `device_name` - A name returned by the most recent enumeration
    /// * `events` - Lifecycle callbacks, attached to native capturers and
    ///   ignored by UVC capturers
    ///
    /// # Returns
    /// * `Ok(Box<dyn VideoCapturer>)` - Handle carrying the resolved binding
    /// * `Err(CameraError::UnregisteredDevice)` - External-shaped name the
    ///   most recent enumeration did not produce
    /// * `Err` - If the native backend rejects the name
    fn create_capturer(
        &self,
        device_name: &str,
        events: Box<dyn CameraEventsHandler>,
    ) -> Result<Box<dyn VideoCapturer>>;
}

/// One external camera reported by the UVC backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UvcDeviceDesc {
    /// Backend device id, derived from the USB bus location
    pub device_id: i32,
    /// USB device node path
    pub device_path: String,
    /// Product label from the device descriptor, for logs
    pub product: Option<String>,
}

impl UvcDeviceDesc {
    /// Builds a descriptor from a device's USB bus location.
    ///
    /// The id is `bus * 1000 + address` and the path is the devfs node
    /// `/dev/bus/usb/BBB/DDD`, so ids and paths match what the USB stack
    /// itself hands out for the same device.
    pub fn from_usb_location(bus: u8, address: u8, product: Option<String>) -> Self {
        Self {
            device_id: i32::from(bus) * 1000 + i32::from(address),
            device_path: format!("/dev/bus/usb/{:03}/{:03}", bus, address),
            product,
        }
    }

    /// USB bus number the id encodes
    pub fn bus_number(&self) -> i32 {
        self.device_id / 1000
    }

    /// USB device address the id encodes
    pub fn device_address(&self) -> i32 {
        self.device_id % 1000
    }
}

/// Trait for the UVC backend
///
/// The backend is a factory for short-lived query sessions. Each
/// enumerator operation that needs UVC data opens one session, performs a
/// single query, and drops the session again.
pub trait UvcBackend {
    /// Opens a transient query session
    ///
    /// # Returns
    /// * `Ok(Box<dyn UvcSession>)` - Session ready for one query
    /// * `Err` - If the backend cannot be acquired at all
    fn open(&self) -> Result<Box<dyn UvcSession>>;
}

/// Trait for one transient UVC query session
///
/// Sessions release their backend resources on drop, exactly once,
/// regardless of whether the query succeeded.
pub trait UvcSession {
    /// Lists every attached UVC camera, unfiltered
    ///
    /// # Returns
    /// * `Ok(Vec<UvcDeviceDesc>)` - Attached devices, possibly empty
    /// * `Err` - If the device list cannot be read
    fn attached_devices(&self) -> Result<Vec<UvcDeviceDesc>>;

    /// Lists every preview size the attached camera advertises, unfiltered
    ///
    /// Resolution only; the backend does not report frame rates.
    ///
    /// # Returns
    /// * `Ok(Vec<(u32, u32)>)` - (width, height) pairs; empty when no
    ///   device is attached or none advertises sizes
    /// * `Err` - If the descriptor query fails
    fn preview_sizes(&self) -> Result<Vec<(u32, u32)>>;
}
