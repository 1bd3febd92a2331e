//! Built-in camera backend.
//!
//! Discovery and enumeration for cameras wired into the machine, probed
//! through OpenCV on top of the platform capture stack.

pub mod detection;
pub mod enumerator;

pub use detection::{DeviceScanner, NativeDevice};
pub use enumerator::NativeCameraEnumerator;
