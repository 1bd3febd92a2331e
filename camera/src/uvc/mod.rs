//! External UVC camera backend.
//!
//! Production implementation of the UVC backend traits on top of libuvc.

pub mod backend;

pub use backend::{LibuvcBackend, LibuvcSession};
