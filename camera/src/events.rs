//! Camera lifecycle event callbacks.

/// Callbacks through which a capturer reports camera lifecycle changes
/// back to the calling layer.
///
/// All methods default to no-ops so implementors only override the events
/// they care about. Handlers are supplied at capturer construction and
/// apply to native capturers only; the UVC capture pipeline reports its
/// lifecycle through its own channels.
pub trait CameraEventsHandler {
    /// Called when the camera is about to be opened.
    fn on_camera_opening(&self, _device_name: &str) {}

    /// Called when the camera has been released.
    fn on_camera_closed(&self) {}

    /// Called when the camera disappears while in use.
    fn on_camera_disconnected(&self) {}

    /// Called when the camera fails.
    fn on_camera_error(&self, _description: &str) {}
}

/// Handler that ignores every event.
///
/// For callers that need a capturer but no lifecycle notifications.
pub struct NoopEventsHandler;

impl CameraEventsHandler for NoopEventsHandler {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingHandler {
        errors: Cell<u32>,
    }

    impl CameraEventsHandler for CountingHandler {
        fn on_camera_error(&self, _description: &str) {
            self.errors.set(self.errors.get() + 1);
        }
    }

    #[test]
    fn test_defaults_are_noops() {
        // Must not panic; nothing to observe
        let handler = NoopEventsHandler;
        handler.on_camera_opening("Integrated Camera");
        handler.on_camera_closed();
        handler.on_camera_disconnected();
        handler.on_camera_error("lost");
    }

    #[test]
    fn test_override_receives_calls() {
        let handler = CountingHandler { errors: Cell::new(0) };
        handler.on_camera_error("first");
        handler.on_camera_error("second");
        // Non-overridden methods still default to no-ops
        handler.on_camera_closed();

        assert_eq!(handler.errors.get(), 2);
    }
}
