//! Device-id registry for external cameras.

use std::collections::HashMap;

/// Maps external device names to the backend ids they carried at the most
/// recent enumeration.
///
/// The registry is rebuilt wholesale by every enumeration call and the
/// previous contents are discarded, so it never grows unboundedly and a
/// lookup can only ever observe the latest enumeration's ids. A name that
/// vanished from the latest enumeration resolves to `None`.
#[derive(Debug, Default)]
pub struct UvcDeviceRegistry {
    ids: HashMap<String, i32>,
}

impl UvcDeviceRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
        }
    }

    /// Replaces the registry contents with one enumeration's findings.
    ///
    /// If one batch carries the same name twice, the later entry wins,
    /// matching the record-overwrites-prior rule for repeated paths.
    pub fn rebuild(&mut self, entries: Vec<(String, i32)>) {
        self.ids = entries.into_iter().collect();
    }

    /// Device id recorded for a name by the most recent enumeration
    pub fn id_for(&self, device_name: &str) -> Option<i32> {
        self.ids.get(device_name).copied()
    }

    /// Number of registered external devices
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the most recent enumeration found no external devices
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = UvcDeviceRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/001/004"), None);
    }

    #[test]
    fn test_rebuild_registers_entries() {
        let mut registry = UvcDeviceRegistry::new();
        registry.rebuild(vec![
            ("uvc-camera:/dev/bus/usb/001/004".to_string(), 1004),
            ("uvc-camera:/dev/bus/usb/002/003".to_string(), 2003),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/001/004"), Some(1004));
        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/002/003"), Some(2003));
    }

    #[test]
    fn test_rebuild_discards_previous_generation() {
        let mut registry = UvcDeviceRegistry::new();
        registry.rebuild(vec![("uvc-camera:/dev/bus/usb/001/004".to_string(), 1004)]);
        registry.rebuild(vec![("uvc-camera:/dev/bus/usb/003/002".to_string(), 3002)]);

        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/001/004"), None);
        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/003/002"), Some(3002));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_rebuild_with_empty_batch_clears() {
        let mut registry = UvcDeviceRegistry::new();
        registry.rebuild(vec![("uvc-camera:/dev/bus/usb/001/004".to_string(), 1004)]);
        registry.rebuild(Vec::new());

        assert!(registry.is_empty());
        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/001/004"), None);
    }

    #[test]
    fn test_same_path_new_id_overwrites() {
        let mut registry = UvcDeviceRegistry::new();
        registry.rebuild(vec![("uvc-camera:/dev/bus/usb/001/004".to_string(), 1004)]);
        // Device replaced on the same path, backend assigned a fresh id
        registry.rebuild(vec![("uvc-camera:/dev/bus/usb/001/004".to_string(), 1009)]);

        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/001/004"), Some(1009));
    }

    #[test]
    fn test_duplicate_name_in_one_batch_keeps_last() {
        let mut registry = UvcDeviceRegistry::new();
        registry.rebuild(vec![
            ("uvc-camera:/dev/bus/usb/001/004".to_string(), 1004),
            ("uvc-camera:/dev/bus/usb/001/004".to_string(), 1007),
        ]);

        assert_eq!(registry.id_for("uvc-camera:/dev/bus/usb/001/004"), Some(1007));
        assert_eq!(registry.len(), 1);
    }
}
