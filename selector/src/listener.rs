//! Keyboard listener registration.
//!
//! A widget only receives key events while it holds a [`ListenerGuard`].
//! Dropping the guard detaches the listener, so a torn-down widget can not
//! leave a dangling registration behind.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry of widget ids currently listening for key events.
///
/// Each id counts its live guards and stays attached until the last one
/// drops. Cloning shares the registry.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Arc<RwLock<HashMap<String, usize>>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener for `id`. It stays attached until the guard drops.
    pub fn attach(&self, id: impl Into<String>) -> ListenerGuard {
        let id = id.into();
        if let Ok(mut guard) = self.inner.write() {
            *guard.entry(id.clone()).or_insert(0) += 1;
        }
        log::debug!("KeyListeners::attach id={}", id);
        ListenerGuard {
            id,
            registry: Arc::clone(&self.inner),
        }
    }

    pub fn is_attached(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.contains_key(id))
            .unwrap_or(false)
    }

    /// Currently attached ids, in no particular order.
    pub fn ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct attached ids.
    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a key listener attached for as long as it lives.
#[derive(Debug)]
pub struct ListenerGuard {
    id: String,
    registry: Arc<RwLock<HashMap<String, usize>>>,
}

impl ListenerGuard {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.registry.write() {
            if let Some(count) = guard.get_mut(&self.id) {
                *count -= 1;
                if *count == 0 {
                    guard.remove(&self.id);
                }
            }
        }
        log::debug!("KeyListeners::detach id={}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_detaches_on_drop() {
        let listeners = KeyListeners::new();
        let guard = listeners.attach("country");
        assert!(listeners.is_attached("country"));
        assert_eq!(guard.id(), "country");

        drop(guard);
        assert!(!listeners.is_attached("country"));
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_clones_share_registry() {
        let listeners = KeyListeners::new();
        let shared = listeners.clone();
        let _guard = listeners.attach("a");
        assert!(shared.is_attached("a"));
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn test_id_stays_attached_until_last_guard_drops() {
        let listeners = KeyListeners::new();
        let first = listeners.attach("country");
        let second = listeners.attach("country");
        assert_eq!(listeners.len(), 1);

        drop(first);
        assert!(listeners.is_attached("country"));

        drop(second);
        assert!(!listeners.is_attached("country"));
    }
}
