//! Username to uuid cache
//!
//! Resolved uuids live in one map. Fetches go through a per-name gate, so a
//! name is fetched at most once at a time while other names proceed in
//! parallel. Gates only exist while someone is fetching.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

type Gate = Arc<Mutex<()>>;

#[derive(Debug, Default)]
pub struct UuidCache {
    resolved: Mutex<HashMap<String, String>>,
    inflight: Mutex<HashMap<String, Gate>>,
}

impl UuidCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached uuid for `name`, if one was resolved before
    pub fn get(&self, name: &str) -> Option<String> {
        self.resolved.lock().get(&cache_key(name)).cloned()
    }

    /// Return the cached uuid or run `fetch` once for this name.
    ///
    /// Only positive results are stored; a miss or an error is retried next time.
    pub fn get_or_try_fetch<E>(
        &self,
        name: &str,
        fetch: impl FnOnce() -> Result<Option<String>, E>,
    ) -> Result<Option<String>, E> {
        let key = cache_key(name);
        if let Some(uuid) = self.resolved.lock().get(&key).cloned() {
            log::debug!("UUID cache HIT for: {}", name);
            return Ok(Some(uuid));
        }

        let gate = self.inflight.lock().entry(key.clone()).or_default().clone();
        let fetched = {
            let _turn = gate.lock();
            // Whoever held the gate before us may have resolved it
            if let Some(uuid) = self.resolved.lock().get(&key).cloned() {
                log::debug!("UUID cache HIT for: {}", name);
                Ok(Some(uuid))
            } else {
                let fetched = fetch();
                if let Ok(Some(uuid)) = &fetched {
                    self.resolved.lock().insert(key.clone(), uuid.clone());
                    log::debug!("Cached UUID for: {}", name);
                }
                fetched
            }
        };
        self.release_gate(&key, gate);
        fetched
    }

    /// Forget the gate for `key` once no other caller holds it
    fn release_gate(&self, key: &str, gate: Gate) {
        let mut inflight = self.inflight.lock();
        // Gates are only cloned under this lock: two refs are the map's and ours
        if Arc::strong_count(&gate) == 2 {
            inflight.remove(key);
        }
    }

    pub fn len(&self) -> usize {
        self.resolved.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.resolved.lock().clear();
    }
}

/// Minecraft names are case-insensitive
fn cache_key(name: &str) -> String {
    name.trim().to_lowercase()
}
