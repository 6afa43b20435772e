use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tokio::sync::OnceCell;
use utoipa::ToSchema;

/// Observable state of one cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

struct Slot<V> {
    cell: OnceCell<V>,
    pending: AtomicUsize,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self {
            cell: OnceCell::new(),
            pending: AtomicUsize::new(0),
        }
    }
}

/// Keyed, load-once async cache.
///
/// Concurrent callers asking for the same key while a load is in flight
/// wait on that load instead of starting their own. A successful value is
/// kept for the lifetime of the cache; a failed load leaves the slot empty
/// so a later call may try again.
pub struct LazyCache<K, V> {
    slots: Mutex<HashMap<K, Arc<Slot<V>>>>,
}

impl<K, V> Default for LazyCache<K, V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> LazyCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: &K) -> Arc<Slot<V>> {
        // Never held across an await.
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key.clone()).or_default())
    }

    pub async fn get_or_try_load<F, Fut, E>(&self, key: K, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(&key);
        if let Some(value) = slot.cell.get() {
            return Ok(value.clone());
        }

        slot.pending.fetch_add(1, Ordering::SeqCst);
        let result = slot.cell.get_or_try_init(load).await.cloned();
        slot.pending.fetch_sub(1, Ordering::SeqCst);
        result
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(key).and_then(|slot| slot.cell.get().cloned())
    }

    pub fn state(&self, key: &K) -> LoadState {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        match slots.get(key) {
            Some(slot) if slot.cell.initialized() => LoadState::Loaded,
            Some(slot) if slot.pending.load(Ordering::SeqCst) > 0 => LoadState::Loading,
            _ => LoadState::NotLoaded,
        }
    }
}
