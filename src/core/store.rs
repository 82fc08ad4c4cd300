use crate::types::Itinerary;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, PoisonError, RwLock,
};
use tracing::debug;

/// Single output slot holding the most recently finished itinerary.
///
/// `publish` always replaces whatever is there, so when two generations
/// overlap the one that completes last is what readers see.
#[derive(Debug, Default)]
pub struct ItineraryStore {
    slot: RwLock<Option<Arc<Itinerary>>>,
    version: AtomicU64,
}

impl ItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current itinerary and return the new version number.
    pub fn publish(&self, itinerary: Itinerary) -> u64 {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(itinerary));
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(version, "itinerary published");
        version
    }

    pub fn current(&self) -> Option<Arc<Itinerary>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of publishes so far
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_none()
    }
}
