//! Latest-snapshot slot shared between the tick thread and readers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use toroid_grid::GridSnapshot;

/// Holds the most recently published [`GridSnapshot`].
///
/// Single-producer: only the tick thread calls [`publish`](Self::publish).
/// Any thread may call [`latest`](Self::latest); readers get an `Arc` and
/// never block the producer for longer than a pointer swap.
pub(crate) struct SnapshotSlot {
    latest: Mutex<Option<Arc<GridSnapshot>>>,
    published: AtomicU64,
}

// Compile-time assertion: SnapshotSlot must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SnapshotSlot>();
};

impl SnapshotSlot {
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(None),
            published: AtomicU64::new(0),
        }
    }

    /// Replace the published snapshot. Returns the new publish count.
    pub fn publish(&self, snapshot: GridSnapshot) -> u64 {
        let arc = Arc::new(snapshot);
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(arc);
        // Release-store ensures the snapshot is visible before readers
        // observe the new count.
        self.published.fetch_add(1, Ordering::Release) + 1
    }

    /// The most recently published snapshot, if any.
    pub fn latest(&self) -> Option<Arc<GridSnapshot>> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    /// Number of snapshots published so far.
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_grid::GridState;

    #[test]
    fn empty_until_first_publish() {
        let slot = SnapshotSlot::new();
        assert!(slot.latest().is_none());
        assert_eq!(slot.published(), 0);
    }

    #[test]
    fn latest_replaces_previous() {
        let slot = SnapshotSlot::new();
        let mut grid = GridState::new(10, 10).unwrap();
        assert_eq!(slot.publish(grid.snapshot()), 1);
        let first = slot.latest().unwrap();

        grid.toggle(0, 0).unwrap();
        assert_eq!(slot.publish(grid.snapshot()), 2);
        let second = slot.latest().unwrap();

        assert_eq!(first.population(), 0);
        assert_eq!(second.population(), 1);
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
