//! Copy-on-write registry of planted antilogs.
//!
//! Readers pin an immutable `Arc<Vec<_>>` snapshot with a single atomic load;
//! writers build a replacement vector and publish it through `ArcSwap::rcu`,
//! retrying from the latest snapshot when another writer won first.
//!
//! ## Rules
//! - **Identity**: two antilogs are the same when their `Arc`s point to the
//!   same allocation; planting the same `Arc` twice is a no-op.
//! - **Order**: plant order is preserved in every snapshot.
//! - **Snapshots are stable**: a dispatch holding a snapshot keeps delivering
//!   to it even if the antilog is uprooted meanwhile; the next dispatch sees
//!   the removal.
//! - **Writers never wait on readers**: a slow `perform_log` cannot stall
//!   `plant`/`uproot`.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::antilog::Antilog;

/// Immutable view of the planted antilogs at one point in time.
pub type Snapshot = Arc<Vec<Arc<dyn Antilog>>>;

pub struct AntilogRegistry {
    antilogs: ArcSwap<Vec<Arc<dyn Antilog>>>,
}

impl Default for AntilogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AntilogRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snap = self.snapshot();
        f.debug_list().entries(snap.iter().map(|a| a.name())).finish()
    }
}

/// Address of the allocation, without the vtable half of a fat pointer.
fn identity<A: Antilog + ?Sized>(antilog: &Arc<A>) -> *const () {
    Arc::as_ptr(antilog).cast::<()>()
}

impl AntilogRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            antilogs: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Adds `antilog`. Returns `false` if this exact instance was already planted.
    pub fn plant(&self, antilog: Arc<dyn Antilog>) -> bool {
        let id = identity(&antilog);
        let mut added = false;
        self.antilogs.rcu(|current| {
            if current.iter().any(|a| identity(a) == id) {
                added = false;
                return Arc::clone(current);
            }
            added = true;
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(Arc::clone(&antilog));
            Arc::new(next)
        });
        added
    }

    /// Removes `antilog`. Returns `false` (and changes nothing) if it was not planted.
    pub fn uproot<A: Antilog + ?Sized>(&self, antilog: &Arc<A>) -> bool {
        let id = identity(antilog);
        let mut removed = false;
        self.antilogs.rcu(|current| {
            removed = current.iter().any(|a| identity(a) == id);
            if !removed {
                return Arc::clone(current);
            }
            Arc::new(
                current
                    .iter()
                    .filter(|a| identity(*a) != id)
                    .cloned()
                    .collect(),
            )
        });
        removed
    }

    /// Removes every antilog.
    pub fn uproot_all(&self) {
        self.antilogs.store(Arc::new(Vec::new()));
    }

    /// Returns the current set; later mutations do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.antilogs.load_full()
    }

    #[must_use]
    pub fn contains<A: Antilog + ?Sized>(&self, antilog: &Arc<A>) -> bool {
        let id = identity(antilog);
        self.antilogs.load().iter().any(|a| identity(a) == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.antilogs.load().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.antilogs.load().is_empty()
    }
}
