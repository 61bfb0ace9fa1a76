//! Per-row child view caches.
//!
//! Each row an adapter inflates gets a [`ChildViewCache`]: the declared
//! child ids resolved to the descendant views of that particular row. The
//! caches live in a side-table keyed by the row's identity,
//! so a recycled row finds its cache without walking its tree again.

use std::collections::HashMap;
use std::marker::PhantomData;

use wishlist_core::logging::targets;

use crate::error::{AdapterError, Result};
use crate::view::{View, ViewCast, ViewId, ViewKey, WeakView};

/// A child view id tagged with the view type expected at that id.
///
/// Declaring ids as typed constants fixes each accessor's type at the
/// declaration site:
///
/// ```
/// use wishlist::adapter::ChildId;
/// use wishlist::view::{ImageView, TextView};
///
/// const NAME: ChildId<TextView> = ChildId::new(10);
/// const AVATAR: ChildId<ImageView> = ChildId::new(20);
///
/// assert_eq!(NAME.id().get(), 10);
/// ```
///
/// The layout still decides what is actually built at the id, so lookups
/// through a `ChildId` keep a runtime kind check.
pub struct ChildId<K> {
    id: ViewId,
    _kind: PhantomData<fn() -> K>,
}

impl<K> ChildId<K> {
    /// Creates a typed child id.
    pub const fn new(id: i32) -> Self {
        Self {
            id: ViewId::new(id),
            _kind: PhantomData,
        }
    }

    /// Returns the untyped id.
    pub const fn id(&self) -> ViewId {
        self.id
    }
}

impl<K> Clone for ChildId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ChildId<K> {}

impl<K> std::fmt::Debug for ChildId<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChildId({})", self.id)
    }
}

impl<K> From<ChildId<K>> for ViewId {
    fn from(child: ChildId<K>) -> Self {
        child.id
    }
}

/// The descendant views of one row, keyed by declared child id.
///
/// Populated once when the row is inflated and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ChildViewCache {
    children: HashMap<ViewId, View>,
}

impl ChildViewCache {
    /// Resolves `ids` against `row`.
    ///
    /// Ids that resolve to no descendant are skipped. Returns the cache and
    /// the number of lookups performed.
    pub(crate) fn populate(row: &View, ids: &[ViewId]) -> (Self, usize) {
        let mut children = HashMap::with_capacity(ids.len());
        for &id in ids {
            if let Some(child) = row.find_view_by_id(id) {
                children.insert(id, child);
            }
        }
        (Self { children }, ids.len())
    }

    /// Returns the cached view for the id.
    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.children.get(&id)
    }

    /// Returns the cached view for the id as `K`.
    pub fn get_as<K: ViewCast>(&self, id: ViewId) -> Result<K> {
        let view = self.get(id).ok_or(AdapterError::ChildNotCached { id })?;
        K::cast(view).ok_or_else(|| AdapterError::type_mismatch(id, K::EXPECTED, view.kind().name()))
    }

    /// Returns `true` if a view is cached for the id.
    pub fn contains(&self, id: ViewId) -> bool {
        self.children.contains_key(&id)
    }

    /// Returns the cached ids in ascending order.
    pub fn ids(&self) -> Vec<ViewId> {
        let mut ids: Vec<_> = self.children.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Returns the number of cached views.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

struct RowEntry {
    row: WeakView,
    children: ChildViewCache,
}

/// Side-table from row identity to the row's child cache.
///
/// Entries hold the row weakly: when the list container drops a row, its
/// entry becomes dead and is pruned the next time a row is registered.
#[derive(Default)]
pub(crate) struct RowCache {
    rows: HashMap<ViewKey, RowEntry>,
}

impl RowCache {
    pub(crate) fn get(&self, row: &View) -> Option<&ChildViewCache> {
        self.rows.get(&row.key()).map(|entry| &entry.children)
    }

    pub(crate) fn contains(&self, row: &View) -> bool {
        self.rows.contains_key(&row.key())
    }

    /// Returns the row's cache, registering it with `populate` if the row is
    /// new, and whether it was registered by this call. Dead entries are
    /// pruned before a new row is registered.
    pub(crate) fn get_or_insert_with<F>(&mut self, row: &View, populate: F) -> (&ChildViewCache, bool)
    where
        F: FnOnce() -> ChildViewCache,
    {
        let inserted = !self.contains(row);
        if inserted {
            self.prune();
        }
        let entry = self.rows.entry(row.key()).or_insert_with(|| RowEntry {
            row: row.downgrade(),
            children: populate(),
        });
        (&entry.children, inserted)
    }

    /// Drops entries whose row is gone. Returns the number dropped.
    pub(crate) fn prune(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, entry| entry.row.is_alive());
        let pruned = before - self.rows.len();
        if pruned > 0 {
            tracing::debug!(target: targets::ADAPTER, pruned, remaining = self.rows.len(), "pruned dropped rows");
        }
        pruned
    }

    pub(crate) fn remove(&mut self, row: &View) -> bool {
        self.rows.remove(&row.key()).is_some()
    }

    /// Number of entries whose row is still alive.
    pub(crate) fn live_rows(&self) -> usize {
        self.rows.values().filter(|entry| entry.row.is_alive()).count()
    }
}
