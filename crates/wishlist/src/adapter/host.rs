//! The contract between adapters and the list containers hosting them.

use wishlist_core::Signal;

use crate::error::Result;
use crate::view::View;

/// The interface a list container uses to display an adapter's data.
///
/// The container asks for [`count`](ListAdapter::count) and per-position
/// identity, then calls [`view_for`](ListAdapter::view_for) for each visible
/// position, handing back a row it no longer displays whenever it has one.
/// It listens on [`signals`](ListAdapter::signals) to learn when to
/// re-query.
///
/// All calls happen on the UI thread, synchronously.
pub trait ListAdapter {
    /// The item type.
    type Item;

    /// Returns the number of items.
    fn count(&self) -> usize;

    /// Returns the item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= count()`.
    fn item(&self, position: usize) -> &Self::Item;

    /// Returns the identity of the item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= count()`.
    fn item_id(&self, position: usize) -> u64;

    /// Returns a row bound to the item at `position`.
    ///
    /// `recycled` is a row previously returned by this adapter that the
    /// container no longer displays; `parent` is the container the row will
    /// be attached to.
    ///
    /// `recycled` is consumed even when an error is returned, so containers
    /// should check `position < count()` before taking a row from their
    /// recycle pool.
    fn view_for(
        &mut self,
        position: usize,
        recycled: Option<View>,
        parent: Option<&View>,
    ) -> Result<View>;

    /// Returns the change notification signals.
    fn signals(&self) -> &AdapterSignals;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the number of distinct row layouts this adapter produces.
    ///
    /// Containers keep one recycle pool per row type.
    fn view_type_count(&self) -> usize {
        1
    }

    /// Returns the row type of the item at `position`, in
    /// `[0, view_type_count())`.
    fn item_view_type(&self, _position: usize) -> usize {
        0
    }

    /// Returns `true` if item ids identify items uniquely and stably across
    /// data changes.
    fn has_stable_ids(&self) -> bool {
        false
    }
}

/// Signals emitted by adapters.
pub struct AdapterSignals {
    /// Emitted after the data changed. The container should re-query count
    /// and rebind visible rows.
    pub data_changed: Signal<()>,

    /// Emitted when the data is no longer available. The container should
    /// drop its rows.
    pub data_invalidated: Signal<()>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            data_changed: Signal::new(),
            data_invalidated: Signal::new(),
        }
    }

    /// Blocks or unblocks all adapter signals.
    pub fn set_blocked(&self, blocked: bool) {
        self.data_changed.set_blocked(blocked);
        self.data_invalidated.set_blocked(blocked);
    }
}
