//! Identifiers for views and layouts.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A global counter for generating view identity keys.
static VIEW_KEY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies a view inside a layout.
///
/// Several views in different rows share the same `ViewId`: it names a slot
/// in the layout, not a particular view instance. Use [`ViewKey`] for
/// instance identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(i32);

impl ViewId {
    /// Creates a view id.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ViewId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies a row layout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(u32);

impl LayoutId {
    /// Creates a layout id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout/{}", self.0)
    }
}

/// Process-unique identity of a view instance.
///
/// Two views built from the same layout are structurally identical but have
/// different keys. Keys are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewKey(u64);

impl ViewKey {
    pub(crate) fn next() -> Self {
        Self(VIEW_KEY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw key value.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}
