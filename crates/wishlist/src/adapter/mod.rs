//! Single-type list adapter.
//!
//! [`SingleTypeAdapter<T, B>`] serves rows that all share one layout. It
//! owns the items, the row template, and the child view cache of every row
//! it has built. A [`RowBinder`] supplies the two pieces that vary between
//! lists: which child views to cache, and how to bind an item into a row.
//!
//! # Recycling
//!
//! Showing a row costs an inflation and one tree lookup per declared child
//! id. The adapter pays both once per physical row:
//!
//! ```text
//! view_for(position, recycled)
//!   │
//!   ├─ recycled = None ─────> inflate template
//!   │                           │
//!   │                           ├─> look up declared ids, cache found views
//!   │                           │
//!   │                           └─> binder.initialize(row)
//!   │
//!   ├─ recycled = Some(row) ─> reuse row and its cache as-is
//!   │
//!   └─> binder.update(position, row, item) ──> row
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wishlist::adapter::{ChildId, SingleTypeAdapter};
//! use wishlist::inflate::{LayoutRegistry, RowTemplate};
//! use wishlist::view::{LayoutId, TextView, ViewBuilder};
//!
//! const ROW: LayoutId = LayoutId::new(1);
//! const TITLE: ChildId<TextView> = ChildId::new(10);
//!
//! let registry = LayoutRegistry::new();
//! registry.register(ROW, || {
//!     ViewBuilder::group()
//!         .child(ViewBuilder::text().id(TITLE))
//!         .build()
//! });
//!
//! let mut adapter = SingleTypeAdapter::with_fn(
//!     RowTemplate::new(Arc::new(registry), ROW),
//!     [TITLE.id()],
//!     |_position, row, item: &String| {
//!         row.get(TITLE).set_text(item.as_str());
//!     },
//! );
//!
//! adapter.set_items(vec!["Milk".to_string(), "Eggs".to_string()]);
//! let row = adapter.view_for(1, None, None).unwrap();
//! let title = row.children()[0].as_text().unwrap();
//! assert_eq!(title.text(), "Eggs");
//! ```

mod binder;
mod cache;
mod host;
mod row;

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use wishlist_core::ThreadAffinity;
use wishlist_core::logging::targets;

use crate::error::{AdapterError, Result};
use crate::inflate::{LayoutInflater, RowTemplate};
use crate::view::{LayoutId, View, ViewId};

pub use binder::{FnBinder, RowBinder, ViewIds, join};
pub use cache::{ChildId, ChildViewCache};
pub use host::{AdapterSignals, ListAdapter};
pub use row::RowView;

use cache::RowCache;

/// Computes the identity the adapter reports for an item.
///
/// Equal items always get equal ids; distinct items may collide.
pub fn content_hash<T: Hash + ?Sized>(item: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish()
}

/// Adapter behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Emit `data_changed` automatically when items are replaced.
    pub notify_on_change: bool,
    /// Assert (in debug builds) that every call touching items, rows or
    /// notifications comes from the thread that built the adapter.
    pub check_thread: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            notify_on_change: true,
            check_thread: true,
        }
    }
}

/// Counters describing how much work the adapter has done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdapterStats {
    /// Rows built by inflating the template.
    pub rows_inflated: u64,
    /// Calls served by reusing a row this adapter built earlier.
    pub rows_recycled: u64,
    /// Child view lookups performed while populating row caches.
    pub child_lookups: u64,
    /// Calls to the binder's `update`.
    pub binds: u64,
}

/// Builder for adapters with custom configuration.
#[derive(Debug)]
pub struct AdapterBuilder {
    template: RowTemplate,
    config: AdapterConfig,
}

impl AdapterBuilder {
    /// Create a builder for rows built from `template`.
    pub fn new(template: RowTemplate) -> Self {
        Self {
            template,
            config: AdapterConfig::default(),
        }
    }

    /// Set whether replacing items emits `data_changed`.
    pub fn notify_on_change(mut self, notify: bool) -> Self {
        self.config.notify_on_change = notify;
        self
    }

    /// Set whether calls are checked against the creating thread.
    pub fn check_thread(mut self, check: bool) -> Self {
        self.config.check_thread = check;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the adapter with a binder.
    pub fn build<T, B: RowBinder<T>>(self, binder: B) -> SingleTypeAdapter<T, B> {
        SingleTypeAdapter::with_config(self.template, binder, self.config)
    }

    /// Build the adapter with a closure binder.
    pub fn build_fn<T, F>(self, ids: impl Into<ViewIds>, update: F) -> SingleTypeAdapter<T, FnBinder<F>>
    where
        F: Fn(usize, &RowView<'_>, &T),
    {
        self.build(FnBinder::new(ids, update))
    }
}

/// A list adapter whose rows all use one layout.
///
/// See the [module documentation](self) for the recycling protocol.
///
/// Item identity ([`item_id`](Self::item_id)) is the item's
/// [`content_hash`], so it is only available when `T: Hash`. Two distinct
/// items may hash alike; the adapter reports `has_stable_ids() == false`.
pub struct SingleTypeAdapter<T, B> {
    template: RowTemplate,
    binder: B,
    child_ids: ViewIds,
    items: Vec<T>,
    rows: RowCache,
    signals: AdapterSignals,
    config: AdapterConfig,
    stats: AdapterStats,
    affinity: ThreadAffinity,
}

impl<T, B: RowBinder<T>> SingleTypeAdapter<T, B> {
    /// Creates an empty adapter with default configuration.
    pub fn new(template: RowTemplate, binder: B) -> Self {
        Self::with_config(template, binder, AdapterConfig::default())
    }

    /// Creates an empty adapter from an inflater and layout id.
    pub fn with_inflater(inflater: Arc<dyn LayoutInflater>, layout: LayoutId, binder: B) -> Self {
        Self::new(RowTemplate::new(inflater, layout), binder)
    }

    /// Creates an empty adapter with the given configuration.
    ///
    /// The binder's child view ids are read here, once.
    pub fn with_config(template: RowTemplate, binder: B, config: AdapterConfig) -> Self {
        let child_ids = binder.child_view_ids();
        tracing::debug!(
            target: targets::ADAPTER,
            layout = %template.layout(),
            child_ids = child_ids.len(),
            "created adapter"
        );
        Self {
            template,
            binder,
            child_ids,
            items: Vec::new(),
            rows: RowCache::default(),
            signals: AdapterSignals::new(),
            config,
            stats: AdapterStats::default(),
            affinity: ThreadAffinity::current(),
        }
    }

    /// Replaces the items.
    ///
    /// Emits `data_changed` once if `notify_on_change` is set. Rows bound to
    /// the old items keep their content until the container rebinds them.
    pub fn set_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.check_thread();
        let previous = self.items.len();
        self.items = items.into_iter().collect();
        tracing::debug!(
            target: targets::ADAPTER,
            previous,
            count = self.items.len(),
            "replaced items"
        );
        if self.config.notify_on_change {
            self.notify_data_set_changed();
        }
    }

    /// Removes all items. Same notification behavior as `set_items`.
    pub fn clear(&mut self) {
        self.set_items(std::iter::empty());
    }

    /// Returns the current items.
    pub fn items(&self) -> &[T] {
        self.check_thread();
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.check_thread();
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn item(&self, position: usize) -> &T {
        match self.try_item(position) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the item at `position`, or a bounds error.
    pub fn try_item(&self, position: usize) -> Result<&T> {
        self.check_thread();
        self.items
            .get(position)
            .ok_or_else(|| AdapterError::out_of_bounds(position, self.items.len()))
    }

    /// Returns a row bound to the item at `position`.
    ///
    /// Without `recycled`, a new row is inflated, its declared child ids
    /// are looked up and cached, and the binder's `initialize` runs on it.
    /// With `recycled`, the row and its cache are reused without any lookup.
    /// Either way the binder's `update` runs exactly once.
    ///
    /// Rows are inflated detached; `_parent` is not consulted.
    ///
    /// A recycled row this adapter did not build gets its cache populated and
    /// is initialized on first sight.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::PositionOutOfBounds`] for `position >= len()`
    /// and inflation errors from the template. On error `recycled` is
    /// consumed and dropped; check the position against `len()` before
    /// taking a row out of a recycle pool.
    pub fn view_for(
        &mut self,
        position: usize,
        recycled: Option<View>,
        _parent: Option<&View>,
    ) -> Result<View> {
        self.check_thread();
        let count = self.items.len();
        if position >= count {
            return Err(AdapterError::out_of_bounds(position, count));
        }

        let was_recycled = recycled.is_some();
        let row = match recycled {
            Some(row) => row,
            None => self.template.inflate()?,
        };

        match (was_recycled, self.rows.contains(&row)) {
            (true, true) => self.stats.rows_recycled += 1,
            (true, false) => tracing::warn!(
                target: targets::ADAPTER,
                position,
                key = row.key().as_raw(),
                "recycled row was not built by this adapter, caching its children now"
            ),
            (false, _) => self.stats.rows_inflated += 1,
        }
        tracing::trace!(target: targets::ADAPTER, position, recycled = was_recycled, "view_for");

        let child_ids = &self.child_ids;
        let stats = &mut self.stats;
        let layout = self.template.layout();
        let (children, is_new) = self.rows.get_or_insert_with(&row, || {
            let (children, lookups) = cache::ChildViewCache::populate(&row, child_ids);
            stats.child_lookups += lookups as u64;
            tracing::debug!(
                target: targets::ADAPTER,
                %layout,
                cached = children.len(),
                missing = lookups - children.len(),
                "cached row children"
            );
            children
        });

        let handle = RowView::new(&row, children, position);
        if is_new {
            self.binder.initialize(&handle);
        }
        self.stats.binds += 1;
        self.binder.update(position, &handle, &self.items[position]);
        Ok(row)
    }

    /// Emits `data_changed`.
    pub fn notify_data_set_changed(&self) {
        self.check_thread();
        self.signals.data_changed.emit(());
    }

    /// Emits `data_invalidated`.
    pub fn notify_data_set_invalidated(&self) {
        self.check_thread();
        self.signals.data_invalidated.emit(());
    }

    /// Returns the change notification signals.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    /// Returns the child cache of a row this adapter built.
    pub fn child_cache(&self, row: &View) -> Option<&ChildViewCache> {
        self.check_thread();
        self.rows.get(row)
    }

    /// Forgets a row's cache. Returns `false` if the row was unknown.
    ///
    /// Call this when the container discards a row for good. Caches of rows
    /// that are simply dropped are reclaimed the next time a row is built.
    pub fn release_row(&mut self, row: &View) -> bool {
        self.check_thread();
        self.rows.remove(row)
    }

    /// Returns the number of rows whose caches are held and still alive.
    pub fn cached_rows(&self) -> usize {
        self.check_thread();
        self.rows.live_rows()
    }

    /// Returns the declared child view ids.
    pub fn child_view_ids(&self) -> &ViewIds {
        &self.child_ids
    }

    /// Returns `true` if `id` is a declared child view id.
    pub fn declares_child(&self, id: ViewId) -> bool {
        self.child_ids.contains(&id)
    }

    /// Returns the row template.
    pub fn template(&self) -> &RowTemplate {
        &self.template
    }

    /// Returns the binder.
    pub fn binder(&self) -> &B {
        &self.binder
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Returns the work counters.
    pub fn stats(&self) -> AdapterStats {
        self.stats
    }

    fn check_thread(&self) {
        if self.config.check_thread {
            self.affinity.debug_assert_same_thread();
        }
    }
}

impl<T, B: RowBinder<T>> SingleTypeAdapter<T, B>
where
    T: Hash,
{
    /// Returns the identity of the item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn item_id(&self, position: usize) -> u64 {
        content_hash(self.item(position))
    }

    /// Returns the identity of the item at `position`, or a bounds error.
    pub fn try_item_id(&self, position: usize) -> Result<u64> {
        self.try_item(position).map(content_hash)
    }
}

impl SingleTypeAdapter<(), ()> {
    /// Creates an empty adapter from a declared id list and an update closure.
    pub fn with_fn<T, F>(
        template: RowTemplate,
        ids: impl Into<ViewIds>,
        update: F,
    ) -> SingleTypeAdapter<T, FnBinder<F>>
    where
        F: Fn(usize, &RowView<'_>, &T),
    {
        SingleTypeAdapter::new(template, FnBinder::new(ids, update))
    }

    /// Starts building an adapter with custom configuration.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use wishlist::adapter::SingleTypeAdapter;
    /// # use wishlist::inflate::{LayoutRegistry, RowTemplate};
    /// # use wishlist::view::{LayoutId, ViewId};
    /// let template = RowTemplate::new(Arc::new(LayoutRegistry::new()), LayoutId::new(1));
    /// let adapter = SingleTypeAdapter::builder(template)
    ///     .notify_on_change(false)
    ///     .build_fn::<u32, _>(Vec::<ViewId>::new(), |_, _, _| {});
    /// assert!(!adapter.config().notify_on_change);
    /// ```
    pub fn builder(template: RowTemplate) -> AdapterBuilder {
        AdapterBuilder::new(template)
    }
}

impl<T, B: RowBinder<T>> ListAdapter for SingleTypeAdapter<T, B>
where
    T: Hash,
{
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn item(&self, position: usize) -> &T {
        SingleTypeAdapter::item(self, position)
    }

    fn item_id(&self, position: usize) -> u64 {
        SingleTypeAdapter::item_id(self, position)
    }

    fn view_for(
        &mut self,
        position: usize,
        recycled: Option<View>,
        parent: Option<&View>,
    ) -> Result<View> {
        SingleTypeAdapter::view_for(self, position, recycled, parent)
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}

impl<T, B> fmt::Debug for SingleTypeAdapter<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleTypeAdapter")
            .field("layout", &self.template.layout())
            .field("child_ids", &self.child_ids)
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
