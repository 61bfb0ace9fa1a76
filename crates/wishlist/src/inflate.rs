//! Layout inflation.
//!
//! Inflation turns a [`LayoutId`] into a fresh view tree. It is one of the
//! two expensive steps of showing a row (the other is looking up the row's
//! child views), which is why adapters recycle rows instead of inflating one
//! per position.
//!
//! Any type implementing [`LayoutInflater`] can back an adapter, including
//! plain closures. [`LayoutRegistry`] is an in-process inflater mapping
//! layout ids to builder functions.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use wishlist_core::PerfSpan;
use wishlist_core::logging::targets;

use crate::error::{AdapterError, Result};
use crate::view::{LayoutId, View};

/// Produces new view hierarchies from layout ids.
///
/// Every call must return a new view instance; returning a view that is
/// already in use would let two positions share one row.
pub trait LayoutInflater: Send + Sync {
    /// Builds a new view tree for the layout.
    fn inflate(&self, layout: LayoutId) -> Result<View>;
}

impl<F> LayoutInflater for F
where
    F: Fn(LayoutId) -> Result<View> + Send + Sync,
{
    fn inflate(&self, layout: LayoutId) -> Result<View> {
        self(layout)
    }
}

type LayoutFactory = Arc<dyn Fn() -> View + Send + Sync>;

/// An inflater backed by registered layout builders.
///
/// # Example
///
/// ```
/// use wishlist::inflate::{LayoutInflater, LayoutRegistry};
/// use wishlist::view::{LayoutId, ViewBuilder};
///
/// const CONTACT_ROW: LayoutId = LayoutId::new(1);
///
/// let registry = LayoutRegistry::new();
/// registry.register(CONTACT_ROW, || {
///     ViewBuilder::group()
///         .child(ViewBuilder::text().id(10))
///         .build()
/// });
///
/// let row = registry.inflate(CONTACT_ROW).unwrap();
/// assert_eq!(row.children().len(), 1);
/// ```
#[derive(Default)]
pub struct LayoutRegistry {
    layouts: RwLock<HashMap<LayoutId, LayoutFactory>>,
}

impl LayoutRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the builder for a layout, replacing any previous one.
    pub fn register<F>(&self, layout: LayoutId, factory: F)
    where
        F: Fn() -> View + Send + Sync + 'static,
    {
        self.layouts.write().insert(layout, Arc::new(factory));
    }

    /// Returns `true` if the layout has a builder.
    pub fn contains(&self, layout: LayoutId) -> bool {
        self.layouts.read().contains_key(&layout)
    }

    /// Returns the number of registered layouts.
    pub fn len(&self) -> usize {
        self.layouts.read().len()
    }

    /// Returns `true` if no layouts are registered.
    pub fn is_empty(&self) -> bool {
        self.layouts.read().is_empty()
    }
}

impl LayoutInflater for LayoutRegistry {
    fn inflate(&self, layout: LayoutId) -> Result<View> {
        // Clone the factory out so builders may consult the registry.
        let factory = self
            .layouts
            .read()
            .get(&layout)
            .cloned()
            .ok_or(AdapterError::UnknownLayout(layout))?;
        Ok(factory())
    }
}

impl fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut layouts: Vec<_> = self.layouts.read().keys().copied().collect();
        layouts.sort();
        f.debug_struct("LayoutRegistry")
            .field("layouts", &layouts)
            .finish()
    }
}

/// How to construct one row: a layout id plus the inflater that builds it.
///
/// Fixed for the lifetime of the adapter that owns it.
#[derive(Clone)]
pub struct RowTemplate {
    inflater: Arc<dyn LayoutInflater>,
    layout: LayoutId,
}

impl RowTemplate {
    /// Creates a template descriptor.
    pub fn new(inflater: Arc<dyn LayoutInflater>, layout: LayoutId) -> Self {
        Self { inflater, layout }
    }

    /// Returns the layout id.
    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    /// Returns the inflater.
    pub fn inflater(&self) -> &Arc<dyn LayoutInflater> {
        &self.inflater
    }

    /// Inflates a new row.
    pub fn inflate(&self) -> Result<View> {
        let _span = PerfSpan::new("inflate_row");
        let row = self.inflater.inflate(self.layout)?;
        tracing::trace!(
            target: targets::INFLATE,
            layout = %self.layout,
            key = row.key().as_raw(),
            "inflated row"
        );
        Ok(row)
    }
}

impl fmt::Debug for RowTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowTemplate")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
