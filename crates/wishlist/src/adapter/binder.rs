//! Row binding.

use std::sync::Arc;

use crate::view::ViewId;

use super::row::RowView;

/// An ordered, immutable list of child view ids.
pub type ViewIds = Arc<[ViewId]>;

/// Defines what a single-type adapter caches and how it fills a row.
///
/// # Example
///
/// ```
/// use wishlist::adapter::{ChildId, RowBinder, RowView, ViewIds};
/// use wishlist::view::TextView;
///
/// struct Contact {
///     name: String,
/// }
///
/// const NAME: ChildId<TextView> = ChildId::new(10);
///
/// struct ContactBinder;
///
/// impl RowBinder<Contact> for ContactBinder {
///     fn child_view_ids(&self) -> ViewIds {
///         [NAME.id()].into()
///     }
///
///     fn update(&self, _position: usize, row: &RowView<'_>, item: &Contact) {
///         row.get(NAME).set_text(item.name.as_str());
///     }
/// }
/// ```
pub trait RowBinder<T> {
    /// The child view ids to cache on every row.
    ///
    /// Read once, when the adapter is constructed. May be empty.
    fn child_view_ids(&self) -> ViewIds;

    /// Binds `item` into `row`.
    ///
    /// Called exactly once per rendered row, for fresh and recycled rows
    /// alike, so it must set every piece of visual state it touches and must
    /// not affect anything beyond the row.
    fn update(&self, position: usize, row: &RowView<'_>, item: &T);

    /// One-time setup of a row the adapter has not seen before.
    ///
    /// Runs after the row's children are cached and before its first
    /// `update`. Never runs again for that row, however often it is
    /// recycled. Put state here that does not depend on the item: static
    /// styling, fixed images, visibility of optional decorations.
    fn initialize(&self, row: &RowView<'_>) {
        let _ = row;
    }
}

type InitFn = Box<dyn Fn(&RowView<'_>) + Send + Sync>;

/// A [`RowBinder`] built from an id list and a closure.
pub struct FnBinder<F> {
    ids: ViewIds,
    update: F,
    initialize: Option<InitFn>,
}

impl<F> FnBinder<F> {
    /// Creates a closure binder.
    pub fn new(ids: impl Into<ViewIds>, update: F) -> Self {
        Self {
            ids: ids.into(),
            update,
            initialize: None,
        }
    }

    /// Sets the one-time row setup closure (see [`RowBinder::initialize`]).
    pub fn on_initialize(mut self, initialize: impl Fn(&RowView<'_>) + Send + Sync + 'static) -> Self {
        self.initialize = Some(Box::new(initialize));
        self
    }
}

impl<T, F> RowBinder<T> for FnBinder<F>
where
    F: Fn(usize, &RowView<'_>, &T),
{
    fn child_view_ids(&self) -> ViewIds {
        self.ids.clone()
    }

    fn update(&self, position: usize, row: &RowView<'_>, item: &T) {
        (self.update)(position, row, item)
    }

    fn initialize(&self, row: &RowView<'_>) {
        if let Some(initialize) = &self.initialize {
            initialize(row);
        }
    }
}

/// Appends `extra` to `base`.
///
/// Returns `base` itself (the same allocation) when `extra` is empty, so
/// binders that extend a parent's id list without adding anything share it.
///
/// ```
/// use std::sync::Arc;
/// use wishlist::adapter::{join, ViewIds};
/// use wishlist::view::ViewId;
///
/// let base: ViewIds = [ViewId::new(1)].into();
/// assert!(Arc::ptr_eq(&join(&base, &[]), &base));
/// assert_eq!(join(&base, &[ViewId::new(2)]).len(), 2);
/// ```
pub fn join(base: &ViewIds, extra: &[ViewId]) -> ViewIds {
    if extra.is_empty() {
        return Arc::clone(base);
    }
    base.iter().chain(extra).copied().collect()
}
