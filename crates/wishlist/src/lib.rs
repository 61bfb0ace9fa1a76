//! Wishlist - list adapters with row recycling.
//!
//! A list container shows many rows but only builds as many as fit on
//! screen, handing rows that scroll out of view back to its adapter for
//! reuse. [`SingleTypeAdapter`] implements that protocol for lists whose rows
//! all share one layout, and caches each row's child views so that binding
//! an item never walks the view tree.
//!
//! # Modules
//!
//! - [`adapter`]: the adapter, its binder trait, and the container contract
//! - [`inflate`]: turning layout ids into view trees
//! - [`view`]: the view model rows are made of
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wishlist::{ChildId, RowBinder, RowView, SingleTypeAdapter, ViewIds};
//! use wishlist::inflate::LayoutRegistry;
//! use wishlist::view::{ImageView, LayoutId, TextView, ViewBuilder};
//!
//! #[derive(Hash)]
//! struct Contact {
//!     name: String,
//!     starred: bool,
//! }
//!
//! const CONTACT_ROW: LayoutId = LayoutId::new(1);
//! const NAME: ChildId<TextView> = ChildId::new(10);
//! const STAR: ChildId<ImageView> = ChildId::new(20);
//!
//! struct ContactBinder;
//!
//! impl RowBinder<Contact> for ContactBinder {
//!     fn child_view_ids(&self) -> ViewIds {
//!         [NAME.id(), STAR.id()].into()
//!     }
//!
//!     fn update(&self, _position: usize, row: &RowView<'_>, contact: &Contact) {
//!         row.get(NAME).set_text(contact.name.as_str());
//!         row.set_visible(STAR, contact.starred);
//!     }
//! }
//!
//! let layouts = LayoutRegistry::new();
//! layouts.register(CONTACT_ROW, || {
//!     ViewBuilder::group()
//!         .child(ViewBuilder::text().id(NAME))
//!         .child(ViewBuilder::image().id(STAR))
//!         .build()
//! });
//!
//! let mut adapter = SingleTypeAdapter::with_inflater(Arc::new(layouts), CONTACT_ROW, ContactBinder);
//! adapter.set_items(vec![
//!     Contact { name: "Ada".into(), starred: true },
//!     Contact { name: "Grace".into(), starred: false },
//! ]);
//!
//! // First row: inflated and cached.
//! let row = adapter.view_for(0, None, None)?;
//! // Scrolled: the same row is rebound to another position.
//! let row = adapter.view_for(1, Some(row), None)?;
//!
//! assert_eq!(adapter.stats().rows_inflated, 1);
//! assert_eq!(adapter.stats().rows_recycled, 1);
//! # let _ = row;
//! # Ok::<(), wishlist::AdapterError>(())
//! ```

pub mod adapter;
pub mod error;
pub mod inflate;
pub mod view;

pub use adapter::{
    AdapterBuilder, AdapterConfig, AdapterSignals, AdapterStats, ChildId, ChildViewCache,
    FnBinder, ListAdapter, RowBinder, RowView, SingleTypeAdapter, ViewIds, content_hash, join,
};
pub use error::{AdapterError, Result};
pub use inflate::{LayoutInflater, LayoutRegistry, RowTemplate};
pub use view::{LayoutId, View, ViewId};

pub use wishlist_core::{ConnectionId, Signal};
