//! The row handle passed to binders.

use crate::error::Result;
use crate::view::{ImageSource, ImageView, TextView, View, ViewCast, ViewId, Visibility};

use super::cache::{ChildId, ChildViewCache};

/// A row being bound, with access to its cached child views.
///
/// All lookups read the row's child cache; none of them walk the view
/// tree. The panicking accessors treat a wrong kind or an id that was not
/// cached as a programming error. Use [`try_get`](Self::try_get) when the
/// layout may legitimately lack a child.
pub struct RowView<'a> {
    row: &'a View,
    children: &'a ChildViewCache,
    position: usize,
}

impl<'a> RowView<'a> {
    pub(crate) fn new(row: &'a View, children: &'a ChildViewCache, position: usize) -> Self {
        Self {
            row,
            children,
            position,
        }
    }

    /// The row's root view.
    pub fn row(&self) -> &'a View {
        self.row
    }

    /// The position being bound.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The row's child cache.
    pub fn children(&self) -> &'a ChildViewCache {
        self.children
    }

    /// Returns `true` if a child view is cached for the id.
    pub fn has_child(&self, id: impl Into<ViewId>) -> bool {
        self.children.contains(id.into())
    }

    /// Returns the cached child for a typed id.
    ///
    /// # Panics
    ///
    /// Panics if no view is cached for the id or the cached view is not a `K`.
    pub fn get<K: ViewCast>(&self, child: ChildId<K>) -> K {
        self.expect(child.id())
    }

    /// Returns the cached child for the id as `K`.
    pub fn try_get<K: ViewCast>(&self, id: impl Into<ViewId>) -> Result<K> {
        self.children.get_as(id.into())
    }

    /// Returns the cached child view for the id.
    ///
    /// # Panics
    ///
    /// Panics if no view is cached for the id.
    pub fn view(&self, id: impl Into<ViewId>) -> View {
        self.expect(id.into())
    }

    /// Returns the cached text view for the id.
    ///
    /// # Panics
    ///
    /// Panics if no view is cached for the id or it is not a text view.
    pub fn text_view(&self, id: impl Into<ViewId>) -> TextView {
        self.expect(id.into())
    }

    /// Returns the cached image view for the id.
    ///
    /// # Panics
    ///
    /// Panics if no view is cached for the id or it is not an image view.
    pub fn image_view(&self, id: impl Into<ViewId>) -> ImageView {
        self.expect(id.into())
    }

    /// Sets the text of the cached text view and returns it.
    ///
    /// # Panics
    ///
    /// Same as [`text_view`](Self::text_view).
    pub fn set_text(&self, id: impl Into<ViewId>, text: impl Into<String>) -> TextView {
        let view = self.text_view(id);
        view.set_text(text);
        view
    }

    /// Sets the image of the cached image view and returns it.
    ///
    /// # Panics
    ///
    /// Same as [`image_view`](Self::image_view).
    pub fn set_image(&self, id: impl Into<ViewId>, image: Option<ImageSource>) -> ImageView {
        let view = self.image_view(id);
        view.set_image(image);
        view
    }

    /// Shows or hides (as [`Visibility::Gone`]) the cached child view.
    ///
    /// # Panics
    ///
    /// Panics if no view is cached for the id.
    pub fn set_visible(&self, id: impl Into<ViewId>, visible: bool) -> View {
        let view = self.view(id);
        view.set_visibility(if visible {
            Visibility::Visible
        } else {
            Visibility::Gone
        });
        view
    }

    fn expect<K: ViewCast>(&self, id: ViewId) -> K {
        match self.children.get_as(id) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }
}
