//! View nodes and the shared `View` handle.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::id::{ViewId, ViewKey};
use super::kind::{ImageSource, ImageView, TextView, ViewCast, ViewKind};

/// Whether a view takes part in display and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Displayed.
    #[default]
    Visible,
    /// Hidden, but still occupies its space.
    Invisible,
    /// Hidden and takes no space.
    Gone,
}

/// Kind-specific state of a node.
pub(crate) enum Content {
    Text(RwLock<String>),
    Image(RwLock<Option<ImageSource>>),
    Group,
}

struct ViewNode {
    key: ViewKey,
    id: Option<ViewId>,
    content: Content,
    visibility: RwLock<Visibility>,
    children: Vec<View>,
}

/// A shared handle to a view node.
///
/// Cloning a `View` clones the handle, not the node: all clones refer to the
/// same instance. Equality is identity, never structure; two rows inflated
/// from one layout compare unequal.
///
/// The tree shape is fixed when the view is built. Visual state (text,
/// image, visibility) is mutable through the handle.
#[derive(Clone)]
pub struct View {
    node: Arc<ViewNode>,
}

impl View {
    /// Returns the identity key of this view instance.
    pub fn key(&self) -> ViewKey {
        self.node.key
    }

    /// Returns the layout id of this view, if it has one.
    pub fn id(&self) -> Option<ViewId> {
        self.node.id
    }

    /// Returns the kind of this view.
    pub fn kind(&self) -> ViewKind {
        match self.node.content {
            Content::Text(_) => ViewKind::Text,
            Content::Image(_) => ViewKind::Image,
            Content::Group => ViewKind::Group,
        }
    }

    pub(crate) fn content(&self) -> &Content {
        &self.node.content
    }

    /// Returns the direct children of this view.
    pub fn children(&self) -> &[View] {
        &self.node.children
    }

    /// Returns the current visibility.
    pub fn visibility(&self) -> Visibility {
        *self.node.visibility.read()
    }

    /// Sets the visibility.
    pub fn set_visibility(&self, visibility: Visibility) {
        *self.node.visibility.write() = visibility;
    }

    /// Returns `true` if the two handles refer to the same view instance.
    pub fn same(a: &View, b: &View) -> bool {
        Arc::ptr_eq(&a.node, &b.node)
    }

    /// Finds the view with the given id in this subtree.
    ///
    /// The view itself is checked first, then its descendants depth-first in
    /// child order. Returns the first match.
    pub fn find_view_by_id(&self, id: ViewId) -> Option<View> {
        if self.node.id == Some(id) {
            return Some(self.clone());
        }
        self.node
            .children
            .iter()
            .find_map(|child| child.find_view_by_id(id))
    }

    /// Casts to a typed handle.
    ///
    /// `view.cast_as::<TextView>()` is the method form of `TextView::cast(&view)`.
    pub fn cast_as<K: ViewCast>(&self) -> Option<K> {
        K::cast(self)
    }

    /// Casts to a text view.
    pub fn as_text(&self) -> Option<TextView> {
        TextView::cast(self)
    }

    /// Casts to an image view.
    pub fn as_image(&self) -> Option<ImageView> {
        ImageView::cast(self)
    }

    /// Creates a weak handle that does not keep the view alive.
    pub fn downgrade(&self) -> WeakView {
        WeakView {
            node: Arc::downgrade(&self.node),
        }
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        View::same(self, other)
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("key", &self.node.key)
            .field("id", &self.node.id)
            .field("kind", &self.kind())
            .field("children", &self.node.children.len())
            .finish()
    }
}

/// A weak reference to a view.
#[derive(Clone)]
pub struct WeakView {
    node: Weak<ViewNode>,
}

impl WeakView {
    /// Returns the view if it is still alive.
    pub fn upgrade(&self) -> Option<View> {
        self.node.upgrade().map(|node| View { node })
    }

    /// Returns `true` if some strong handle still refers to the view.
    pub fn is_alive(&self) -> bool {
        self.node.strong_count() > 0
    }
}

impl fmt::Debug for WeakView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakView")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Builds a view tree.
///
/// # Example
///
/// ```
/// use wishlist::view::{ViewBuilder, ViewId};
///
/// let row = ViewBuilder::group()
///     .child(ViewBuilder::text().id(10).with_text("Name"))
///     .child(ViewBuilder::image().id(20))
///     .build();
///
/// assert!(row.find_view_by_id(ViewId::new(20)).is_some());
/// ```
pub struct ViewBuilder {
    id: Option<ViewId>,
    kind: ViewKind,
    text: String,
    image: Option<ImageSource>,
    visibility: Visibility,
    children: Vec<View>,
}

impl ViewBuilder {
    fn new(kind: ViewKind) -> Self {
        Self {
            id: None,
            kind,
            text: String::new(),
            image: None,
            visibility: Visibility::Visible,
            children: Vec::new(),
        }
    }

    /// Starts a text view.
    pub fn text() -> Self {
        Self::new(ViewKind::Text)
    }

    /// Starts an image view.
    pub fn image() -> Self {
        Self::new(ViewKind::Image)
    }

    /// Starts a group (container or plain) view.
    pub fn group() -> Self {
        Self::new(ViewKind::Group)
    }

    /// Sets the layout id.
    pub fn id(mut self, id: impl Into<ViewId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the initial text. Ignored for non-text views.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the initial image. Ignored for non-image views.
    pub fn with_image(mut self, image: impl Into<ImageSource>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the initial visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Appends a child view.
    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builds the view.
    pub fn build(self) -> View {
        let content = match self.kind {
            ViewKind::Text => Content::Text(RwLock::new(self.text)),
            ViewKind::Image => Content::Image(RwLock::new(self.image)),
            ViewKind::Group => Content::Group,
        };
        View {
            node: Arc::new(ViewNode {
                key: ViewKey::next(),
                id: self.id,
                content,
                visibility: RwLock::new(self.visibility),
                children: self.children,
            }),
        }
    }
}

impl From<ViewBuilder> for View {
    fn from(builder: ViewBuilder) -> Self {
        builder.build()
    }
}

static_assertions::assert_impl_all!(View: Send, Sync);
