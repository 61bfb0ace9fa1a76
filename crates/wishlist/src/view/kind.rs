//! View kinds and typed view handles.

use super::node::{Content, View};

/// The kind of a view node.
///
/// The kind is fixed by the layout that built the view, not by the adapter,
/// so typed access to a view goes through a runtime check ([`ViewCast`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// A view displaying a string.
    Text,
    /// A view displaying an image.
    Image,
    /// Any other view: containers and plain leaf views.
    Group,
}

impl ViewKind {
    /// Lower-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Group => "group",
        }
    }
}

/// The image displayed by an [`ImageView`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// A bundled image resource.
    Resource(u32),
    /// An image loaded from a URI.
    Uri(String),
}

impl From<u32> for ImageSource {
    fn from(id: u32) -> Self {
        Self::Resource(id)
    }
}

impl From<&str> for ImageSource {
    fn from(uri: &str) -> Self {
        Self::Uri(uri.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(uri: String) -> Self {
        Self::Uri(uri)
    }
}

/// Conversion from an untyped [`View`] to a typed handle.
pub trait ViewCast: Sized {
    /// Name of the expected kind, used in mismatch errors.
    const EXPECTED: &'static str;

    /// Returns the typed handle, or `None` if the view has another kind.
    fn cast(view: &View) -> Option<Self>;
}

impl ViewCast for View {
    const EXPECTED: &'static str = "view";

    fn cast(view: &View) -> Option<Self> {
        Some(view.clone())
    }
}

/// A view known to be of kind [`ViewKind::Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView(View);

impl TextView {
    /// Returns the current text.
    pub fn text(&self) -> String {
        match self.0.content() {
            Content::Text(text) => text.read().clone(),
            _ => unreachable!("TextView wraps a text node"),
        }
    }

    /// Replaces the text.
    pub fn set_text(&self, text: impl Into<String>) {
        if let Content::Text(current) = self.0.content() {
            *current.write() = text.into();
        }
    }

    /// The underlying view.
    pub fn view(&self) -> &View {
        &self.0
    }
}

impl ViewCast for TextView {
    const EXPECTED: &'static str = "text";

    fn cast(view: &View) -> Option<Self> {
        (view.kind() == ViewKind::Text).then(|| Self(view.clone()))
    }
}

/// A view known to be of kind [`ViewKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView(View);

impl ImageView {
    /// Returns the displayed image, if any.
    pub fn image(&self) -> Option<ImageSource> {
        match self.0.content() {
            Content::Image(image) => image.read().clone(),
            _ => unreachable!("ImageView wraps an image node"),
        }
    }

    /// Replaces the displayed image. `None` clears it.
    pub fn set_image(&self, image: Option<ImageSource>) {
        if let Content::Image(current) = self.0.content() {
            *current.write() = image;
        }
    }

    /// The underlying view.
    pub fn view(&self) -> &View {
        &self.0
    }
}

impl ViewCast for ImageView {
    const EXPECTED: &'static str = "image";

    fn cast(view: &View) -> Option<Self> {
        (view.kind() == ViewKind::Image).then(|| Self(view.clone()))
    }
}
