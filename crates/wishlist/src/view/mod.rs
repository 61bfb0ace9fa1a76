//! The view model adapters produce and bind.
//!
//! A row is a tree of [`View`] nodes. Each node has a process-unique
//! identity ([`ViewKey`]), an optional layout id ([`ViewId`]) naming its slot
//! in the layout, a kind ([`ViewKind`]), and mutable visual state.
//!
//! Looking a descendant up by id ([`View::find_view_by_id`]) walks the
//! subtree. Adapters do it once per row, when the row is first built, and
//! cache the results.
//!
//! # Kinds
//!
//! | Kind    | Typed handle  | State              |
//! |---------|---------------|--------------------|
//! | `Text`  | [`TextView`]  | `String`           |
//! | `Image` | [`ImageView`] | `Option<ImageSource>` |
//! | `Group` | [`View`]      | children only      |

mod id;
mod kind;
mod node;

pub use id::{LayoutId, ViewId, ViewKey};
pub use kind::{ImageSource, ImageView, TextView, ViewCast, ViewKind};
pub use node::{View, ViewBuilder, Visibility, WeakView};
