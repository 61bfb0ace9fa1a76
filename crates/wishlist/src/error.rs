//! Error types for list adapters.

use crate::view::{LayoutId, ViewId};

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors that can occur while serving rows to a list container.
///
/// `PositionOutOfBounds` and `ViewTypeMismatch` are caller contract
/// violations; the non-`try_` accessors panic with their message instead of
/// returning them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// A position outside `[0, count)` was requested.
    #[error("position {position} out of bounds for adapter with {count} items")]
    PositionOutOfBounds { position: usize, count: usize },

    /// A cached child view was requested as an incompatible kind.
    #[error("child view {id} is a {actual} view, expected {expected}")]
    ViewTypeMismatch {
        id: ViewId,
        expected: &'static str,
        actual: &'static str,
    },

    /// The row has no cached child view for the id.
    #[error("child view {id} is not cached on this row")]
    ChildNotCached { id: ViewId },

    /// The inflater has no template registered for the layout.
    #[error("no layout registered for {0}")]
    UnknownLayout(LayoutId),

    /// The inflater failed to build the layout.
    #[error("failed to inflate {layout}: {message}")]
    Inflate { layout: LayoutId, message: String },
}

impl AdapterError {
    /// Create a bounds error.
    pub fn out_of_bounds(position: usize, count: usize) -> Self {
        Self::PositionOutOfBounds { position, count }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(id: ViewId, expected: &'static str, actual: &'static str) -> Self {
        Self::ViewTypeMismatch {
            id,
            expected,
            actual,
        }
    }

    /// Create an inflation error.
    pub fn inflate(layout: LayoutId, message: impl Into<String>) -> Self {
        Self::Inflate {
            layout,
            message: message.into(),
        }
    }
}
