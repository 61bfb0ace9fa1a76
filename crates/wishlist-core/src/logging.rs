//! Logging facilities for Wishlist.
//!
//! Wishlist uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("wishlist=debug")
//!         .init();
//! }
//! ```
//!
//! Row inflation is wrapped in a [`PerfSpan`], so a subscriber that records
//! span timings shows where scrolling spends its time.

/// Span names used throughout Wishlist for tracing.
pub mod span_names {
    /// Performance span wrapping expensive operations.
    pub const PERF: &str = "wishlist::perf";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "wishlist_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "wishlist_core::signal";
    /// Adapter lifecycle target (items, rows, recycling).
    pub const ADAPTER: &str = "wishlist::adapter";
    /// Layout inflation target.
    pub const INFLATE: &str = "wishlist::inflate";
}

/// A guard for performance tracing spans.
///
/// Creates an entered `tracing` span that is exited when the guard is
/// dropped.
///
/// # Example
///
/// ```
/// use wishlist_core::logging::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("inflate_row");
///     // ... expensive work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: span_names::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
