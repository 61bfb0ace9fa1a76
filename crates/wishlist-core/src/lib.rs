//! Core systems for Wishlist.
//!
//! This crate provides the pieces of UI infrastructure that list adapters
//! build on:
//!
//! - **Signal/Slot System**: Type-safe change notification from an adapter to
//!   the list container hosting it
//! - **Thread Affinity**: Assertions that UI-owned state stays on the thread
//!   that created it
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use wishlist_core::Signal;
//!
//! // Create a signal that notifies when the adapter's data changes
//! let data_changed = Signal::<()>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = data_changed.connect(|_| {
//!     println!("data changed, re-query count and rows");
//! });
//!
//! // Emit the signal
//! data_changed.emit(());
//!
//! // Disconnect when done
//! data_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
pub mod thread_check;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
