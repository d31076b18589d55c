//! # Snapshot Testing Support
//!
//! Utilities for testing the reader and writer via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed [`Document`](crate::models::Document)
//!   into a `Snap` whose `Debug` output is stable and readable (bodies shown
//!   as text) for `insta` snapshot testing
//! - **`invariants`**: Runtime checks that a document survives a write and
//!   read unchanged and that writing is idempotent

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
