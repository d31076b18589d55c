//! # Fixture Record Format
//!
//! Reader and writer for fixture files: a title followed by titled,
//! optionally commented sections whose bodies are stored verbatim.
//!
//! ```text
//! # <document title>
//!
//! ---
//! # <section title>
//! ## <comment line>
//!
//! <tab><body line>
//!
//! ---
//! ```
//!
//! ## Modules
//!
//! - **`serialize`**: deterministic writer; the output of a document is always
//!   byte-identical
//! - **`parse`**: line classifier plus a state-machine builder; forgiving about
//!   a missing trailing separator and empty bodies, strict about everything else
//! - **`snapshot`**: normalized views and invariant checks for tests
//!
//! Body lines are written with one leading tab, so a body can never produce a
//! bare `---` line and never needs escaping. Titles are the only field with a
//! limit: they cannot contain a line break.

pub mod error;
pub mod parse;
pub mod serialize;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use error::{FixtureError, Malformed};
pub use parse::parse;
pub use serialize::{serialize, write_document};

/// Starts a document or section title line.
pub const TITLE_MARKER: &[u8] = b"# ";
/// Starts a comment line.
pub const COMMENT_MARKER: &[u8] = b"## ";
/// Ends the header and every section, on a line of its own.
pub const SEPARATOR: &[u8] = b"---";
