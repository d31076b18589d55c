pub mod format;
pub mod io;
pub mod models;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use format::{FixtureError, Malformed, parse, serialize, write_document};
pub use io::*;
pub use models::{Document, Section};
pub use text::{dedent, indent, unindent};
