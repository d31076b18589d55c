//! # Text Block Helpers
//!
//! Line-oriented byte helpers shared by the fixture reader and writer.
//!
//! - **`indent`**: `indent` prefixes content lines with one tab; `unindent` is
//!   its exact inverse and rejects lines that are missing the tab
//! - **`dedent`**: forgiving dedent for literal blocks written in source code
//! - **`lines`**: line iteration with byte spans and line numbers
//! - **`slice`**: span slicing and previews for messages

pub mod dedent;
pub mod indent;
pub mod lines;
pub mod slice;
pub mod span;

pub use dedent::dedent;
pub use indent::{INDENT_UNIT, UnindentError, indent, unindent};
pub use lines::{LineRef, lines_with_spans};
pub use slice::{preview, slice_to_string};
pub use span::Span;
