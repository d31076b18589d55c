use crate::format::{COMMENT_MARKER, SEPARATOR, TITLE_MARKER};
use crate::text::LineRef;

/// Structural role of a line outside of a section body.
///
/// This is the first phase of parsing: each line is classified on its own,
/// without reference to surrounding context. Body lines are never classified;
/// the builder only looks for the separator while it is inside a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing but a line terminator.
    Blank,
    /// `---` on its own.
    Separator,
    /// `# <text>`, or a bare `#` for an empty title.
    Title(&'a [u8]),
    /// `## <text>`, or a bare `##` for an empty comment line.
    Comment(&'a [u8]),
    /// Anything else.
    Other,
}

/// Classifies a line into a [`LineKind`].
pub fn classify<'a>(line: &LineRef<'a>) -> LineKind<'a> {
    let content = line.content();
    if content.is_empty() {
        return LineKind::Blank;
    }
    if content == SEPARATOR {
        return LineKind::Separator;
    }
    if let Some(text) = strip_marker(content, COMMENT_MARKER) {
        return LineKind::Comment(text);
    }
    if let Some(text) = strip_marker(content, TITLE_MARKER) {
        return LineKind::Title(text);
    }
    LineKind::Other
}

/// Strips `marker` from the front of `content`, also accepting the marker
/// without its trailing space when nothing follows it.
fn strip_marker<'a>(content: &'a [u8], marker: &[u8]) -> Option<&'a [u8]> {
    if let Some(rest) = content.strip_prefix(marker) {
        return Some(rest);
    }
    let bare = marker.strip_suffix(b" ").unwrap_or(marker);
    (content == bare).then_some(&content[content.len()..])
}

/// True if `line` is a bare separator; the only structural line inside a body.
pub fn is_separator(line: &LineRef<'_>) -> bool {
    line.content() == SEPARATOR
}
