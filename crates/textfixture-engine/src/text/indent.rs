use super::lines::lines_with_spans;

/// One level of indentation in a fixture file.
pub const INDENT_UNIT: u8 = b'\t';

/// A content line in an indented block that did not start with [`INDENT_UNIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("line {line} of the block is not indented")]
pub struct UnindentError {
    /// Zero-based line index within the block.
    pub line: usize,
}

/// Prefixes every content line of `block` with one tab.
///
/// Bare `\n` lines stay empty so no whitespace-only lines are produced, and the
/// line terminators of the input are kept as they are. An empty block becomes a
/// single tab, so an empty body still gets a visible marker line.
pub fn indent(block: &[u8]) -> Vec<u8> {
    if block.is_empty() {
        return vec![INDENT_UNIT];
    }
    let mut out = Vec::with_capacity(block.len() + block.len() / 16 + 1);
    for line in lines_with_spans(block) {
        if !line.is_blank() {
            out.push(INDENT_UNIT);
        }
        out.extend_from_slice(line.text);
    }
    out
}

/// Exact inverse of [`indent`]: removes one tab from every content line.
///
/// Bare `\n` lines pass through. Any other line must start with a tab, which is
/// what separates this from the forgiving [`dedent`](fn@super::dedent).
pub fn unindent(block: &[u8]) -> Result<Vec<u8>, UnindentError> {
    let mut out = Vec::with_capacity(block.len());
    for (index, line) in lines_with_spans(block).enumerate() {
        if line.is_blank() {
            out.extend_from_slice(line.text);
            continue;
        }
        match line.text.split_first() {
            Some((&INDENT_UNIT, rest)) => out.extend_from_slice(rest),
            _ => return Err(UnindentError { line: index }),
        }
    }
    Ok(out)
}
