use super::span::Span;

/// A reference to a single line of a buffer with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// 1-based line number, as reported in error messages.
    pub number: usize,
    /// Byte span of this line in the buffer (includes newline if present).
    pub span: Span,
    /// The line bytes, including the trailing `\n` if present.
    pub text: &'a [u8],
}

impl<'a> LineRef<'a> {
    /// Span of the line without its trailing `\n`.
    pub fn content_span(&self) -> Span {
        let end = if self.text.ends_with(b"\n") {
            self.span.end - 1
        } else {
            self.span.end
        };
        Span {
            start: self.span.start,
            end,
        }
    }

    /// Span of the text a reader sees: the content with a trailing `\r` dropped.
    pub fn visible_span(&self) -> Span {
        let content = self.content_span();
        if self.content().ends_with(b"\r") {
            Span {
                start: content.start,
                end: content.end - 1,
            }
        } else {
            content
        }
    }

    /// The line without its trailing `\n`.
    pub fn content(&self) -> &'a [u8] {
        &self.text[..self.content_span().len()]
    }

    /// True for a line holding nothing but its terminator (or nothing at all).
    pub fn is_blank(&self) -> bool {
        self.content_span().is_empty()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Line terminators are kept, so concatenating every `text` reproduces the
/// input exactly. An empty input yields no lines; input ending in `\n` yields
/// no trailing empty line.
pub fn lines_with_spans(input: &[u8]) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    input
        .split_inclusive(|&b| b == b'\n')
        .enumerate()
        .map(move |(index, line)| {
            let start = offset;
            offset += line.len();
            LineRef {
                number: index + 1,
                span: Span { start, end: offset },
                text: line,
            }
        })
}
