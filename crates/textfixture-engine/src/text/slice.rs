use super::span::Span;

/// Extracts the bytes for a span as an owned String, replacing invalid UTF-8.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(input: &[u8], sp: Span) -> String {
    String::from_utf8_lossy(&input[sp.start..sp.end]).into_owned()
}

/// Extracts text for a span, truncating to at most `max` bytes with "..." suffix if needed.
///
/// Truncation backs off to a char boundary. Used for human-readable listings.
pub fn preview(input: &[u8], sp: Span, max: usize) -> String {
    let mut s = slice_to_string(input, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
