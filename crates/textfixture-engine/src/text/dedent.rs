//! Forgiving dedent for text blocks written as literals in source code.

/// Strips leading tabs from every line, taking the depth from the first line.
///
/// The depth is the number of consecutive tabs the first line starts with. One
/// leading line holding nothing but `\n` is dropped before that, so a literal
/// can open on its own line. Lines with fewer tabs than the depth lose only the
/// tabs they have; only tabs are ever removed.
///
/// This is "do what I mean" for heredoc-style literals that carry the
/// indentation of the surrounding code. It is not an inverse of
/// [`indent`](fn@super::indent); use [`unindent`](fn@super::unindent) for that.
///
/// ```
/// use textfixture_engine::text::dedent;
///
/// assert_eq!(dedent("\n\t\tfoo\n\t\t\tbar\n\t\t"), "foo\n\tbar\n");
/// ```
pub fn dedent(s: &str) -> String {
    let mut lines: Vec<&str> = s.split_inclusive('\n').collect();
    if lines.first() == Some(&"\n") {
        lines.remove(0);
    }
    let Some(first) = lines.first() else {
        return String::new();
    };

    let depth = first.bytes().take_while(|&b| b == b'\t').count();

    let mut out = String::with_capacity(s.len());
    for line in lines {
        let strip = line.bytes().take(depth).take_while(|&b| b == b'\t').count();
        out.push_str(&line[strip..]);
    }
    out
}
