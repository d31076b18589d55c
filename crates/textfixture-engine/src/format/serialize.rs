use std::io::Write;

use super::{COMMENT_MARKER, FixtureError, SEPARATOR, TITLE_MARKER};
use crate::models::Document;
use crate::text::indent;

/// Render a document to fixture file bytes.
///
/// Identical documents always render to identical bytes.
pub fn serialize(doc: &Document) -> Result<Vec<u8>, FixtureError> {
    let mut buf = Vec::new();
    write_document(&mut buf, doc)?;
    Ok(buf)
}

/// Write a document to `w` in fixture file form.
///
/// Titles are checked before anything is written, so a rejected document never
/// leaves a partial file behind in the writer.
pub fn write_document<W: Write>(w: &mut W, doc: &Document) -> Result<(), FixtureError> {
    check_title(&doc.title)?;
    for section in &doc.sections {
        check_title(&section.title)?;
    }

    // File header
    w.write_all(TITLE_MARKER)?;
    w.write_all(doc.title.as_bytes())?;
    w.write_all(b"\n\n")?;
    w.write_all(SEPARATOR)?;
    w.write_all(b"\n")?;

    for section in &doc.sections {
        w.write_all(TITLE_MARKER)?;
        w.write_all(section.title.as_bytes())?;
        w.write_all(b"\n")?;

        if !section.comment.is_empty() {
            for line in section.comment.split('\n') {
                w.write_all(COMMENT_MARKER)?;
                w.write_all(line.as_bytes())?;
                w.write_all(b"\n")?;
            }
        }

        // Gap before body
        w.write_all(b"\n")?;
        w.write_all(&indent(&section.body))?;
        w.write_all(b"\n")?;

        // Always a trailing separator, even though the parser does not need it
        // after the last section.
        w.write_all(SEPARATOR)?;
        w.write_all(b"\n")?;
    }

    log::debug!(
        "serialized fixture {:?} with {} sections",
        doc.title,
        doc.sections.len()
    );
    Ok(())
}

fn check_title(title: &str) -> Result<(), FixtureError> {
    if title.contains('\n') {
        return Err(FixtureError::TitleContainsNewline {
            title: title.to_string(),
        });
    }
    Ok(())
}
