//! Fixture parsing in two phases, one line at a time.
//!
//! `classify` assigns each structural line a [`LineKind`] from local facts
//! only; `builder` is a small state machine that folds those lines into a
//! [`Document`]. Section bodies bypass classification entirely: inside a body
//! the only line that matters is a bare `---`.

pub mod builder;
pub mod classify;

pub use builder::DocumentBuilder;
pub use classify::{LineKind, classify};

use super::FixtureError;
use crate::models::Document;
use crate::text::lines_with_spans;

/// Parse fixture file bytes into a [`Document`].
///
/// Forgiving about a missing separator after the last section, about missing
/// comments, and about empty bodies. Every other deviation is a
/// [`FixtureError::Malformed`] naming the offending line; nothing is skipped.
pub fn parse(input: &[u8]) -> Result<Document, FixtureError> {
    let mut builder = DocumentBuilder::new();
    let mut line_count = 0;

    for line in lines_with_spans(input) {
        line_count = line.number;
        builder.push(&line)?;
    }

    let doc = builder.finish(line_count + 1)?;
    log::debug!(
        "parsed fixture {:?}: {} sections from {} lines",
        doc.title,
        doc.sections.len(),
        line_count
    );
    Ok(doc)
}
