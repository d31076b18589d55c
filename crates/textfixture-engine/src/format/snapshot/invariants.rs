use crate::format::{parse, serialize};
use crate::models::Document;

/// Panics unless `doc` survives a write and read unchanged, and writing the
/// re-read document produces the same bytes again.
pub fn check(doc: &Document) {
    let written = serialize(doc).unwrap_or_else(|e| panic!("document does not serialize: {e}"));
    let reread = parse(&written).unwrap_or_else(|e| {
        panic!(
            "serialized document does not parse: {e}\n{}",
            String::from_utf8_lossy(&written)
        )
    });
    assert!(
        &reread == doc,
        "document changed through a write and read: {doc:?} became {reread:?}"
    );
    let rewritten =
        serialize(&reread).unwrap_or_else(|e| panic!("re-read document does not serialize: {e}"));
    assert!(written == rewritten, "writing is not idempotent");
}
