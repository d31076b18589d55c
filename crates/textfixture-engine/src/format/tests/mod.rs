//! Fixture-driven tests for the reader and writer.
//!
//! Fixtures (.fixture) and snapshots (.snap) are co-located in `fixtures/`.

use crate::format::{parse, serialize, snapshot};
use pretty_assertions::assert_eq;

fn fixtures_dir() -> String {
    format!("{}/src/format/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(format!("{}/{name}.fixture", fixtures_dir())).unwrap()
}

// Fixture-based snapshot tests

#[test]
fn fixture_canonical() {
    assert_fixture("canonical");
}

#[test]
fn fixture_missing_trailing_separator() {
    assert_fixture("missing_trailing_separator");
}

#[test]
fn fixture_empty_bodies() {
    assert_fixture("empty_bodies");
}

#[test]
fn fixture_multiline_comments() {
    assert_fixture("multiline_comments");
}

#[test]
fn fixture_title_only() {
    assert_fixture("title_only");
}

#[test]
fn fixture_nested_indentation() {
    assert_fixture("nested_indentation");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = fixtures_dir();
    let input = read_fixture(name);

    let doc = parse(&input).unwrap();
    snapshot::invariants(&doc);

    let snap = snapshot::normalize(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!(name, snap);
    });
}

// Byte-level tests

/// Files already in canonical form are rewritten byte for byte.
#[test]
fn canonical_fixtures_rewrite_identically() {
    for name in ["canonical", "title_only", "nested_indentation"] {
        let input = read_fixture(name);
        let doc = parse(&input).unwrap();
        assert_eq!(
            String::from_utf8(serialize(&doc).unwrap()).unwrap(),
            String::from_utf8(input).unwrap(),
            "fixture {name} is not canonical"
        );
    }
}

/// Tolerated input is normalized: the trailing separator comes back.
#[test]
fn tolerated_fixture_gains_trailing_separator() {
    let input = read_fixture("missing_trailing_separator");
    let doc = parse(&input).unwrap();
    let rewritten = serialize(&doc).unwrap();

    let mut expected = input.clone();
    expected.extend_from_slice(b"---\n");
    assert_eq!(rewritten, expected);
}
