use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use textfixture_engine::text::{lines_with_spans, preview};
use textfixture_engine::{Document, FixtureError, io, parse, serialize};

const PREVIEW_WIDTH: usize = 40;

/// Whether a command found problems in its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Failed,
}

/// Parse every file and report the malformed ones as `path:line: reason`.
pub fn check(files: &[PathBuf], out: &mut impl Write) -> Result<Outcome> {
    let mut failed = 0;
    for file in files {
        if let Err(problem) = load(file) {
            report(out, file, &problem)?;
            failed += 1;
        }
    }
    writeln!(out, "checked {} fixtures, {failed} malformed", files.len())?;
    Ok(if failed == 0 {
        Outcome::Clean
    } else {
        Outcome::Failed
    })
}

/// Rewrite every file in canonical form, or with `check_only` just list the
/// files that are not.
pub fn fmt(files: &[PathBuf], check_only: bool, out: &mut impl Write) -> Result<Outcome> {
    let mut failed = false;
    for file in files {
        let (bytes, doc) = match load(file) {
            Ok(loaded) => loaded,
            Err(problem) => {
                log::warn!("skipping {}: not a valid fixture", file.display());
                report(out, file, &problem)?;
                failed = true;
                continue;
            }
        };

        let canonical = serialize(&doc).with_context(|| format!("formatting {}", file.display()))?;
        if canonical == bytes {
            log::debug!("{} is already canonical", file.display());
            continue;
        }

        if check_only {
            writeln!(out, "would reformat {}", file.display())?;
            failed = true;
        } else {
            io::write_fixture_at(file, &doc)?;
            writeln!(out, "reformatted {}", file.display())?;
        }
    }
    Ok(if failed { Outcome::Failed } else { Outcome::Clean })
}

/// List section titles with a preview of each body's first line.
pub fn sections(file: &Path, matching: Option<&Regex>, out: &mut impl Write) -> Result<Outcome> {
    let doc = io::read_fixture_at(file)?;
    for section in &doc.sections {
        if let Some(re) = matching
            && !re.is_match(&section.title)
        {
            continue;
        }
        let first_line = lines_with_spans(&section.body)
            .next()
            .map(|line| preview(&section.body, line.visible_span(), PREVIEW_WIDTH))
            .unwrap_or_default();
        writeln!(out, "{}\t{}", section.title, first_line)?;
    }
    Ok(Outcome::Clean)
}

/// Write the body of the first section titled `title` to `out`, byte for byte.
pub fn show(file: &Path, title: &str, out: &mut impl Write) -> Result<Outcome> {
    let doc = io::read_fixture_at(file)?;
    let section = doc
        .section(title)
        .ok_or_else(|| anyhow!("no section titled {title:?} in {}", file.display()))?;
    out.write_all(&section.body)?;
    Ok(Outcome::Clean)
}

/// Why a file given to `check` or `fmt` could not be loaded.
#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error(transparent)]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// Read and parse a file, keeping the original bytes for comparison.
fn load(file: &Path) -> std::result::Result<(Vec<u8>, Document), LoadError> {
    let bytes = fs::read(file)?;
    let doc = parse(&bytes)?;
    Ok((bytes, doc))
}

/// Print a load failure as `path:line: reason`, or `path: error` when no line applies.
fn report(out: &mut impl Write, file: &Path, problem: &LoadError) -> Result<()> {
    match problem {
        LoadError::Fixture(FixtureError::Malformed { line, reason }) => {
            writeln!(out, "{}:{line}: {reason}", file.display())?
        }
        other => writeln!(out, "{}: {other}", file.display())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const CANONICAL: &str = "# t\n\n---\n# request\n## what the client sends\n\n\tGET / HTTP/1.1\n\n---\n# response\n\n\tHTTP/1.1 200 OK\n\tcontent-length: 0\n\n---\n";
    const UNTERMINATED: &str = "# t\n\n---\n# request\n\n\tGET / HTTP/1.1\n\n";
    const MALFORMED: &str = "# t\n\n---\n# request\n\nGET / HTTP/1.1\n";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_check_reports_malformed_files_with_line() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.fixture", CANONICAL);
        let bad = write(&dir, "bad.fixture", MALFORMED);

        let mut out = Vec::new();
        let outcome = check(&[good, bad.clone()], &mut out).unwrap();

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            output(out),
            format!(
                "{}:6: body line does not start with a tab\nchecked 2 fixtures, 1 malformed\n",
                bad.display()
            )
        );
    }

    #[test]
    fn test_check_clean() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.fixture", CANONICAL);

        let mut out = Vec::new();
        assert_eq!(check(&[good], &mut out).unwrap(), Outcome::Clean);
        assert_eq!(output(out), "checked 1 fixtures, 0 malformed\n");
    }

    #[test]
    fn test_check_reports_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.fixture");

        let mut out = Vec::new();
        assert_eq!(check(&[missing], &mut out).unwrap(), Outcome::Failed);
        assert!(output(out).contains("missing.fixture: "));
    }

    #[test]
    fn test_fmt_rewrites_non_canonical_files() {
        let dir = TempDir::new().unwrap();
        let canonical = write(&dir, "canonical.fixture", CANONICAL);
        let unterminated = write(&dir, "unterminated.fixture", UNTERMINATED);

        let mut out = Vec::new();
        let outcome = fmt(&[canonical.clone(), unterminated.clone()], false, &mut out).unwrap();

        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(output(out), format!("reformatted {}\n", unterminated.display()));
        assert_eq!(
            fs::read_to_string(&unterminated).unwrap(),
            format!("{UNTERMINATED}---\n")
        );
        assert_eq!(fs::read_to_string(&canonical).unwrap(), CANONICAL);
    }

    #[test]
    fn test_fmt_check_only_leaves_files_alone() {
        let dir = TempDir::new().unwrap();
        let unterminated = write(&dir, "unterminated.fixture", UNTERMINATED);

        let mut out = Vec::new();
        let outcome = fmt(&[unterminated.clone()], true, &mut out).unwrap();

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(output(out), format!("would reformat {}\n", unterminated.display()));
        assert_eq!(fs::read_to_string(&unterminated).unwrap(), UNTERMINATED);
    }

    #[test]
    fn test_fmt_skips_malformed_files() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.fixture", MALFORMED);

        let mut out = Vec::new();
        assert_eq!(fmt(&[bad.clone()], false, &mut out).unwrap(), Outcome::Failed);
        assert_eq!(fs::read_to_string(&bad).unwrap(), MALFORMED);
    }

    #[test]
    fn test_sections_lists_titles_and_previews() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "f.fixture", CANONICAL);

        let mut out = Vec::new();
        sections(&file, None, &mut out).unwrap();

        assert_eq!(
            output(out),
            "request\tGET / HTTP/1.1\nresponse\tHTTP/1.1 200 OK\n"
        );
    }

    #[test]
    fn test_sections_filtered_by_regex() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "f.fixture", CANONICAL);
        let re = Regex::new("^resp").unwrap();

        let mut out = Vec::new();
        sections(&file, Some(&re), &mut out).unwrap();

        assert_eq!(output(out), "response\tHTTP/1.1 200 OK\n");
    }

    #[test]
    fn test_sections_preview_drops_carriage_return() {
        let dir = TempDir::new().unwrap();
        let file = write(
            &dir,
            "crlf.fixture",
            "# t\n\n---\n# crlf\n\n\tline one\r\n\tline two\r\n\n---\n",
        );

        let mut out = Vec::new();
        sections(&file, None, &mut out).unwrap();

        assert_eq!(output(out), "crlf\tline one\n");
    }

    #[test]
    fn test_load_keeps_error_types() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.fixture", MALFORMED);
        let missing = dir.path().join("missing.fixture");

        assert!(matches!(
            load(&bad),
            Err(LoadError::Fixture(FixtureError::Malformed { line: 6, .. }))
        ));
        assert!(matches!(
            load(&missing),
            Err(LoadError::Read(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_show_writes_body_verbatim() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "f.fixture", CANONICAL);

        let mut out = Vec::new();
        show(&file, "response", &mut out).unwrap();

        assert_eq!(output(out), "HTTP/1.1 200 OK\ncontent-length: 0\n");
    }

    #[test]
    fn test_show_missing_section() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "f.fixture", CANONICAL);

        let err = show(&file, "nope", &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("no section titled \"nope\""));
    }
}
