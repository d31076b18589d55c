/// Errors raised while reading or writing fixture files.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("malformed fixture at line {line}: {reason}")]
    Malformed { line: usize, reason: Malformed },
    #[error("title {title:?} contains a line break")]
    TitleContainsNewline { title: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What was wrong with a line of a malformed fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("expected a title line starting with \"# \"")]
    ExpectedTitle,
    #[error("expected a \"---\" separator")]
    ExpectedSeparator,
    #[error("expected a blank line between the section header and its body")]
    ExpectedBodyGap,
    #[error("body line does not start with a tab")]
    UnindentedBodyLine,
    #[error("title or comment is not valid UTF-8")]
    InvalidUtf8,
}

impl FixtureError {
    pub(crate) fn malformed(line: usize, reason: Malformed) -> Self {
        FixtureError::Malformed { line, reason }
    }

    /// The 1-based line number of a malformed fixture error.
    pub fn line(&self) -> Option<usize> {
        match self {
            FixtureError::Malformed { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The reason a fixture was rejected, if it was malformed.
    pub fn reason(&self) -> Option<Malformed> {
        match self {
            FixtureError::Malformed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
