use super::classify::{LineKind, classify, is_separator};
use crate::format::{FixtureError, Malformed};
use crate::models::{Document, Section};
use crate::text::{LineRef, unindent};

#[derive(Debug)]
enum State {
    /// Before the document title.
    Start,
    /// After the document title, waiting for the header separator.
    Header,
    /// After a separator, waiting for the next section title.
    Between,
    /// After a section title, collecting comment lines until the gap.
    SectionHeader {
        title: String,
        comments: Vec<String>,
    },
    /// Inside a section body, collecting raw lines until a separator.
    Body {
        title: String,
        comment: String,
        first_line: usize,
        raw: Vec<u8>,
    },
}

/// Second phase of parsing: folds lines into a [`Document`].
pub struct DocumentBuilder {
    state: State,
    title: String,
    sections: Vec<Section>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            title: String::new(),
            sections: vec![],
        }
    }

    pub fn push(&mut self, line: &LineRef<'_>) -> Result<(), FixtureError> {
        // Bodies only care about the separator; everything else is payload.
        if let State::Body { raw, .. } = &mut self.state {
            if is_separator(line) {
                return self.finish_body();
            }
            raw.extend_from_slice(line.text);
            return Ok(());
        }

        let kind = classify(line);
        let state = std::mem::replace(&mut self.state, State::Start);
        log::trace!("line {}: {:?} in {:?}", line.number, kind, state);

        self.state = match (state, kind) {
            (State::Start, LineKind::Blank) => State::Start,
            (State::Start, LineKind::Title(text)) => {
                self.title = utf8(text, line.number)?;
                State::Header
            }
            (State::Start, _) => {
                return Err(FixtureError::malformed(line.number, Malformed::ExpectedTitle));
            }

            (State::Header, LineKind::Blank) => State::Header,
            (State::Header, LineKind::Separator) => State::Between,
            (State::Header, _) => {
                return Err(FixtureError::malformed(line.number, Malformed::ExpectedSeparator));
            }

            (State::Between, LineKind::Blank) => State::Between,
            (State::Between, LineKind::Title(text)) => State::SectionHeader {
                title: utf8(text, line.number)?,
                comments: vec![],
            },
            (State::Between, _) => {
                return Err(FixtureError::malformed(line.number, Malformed::ExpectedTitle));
            }

            (State::SectionHeader { title, mut comments }, LineKind::Comment(text)) => {
                comments.push(utf8(text, line.number)?);
                State::SectionHeader { title, comments }
            }
            (State::SectionHeader { title, comments }, LineKind::Blank) => State::Body {
                title,
                comment: comments.join("\n"),
                first_line: line.number + 1,
                raw: vec![],
            },
            (State::SectionHeader { title, comments }, LineKind::Separator) => {
                log::debug!("section {title:?} ends before its body; treating body as empty");
                self.sections.push(Section {
                    title,
                    comment: comments.join("\n"),
                    body: vec![],
                });
                State::Between
            }
            (State::SectionHeader { .. }, _) => {
                return Err(FixtureError::malformed(line.number, Malformed::ExpectedBodyGap));
            }

            (State::Body { .. }, _) => unreachable!("body lines are handled above"),
        };
        Ok(())
    }

    /// Finish at end of input. `eof_line` is the number one past the last line.
    pub fn finish(mut self, eof_line: usize) -> Result<Document, FixtureError> {
        match std::mem::replace(&mut self.state, State::Between) {
            State::Start => {
                return Err(FixtureError::malformed(eof_line, Malformed::ExpectedTitle));
            }
            State::Header => log::debug!("fixture ends without a header separator"),
            State::Between => {}
            State::SectionHeader { title, comments } => {
                log::debug!("section {title:?} ends at end of input before its body");
                self.sections.push(Section {
                    title,
                    comment: comments.join("\n"),
                    body: vec![],
                });
            }
            body @ State::Body { .. } => {
                log::debug!("fixture ends without a trailing separator");
                self.state = body;
                self.finish_body()?;
            }
        }
        Ok(Document {
            title: self.title,
            sections: self.sections,
        })
    }

    /// Turns the collected body lines into a section and moves to `Between`.
    fn finish_body(&mut self) -> Result<(), FixtureError> {
        let State::Body {
            title,
            comment,
            first_line,
            mut raw,
        } = std::mem::replace(&mut self.state, State::Between)
        else {
            return Ok(());
        };

        // The writer follows every body with one line break of its own.
        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        let body = unindent(&raw).map_err(|e| {
            FixtureError::malformed(first_line + e.line, Malformed::UnindentedBodyLine)
        })?;

        self.sections.push(Section {
            title,
            comment,
            body,
        });
        Ok(())
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn utf8(text: &[u8], line: usize) -> Result<String, FixtureError> {
    String::from_utf8(text.to_vec())
        .map_err(|_| FixtureError::malformed(line, Malformed::InvalidUtf8))
}
