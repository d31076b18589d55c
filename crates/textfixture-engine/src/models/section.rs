/// A titled, optionally commented, verbatim-body record in a fixture file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    /// Rendered after the `# ` marker. Must not contain a line break.
    pub title: String,
    /// Rendered as one `## ` line per line of text; empty means no comment lines.
    pub comment: String,
    /// Payload bytes, stored and rendered without any escaping.
    pub body: Vec<u8>,
}

impl Section {
    /// Create a section without a comment
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            comment: String::new(),
            body: body.into(),
        }
    }

    /// Set the comment, consuming and returning the section
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// The body as text, if it is valid UTF-8
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty()
    }
}
