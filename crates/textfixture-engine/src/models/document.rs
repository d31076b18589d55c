use super::section::Section;
use crate::format::{self, FixtureError};

/// An in-memory fixture file: a title and an ordered list of sections
///
/// Section order is insertion order and is kept exactly through a write and
/// read. Titles are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Document {
    /// Create an empty document with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_sections(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    /// Parse a document from fixture file bytes
    pub fn from_bytes(input: &[u8]) -> Result<Self, FixtureError> {
        format::parse(input)
    }

    /// Render the document to fixture file bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, FixtureError> {
        format::serialize(self)
    }

    /// Append a section after all existing ones
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// First section with the given title
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn section_mut(&mut self, title: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.title == title)
    }

    /// Section titles in document order
    pub fn section_titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }

    /// Replace the body of the first section titled `title`, or append a new one.
    ///
    /// An existing section keeps its comment and position.
    pub fn upsert_section(&mut self, title: &str, body: impl Into<Vec<u8>>) {
        match self.section_mut(title) {
            Some(section) => section.body = body.into(),
            None => self.sections.push(Section::new(title, body)),
        }
    }

    /// Remove and return the first section titled `title`
    pub fn remove_section(&mut self, title: &str) -> Option<Section> {
        let index = self.sections.iter().position(|s| s.title == title)?;
        Some(self.sections.remove(index))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
