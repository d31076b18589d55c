use crate::models::Document;

#[derive(Debug)]
pub struct Snap {
    pub title: String,
    pub sections: Vec<SectionSnap>,
}

#[derive(Debug)]
pub struct SectionSnap {
    pub title: String,
    pub comment: String,
    pub body: String,
}

/// Snapshot view of a document; non-UTF-8 body bytes are replaced.
pub fn normalize(doc: &Document) -> Snap {
    Snap {
        title: doc.title.clone(),
        sections: doc
            .sections
            .iter()
            .map(|s| SectionSnap {
                title: s.title.clone(),
                comment: s.comment.clone(),
                body: String::from_utf8_lossy(&s.body).into_owned(),
            })
            .collect(),
    }
}
