pub mod document;
pub mod section;

pub use document::Document;
pub use section::Section;
