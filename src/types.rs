//! Shared types passed between pipeline stages.
//!
//! Load produces [`Recipe`]s, generate turns them into a [`Site`] of
//! [`Document`]s, and write persists the site. All of these are plain values:
//! no stage mutates what it receives.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// One recipe extracted from a Markdown source file.
///
/// Serialized as-is into the overview template, so field names here are the
/// names templates see (`recipe.title`, `recipe.rendered_body`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    /// Text of the first `# heading` line. Never empty.
    pub title: String,
    /// URL slug derived from the title (see [`crate::naming::slugify`]).
    pub slug: String,
    /// Raw Markdown source.
    pub body: String,
    /// Body as it should appear on the page. Currently the raw Markdown.
    pub rendered_body: String,
    /// Modification time of the source file, when the platform reports one.
    pub created_at: Option<DateTime<Utc>>,
    /// Image filenames referenced by the body, deduplicated and sorted.
    pub images: Vec<String>,
    /// Source path relative to the content root, `/`-separated.
    pub source: String,
}

/// A named output document. Written to disk as `<name>.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.html", self.name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Duplicate document name: {0}")]
pub struct DuplicateDocument(pub String);

/// Ordered set of generated documents with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    documents: Vec<Document>,
}

impl Site {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document, rejecting a name already present.
    pub fn push(&mut self, document: Document) -> Result<(), DuplicateDocument> {
        if self.get(&document.name).is_some() {
            return Err(DuplicateDocument(document.name));
        }
        self.documents.push(document);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name == name)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl TryFrom<Vec<Document>> for Site {
    type Error = DuplicateDocument;

    fn try_from(documents: Vec<Document>) -> Result<Self, Self::Error> {
        let mut site = Site::new();
        for document in documents {
            site.push(document)?;
        }
        Ok(site)
    }
}
