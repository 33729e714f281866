//! Recipe extraction from a single Markdown document.

use crate::markdown::MarkdownDocument;
use crate::naming::slugify;
use crate::types::Recipe;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No `# ` title line found")]
    TitleNotFound,
}

/// Title of a recipe: the first `# heading` line, trimmed.
pub fn extract_title(text: &str) -> Result<String, ExtractError> {
    MarkdownDocument::new(text)
        .title()
        .map(str::to_string)
        .ok_or(ExtractError::TitleNotFound)
}

/// Build a [`Recipe`] from a document.
///
/// `source` is the path shown to users and templates; `created_at` comes from
/// whatever the caller knows about the file (the filesystem loader passes the
/// modification time). `rendered_body` is the raw Markdown.
pub fn extract_recipe(
    document: &MarkdownDocument,
    source: &str,
    created_at: Option<DateTime<Utc>>,
) -> Result<Recipe, ExtractError> {
    let title = document
        .title()
        .ok_or(ExtractError::TitleNotFound)?
        .to_string();
    let body = document.as_str().to_string();

    Ok(Recipe {
        slug: slugify(&title),
        title,
        rendered_body: body.clone(),
        body,
        created_at,
        images: document.images().into_iter().collect(),
        source: source.to_string(),
    })
}
