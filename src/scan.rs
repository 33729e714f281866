//! Content discovery and recipe loading.
//!
//! Stage 1 of the build pipeline. Walks a content root, reads every Markdown
//! file and extracts one [`Recipe`] per file.
//!
//! ## Directory Structure
//!
//! Any layout works; directories are only for the author's own organisation:
//!
//! ```text
//! content/
//! ├── config.toml              # Ignored (not Markdown)
//! ├── pasta.md                 # Recipe
//! ├── desserts/
//! │   ├── apple-pie.md         # Recipe
//! │   └── apple-pie.jpg        # Ignored (referenced from apple-pie.md)
//! ├── breads/
//! │   └── sourdough.md         # Recipe
//! └── .drafts/                 # Hidden: skipped entirely
//!     └── wip.md
//! ```
//!
//! The extension match ignores case, so `Stew.MD` is a recipe too.
//!
//! ## Ordering
//!
//! Recipes come back sorted by source path. Directory traversal order is
//! platform-dependent, and the overview page lists recipes in load order.
//!
//! ## Failure Policy
//!
//! Loading is fail-fast: the first file that cannot be read or has no
//! `# title` line aborts the whole load, and the error names that file.

use crate::markdown::MarkdownDocument;
use crate::recipe::{self, ExtractError};
use crate::types::Recipe;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Content root not found or not a directory: {}", .0.display())]
    ContentRootNotFound(PathBuf),
    #[error("Failed to walk content root: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot extract recipe from {}: {source}", .path.display())]
    Extraction { path: PathBuf, source: ExtractError },
}

/// Source of recipes for the pipeline.
///
/// The filesystem implementation re-reads the content root on every call.
pub trait RecipeRepository {
    /// All recipes, in a stable order.
    fn find_all(&self) -> Result<Vec<Recipe>, ScanError>;

    /// The first recipe with the given slug, if any.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Recipe>, ScanError> {
        Ok(self.find_all()?.into_iter().find(|r| r.slug == slug))
    }
}

/// Loads recipes from `*.md` files under a content root.
#[derive(Debug, Clone)]
pub struct FileSystemRecipeRepository {
    content_root: PathBuf,
}

impl FileSystemRecipeRepository {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Discover and extract every recipe under the content root.
    pub fn load(&self) -> Result<Vec<Recipe>, ScanError> {
        let root = &self.content_root;
        if !root.is_dir() {
            return Err(ScanError::ContentRootNotFound(root.clone()));
        }

        let files = discover_markdown_files(root)?;
        info!("Found {} recipe files under {}", files.len(), root.display());

        files
            .iter()
            .map(|path| load_recipe(root, path))
            .collect()
    }
}

impl RecipeRepository for FileSystemRecipeRepository {
    fn find_all(&self) -> Result<Vec<Recipe>, ScanError> {
        self.load()
    }
}

/// Every Markdown file under `root`, sorted by path. Hidden entries are skipped.
fn discover_markdown_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn load_recipe(root: &Path, path: &Path) -> Result<Recipe, ScanError> {
    let read_err = |source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    };
    let text = fs::read_to_string(path).map_err(read_err)?;
    let created_at = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from);

    let source = relative_source(root, path);
    let recipe = recipe::extract_recipe(&MarkdownDocument::new(text), &source, created_at)
        .map_err(|source| ScanError::Extraction {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded {} → \"{}\" ({} images)",
        recipe.source,
        recipe.title,
        recipe.images.len()
    );
    Ok(recipe)
}

/// `/`-separated path of `path` relative to `root`.
fn relative_source(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
