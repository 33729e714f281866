//! Shared test utilities for the recipe-site test suite.
//!
//! Provides fixture setup, recipe builders, and lookup helpers that panic
//! with a useful message on miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let recipes = FileSystemRecipeRepository::new(tmp.path()).load().unwrap();
//!
//! let pie = find_recipe(&recipes, "Grandma's Apple Pie");
//! assert_eq!(pie.images, vec!["applepie.jpg", "lattice.png"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::markdown::MarkdownDocument;
use crate::recipe::extract_recipe;
use crate::types::Recipe;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The stock templates shipped in `templates/`.
pub fn stock_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Write a Markdown file at `rel` under `root`, creating parent directories.
pub fn write_recipe(root: &Path, rel: &str, text: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, text).unwrap();
    path
}

// =========================================================================
// Builders
// =========================================================================

/// A recipe extracted from in-memory text, with no timestamp.
pub fn recipe(source: &str, text: &str) -> Recipe {
    extract_recipe(&MarkdownDocument::new(text), source, None).unwrap()
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a recipe by title. Panics if not found.
pub fn find_recipe<'a>(recipes: &'a [Recipe], title: &str) -> &'a Recipe {
    recipes.iter().find(|r| r.title == title).unwrap_or_else(|| {
        let titles = recipe_titles(recipes);
        panic!("recipe '{title}' not found. Available: {titles:?}")
    })
}

/// All recipe titles in load order.
pub fn recipe_titles(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}
