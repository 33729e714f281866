//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the loaded recipes and renders the
//! site's documents through named templates.
//!
//! ## Generated Documents
//!
//! | Document | Template | Bindings |
//! |----------|----------|----------|
//! | `homepage` | `homepage.html` | none |
//! | `recipe_overview` | `recipe_overview.html` | `recipes`: every [`Recipe`], in load order |
//!
//! Both documents are always produced, including for an empty collection.
//!
//! ## Templates
//!
//! Template lookup goes through the [`TemplateEngine`] trait. The stock
//! implementation, [`TeraTemplates`], loads a directory of
//! [Tera](https://keats.github.io/tera/) templates; each file is registered
//! under its path relative to that directory, so templates can
//! `{% extends "base.html" %}` or `{% include "partials/card.html" %}`.
//! Autoescaping is on for `.html` templates.

use crate::scan::is_hidden;
use crate::types::{Document, DuplicateDocument, Recipe, Site};
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;
use walkdir::WalkDir;

pub const HOMEPAGE_TEMPLATE: &str = "homepage.html";
pub const RECIPE_OVERVIEW_TEMPLATE: &str = "recipe_overview.html";
pub const HOMEPAGE_DOCUMENT: &str = "homepage";
pub const RECIPE_OVERVIEW_DOCUMENT: &str = "recipe_overview";
/// Variable under which the overview template receives the recipe list.
pub const RECIPES_BINDING: &str = "recipes";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to walk template directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Template '{name}' not found in {origin}")]
    TemplateNotFound { name: String, origin: String },
    #[error("Failed to parse templates from {origin}: {source}")]
    TemplateParse { origin: String, source: tera::Error },
    #[error("Failed to render template '{name}': {source}")]
    TemplateRender { name: String, source: tera::Error },
    #[error(transparent)]
    DuplicateDocument(#[from] DuplicateDocument),
}

/// Named variables handed to a template.
pub type Bindings = Map<String, Value>;

/// Renders a named template with a set of bindings.
pub trait TemplateEngine {
    fn render(&self, name: &str, bindings: &Bindings) -> Result<String, GenerateError>;
}

/// Tera-backed [`TemplateEngine`].
#[derive(Debug)]
pub struct TeraTemplates {
    tera: Tera,
    /// Where the templates came from, for error messages.
    origin: String,
}

impl TeraTemplates {
    /// Load every file under `dir` as a template.
    ///
    /// Hidden files and directories are skipped, as in the content scan.
    ///
    /// A missing directory yields an engine with no templates, so the failure
    /// surfaces as [`GenerateError::TemplateNotFound`] for the first template
    /// the renderer asks for.
    pub fn from_dir(dir: &Path) -> Result<Self, GenerateError> {
        let origin = dir.display().to_string();
        let mut sources = Vec::new();

        if dir.is_dir() {
            for entry in WalkDir::new(dir)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let rel = entry.path().strip_prefix(dir).unwrap_or(entry.path());
                let name = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                let source = fs::read_to_string(entry.path()).map_err(|source| {
                    GenerateError::TemplateRead {
                        path: entry.path().to_path_buf(),
                        source,
                    }
                })?;
                sources.push((name, source));
            }
        } else {
            debug!("Template directory {origin} does not exist");
        }

        Self::from_sources(origin, sources)
    }

    /// Build from in-memory `(name, source)` pairs.
    pub fn from_sources<N, S>(
        origin: impl Into<String>,
        sources: impl IntoIterator<Item = (N, S)>,
    ) -> Result<Self, GenerateError>
    where
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let origin = origin.into();
        let sources: Vec<(N, S)> = sources.into_iter().collect();
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)
            .map_err(|source| GenerateError::TemplateParse {
                origin: origin.clone(),
                source,
            })?;
        debug!(
            "Loaded templates from {origin}: {:?}",
            tera.get_template_names().collect::<Vec<_>>()
        );
        Ok(Self { tera, origin })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

impl TemplateEngine for TeraTemplates {
    fn render(&self, name: &str, bindings: &Bindings) -> Result<String, GenerateError> {
        if !self.has_template(name) {
            return Err(GenerateError::TemplateNotFound {
                name: name.to_string(),
                origin: self.origin.clone(),
            });
        }

        let mut context = Context::new();
        for (key, value) in bindings {
            context.insert(key.as_str(), value);
        }

        self.tera
            .render(name, &context)
            .map_err(|source| GenerateError::TemplateRender {
                name: name.to_string(),
                source,
            })
    }
}

/// Turns recipes into the site's documents.
#[derive(Debug)]
pub struct SiteRenderer<T> {
    engine: T,
}

impl<T: TemplateEngine> SiteRenderer<T> {
    pub fn new(engine: T) -> Self {
        Self { engine }
    }

    /// Render the homepage and the recipe overview.
    pub fn generate(&self, recipes: &[Recipe]) -> Result<Site, GenerateError> {
        let mut site = Site::new();

        let homepage = self.engine.render(HOMEPAGE_TEMPLATE, &Bindings::new())?;
        site.push(Document::new(HOMEPAGE_DOCUMENT, homepage))?;

        let mut bindings = Bindings::new();
        bindings.insert(RECIPES_BINDING.to_string(), serde_json::to_value(recipes)?);
        let overview = self.engine.render(RECIPE_OVERVIEW_TEMPLATE, &bindings)?;
        site.push(Document::new(RECIPE_OVERVIEW_DOCUMENT, overview))?;

        info!(
            "Rendered {} documents from {} recipes",
            site.len(),
            recipes.len()
        );
        Ok(site)
    }
}
