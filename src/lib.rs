//! # Recipe Site
//!
//! A minimal static site generator for Markdown recipe collections. Point it
//! at a directory of `.md` files and a directory of templates; it writes a
//! homepage and an overview page listing every recipe.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Load      content/    →  Vec<Recipe>   (Markdown files → structured data)
//! 2. Generate  Vec<Recipe> →  Site          (templates → named HTML documents)
//! 3. Write     Site        →  dist/         (one <name>.html per document)
//! ```
//!
//! Each stage consumes an immutable value and produces a new one, and each
//! sits behind a trait ([`scan::RecipeRepository`],
//! [`generate::TemplateEngine`], [`write::WebsiteRepository`]) so a source or
//! destination other than the local filesystem can be swapped in without
//! touching [`pipeline::run`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`markdown`] | Raw Markdown text and its line scans: title, referenced images |
//! | [`recipe`] | Builds a [`types::Recipe`] from one document |
//! | [`naming`] | Title → URL slug normalization |
//! | [`scan`] | Stage 1 — discovers `*.md` files under the content root and loads recipes |
//! | [`generate`] | Stage 2 — renders the homepage and recipe overview through Tera templates |
//! | [`write`] | Stage 3 — writes each document to the output directory |
//! | [`pipeline`] | Composes the stages; maps failures to exit codes |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`types`] | Values passed between stages (`Recipe`, `Document`, `Site`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Text Scanning, Not Markdown Parsing
//!
//! Titles and image references are found with line scans rather than a
//! Markdown parser, and `rendered_body` carries the raw Markdown. Templates
//! decide how to present it.
//!
//! ## Fail-Fast
//!
//! The first unreadable file, untitled recipe, missing template, or failed
//! write aborts the build with an error naming the file or template. A failed
//! run never reports that the site was rebuilt, though documents written
//! before a write failure are left in place.
//!
//! ## Recipe Order
//!
//! Recipes are sorted by source path before rendering, so recipe order on the
//! overview page does not depend on platform traversal order. The content
//! still depends on file modification times when a template renders
//! `created_at`.

pub mod config;
pub mod generate;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod recipe;
pub mod scan;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
