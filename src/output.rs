//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Each recipe leads with its positional index and title; where it came from
//! and what it references are indented context lines underneath.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Recipes
//! 001 Country Sourdough
//!     Source: breads/sourdough.md
//!     Slug: country-sourdough
//! 002 Grandma's Apple Pie
//!     Source: desserts/apple-pie.md
//!     Slug: grandma-s-apple-pie
//!     Images: applepie.jpg, lattice.png
//! ```
//!
//! ## Build
//!
//! ```text
//! homepage → dist/homepage.html
//! recipe_overview → dist/recipe_overview.html
//!
//! Generated 2 documents from 3 recipes
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::pipeline::BuildReport;
use crate::types::Recipe;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the recipe inventory produced by loading.
pub fn format_scan_output(recipes: &[Recipe]) -> Vec<String> {
    let mut lines = vec!["Recipes".to_string()];

    if recipes.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
        return lines;
    }

    for (i, recipe) in recipes.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), recipe.title));
        lines.push(format!("{}Source: {}", indent(1), recipe.source));
        lines.push(format!("{}Slug: {}", indent(1), recipe.slug));
        if !recipe.images.is_empty() {
            lines.push(format!("{}Images: {}", indent(1), recipe.images.join(", ")));
        }
    }

    lines
}

pub fn print_scan_output(recipes: &[Recipe]) {
    for line in format_scan_output(recipes) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the documents written by a build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .site
        .documents()
        .iter()
        .zip(&report.written)
        .map(|(doc, path)| format!("{} → {}", doc.name, path.display()))
        .collect();

    lines.push(String::new());
    lines.push(format!(
        "Generated {} from {}",
        plural(report.written.len(), "document"),
        plural(report.recipes.len(), "recipe")
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
