//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Keys absent from the file
//! keep their stock defaults. Command-line flags override the file, and the
//! result is validated only once every override has been applied.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"    # Directory scanned for *.md recipes
//! template_dir = "templates"  # Directory holding homepage.html and recipe_overview.html
//! output_dir = "dist"         # Directory receiving the generated .html files
//! ```
//!
//! Relative paths are resolved against the working directory, not the
//! config file. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory scanned recursively for Markdown recipes.
    pub content_root: PathBuf,
    /// Directory of Tera templates.
    pub template_dir: PathBuf,
    /// Directory the generated documents are written to.
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("content"),
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    /// Validate paths are present and the output won't land on the inputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, path) in [
            ("content_root", &self.content_root),
            ("template_dir", &self.template_dir),
            ("output_dir", &self.output_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if self.output_dir == self.content_root {
            return Err(ConfigError::Validation(
                "output_dir must differ from content_root".into(),
            ));
        }
        if self.output_dir == self.template_dir {
            return Err(ConfigError::Validation(
                "output_dir must differ from template_dir".into(),
            ));
        }
        Ok(())
    }

    /// Replace any path given on the command line.
    pub fn with_overrides(
        mut self,
        content_root: Option<PathBuf>,
        template_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = content_root {
            self.content_root = path;
        }
        if let Some(path) = template_dir {
            self.template_dir = path;
        }
        if let Some(path) = output_dir {
            self.output_dir = path;
        }
        self
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from the file at `path`, falling back to stock defaults when
/// the file is absent.
///
/// Keys missing from the file keep their defaults. The result is not
/// validated; [`load_with_overrides`] validates after applying flags.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load the config file, apply command-line overrides, then validate the
/// final paths.
pub fn load_with_overrides(
    path: &Path,
    content_root: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<SiteConfig, ConfigError> {
    let config = load_config(path)?.with_overrides(content_root, template_dir, output_dir);
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Recipe Site Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Relative paths are resolved against the directory you run the build from.
# Command-line flags (--source, --templates, --output) override these values.
# Unknown keys will cause an error.

# Directory scanned recursively for Markdown recipes (*.md).
# Every recipe needs a "# Title" line.
content_root = "content"

# Directory of Tera templates. Two are required:
#   homepage.html         rendered with no variables
#   recipe_overview.html  rendered with `recipes`, the list of all recipes
template_dir = "templates"

# Directory the generated homepage.html and recipe_overview.html go to.
# Created if missing; existing files are overwritten.
output_dir = "dist"
"##
}
