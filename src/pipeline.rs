//! The full build: load → generate → write.
//!
//! [`run`] is generic over the three capabilities so any recipe source,
//! template engine, or destination can be plugged in. [`build`] wires up the
//! filesystem implementations from a [`SiteConfig`].
//!
//! Every stage finishes before the next starts, and the first error aborts
//! the build. [`BuildError::exit_code`] gives each failure kind its own
//! process exit code.

use crate::config::{ConfigError, SiteConfig};
use crate::generate::{GenerateError, SiteRenderer, TemplateEngine, TeraTemplates};
use crate::scan::{FileSystemRecipeRepository, RecipeRepository, ScanError};
use crate::types::{Recipe, Site};
use crate::write::{FileSystemWebsiteRepository, WebsiteRepository, WriteError};
use log::info;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes, one per failure kind. `2` is left to clap for usage errors.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const CONFIG: u8 = 3;
    pub const CONTENT_ROOT_NOT_FOUND: u8 = 4;
    pub const RECIPE: u8 = 5;
    pub const TEMPLATE_NOT_FOUND: u8 = 6;
    pub const TEMPLATE_RENDER: u8 = 7;
    pub const WRITE: u8 = 8;
    pub const TEMPLATE_READ: u8 = 9;
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl BuildError {
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::Config(_) => exit_code::CONFIG,
            BuildError::Scan(ScanError::ContentRootNotFound(_)) => {
                exit_code::CONTENT_ROOT_NOT_FOUND
            }
            BuildError::Scan(_) => exit_code::RECIPE,
            BuildError::Generate(GenerateError::TemplateNotFound { .. }) => {
                exit_code::TEMPLATE_NOT_FOUND
            }
            BuildError::Generate(GenerateError::TemplateRead { .. } | GenerateError::Walk(_)) => {
                exit_code::TEMPLATE_READ
            }
            BuildError::Generate(_) => exit_code::TEMPLATE_RENDER,
            BuildError::Write(_) => exit_code::WRITE,
        }
    }
}

/// What a successful build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub recipes: Vec<Recipe>,
    pub site: Site,
    pub written: Vec<PathBuf>,
}

/// Run the three stages against arbitrary capabilities.
pub fn run<R, T, W>(
    recipes: &R,
    renderer: &SiteRenderer<T>,
    destination: &W,
) -> Result<BuildReport, BuildError>
where
    R: RecipeRepository,
    T: TemplateEngine,
    W: WebsiteRepository,
{
    let loaded = recipes.find_all()?;
    let site = renderer.generate(&loaded)?;
    let written = destination.save(&site)?;
    info!("Wrote {} documents", written.len());
    Ok(BuildReport {
        recipes: loaded,
        site,
        written,
    })
}

/// Load and render without writing anything.
pub fn check(config: &SiteConfig) -> Result<(Vec<Recipe>, Site), BuildError> {
    let recipes = FileSystemRecipeRepository::new(&config.content_root).find_all()?;
    let renderer = SiteRenderer::new(TeraTemplates::from_dir(&config.template_dir)?);
    let site = renderer.generate(&recipes)?;
    Ok((recipes, site))
}

/// Build the site described by `config` on the local filesystem.
pub fn build(config: &SiteConfig) -> Result<BuildReport, BuildError> {
    let recipes = FileSystemRecipeRepository::new(&config.content_root);
    let renderer = SiteRenderer::new(TeraTemplates::from_dir(&config.template_dir)?);
    let destination = FileSystemWebsiteRepository::new(&config.output_dir);
    run(&recipes, &renderer, &destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{Bindings, HOMEPAGE_TEMPLATE, RECIPE_OVERVIEW_TEMPLATE};
    use crate::test_helpers::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    struct StaticRecipes(Vec<Recipe>);

    impl RecipeRepository for StaticRecipes {
        fn find_all(&self) -> Result<Vec<Recipe>, ScanError> {
            Ok(self.0.clone())
        }
    }

    /// Records names instead of rendering.
    struct EchoTemplates;

    impl TemplateEngine for EchoTemplates {
        fn render(&self, name: &str, bindings: &Bindings) -> Result<String, GenerateError> {
            let keys: Vec<&str> = bindings.keys().map(String::as_str).collect();
            Ok(format!("{name}:{keys:?}"))
        }
    }

    #[derive(Default)]
    struct MemoryWebsite(RefCell<Vec<String>>);

    impl WebsiteRepository for MemoryWebsite {
        fn save(&self, site: &Site) -> Result<Vec<PathBuf>, WriteError> {
            let mut saved = self.0.borrow_mut();
            for doc in site.documents() {
                saved.push(doc.filename());
            }
            Ok(saved.iter().map(PathBuf::from).collect())
        }
    }

    fn config_in(tmp: &TempDir) -> SiteConfig {
        SiteConfig {
            content_root: tmp.path().join("content"),
            template_dir: stock_template_dir(),
            output_dir: tmp.path().join("dist"),
        }
    }

    #[test]
    fn run_composes_custom_capabilities() {
        let recipes = StaticRecipes(vec![recipe("a.md", "# A")]);
        let website = MemoryWebsite::default();

        let report = run(&recipes, &SiteRenderer::new(EchoTemplates), &website).unwrap();

        assert_eq!(report.recipes.len(), 1);
        assert_eq!(
            report.site.get("recipe_overview").unwrap().content,
            r#"recipe_overview.html:["recipes"]"#
        );
        assert_eq!(
            *website.0.borrow(),
            vec!["homepage.html", "recipe_overview.html"]
        );
    }

    #[test]
    fn build_writes_site() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        write_recipe(&config.content_root, "a.md", "# Apple Pie\nSee apple.jpg.");

        let report = build(&config).unwrap();

        assert_eq!(report.written.len(), 2);
        let overview = fs::read_to_string(config.output_dir.join("recipe_overview.html")).unwrap();
        assert!(overview.contains("Apple Pie"));
    }

    #[test]
    fn check_does_not_write() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        write_recipe(&config.content_root, "a.md", "# A");

        let (recipes, site) = check(&config).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(site.len(), 2);
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn missing_content_root_exit_code() {
        let tmp = TempDir::new().unwrap();
        let err = build(&config_in(&tmp)).unwrap_err();
        assert_eq!(err.exit_code(), exit_code::CONTENT_ROOT_NOT_FOUND);
    }

    #[test]
    fn untitled_recipe_exit_code() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        write_recipe(&config.content_root, "a.md", "no title");

        let err = build(&config).unwrap_err();
        assert_eq!(err.exit_code(), exit_code::RECIPE);
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn missing_template_exit_code() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(&tmp);
        config.template_dir = tmp.path().join("no-templates");
        write_recipe(&config.content_root, "a.md", "# A");

        let err = build(&config).unwrap_err();
        assert_eq!(err.exit_code(), exit_code::TEMPLATE_NOT_FOUND);
        assert!(err.to_string().contains(HOMEPAGE_TEMPLATE));
    }

    #[test]
    fn render_failure_exit_code() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(&tmp);
        config.template_dir = tmp.path().join("templates");
        fs::create_dir_all(&config.template_dir).unwrap();
        fs::write(config.template_dir.join(HOMEPAGE_TEMPLATE), "ok").unwrap();
        fs::write(
            config.template_dir.join(RECIPE_OVERVIEW_TEMPLATE),
            "{{ missing_variable }}",
        )
        .unwrap();
        write_recipe(&config.content_root, "a.md", "# A");

        let err = build(&config).unwrap_err();
        assert_eq!(err.exit_code(), exit_code::TEMPLATE_RENDER);
    }

    #[test]
    fn unreadable_template_exit_code() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(&tmp);
        config.template_dir = tmp.path().join("templates");
        fs::create_dir_all(&config.template_dir).unwrap();
        fs::write(config.template_dir.join(HOMEPAGE_TEMPLATE), "ok").unwrap();
        fs::write(config.template_dir.join("banner.jpg"), [0xff, 0xd8, 0xff, 0xe0]).unwrap();
        write_recipe(&config.content_root, "a.md", "# A");

        let err = build(&config).unwrap_err();
        assert_eq!(err.exit_code(), exit_code::TEMPLATE_READ);
        assert!(err.to_string().contains("banner.jpg"));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn hidden_template_files_do_not_break_build() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(&tmp);
        config.template_dir = tmp.path().join("templates");
        fs::create_dir_all(&config.template_dir).unwrap();
        fs::write(config.template_dir.join(HOMEPAGE_TEMPLATE), "ok").unwrap();
        fs::write(config.template_dir.join(RECIPE_OVERVIEW_TEMPLATE), "n={{ recipes | length }}")
            .unwrap();
        fs::write(config.template_dir.join(".DS_Store"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
        write_recipe(&config.content_root, "a.md", "# A");

        let report = build(&config).unwrap();
        assert_eq!(report.site.get("recipe_overview").unwrap().content, "n=1");
    }

    #[test]
    fn write_failure_exit_code() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        write_recipe(&config.content_root, "a.md", "# A");
        fs::write(&config.output_dir, "a file, not a directory").unwrap();

        let err = build(&config).unwrap_err();
        assert_eq!(err.exit_code(), exit_code::WRITE);
    }

    #[test]
    fn config_error_exit_code() {
        let err = BuildError::from(ConfigError::Validation("bad".into()));
        assert_eq!(err.exit_code(), exit_code::CONFIG);
    }
}
