use clap::{Parser, Subcommand};
use recipe_site::config::{self, SiteConfig};
use recipe_site::pipeline::{self, BuildError, exit_code};
use recipe_site::{output, scan::FileSystemRecipeRepository};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "recipe-site")]
#[command(about = "Static site generator for Markdown recipe collections")]
#[command(long_about = "\
Static site generator for Markdown recipe collections

Every .md file under the content directory is a recipe. Its title is the
first line starting with \"# \". Two pages are generated from templates:

  templates/
  ├── homepage.html          # Rendered with no variables
  └── recipe_overview.html   # Rendered with `recipes`, every recipe in path order

Exit codes:
  0  success
  2  invalid command line
  3  invalid configuration
  4  content directory not found
  5  a recipe could not be read or has no title
  6  a required template is missing
  7  a template failed to parse or render
  8  an output file could not be written
  9  a file in the template directory could not be read

Run 'recipe-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Configuration file (missing file = defaults)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Content directory (overrides content_root)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Template directory (overrides template_dir)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Output directory (overrides output_dir)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the recipes found in the content directory
    Scan,
    /// Load and render everything without writing output
    Check,
    /// Run the full pipeline: load → generate → write
    Build,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), BuildError> {
    match cli.command {
        Command::Scan => {
            let site_config = resolve_config(&cli)?;
            let recipes = FileSystemRecipeRepository::new(&site_config.content_root).load()?;
            output::print_scan_output(&recipes);
        }
        Command::Check => {
            let site_config = resolve_config(&cli)?;
            println!("==> Checking {}", site_config.content_root.display());
            let (recipes, _site) = pipeline::check(&site_config)?;
            output::print_scan_output(&recipes);
            println!("==> Content is valid");
        }
        Command::Build => {
            let site_config = resolve_config(&cli)?;
            println!(
                "==> Building {} → {}",
                site_config.content_root.display(),
                site_config.output_dir.display()
            );
            let report = pipeline::build(&site_config)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", site_config.output_dir.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Config file values with command-line overrides applied, validated.
fn resolve_config(cli: &Cli) -> Result<SiteConfig, BuildError> {
    Ok(config::load_with_overrides(
        &cli.config,
        cli.source.clone(),
        cli.templates.clone(),
        cli.output.clone(),
    )?)
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
