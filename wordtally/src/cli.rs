// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::core::scanner::analyze;
use crate::core::stop_words::StopWordRegistry;
use crate::core::stop_words::loader::{load_config, read_config_file};
use crate::inputs::collect_inputs;
use crate::models::{AnalysisRequest, CollisionPolicy, Config};
use crate::utils::parse_path_list;

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files, directories or glob patterns to analyze, in order
    pub inputs: Vec<String>,

    /// Read a newline-delimited list of paths from this file ("-" for stdin)
    #[arg(short = 'L', long)]
    pub list: Option<PathBuf>,

    /// Stop-word language (defaults to the config file's choice, then English)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Count "The" and "the" as different words and letters
    #[arg(short, long)]
    pub case_sensitive: bool,

    /// Add up counts of keys that collide when folding case instead of keeping the last one
    #[arg(long)]
    pub sum_collisions: bool,

    /// Config file with extra stop-word languages (default: nearest .wordtally.toml or .wordtally.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List the available stop-word languages and exit
    #[arg(long)]
    pub languages: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `verbose`.
#[inline]
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed, e.g. when run from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_args_config(config: Option<&Path>) -> Result<Config> {
    match config {
        Some(path) => read_config_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => {
            let cwd = env::current_dir()?;
            load_config(&cwd).with_context(|| {
                format!("Failed to load config discovered from: {}", cwd.display())
            })
        }
    }
}

fn read_path_list(list: &Path) -> Result<Vec<PathBuf>> {
    let text = if list.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read path list from stdin")?;
        text
    } else {
        fs::read_to_string(list)
            .with_context(|| format!("Failed to read path list: {}", list.display()))?
    };
    Ok(parse_path_list(&text))
}

/// Builds the analysis request described by `args`.
///
/// # Errors
///
/// Fails if an input cannot be expanded or the path list cannot be read.
#[inline]
pub fn build_request(args: &Args, config: &Config) -> Result<AnalysisRequest> {
    let mut paths = collect_inputs(&args.inputs)?;
    if let Some(list) = &args.list {
        paths.extend(read_path_list(list)?);
    }

    let language = args
        .language
        .as_deref()
        .or(config.default_language.as_deref())
        .unwrap_or(DEFAULT_LANGUAGE);

    let policy = if args.sum_collisions {
        CollisionPolicy::Sum
    } else {
        CollisionPolicy::Overwrite
    };

    Ok(AnalysisRequest::new(paths, language, args.case_sensitive).with_collision_policy(policy))
}

/// Produces the text `run` prints: the report, or the language list with `--languages`.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * An input cannot be expanded or the path list cannot be read
/// * The analysis fails (no inputs, unknown language, missing or unreadable file)
#[inline]
pub fn render_output(args: &Args) -> Result<String> {
    let config = load_args_config(args.config.as_deref())?;
    let registry = StopWordRegistry::from_config(&config);

    if args.languages {
        return Ok(registry.languages().collect::<Vec<_>>().join("\n"));
    }

    let request = build_request(args, &config)?;
    tracing::info!(
        files = request.paths.len(),
        language = %request.language,
        case_sensitive = request.case_sensitive,
        "starting analysis"
    );

    Ok(analyze(&request, &registry)?)
}

/// Runs the command described by `args` and prints its output.
///
/// # Errors
///
/// Fails under the same conditions as [`render_output`].
#[inline]
pub fn run(args: Args) -> Result<()> {
    let output = render_output(&args)?;
    println!("{output}");
    Ok(())
}
