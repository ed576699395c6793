// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::core::analyzer::{analyze_file, analyze_sprint_data_within};
use crate::models::AnalysisResult;

/// File analyzed when neither the command line nor the config names one.
pub const DEFAULT_DATA_FILE: &str = "sprint_data.csv";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sprint export to analyze (defaults to sprint_data.csv next to the executable)
    pub file: Option<PathBuf>,

    /// Config file to use instead of searching for sprint-report.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the analysis as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// `sprint_data.csv` in the directory of the running executable.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn default_data_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(DEFAULT_DATA_FILE))
}

/// Picks the input file, analyzes it and prints either the text report or
/// the JSON result to stdout.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the analysis fails.
pub fn run(args: Args) -> Result<AnalysisResult> {
    let root = env::current_dir()
        .and_then(|cwd| cwd.canonicalize())
        .context("Failed to determine the working directory")?;
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&root)?,
    };

    let file = match args.file.or(config.default_file) {
        Some(file) => file,
        None => default_data_path()?,
    };
    debug!(
        file = %file.display(),
        root = %root.display(),
        config = ?config.source,
        "starting analysis"
    );

    if args.json {
        let result = analyze_file(&file, &root)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Ok(analyze_sprint_data_within(&file, &root, &mut out)?)
}
