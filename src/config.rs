// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "sprint-report.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    default_file: Option<PathBuf>,
}

/// Optional settings read from `sprint-report.toml`.
///
/// A relative `default_file` is taken relative to the directory holding the
/// file. The traversal guard always uses the working directory and cannot be
/// changed from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Ticket file analyzed when none is given on the command line.
    pub default_file: Option<PathBuf>,
    /// Where this config was read from, if anywhere.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parses TOML `content`, anchoring relative paths at `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or contains unknown
    /// keys.
    pub fn from_toml(content: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).context("Invalid sprint-report configuration")?;
        let default_file = raw
            .default_file
            .map(|p| if p.is_absolute() { p } else { base_dir.join(p) });

        Ok(Self {
            default_file,
            source: None,
        })
    }

    /// Loads the config file at `path`, which must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut config = Self::from_toml(&content, base_dir)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Looks for `sprint-report.toml` in `dir` and then each parent directory,
    /// loading the first one found. Returns the default config when there is
    /// none.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is found but cannot be read or parsed.
    pub fn discover(dir: &Path) -> Result<Self> {
        let mut current_dir = dir.to_path_buf();
        let mut visited = HashSet::new();

        while visited.insert(current_dir.clone()) {
            let candidate = current_dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "found config file");
                return Self::load(&candidate);
            }

            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_path_buf(),
                None => break,
            }
        }

        debug!(start = %dir.display(), "no config file found");
        Ok(Self::default())
    }
}
