//! Generator settings: defaults, optional JSON file, command-line overrides.

use std::fs;
use std::path::Path;

use chromatag_core::catalog::{DEFAULT_CATEGORY, DEFAULT_COMMENT};
use serde::{Deserialize, Serialize};

use crate::cli::GenerateArgs;
use crate::error::CliError;

/// Default number of generated items.
const DEFAULT_COUNT: usize = 1000;

/// How the generator picks colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorMode {
    /// Even sweep from black to white.
    #[default]
    Gradient,
    /// Uniform random colors from a seeded RNG.
    Random,
}

/// Settings for `chromatag generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub mode: GeneratorMode,
    /// Seed for random mode. Without one, random mode seeds from the OS.
    pub seed: Option<u64>,
    pub category: String,
    pub comment: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            mode: GeneratorMode::Gradient,
            seed: None,
            category: DEFAULT_CATEGORY.to_owned(),
            comment: DEFAULT_COMMENT.to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    /// File settings (if any) with explicit flags applied on top.
    pub fn resolve(args: &GenerateArgs) -> Result<Self, CliError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(args);
        Ok(config)
    }

    fn apply(&mut self, args: &GenerateArgs) {
        if let Some(count) = args.count {
            self.count = count;
        }
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(category) = &args.category {
            self.category.clone_from(category);
        }
        if let Some(comment) = &args.comment {
            self.comment.clone_from(comment);
        }
    }
}
