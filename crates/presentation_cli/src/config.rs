//! CLI configuration
//!
//! Layered: built-in defaults, then `geo-generator.toml` in the working
//! directory (or the file given with `--config`), then `GEO_GENERATOR_*`
//! environment variables. Command-line flags override all of them.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Config file looked up when no path is given (extension is inferred)
const DEFAULT_CONFIG_NAME: &str = "geo-generator";

/// Environment variable prefix, e.g. `GEO_GENERATOR_LOG_LEVEL`
const ENV_PREFIX: &str = "GEO_GENERATOR";

/// How results are printed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line
    #[default]
    Text,
    /// A JSON object
    Json,
}

/// How log lines are written on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// Structured JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log filter used when no `-v` flag is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log line format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Result format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("log_level", default_log_level())?
            .set_default("log_format", "text")?
            .set_default("output", "text")?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => {
                builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false))
            },
        };

        // Override with environment variables (e.g., GEO_GENERATOR_OUTPUT)
        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
