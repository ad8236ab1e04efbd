//! Layered configuration for lexigraph tools.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables `LEXIGRAPH_*`, nested keys split on `__`
//!    (e.g. `LEXIGRAPH_LOGGING__LEVEL=debug`)
//! 2. TOML file (explicit path, or `lexigraph.toml` when present)
//! 3. Compiled defaults
//!
//! Command-line flags are applied on top by the caller.
//!
//! # Example
//!
//! ```rust
//! use lexigraph_core::config::{LexigraphConfig, OutputFormat};
//!
//! let config = LexigraphConfig::from_toml_str(
//!     r#"
//!     [output]
//!     format = "json"
//!
//!     [bench]
//!     seed = 7
//!     runs = [{ vertices = 100, edges = 300 }]
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.output.format, OutputFormat::Json);
//! assert_eq!(config.bench.seed, 7);
//! assert_eq!(config.logging.level, "info");
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "lexigraph.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LEXIGRAPH_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A provider failed or a value has the wrong type.
    #[error("Failed to load configuration: {0}")]
    Extract(#[from] figment::Error),

    /// A value parsed but is out of range.
    #[error("Invalid configuration value for {field}: {message}")]
    Invalid {
        /// Dotted key of the offending value.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The configuration could not be rendered back to TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexigraphConfig {
    /// Log output.
    pub logging: LoggingConfig,
    /// Result rendering.
    pub output: OutputConfig,
    /// Benchmark harness.
    pub bench: BenchConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// How results are printed.
    pub format: OutputFormat,
}

/// Result rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Benchmark harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Base seed; run `i` uses `seed + i`.
    pub seed: u64,
    /// Graph sizes to time.
    pub runs: Vec<BenchRun>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            runs: vec![
                BenchRun::new(1000, 3000),
                BenchRun::new(3000, 12000),
                BenchRun::new(7000, 30000),
            ],
        }
    }
}

/// One benchmark graph size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchRun {
    /// Vertex count.
    pub vertices: usize,
    /// Undirected edge count.
    pub edges: usize,
}

impl BenchRun {
    /// Creates a run description.
    #[must_use]
    pub fn new(vertices: usize, edges: usize) -> Self {
        Self { vertices, edges }
    }
}

impl LexigraphConfig {
    /// Builds the provider stack without extracting it.
    ///
    /// With `path = None`, `lexigraph.toml` in the working directory is
    /// merged if it exists.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if `path` is given but missing,
    /// `ConfigError::Extract` on malformed TOML or mistyped values, and
    /// `ConfigError::Invalid` if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
        }
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Parses a TOML document over the defaults, ignoring the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }

        for (i, run) in self.bench.runs.iter().enumerate() {
            if run.vertices < 2 {
                return Err(ConfigError::Invalid {
                    field: format!("bench.runs[{i}].vertices"),
                    message: "must be at least 2".to_string(),
                });
            }
            let max_edges = run.vertices.saturating_mul(run.vertices - 1) / 2;
            if run.edges > max_edges {
                return Err(ConfigError::Invalid {
                    field: format!("bench.runs[{i}].edges"),
                    message: format!(
                        "{} vertices allow at most {max_edges} distinct edges",
                        run.vertices
                    ),
                });
            }
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
