//! Layered configuration for the `fundamentals` CLI.
//!
//! Layers, lowest precedence first:
//! 1. compiled defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed with `FUNDAMENTALS__` (`__` separates nested keys)
//! 4. CLI overrides (`--json`)

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Prefix for environment variable overrides, e.g. `FUNDAMENTALS__OUTPUT__FORMAT=json`.
pub const ENV_PREFIX: &str = "FUNDAMENTALS__";

/// Configuration error for loading and merging layers
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Effective application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when neither `RUST_LOG` nor `-v` is given.
    #[serde(deserialize_with = "deserialize_scalar_string")]
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Printed in text mode for an absent text result.
    #[serde(deserialize_with = "deserialize_scalar_string")]
    pub absent_marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            absent_marker: "(absent)".to_owned(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Deserializes a string, number or bool into a `String`.
///
/// Env values are parsed into typed values before extraction, so
/// `FUNDAMENTALS__OUTPUT__ABSENT_MARKER=0` arrives as an integer.
/// Numbers are re-rendered, so `007` becomes `7`.
fn deserialize_scalar_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarString;

    impl de::Visitor<'_> for ScalarString {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a string, number or bool")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    d.deserialize_any(ScalarString)
}

impl AppConfig {
    /// Merge defaults, the optional YAML file and `FUNDAMENTALS__*` env vars.
    ///
    /// # Errors
    /// Returns `ConfigError::NotFound` if `path` is given but is not a file, and
    /// `ConfigError::Invalid` if the merged layers do not match the schema.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        Ok(config)
    }

    /// Apply flags that take precedence over every other layer.
    pub fn apply_cli_overrides(&mut self, json: bool) {
        if json {
            self.output.format = OutputFormat::Json;
        }
    }
}
