//! Configuration file support.
//!
//! Priority: explicit path > `~/.config/figx/config.toml` > built-in
//! defaults. CLI flags override config values when explicitly present
//! (see the binary's settings module).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{FigxError, Result};
use crate::types::options::{CompressionLevel, GenerationOptions, OutputFormat, OutputStyle};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub retry: RetryConfig,
    pub timeouts: Timeouts,
    pub generation: GenerationDefaults,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    #[serde(with = "humantime_serde")]
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    /// Per-request HTTP timeout for the Figma API client.
    #[serde(with = "humantime_serde")]
    pub request: Duration,
    /// Wall-clock limit for one offloaded generation run.
    #[serde(with = "humantime_serde")]
    pub generation: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(30),
            generation: Duration::from_secs(60),
        }
    }
}

/// Default generation options, overridable per invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    pub format: OutputFormat,
    pub output_style: OutputStyle,
    pub compression_level: CompressionLevel,
    pub include_types: bool,
    pub include_comments: bool,
    pub include_validation: bool,
    pub include_helpers: bool,
    pub treeshaking: bool,
    pub minify: bool,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            format: options.format,
            output_style: options.output_style,
            compression_level: options.compression_level,
            include_types: options.include_types,
            include_comments: options.include_comments,
            include_validation: options.include_validation,
            include_helpers: options.include_helpers,
            treeshaking: options.treeshaking,
            minify: options.minify,
        }
    }
}

impl GenerationDefaults {
    pub fn to_options(&self) -> GenerationOptions {
        GenerationOptions {
            format: self.format,
            output_style: self.output_style,
            compression_level: self.compression_level,
            include_types: self.include_types,
            include_comments: self.include_comments,
            include_validation: self.include_validation,
            include_helpers: self.include_helpers,
            treeshaking: self.treeshaking,
            minify: self.minify,
        }
    }
}

impl Config {
    /// Load config from a TOML file, the central config, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Some(central) = Self::central_config_path() {
            if central.exists() {
                return Self::from_file(&central);
            }
        }

        Ok(Self::default())
    }

    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("figx")
                .join("config.toml")
        })
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FigxError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&text).map_err(|e| {
            FigxError::Config(format!("Invalid config {}: {}", path.display(), e))
        })
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.retry.max_retries > 10 {
            return Err(format!(
                "retry.max_retries must be at most 10, got {}",
                self.retry.max_retries
            ));
        }
        if self.retry.base_delay.is_zero() {
            return Err("retry.base_delay must be greater than zero".to_string());
        }
        if self.timeouts.request.is_zero() {
            return Err("timeouts.request must be greater than zero".to_string());
        }
        if self.timeouts.generation.is_zero() {
            return Err("timeouts.generation must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_values_match_expected() {
        let cfg = Config::default();

        assert_eq!(cfg.retry.max_retries, 3);
        assert_eq!(cfg.retry.base_delay, Duration::from_secs(1));
        assert_eq!(cfg.timeouts.request, Duration::from_secs(30));
        assert_eq!(cfg.timeouts.generation, Duration::from_secs(60));
        assert_eq!(cfg.generation.format, OutputFormat::Complete);
        assert_eq!(cfg.generation.output_style, OutputStyle::Es6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp config");
        writeln!(
            file,
            "[retry]\nmax_retries = 5\nbase_delay = \"250ms\"\n\n[generation]\nformat = \"minimal\"\nminify = true\n"
        )
        .unwrap();

        let cfg = Config::load(Some(file.path())).expect("load config");
        assert_eq!(cfg.retry.max_retries, 5);
        assert_eq!(cfg.retry.base_delay, Duration::from_millis(250));
        assert_eq!(cfg.generation.format, OutputFormat::Minimal);
        assert!(cfg.generation.minify);
        // Untouched sections keep defaults.
        assert_eq!(cfg.timeouts.generation, Duration::from_secs(60));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp config");
        writeln!(file, "retry = \"not a table\"").unwrap();

        let err = Config::load(Some(file.path())).expect_err("must fail");
        assert!(matches!(err, FigxError::Config(_)));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut cfg = Config::default();
        cfg.retry.max_retries = 99;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.timeouts.generation = Duration::ZERO;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn generation_defaults_convert_to_options() {
        let mut cfg = Config::default();
        cfg.generation.format = OutputFormat::Typescript;
        cfg.generation.include_helpers = false;

        let options = cfg.generation.to_options();
        assert_eq!(options.format, OutputFormat::Typescript);
        assert!(!options.include_helpers);
        assert!(options.include_comments);
    }
}
