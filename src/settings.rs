use std::path::Path;
use std::time::Duration;

use figx_lib::{Config, FigxError, GenerationOptions};

use crate::cli::{FormatVariant, StyleVariant};

/// Merge CLI flags over config-provided generation defaults. Value flags
/// override when present; boolean flags only push away from the default.
pub fn resolve_generation_options(
    variant: Option<FormatVariant>,
    output_style: Option<StyleVariant>,
    minify: bool,
    no_types: bool,
    no_comments: bool,
    no_helpers: bool,
    config: &Config,
) -> GenerationOptions {
    let mut options = config.generation.to_options();

    if let Some(variant) = variant {
        options.format = variant.into();
    }
    if let Some(style) = output_style {
        options.output_style = style.into();
    }
    if minify {
        options.minify = true;
    }
    if no_types {
        options.include_types = false;
    }
    if no_comments {
        options.include_comments = false;
    }
    if no_helpers {
        options.include_helpers = false;
    }

    options
}

/// Generation timeout: explicit CLI seconds beat the config value.
pub fn resolve_generation_timeout(cli_timeout: Option<u64>, config: &Config) -> Duration {
    cli_timeout
        .map(Duration::from_secs)
        .unwrap_or(config.timeouts.generation)
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/figx/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, FigxError> {
    let cfg = Config::load(path)?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        FigxError::Config(prefix)
    })?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figx_lib::{OutputFormat, OutputStyle};

    #[test]
    fn options_fall_back_to_config_defaults() {
        let config = Config::default();
        let options =
            resolve_generation_options(None, None, false, false, false, false, &config);

        assert_eq!(options.format, OutputFormat::Complete);
        assert_eq!(options.output_style, OutputStyle::Es6);
        assert!(options.include_types);
        assert!(!options.minify);
    }

    #[test]
    fn cli_flags_override_config() {
        let config = Config::default();
        let options = resolve_generation_options(
            Some(FormatVariant::Minimal),
            Some(StyleVariant::Umd),
            true,
            true,
            false,
            true,
            &config,
        );

        assert_eq!(options.format, OutputFormat::Minimal);
        assert_eq!(options.output_style, OutputStyle::Umd);
        assert!(options.minify);
        assert!(!options.include_types);
        assert!(options.include_comments);
        assert!(!options.include_helpers);
    }

    #[test]
    fn timeout_prefers_cli_seconds() {
        let config = Config::default();
        assert_eq!(
            resolve_generation_timeout(Some(5), &config),
            Duration::from_secs(5)
        );
        assert_eq!(
            resolve_generation_timeout(None, &config),
            config.timeouts.generation
        );
    }
}
