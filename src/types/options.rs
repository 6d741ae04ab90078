//! Per-request generation options.

use serde::{Deserialize, Serialize};

/// Output format for the synthesized module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Complete,
    Minimal,
    Structured,
    Modular,
    Typescript,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Complete => "complete",
            OutputFormat::Minimal => "minimal",
            OutputFormat::Structured => "structured",
            OutputFormat::Modular => "modular",
            OutputFormat::Typescript => "typescript",
        }
    }

    /// File extension for a downloaded module of this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Typescript => "ts",
            _ => "js",
        }
    }
}

/// Module system for the export surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Es6,
    Commonjs,
    Umd,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Es6 => "es6",
            OutputStyle::Commonjs => "commonjs",
            OutputStyle::Umd => "umd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    None,
    #[default]
    Basic,
    Aggressive,
}

/// Options supplied by the caller for a single generation request.
///
/// `include_validation`, `treeshaking`, and `compression_level` are carried
/// for option-surface parity; only `minify` alters the synthesized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub format: OutputFormat,
    pub include_types: bool,
    pub include_comments: bool,
    pub include_validation: bool,
    pub include_helpers: bool,
    pub compression_level: CompressionLevel,
    pub output_style: OutputStyle,
    pub treeshaking: bool,
    pub minify: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Complete,
            include_types: true,
            include_comments: true,
            include_validation: true,
            include_helpers: true,
            compression_level: CompressionLevel::Basic,
            output_style: OutputStyle::Es6,
            treeshaking: true,
            minify: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_expected() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.format, OutputFormat::Complete);
        assert_eq!(opts.output_style, OutputStyle::Es6);
        assert!(opts.include_types);
        assert!(opts.include_comments);
        assert!(opts.include_helpers);
        assert!(!opts.minify);
    }

    #[test]
    fn typescript_format_uses_ts_extension() {
        assert_eq!(OutputFormat::Typescript.file_extension(), "ts");
        assert_eq!(OutputFormat::Minimal.file_extension(), "js");
    }

    #[test]
    fn format_round_trips_through_serde() {
        let json = serde_json::to_string(&OutputFormat::Structured).unwrap();
        assert_eq!(json, "\"structured\"");
        let back: OutputFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OutputFormat::Structured);
    }
}
