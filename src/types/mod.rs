//! Core data types for the figx pipeline.
//!
//! - [`figma`] - Raw Figma API response shapes
//! - [`normalized`] - Canonical depth-annotated node tree
//! - [`tokens`] - Design token tables
//! - [`options`] - Generation options and format enums
//! - [`generated`] - Output artifacts and validation results

pub mod figma;
pub mod generated;
pub mod normalized;
pub mod options;
pub mod tokens;

pub use figma::{
    Effect, EffectOffset, FigmaColor, FigmaFileData, FigmaNode, FigmaNodeContainer,
    FigmaNodesResponse, GradientStop, Paint, SharedStyle, TextStyle,
};
pub use generated::{
    ComponentStatistics, Complexity, GeneratedJavaScript, GeneratedMetadata, IssueStage,
    ValidationIssue, ValidationResult,
};
pub use normalized::{
    ComputedStyles, LayoutStyles, NormalizedNode, ResolvedEffect, ResolvedPaint, ResolvedStroke,
    ResolvedTypography, TypographyCss,
};
pub use options::{CompressionLevel, GenerationOptions, OutputFormat, OutputStyle};
pub use tokens::{DesignTokenSet, SpacingScale};
