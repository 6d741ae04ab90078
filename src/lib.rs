//! Figma Export (figx) Library
//!
//! A library for importing Figma designs via the REST API and generating
//! standalone JavaScript/TypeScript modules that reproduce the design's
//! metadata, node tree, styles, and design tokens.
//!
//! # Module Overview
//!
//! - [`figma_client`] - HTTP client for the Figma REST API
//! - [`normalize`] - Raw node tree to canonical depth-annotated tree
//! - [`tokens`] - Design token extraction
//! - [`css`] - Parser for pasted "copy as code" CSS
//! - [`synth`] - Code synthesis across five output formats
//! - [`validate`] - Static checks over generated text
//! - [`pipeline`] - The single generation entry point
//! - [`worker`] - Timeout-bounded offloaded execution
//! - [`config`] - Configuration file support
//! - [`types`] - Core data types and structures
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use figx_lib::{generate, GenerationOptions, GenerationRequest};
//! use figx_lib::{FigmaAuth, FigmaClient};
//!
//! # async fn example() -> figx_lib::Result<()> {
//! // Fetch a file
//! let auth = FigmaAuth::from_env().expect("FIGMA_TOKEN set");
//! let client = FigmaClient::new(auth)?;
//! let data = client.fetch_file("FILE_KEY").await?;
//!
//! // Generate a module
//! let outcome = generate(&GenerationRequest {
//!     data,
//!     file_key: "FILE_KEY".to_string(),
//!     node_id: None,
//!     css_text: None,
//!     options: GenerationOptions::default(),
//! })?;
//! println!("{}", outcome.generated.code);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod css;
pub mod error;
pub mod figma_client;
pub mod metadata;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod resource;
pub mod stats;
pub mod style;
pub mod synth;
pub mod tokens;
pub mod types;
pub mod validate;
pub mod validation;
pub mod worker;

pub use config::Config;
pub use css::{CssParser, ParsedCssData, ParsedCssRule};
pub use error::{ErrorCategory, ErrorPayload, FigxError, Result};
pub use figma_client::{FigmaAuth, FigmaClient, RetryPolicy};
pub use metadata::{extract_metadata, FileMetadata};
pub use normalize::normalize_document;
pub use output::{
    ErrorOutput, FigxOutput, GenerateOutput, ResourceDescriptor, TokensOutput, ValidateOutput,
    FIGX_OUTPUT_VERSION,
};
pub use pipeline::{generate, GenerationOutcome, GenerationRequest};
pub use resource::{parse_resource, FigmaInfo, ParsedResource, ResourceKind};
pub use stats::calculate_statistics;
pub use synth::{download_file_name, synthesize, SynthesisInput};
pub use tokens::extract_design_tokens;
pub use types::{
    ComponentStatistics, Complexity, DesignTokenSet, FigmaFileData, FigmaNode,
    GeneratedJavaScript, GeneratedMetadata, GenerationOptions, NormalizedNode, OutputFormat,
    OutputStyle, ValidationIssue, ValidationResult,
};
pub use validate::{validate_generated_code, SIZE_WARNING_BYTES};
pub use validation::validate_figma_data;
pub use worker::generate_with_timeout;
