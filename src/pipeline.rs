//! Pipeline entry point: raw API response in, generated module out.
//!
//! Each call is an independent, synchronous, in-memory transformation; no
//! state is shared between requests. Callers needing UI responsiveness can
//! route the same call through [`crate::worker`].

use chrono::{SecondsFormat, Utc};

use crate::css::{CssParser, ParsedCssData};
use crate::error::{FigxError, Result};
use crate::metadata::extract_metadata;
use crate::normalize::normalize_document;
use crate::stats::calculate_statistics;
use crate::synth::{download_file_name, synthesize, SynthesisInput};
use crate::tokens::extract_design_tokens;
use crate::types::figma::FigmaFileData;
use crate::types::generated::{
    ComponentStatistics, GeneratedJavaScript, GeneratedMetadata, ValidationIssue, ValidationResult,
};
use crate::types::options::GenerationOptions;
use crate::types::tokens::DesignTokenSet;
use crate::validate::validate_generated_code;
use crate::validation::validate_figma_data;

/// One generation request: the resolved API response plus caller options.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub data: FigmaFileData,
    pub file_key: String,
    pub node_id: Option<String>,
    pub css_text: Option<String>,
    pub options: GenerationOptions,
}

/// Everything a caller needs to render the result: the module, validation
/// of both input and output, statistics, tokens, and a download name.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub generated: GeneratedJavaScript,
    pub validation: ValidationResult,
    pub issues: Vec<ValidationIssue>,
    pub statistics: ComponentStatistics,
    pub tokens: DesignTokenSet,
    pub download_file_name: String,
}

/// Run the full pipeline: validate input, normalize, extract tokens, parse
/// CSS, synthesize, validate output.
///
/// Input-validation issues are non-fatal and returned alongside the result;
/// only a missing document aborts, since there is nothing to synthesize
/// from.
pub fn generate(request: &GenerationRequest) -> Result<GenerationOutcome> {
    let issues = validate_figma_data(&request.data);

    let document = request.data.document.as_ref().ok_or_else(|| {
        FigxError::generation("response has no document to generate from")
    })?;

    let normalized = normalize_document(document);
    let tokens = extract_design_tokens(&request.data);
    let metadata = extract_metadata(&request.data, &request.file_key, request.node_id.as_deref());
    let statistics = calculate_statistics(&normalized);
    let css: Option<ParsedCssData> = request.css_text.as_deref().map(CssParser::parse);

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let input = SynthesisInput {
        metadata: &metadata,
        document: &normalized,
        components: &request.data.components,
        styles: &request.data.styles,
        tokens: &tokens,
        css: css.as_ref(),
        generated_at: &generated_at,
    };

    let code = synthesize(&input, &request.options);
    let validation = validate_generated_code(&code);

    let generated = GeneratedJavaScript {
        metadata: GeneratedMetadata {
            file_key: request.file_key.clone(),
            file_name: metadata.file_name.clone(),
            node_id: request.node_id.clone(),
            generated_at,
            size: code.len(),
        },
        code,
    };

    Ok(GenerationOutcome {
        download_file_name: download_file_name(
            &generated.metadata.file_name,
            request.options.format,
        ),
        generated,
        validation,
        issues,
        statistics,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::options::{OutputFormat, OutputStyle};
    use serde_json::json;

    fn hello_request(format: OutputFormat) -> GenerationRequest {
        let data: FigmaFileData = serde_json::from_value(json!({
            "document": {
                "id": "0:1", "name": "Frame", "type": "FRAME",
                "children": [{
                    "id": "0:2", "name": "Greeting", "type": "TEXT",
                    "characters": "Hello",
                    "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}]
                }]
            },
            "name": "Hello File",
            "lastModified": "2024-01-01T00:00:00Z",
            "version": "1",
            "role": "viewer",
            "editorType": "figma"
        }))
        .expect("parse request data");

        GenerationRequest {
            data,
            file_key: "HELLO123".to_string(),
            node_id: None,
            css_text: None,
            options: GenerationOptions {
                format,
                output_style: OutputStyle::Es6,
                ..GenerationOptions::default()
            },
        }
    }

    #[test]
    fn minimal_end_to_end_matches_contract() {
        let outcome = generate(&hello_request(OutputFormat::Minimal)).expect("generate");

        assert_eq!(outcome.statistics.total_nodes, 2);
        assert_eq!(outcome.statistics.max_depth, 1);
        assert!(outcome.issues.is_empty());

        let code = &outcome.generated.code;
        assert!(code.contains("export default figmaComponent;"));
        assert!(code.contains("\"characters\": \"Hello\""));
        assert!(
            outcome.validation.is_valid,
            "validator errors: {:?}",
            outcome.validation.errors
        );
        assert_eq!(outcome.generated.metadata.size, code.len());
        assert_eq!(outcome.download_file_name, "figma-hello-file.js");
    }

    #[test]
    fn metadata_round_trips_into_every_format() {
        for format in [
            OutputFormat::Complete,
            OutputFormat::Minimal,
            OutputFormat::Structured,
            OutputFormat::Modular,
            OutputFormat::Typescript,
        ] {
            let outcome = generate(&hello_request(format)).expect("generate");
            let code = &outcome.generated.code;
            assert!(code.contains("Hello File"), "file name missing in {format:?}");
            assert!(code.contains("HELLO123"), "file key missing in {format:?}");
            assert!(
                outcome.validation.is_valid,
                "{format:?} failed validation: {:?}",
                outcome.validation.errors
            );
        }
    }

    #[test]
    fn minimal_output_is_idempotent() {
        let request = hello_request(OutputFormat::Minimal);
        let first = generate(&request).expect("first run");
        let second = generate(&request).expect("second run");
        assert_eq!(first.generated.code, second.generated.code);
    }

    #[test]
    fn missing_document_is_a_generation_error() {
        let mut request = hello_request(OutputFormat::Minimal);
        request.data.document = None;
        let err = generate(&request).expect_err("must fail without document");
        assert!(matches!(err, FigxError::Generation(_)));
    }

    #[test]
    fn css_text_is_merged_into_the_output() {
        let mut request = hello_request(OutputFormat::Complete);
        request.css_text =
            Some(".layer-greeting { color: #ff0000; transition: all 0.2s; }".to_string());

        let outcome = generate(&request).expect("generate");
        let code = &outcome.generated.code;
        assert!(code.contains("cssData"));
        assert!(code.contains("designSystem"));
        assert!(code.contains("#ff0000"));
        assert!(outcome.validation.is_valid, "{:?}", outcome.validation.errors);
    }

    #[test]
    fn input_issues_do_not_abort_generation() {
        let mut request = hello_request(OutputFormat::Minimal);
        if let Some(document) = request.data.document.as_mut() {
            document.children[0].characters = None;
        }

        let outcome = generate(&request).expect("generate with degraded input");
        assert!(outcome
            .issues
            .iter()
            .any(|i| i.message == "Text node missing characters"));
        assert!(!outcome.generated.code.is_empty());
    }
}
