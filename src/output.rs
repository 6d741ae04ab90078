use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ErrorPayload;
use crate::resource::ResourceKind;
use crate::types::generated::{
    ComponentStatistics, GeneratedMetadata, ValidationIssue, ValidationResult,
};
use crate::types::tokens::DesignTokenSet;

/// Schema version for output payloads.
pub const FIGX_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum FigxOutput {
    Generate(GenerateOutput),
    Tokens(TokensOutput),
    Validate(ValidateOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    pub version: String,
    pub input: ResourceDescriptor,
    pub format: String,
    pub output_style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    pub download_name: String,
    /// Present unless the code was written to `output_path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub metadata: GeneratedMetadata,
    pub validation: ValidationResult,
    pub statistics: ComponentStatistics,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensOutput {
    pub version: String,
    pub input: ResourceDescriptor,
    pub tokens: DesignTokenSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOutput {
    pub version: String,
    pub input: PathBuf,
    pub validation: ValidationResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::generated::Complexity;

    #[test]
    fn generate_output_serializes_with_mode_tag() {
        let output = FigxOutput::Generate(GenerateOutput {
            version: FIGX_OUTPUT_VERSION.to_string(),
            input: ResourceDescriptor {
                kind: ResourceKind::Snapshot,
                value: "design.json".to_string(),
            },
            format: "minimal".to_string(),
            output_style: "es6".to_string(),
            output_path: None,
            download_name: "figma-demo.js".to_string(),
            code: Some("export default figmaComponent;".to_string()),
            metadata: GeneratedMetadata {
                file_key: "KEY".to_string(),
                file_name: "Demo".to_string(),
                node_id: None,
                generated_at: "2024-01-01T00:00:00.000Z".to_string(),
                size: 30,
            },
            validation: ValidationResult::new(vec![], vec![], vec![]),
            statistics: ComponentStatistics {
                total_nodes: 2,
                text_nodes: 1,
                components: 0,
                component_instances: 0,
                max_depth: 1,
                node_types: Default::default(),
                complexity: Complexity::Low,
            },
            issues: vec![],
        });

        let json = serde_json::to_string(&output).expect("serialize generate output");
        assert!(json.contains("\"mode\":\"generate\""));
        assert!(json.contains("\"downloadName\":\"figma-demo.js\""));
        assert!(json.contains("\"isValid\":true"));
    }

    #[test]
    fn error_output_round_trips() {
        let output = FigxOutput::Error(ErrorOutput {
            version: FIGX_OUTPUT_VERSION.to_string(),
            message: Some("bad input".to_string()),
            error: ErrorPayload {
                category: crate::error::ErrorCategory::Config,
                message: "bad input".to_string(),
                remediation: Some("check flags".to_string()),
            },
        });

        let json = serde_json::to_string(&output).expect("serialize error output");
        assert!(json.contains("\"mode\":\"error\""));
        let back: FigxOutput = serde_json::from_str(&json).expect("parse error output");
        match back {
            FigxOutput::Error(parsed) => assert_eq!(parsed.message.as_deref(), Some("bad input")),
            _ => panic!("expected error output"),
        }
    }
}
