//! Output artifacts: generated module, validation results, statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The synthesized source text with its generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedJavaScript {
    pub code: String,
    pub metadata: GeneratedMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMetadata {
    pub file_key: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    pub generated_at: String,
    pub size: usize,
}

/// Advisory static-analysis result over generated text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Build a result; `is_valid` is true iff the error list is empty.
    pub fn new(errors: Vec<String>, warnings: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }
}

/// Structural statistics over a normalized document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatistics {
    pub total_nodes: u32,
    pub text_nodes: u32,
    /// COMPONENT and INSTANCE nodes combined.
    pub components: u32,
    /// INSTANCE nodes only.
    pub component_instances: u32,
    pub max_depth: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_types: BTreeMap<String, u32>,
    pub complexity: Complexity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Pipeline stage that raised an input-validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStage {
    Validation,
    Processing,
    Generation,
}

/// A non-fatal defect found in the raw API response.
///
/// Issues are collected, never thrown; the caller decides whether to block
/// generation or proceed with a degraded result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub stage: IssueStage,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            stage: IssueStage::Validation,
            message: message.into(),
            node_id: None,
            path: None,
        }
    }

    pub fn at_node(mut self, node_id: Option<&str>) -> Self {
        self.node_id = node_id.map(str::to_owned);
        self
    }

    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_result_validity_tracks_errors() {
        let ok = ValidationResult::new(vec![], vec!["warn".into()], vec![]);
        assert!(ok.is_valid);

        let bad = ValidationResult::new(vec!["boom".into()], vec![], vec![]);
        assert!(!bad.is_valid);
    }

    #[test]
    fn complexity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Complexity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn issue_builder_attaches_location() {
        let issue = ValidationIssue::validation("Missing node ID")
            .at_node(Some("1:2"))
            .at_path("document.children[0]");
        assert_eq!(issue.stage, IssueStage::Validation);
        assert_eq!(issue.node_id.as_deref(), Some("1:2"));
        assert_eq!(issue.path.as_deref(), Some("document.children[0]"));
    }
}
