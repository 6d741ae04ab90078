//! Structural validation of the raw API response.
//!
//! Non-fatal: defects are collected into a list rather than aborting
//! traversal, and the caller decides whether to proceed with a degraded
//! result.

use crate::types::figma::{FigmaFileData, FigmaNode};
use crate::types::generated::ValidationIssue;

/// Validate a raw response: file-level fields plus a full tree walk.
pub fn validate_figma_data(data: &FigmaFileData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if data.document.is_none() {
        issues.push(ValidationIssue::validation("Missing document in Figma data"));
    }
    if data.name.is_none() {
        issues.push(ValidationIssue::validation("Missing file name"));
    }

    if let Some(document) = &data.document {
        walk(document, "document", &mut issues);
    }

    issues
}

/// Validate one node in isolation.
pub fn validate_node(node: &FigmaNode) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let node_id = node.id.as_deref();

    if node.id.is_none() {
        issues.push(ValidationIssue::validation("Missing node ID"));
    }
    if node.node_type.is_none() {
        issues.push(ValidationIssue::validation("Missing node type"));
    }

    if node.node_type.as_deref() == Some("TEXT") && node.characters.is_none() {
        issues.push(ValidationIssue::validation("Text node missing characters").at_node(node_id));
    }
    if node.node_type.as_deref() == Some("COMPONENT") && node.name.is_none() {
        issues.push(ValidationIssue::validation("Component missing name").at_node(node_id));
    }

    issues
}

fn walk(node: &FigmaNode, path: &str, issues: &mut Vec<ValidationIssue>) {
    for issue in validate_node(node) {
        issues.push(issue.at_path(path));
    }

    for (index, child) in node.children.iter().enumerate() {
        walk(child, &format!("{path}.children[{index}]"), issues);
    }
}
