//! Raw Figma API data model.
//!
//! Fields the pipeline computes over are typed; fields that only pass
//! through into generated output are kept as raw [`serde_json::Value`] so
//! they round-trip byte-for-byte (serde_json's `preserve_order` feature
//! keeps object keys in source order).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

/// A full Figma file response (`GET /v1/files/{key}`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFileData {
    pub document: Option<FigmaNode>,
    #[serde(default)]
    pub components: Map<String, Value>,
    #[serde(default)]
    pub styles: Map<String, Value>,
    pub name: Option<String>,
    pub last_modified: Option<String>,
    pub thumbnail_url: Option<String>,
    pub version: Option<String>,
    pub role: Option<String>,
    pub editor_type: Option<String>,
}

/// A single node in the design document tree.
///
/// `id` and `type` are optional here so a malformed node surfaces as a
/// validation issue instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FigmaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_property_definitions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_references: Option<Value>,
}

/// A paint applied to a node (fill or stroke).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type", default)]
    pub paint_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FigmaColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_stops: Option<Vec<GradientStop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// RGBA color with 0.0-1.0 channels; alpha defaults to 1 when absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaColor {
    pub r: Number,
    pub g: Number,
    pub b: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub color: FigmaColor,
    pub position: Number,
}

/// A visual post-processing rule on a node (shadow or blur).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type", default)]
    pub effect_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FigmaColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<EffectOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectOffset {
    pub x: Number,
    pub y: Number,
}

/// Typography style from Figma.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
}

/// A shared style definition from the file-level `styles` dictionary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedStyle {
    pub style_type: Option<String>,
    pub name: Option<String>,
    pub fills: Option<Vec<Paint>>,
    pub style: Option<TextStyle>,
    pub effects: Option<Vec<Effect>>,
}

/// Response from the nodes endpoint (`GET /v1/files/{key}/nodes?ids=...`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNodesResponse {
    pub name: Option<String>,
    pub last_modified: Option<String>,
    pub thumbnail_url: Option<String>,
    pub version: Option<String>,
    pub role: Option<String>,
    pub editor_type: Option<String>,
    #[serde(default)]
    pub nodes: HashMap<String, FigmaNodeContainer>,
}

/// Wrapper containing the document (and per-node dicts) for one node id.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaNodeContainer {
    pub document: FigmaNode,
    #[serde(default)]
    pub components: Map<String, Value>,
    #[serde(default)]
    pub styles: Map<String, Value>,
}

impl FigmaNodesResponse {
    /// Assemble a [`FigmaFileData`] for one requested node, merging the
    /// node's document and dictionaries with the file-level metadata.
    pub fn file_data_for(&self, node_id: &str) -> Option<FigmaFileData> {
        let container = self.nodes.get(node_id)?;
        Some(FigmaFileData {
            document: Some(container.document.clone()),
            components: container.components.clone(),
            styles: container.styles.clone(),
            name: self.name.clone(),
            last_modified: self.last_modified.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            version: self.version.clone(),
            role: self.role.clone(),
            editor_type: self.editor_type.clone(),
        })
    }
}
