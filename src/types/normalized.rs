//! Canonical depth-annotated node representation produced by normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::figma::{Effect, Paint, TextStyle};

/// A normalized design node.
///
/// `depth` is 0 at the root and increases by exactly 1 per level. Children
/// are always present in memory (empty when the node is a leaf) and keep the
/// input order; serialization omits the empty case to match the generated
/// module shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub depth: u32,
    pub computed_styles: ComputedStyles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_property_definitions: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NormalizedNode>,
}

/// Style values resolved per node, independent of children.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStyles {
    pub layout: LayoutStyles,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<ResolvedPaint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<ResolvedStroke>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<ResolvedEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<ResolvedTypography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Number>,
}

/// Box-model and auto-layout values; paddings default to 0 when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<Number>,
    pub padding_left: Number,
    pub padding_right: Number,
    pub padding_top: Number,
    pub padding_bottom: Number,
}

impl Default for LayoutStyles {
    fn default() -> Self {
        Self {
            layout_mode: None,
            item_spacing: None,
            padding_left: Number::from(0),
            padding_right: Number::from(0),
            padding_top: Number::from(0),
            padding_bottom: Number::from(0),
        }
    }
}

/// A fill with its computed color token string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPaint {
    #[serde(flatten)]
    pub paint: Paint,
    pub computed_color: String,
}

/// A stroke with its computed color, when a solid color is present.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStroke {
    #[serde(flatten)]
    pub paint: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_color: Option<String>,
}

/// An effect with its computed color and CSS equivalent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEffect {
    #[serde(flatten)]
    pub effect: Effect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_color: Option<String>,
    pub css_equivalent: String,
}

/// Typography with its CSS-equivalent property block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTypography {
    #[serde(flatten)]
    pub style: TextStyle,
    pub css_equivalent: TypographyCss,
}

/// CSS-ready typography values with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyCss {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub text_align: String,
    pub text_align_vertical: String,
}
