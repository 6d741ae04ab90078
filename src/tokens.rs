//! Design token extraction from the raw API response.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde_json::Number;

use crate::style;
use crate::types::figma::{FigmaFileData, FigmaNode, SharedStyle};
use crate::types::tokens::{DesignTokenSet, SpacingScale};

/// Extract color/typography/effect tokens from the shared-style dictionary
/// and spacing tokens from a full tree walk.
///
/// Color/typography/effect resolution goes through [`crate::style`], the
/// same functions the normalizer uses, so token values and per-node
/// computed values can never drift apart.
pub fn extract_design_tokens(data: &FigmaFileData) -> DesignTokenSet {
    let mut colors = BTreeMap::new();
    let mut typography = BTreeMap::new();
    let mut effects = BTreeMap::new();

    for (key, value) in &data.styles {
        let Ok(shared) = serde_json::from_value::<SharedStyle>(value.clone()) else {
            continue;
        };
        let token_name = shared.name.clone().unwrap_or_else(|| key.clone());

        match shared.style_type.as_deref() {
            Some("FILL") => {
                if let Some(fill) = shared.fills.as_ref().and_then(|fills| fills.first()) {
                    if fill.paint_type == "SOLID" {
                        if let Some(color) = &fill.color {
                            colors.insert(token_name, style::rgba_to_css(color));
                        }
                    }
                }
            }
            Some("TEXT") => {
                if let Some(text_style) = &shared.style {
                    typography.insert(token_name, style::typography_to_css(text_style));
                }
            }
            Some("EFFECT") => {
                if let Some(list) = &shared.effects {
                    effects.insert(token_name, list.iter().map(style::resolve_effect).collect());
                }
            }
            _ => {}
        }
    }

    DesignTokenSet {
        colors,
        typography,
        spacing: extract_spacing(data.document.as_ref()),
        effects,
    }
}

fn extract_spacing(document: Option<&FigmaNode>) -> SpacingScale {
    let mut values: Vec<Number> = Vec::new();
    if let Some(root) = document {
        collect_spacing(root, &mut values);
    }

    values.sort_by(|a, b| {
        a.as_f64()
            .unwrap_or(0.0)
            .partial_cmp(&b.as_f64().unwrap_or(0.0))
            .unwrap_or(Ordering::Equal)
    });
    values.dedup_by(|a, b| a.as_f64() == b.as_f64());

    SpacingScale::from_sorted_values(values)
}

fn collect_spacing(node: &FigmaNode, values: &mut Vec<Number>) {
    let candidates = [
        &node.item_spacing,
        &node.padding_left,
        &node.padding_right,
        &node.padding_top,
        &node.padding_bottom,
    ];
    for candidate in candidates {
        if let Some(value) = candidate {
            if value.as_f64().map(|v| v > 0.0).unwrap_or(false) {
                values.push(value.clone());
            }
        }
    }

    for child in &node.children {
        collect_spacing(child, values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_data(value: serde_json::Value) -> FigmaFileData {
        serde_json::from_value(value).expect("parse test file data")
    }

    #[test]
    fn spacing_tokens_are_deduplicated_and_ascending() {
        let data = file_data(json!({
            "document": {
                "id": "0:1", "name": "Root", "type": "FRAME",
                "paddingLeft": 8,
                "children": [
                    {"id": "0:2", "name": "A", "type": "FRAME", "paddingTop": 4, "paddingBottom": 16},
                    {"id": "0:3", "name": "B", "type": "FRAME", "itemSpacing": 4}
                ]
            },
            "name": "Spacing"
        }));

        let tokens = extract_design_tokens(&data);
        assert_eq!(tokens.spacing.len(), 3);
        assert_eq!(tokens.spacing.get("spacing-1"), Some(&Number::from(4)));
        assert_eq!(tokens.spacing.get("spacing-2"), Some(&Number::from(8)));
        assert_eq!(tokens.spacing.get("spacing-3"), Some(&Number::from(16)));
    }

    #[test]
    fn zero_spacing_values_are_ignored() {
        let data = file_data(json!({
            "document": {"id": "0:1", "name": "Root", "type": "FRAME", "paddingLeft": 0},
            "name": "Zeros"
        }));

        assert!(extract_design_tokens(&data).spacing.is_empty());
    }

    #[test]
    fn fill_styles_become_color_tokens() {
        let data = file_data(json!({
            "document": {"id": "0:1", "name": "Root", "type": "FRAME"},
            "styles": {
                "1:1": {
                    "styleType": "FILL",
                    "name": "Primary/Red",
                    "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}]
                },
                "1:2": {
                    "styleType": "FILL",
                    "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 0.5}}]
                }
            },
            "name": "Colors"
        }));

        let tokens = extract_design_tokens(&data);
        assert_eq!(
            tokens.colors.get("Primary/Red").map(String::as_str),
            Some("rgb(255, 0, 0)")
        );
        // Nameless styles fall back to their dictionary key.
        assert_eq!(
            tokens.colors.get("1:2").map(String::as_str),
            Some("rgba(0, 0, 0, 0.5)")
        );
    }

    #[test]
    fn text_and_effect_styles_become_tokens() {
        let data = file_data(json!({
            "document": {"id": "0:1", "name": "Root", "type": "FRAME"},
            "styles": {
                "2:1": {
                    "styleType": "TEXT",
                    "name": "Body",
                    "style": {"fontFamily": "Inter", "fontSize": 16}
                },
                "2:2": {
                    "styleType": "EFFECT",
                    "name": "Card Shadow",
                    "effects": [{"type": "DROP_SHADOW", "radius": 12}]
                },
                "2:3": {"styleType": "GRID", "name": "Layout Grid"}
            },
            "name": "Mixed"
        }));

        let tokens = extract_design_tokens(&data);
        assert_eq!(
            tokens.typography.get("Body").map(|t| t.font_size.as_str()),
            Some("16px")
        );
        let shadow = tokens.effects.get("Card Shadow").expect("effect token");
        assert_eq!(
            shadow[0].css_equivalent,
            "drop-shadow(0px 0px 12px rgba(0,0,0,0.25))"
        );
        // Grid styles are neither colors, typography, nor effects.
        assert!(tokens.colors.is_empty());
    }
}
