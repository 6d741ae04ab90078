//! Node normalization: raw API tree to canonical depth-annotated tree.

use serde_json::Number;

use crate::style;
use crate::types::figma::FigmaNode;
use crate::types::normalized::{ComputedStyles, LayoutStyles, NormalizedNode};

/// Normalize a raw document tree.
///
/// Pre-order, depth-first; the root is depth 0 and every child is exactly
/// one deeper than its parent. Child order is z-order/reading order and is
/// never re-sorted. Missing optional attributes get defaults; a missing
/// `id`/`type` gets a deterministic placeholder here and is reported by
/// input validation, not by this walk.
pub fn normalize_document(root: &FigmaNode) -> NormalizedNode {
    let mut counter = 0usize;
    normalize_node(root, 0, &mut counter)
}

fn normalize_node(node: &FigmaNode, depth: u32, counter: &mut usize) -> NormalizedNode {
    *counter += 1;
    let id = node
        .id
        .clone()
        .unwrap_or_else(|| format!("node-{counter}"));
    let name = node
        .name
        .clone()
        .unwrap_or_else(|| "Unnamed".to_string());
    let node_type = node
        .node_type
        .clone()
        .unwrap_or_else(|| "UNKNOWN".to_string());

    let children = node
        .children
        .iter()
        .map(|child| normalize_node(child, depth + 1, counter))
        .collect();

    NormalizedNode {
        id,
        name,
        node_type,
        depth,
        computed_styles: compute_styles(node),
        fills: node.fills.clone(),
        strokes: node.strokes.clone(),
        effects: node.effects.clone(),
        style: node.style.clone(),
        absolute_bounding_box: node.absolute_bounding_box.clone(),
        constraints: node.constraints.clone(),
        characters: node.characters.clone(),
        component_property_definitions: node.component_property_definitions.clone(),
        children,
    }
}

/// Derive per-node computed styles; no bottom-up aggregation.
fn compute_styles(node: &FigmaNode) -> ComputedStyles {
    let zero = Number::from(0);
    let layout = LayoutStyles {
        layout_mode: node.layout_mode.clone(),
        item_spacing: node.item_spacing.clone(),
        padding_left: node.padding_left.clone().unwrap_or_else(|| zero.clone()),
        padding_right: node.padding_right.clone().unwrap_or_else(|| zero.clone()),
        padding_top: node.padding_top.clone().unwrap_or_else(|| zero.clone()),
        padding_bottom: node.padding_bottom.clone().unwrap_or(zero),
    };

    ComputedStyles {
        layout,
        fills: node
            .fills
            .iter()
            .flatten()
            .map(style::resolve_fill)
            .collect(),
        strokes: node
            .strokes
            .iter()
            .flatten()
            .map(style::resolve_stroke)
            .collect(),
        effects: node
            .effects
            .iter()
            .flatten()
            .map(style::resolve_effect)
            .collect(),
        typography: node.style.as_ref().map(style::resolve_typography),
        corner_radius: node.corner_radius.clone(),
    }
}
