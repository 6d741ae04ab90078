//! Shared style resolution.
//!
//! One source of truth for fill/effect/typography resolution: the node
//! normalizer and the design-token extractor must map identical inputs to
//! identical CSS strings, so both call through here.

use serde_json::Number;

use crate::types::figma::{Effect, FigmaColor, GradientStop, Paint, TextStyle};
use crate::types::normalized::{
    ResolvedEffect, ResolvedPaint, ResolvedStroke, ResolvedTypography, TypographyCss,
};

const DEFAULT_SHADOW_COLOR: &str = "rgba(0,0,0,0.25)";

fn channel(value: &Number) -> u8 {
    (value.as_f64().unwrap_or(0.0) * 255.0).round() as u8
}

fn alpha_of(color: &FigmaColor) -> f64 {
    color
        .a
        .as_ref()
        .and_then(Number::as_f64)
        .unwrap_or(1.0)
}

/// A spacing-like value is "set" only when present and non-zero.
fn positive(value: &Option<Number>) -> Option<&Number> {
    value
        .as_ref()
        .filter(|n| n.as_f64().map(|v| v != 0.0).unwrap_or(false))
}

/// Convert a Figma RGBA color to `rgb(r, g, b)` / `rgba(r, g, b, a)`.
pub fn rgba_to_css(color: &FigmaColor) -> String {
    let red = channel(&color.r);
    let green = channel(&color.g);
    let blue = channel(&color.b);

    if alpha_of(color) == 1.0 {
        format!("rgb({red}, {green}, {blue})")
    } else {
        let alpha = color
            .a
            .as_ref()
            .map(Number::to_string)
            .unwrap_or_else(|| "1".to_string());
        format!("rgba({red}, {green}, {blue}, {alpha})")
    }
}

/// Render gradient stops as a `linear-gradient(...)` string, stop order
/// preserved, positions rounded to whole percent.
pub fn gradient_to_css(stops: &[GradientStop]) -> String {
    let rendered: Vec<String> = stops
        .iter()
        .map(|stop| {
            let position = (stop.position.as_f64().unwrap_or(0.0) * 100.0).round() as i64;
            format!("{} {}%", rgba_to_css(&stop.color), position)
        })
        .collect();
    format!("linear-gradient({})", rendered.join(", "))
}

/// Resolve a fill to a color token string; unknown paints resolve to
/// `transparent`.
pub fn fill_to_css(paint: &Paint) -> String {
    if paint.paint_type == "SOLID" {
        if let Some(color) = &paint.color {
            return rgba_to_css(color);
        }
    }
    if paint.paint_type == "GRADIENT_LINEAR" {
        if let Some(stops) = &paint.gradient_stops {
            return gradient_to_css(stops);
        }
    }
    "transparent".to_string()
}

fn px(value: Option<&Number>) -> String {
    match value {
        Some(n) => format!("{n}px"),
        None => "0px".to_string(),
    }
}

/// Resolve an effect to its CSS equivalent; unknown effect types resolve to
/// an empty string.
pub fn effect_to_css(effect: &Effect) -> String {
    let offset_x = px(effect.offset.as_ref().map(|o| &o.x));
    let offset_y = px(effect.offset.as_ref().map(|o| &o.y));
    let radius = px(effect.radius.as_ref());
    let color = effect
        .color
        .as_ref()
        .map(rgba_to_css)
        .unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_string());

    match effect.effect_type.as_str() {
        "DROP_SHADOW" => format!("drop-shadow({offset_x} {offset_y} {radius} {color})"),
        "INNER_SHADOW" => format!("inset {offset_x} {offset_y} {radius} {color}"),
        "LAYER_BLUR" => format!("blur({radius})"),
        "BACKGROUND_BLUR" => format!("backdrop-blur({radius})"),
        _ => String::new(),
    }
}

/// Resolve typography to CSS-ready values with defaults applied.
pub fn typography_to_css(style: &TextStyle) -> TypographyCss {
    TypographyCss {
        font_family: style
            .font_family
            .clone()
            .unwrap_or_else(|| "inherit".to_string()),
        font_size: positive(&style.font_size)
            .map(|n| format!("{n}px"))
            .unwrap_or_else(|| "inherit".to_string()),
        font_weight: positive(&style.font_weight)
            .map(Number::to_string)
            .unwrap_or_else(|| "normal".to_string()),
        line_height: positive(&style.line_height_px)
            .map(|n| format!("{n}px"))
            .unwrap_or_else(|| "normal".to_string()),
        letter_spacing: positive(&style.letter_spacing)
            .map(|n| format!("{n}px"))
            .unwrap_or_else(|| "normal".to_string()),
        text_align: style
            .text_align_horizontal
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "left".to_string()),
        text_align_vertical: style
            .text_align_vertical
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "top".to_string()),
    }
}

pub fn resolve_fill(paint: &Paint) -> ResolvedPaint {
    ResolvedPaint {
        paint: paint.clone(),
        computed_color: fill_to_css(paint),
    }
}

pub fn resolve_stroke(paint: &Paint) -> ResolvedStroke {
    ResolvedStroke {
        paint: paint.clone(),
        computed_color: paint.color.as_ref().map(rgba_to_css),
    }
}

pub fn resolve_effect(effect: &Effect) -> ResolvedEffect {
    ResolvedEffect {
        effect: effect.clone(),
        computed_color: effect.color.as_ref().map(rgba_to_css),
        css_equivalent: effect_to_css(effect),
    }
}

pub fn resolve_typography(style: &TextStyle) -> ResolvedTypography {
    ResolvedTypography {
        style: style.clone(),
        css_equivalent: typography_to_css(style),
    }
}

/// Hex color (`#rrggbb`) of a solid fill, for palette statistics.
pub fn solid_fill_hex(paint: &Paint) -> Option<String> {
    if paint.paint_type != "SOLID" {
        return None;
    }
    let color = paint.color.as_ref()?;
    Some(format!(
        "#{:02x}{:02x}{:02x}",
        channel(&color.r),
        channel(&color.g),
        channel(&color.b)
    ))
}
