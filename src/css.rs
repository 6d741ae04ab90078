//! Permissive parser for pasted CSS ("copy as code" output).
//!
//! Best-effort and regex-based: malformed input never fails, it just yields
//! fewer rules. No semantic validation against the Figma tree happens here
//! or anywhere else; rules with no matching node are retained and simply
//! never consumed.

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

/// One `selector { declarations }` block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCssRule {
    pub selector: String,
    pub properties: Map<String, Value>,
    pub specificity: u32,
    pub is_component: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figma_layer: Option<String>,
}

impl ParsedCssRule {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }
}

/// Parsed rules plus design-system facts derived from them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCssData {
    pub rules: Vec<ParsedCssRule>,
    pub variables: Map<String, Value>,
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
    pub spacing: Vec<String>,
    pub border_radius: Vec<String>,
    pub shadows: Vec<String>,
    pub animations: Vec<String>,
}

impl ParsedCssData {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.variables.is_empty()
    }
}

pub struct CssParser;

impl CssParser {
    pub fn parse(css_text: &str) -> ParsedCssData {
        let rules = Self::parse_rules(css_text);
        let variables = Self::extract_variables(css_text);

        ParsedCssData {
            colors: Self::extract_colors(&rules),
            fonts: Self::extract_fonts(&rules),
            spacing: Self::extract_spacing(&rules),
            border_radius: Self::extract_values(&rules, "border-radius"),
            shadows: Self::extract_values(&rules, "box-shadow"),
            animations: Self::extract_animations(&rules),
            rules,
            variables,
        }
    }

    fn parse_rules(css_text: &str) -> Vec<ParsedCssRule> {
        let comments = Regex::new(r"(?s)/\*.*?\*/").expect("comment regex should compile");
        let whitespace = Regex::new(r"\s+").expect("whitespace regex should compile");
        let clean = whitespace
            .replace_all(&comments.replace_all(css_text, ""), " ")
            .trim()
            .to_string();

        let rule_re = Regex::new(r"([^{]+)\{([^}]+)\}").expect("rule regex should compile");
        rule_re
            .captures_iter(&clean)
            .map(|captures| {
                let selector = captures[1].trim().to_string();
                let properties = Self::parse_properties(captures[2].trim());
                let specificity = Self::specificity(&selector);
                let is_component = Self::is_component_selector(&selector);
                let figma_layer = Self::figma_layer(&selector);

                ParsedCssRule {
                    selector,
                    properties,
                    specificity,
                    is_component,
                    figma_layer,
                }
            })
            .collect()
    }

    fn parse_properties(declarations: &str) -> Map<String, Value> {
        let mut properties = Map::new();
        for declaration in declarations.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            // Declarations without a colon are silently skipped.
            if let Some(colon) = declaration.find(':') {
                if colon > 0 {
                    let property = declaration[..colon].trim().to_string();
                    let value = declaration[colon + 1..].trim().to_string();
                    properties.insert(property, Value::String(value));
                }
            }
        }
        properties
    }

    /// Relative ordering heuristic, not a CSS-spec cascade: ids weigh 100,
    /// class/pseudo/attribute markers 10, letters 1.
    fn specificity(selector: &str) -> u32 {
        let ids = selector.matches('#').count() as u32;
        let classes = selector
            .chars()
            .filter(|c| matches!(c, '.' | ':' | '['))
            .count() as u32;
        let letters = selector.chars().filter(char::is_ascii_alphabetic).count() as u32;
        ids * 100 + classes * 10 + letters
    }

    fn is_component_selector(selector: &str) -> bool {
        let re = Regex::new(r"(?i)\.(component|figma|layer|frame|group)")
            .expect("component regex should compile");
        re.is_match(selector)
    }

    fn figma_layer(selector: &str) -> Option<String> {
        let re = Regex::new(r"(?i)\.((?:layer|component|frame)-\w+)")
            .expect("layer regex should compile");
        re.captures(selector).map(|c| c[1].to_string())
    }

    /// Custom properties are collected globally across the whole input, not
    /// per rule.
    fn extract_variables(css_text: &str) -> Map<String, Value> {
        let re = Regex::new(r"--([\w-]+):\s*([^;]+);").expect("variable regex should compile");
        let mut variables = Map::new();
        for captures in re.captures_iter(css_text) {
            variables.insert(
                captures[1].to_string(),
                Value::String(captures[2].trim().to_string()),
            );
        }
        variables
    }

    fn extract_colors(rules: &[ParsedCssRule]) -> Vec<String> {
        let color_prop = Regex::new(r"(?i)color|background|border|shadow|fill|stroke")
            .expect("color property regex should compile");
        let patterns = [
            Regex::new(r"#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})").expect("hex regex should compile"),
            Regex::new(r"rgba?\([^)]+\)").expect("rgb regex should compile"),
            Regex::new(r"hsla?\([^)]+\)").expect("hsl regex should compile"),
        ];

        let mut colors = Vec::new();
        for rule in rules {
            for (property, value) in &rule.properties {
                if !color_prop.is_match(property) {
                    continue;
                }
                let Some(value) = value.as_str() else { continue };
                for pattern in &patterns {
                    for found in pattern.find_iter(value) {
                        push_unique(&mut colors, found.as_str().to_string());
                    }
                }
            }
        }
        colors
    }

    fn extract_fonts(rules: &[ParsedCssRule]) -> Vec<String> {
        let mut fonts = Vec::new();
        for rule in rules {
            if let Some(family) = rule.property("font-family") {
                push_unique(&mut fonts, family.replace(['\'', '"'], ""));
            }
        }
        fonts
    }

    fn extract_spacing(rules: &[ParsedCssRule]) -> Vec<String> {
        const SPACING_PROPS: [&str; 7] =
            ["margin", "padding", "gap", "top", "right", "bottom", "left"];
        let value_re =
            Regex::new(r"\d+(\.\d+)?(px|rem|em|%)").expect("spacing regex should compile");

        let mut spacing = Vec::new();
        for rule in rules {
            for (property, value) in &rule.properties {
                if !SPACING_PROPS.iter().any(|p| property.contains(p)) {
                    continue;
                }
                let Some(value) = value.as_str() else { continue };
                for found in value_re.find_iter(value) {
                    push_unique(&mut spacing, found.as_str().to_string());
                }
            }
        }
        spacing
    }

    fn extract_values(rules: &[ParsedCssRule], property: &str) -> Vec<String> {
        let mut values = Vec::new();
        for rule in rules {
            if let Some(value) = rule.property(property) {
                push_unique(&mut values, value.to_string());
            }
        }
        values
    }

    fn extract_animations(rules: &[ParsedCssRule]) -> Vec<String> {
        let mut animations = Vec::new();
        for rule in rules {
            for (property, value) in &rule.properties {
                if property.contains("animation") || property.contains("transition") {
                    if let Some(value) = value.as_str() {
                        push_unique(&mut animations, format!("{property}: {value}"));
                    }
                }
            }
        }
        animations
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rule_parses_selector_and_properties() {
        let parsed = CssParser::parse(".btn { color: #fff; padding: 4px; }");

        assert_eq!(parsed.rules.len(), 1);
        let rule = &parsed.rules[0];
        assert_eq!(rule.selector, ".btn");
        assert_eq!(rule.property("color"), Some("#fff"));
        assert_eq!(rule.property("padding"), Some("4px"));
        assert!(parsed.colors.contains(&"#fff".to_string()));
        assert!(parsed.spacing.contains(&"4px".to_string()));
    }

    #[test]
    fn comments_are_stripped_before_parsing() {
        let parsed = CssParser::parse("/* header */ .a { color: red; } /* trailing */");
        assert_eq!(parsed.rules.len(), 1);
        assert_eq!(parsed.rules[0].property("color"), Some("red"));
    }

    #[test]
    fn declarations_without_colon_are_skipped() {
        let parsed = CssParser::parse(".a { color red; margin: 2px }");
        assert_eq!(parsed.rules[0].properties.len(), 1);
        assert_eq!(parsed.rules[0].property("margin"), Some("2px"));
    }

    #[test]
    fn specificity_weighs_ids_classes_and_letters() {
        let parsed = CssParser::parse("#app .btn:hover { color: red; } div { margin: 0; }");
        // '#'=100, '.'+':'=20, letters a-p-p-b-t-n-h-o-v-e-r = 11.
        assert_eq!(parsed.rules[0].specificity, 131);
        assert_eq!(parsed.rules[1].specificity, 3);
        assert!(parsed.rules[0].specificity > parsed.rules[1].specificity);
    }

    #[test]
    fn component_selectors_are_flagged() {
        let parsed = CssParser::parse(
            ".component-card { top: 0; } .Frame-Hero { left: 0; } .plain { right: 0; }",
        );
        assert!(parsed.rules[0].is_component);
        assert!(parsed.rules[1].is_component);
        assert!(!parsed.rules[2].is_component);
    }

    #[test]
    fn figma_layer_names_are_extracted() {
        let parsed = CssParser::parse(".layer-header { top: 0; } .btn { top: 0; }");
        assert_eq!(parsed.rules[0].figma_layer.as_deref(), Some("layer-header"));
        assert!(parsed.rules[1].figma_layer.is_none());
    }

    #[test]
    fn custom_properties_are_collected_globally() {
        let parsed =
            CssParser::parse(":root { --brand-color: #336699; --gap: 8px; } .a { color: red; }");
        assert_eq!(
            parsed.variables.get("brand-color").and_then(|v| v.as_str()),
            Some("#336699")
        );
        assert_eq!(
            parsed.variables.get("gap").and_then(|v| v.as_str()),
            Some("8px")
        );
    }

    #[test]
    fn derived_sets_deduplicate_in_first_seen_order() {
        let parsed = CssParser::parse(
            ".a { color: #fff; background: #000; } .b { color: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.3); }",
        );
        assert_eq!(parsed.colors[0], "#fff");
        assert_eq!(parsed.colors.iter().filter(|c| *c == "#fff").count(), 1);
        assert!(parsed.colors.contains(&"rgba(0,0,0,0.3)".to_string()));
        assert_eq!(parsed.shadows, vec!["0 1px 2px rgba(0,0,0,0.3)".to_string()]);
    }

    #[test]
    fn fonts_spacing_radius_and_animations_are_derived() {
        let parsed = CssParser::parse(
            ".a { font-family: 'Inter', sans-serif; margin: 4px 8px; border-radius: 6px; transition: all 0.2s; }",
        );
        assert_eq!(parsed.fonts, vec!["Inter, sans-serif".to_string()]);
        assert_eq!(parsed.spacing, vec!["4px".to_string(), "8px".to_string()]);
        assert_eq!(parsed.border_radius, vec!["6px".to_string()]);
        assert_eq!(parsed.animations, vec!["transition: all 0.2s".to_string()]);
    }

    #[test]
    fn malformed_input_never_fails() {
        let parsed = CssParser::parse("this is not css at all {{{ ;;; }");
        for rule in &parsed.rules {
            assert!(rule.properties.is_empty());
        }

        let unclosed = CssParser::parse(".a { color: red");
        assert!(unclosed.rules.is_empty());

        assert!(CssParser::parse("").is_empty());
    }
}
