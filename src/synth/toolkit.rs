//! Shared assembly toolkit for the format renderers: JSON embedding, string
//! escaping, headers, type declarations, helper bundle, export blocks, and
//! the minify post-pass.

use regex::Regex;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::types::options::{OutputFormat, OutputStyle};

/// Serialize a value as pretty JSON with the given indent width, matching
/// the generated module's embedded-literal style.
pub fn embed_json<T: Serialize>(value: &T, indent: usize) -> String {
    let indent_text = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_text.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    if value.serialize(&mut serializer).is_err() {
        return "null".to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| "null".to_string())
}

/// Serialize a value as compact JSON.
pub fn compact_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Escape a value for embedding inside a double-quoted JS string literal.
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Documentation header for the complete and typescript formats.
pub fn doc_header(title: &str, lines: &[(&str, &str)], tagline: &str) -> String {
    let mut header = String::from("/**\n");
    header.push_str(&format!(" * {title}\n"));
    for (label, value) in lines {
        header.push_str(&format!(" * {label}: {value}\n"));
    }
    header.push_str(" * \n");
    header.push_str(&format!(" * {tagline}\n"));
    header.push_str(" */\n\n");
    header
}

/// Interface declarations emitted when `includeTypes` is set.
pub const TYPE_DEFINITIONS: &str = r#"// Type Definitions
interface FigmaNode {
  id: string;
  name: string;
  type: string;
  depth: number;
  children?: FigmaNode[];
  fills?: any[];
  effects?: any[];
  style?: any;
  absoluteBoundingBox?: any;
  constraints?: any;
  characters?: string;
}

interface FigmaMetadata {
  name: string;
  fileKey: string;
  lastModified: string;
  version: string;
  role: string;
  editorType: string;
  thumbnailUrl?: string;
}

"#;

/// Fixed helper-function library emitted when `includeHelpers` is set.
pub const HELPER_BUNDLE: &str = r#"// Helper Functions
const figmaHelpers = {
  // Find node by ID
  findNodeById: function(node, id) {
    if (node.id === id) return node;
    if (node.children) {
      for (const child of node.children) {
        const found = this.findNodeById(child, id);
        if (found) return found;
      }
    }
    return null;
  },

  // Traverse all nodes
  traverseNodes: function(node, callback) {
    callback(node);
    if (node.children) {
      node.children.forEach(child => this.traverseNodes(child, callback));
    }
  },

  // Extract color palette
  extractColors: function(node) {
    const colors = new Set();
    this.traverseNodes(node, (n) => {
      if (n.fills) {
        n.fills.forEach(fill => {
          if (fill.type === 'SOLID' && fill.color) {
            const { r, g, b } = fill.color;
            const hex = '#' + [r, g, b].map(x =>
              Math.round(x * 255).toString(16).padStart(2, '0')
            ).join('');
            colors.add(hex);
          }
        });
      }
    });
    return Array.from(colors);
  },

  // Generate CSS for node
  generateCSS: function(node) {
    let css = `/* ${node.name} */\n`;

    if (node.fills && node.fills[0] && node.fills[0].type === 'SOLID' && node.fills[0].color) {
      const { r, g, b, a = 1 } = node.fills[0].color;
      css += `  background-color: rgba(${Math.round(r*255)}, ${Math.round(g*255)}, ${Math.round(b*255)}, ${a});\n`;
    }

    if (node.effects) {
      const shadows = [];
      node.effects.forEach(effect => {
        if (effect.type === 'DROP_SHADOW') {
          const { r, g, b, a = 1 } = effect.color || { r: 0, g: 0, b: 0, a: 1 };
          const color = `rgba(${Math.round(r*255)}, ${Math.round(g*255)}, ${Math.round(b*255)}, ${a})`;
          shadows.push(`${effect.offset?.x || 0}px ${effect.offset?.y || 0}px ${effect.radius || 0}px ${color}`);
        }
      });
      if (shadows.length > 0) {
        css += `  box-shadow: ${shadows.join(', ')};\n`;
      }
    }

    return css;
  }
};

"#;

/// Export block for formats that honor `outputStyle`. The binding name is
/// the top-level object the module exposes.
pub fn export_block(style: OutputStyle, binding: &str) -> String {
    match style {
        OutputStyle::Commonjs => format!(
            "\n// CommonJS Export\nmodule.exports = {binding};\nmodule.exports.default = {binding};\n"
        ),
        OutputStyle::Umd => format!(
            r#"
// UMD Export
(function (root, factory) {{
  if (typeof define === 'function' && define.amd) {{
    define([], factory);
  }} else if (typeof module === 'object' && module.exports) {{
    module.exports = factory();
  }} else {{
    root.FigmaData = factory();
  }}
}}(typeof self !== 'undefined' ? self : this, function () {{
  return {binding};
}}));
"#
        ),
        OutputStyle::Es6 => format!(
            "\n// ES6 Export\nexport default {binding};\nexport {{ {binding} }};\n"
        ),
    }
}

/// Uniform minify post-pass: strip block comments, strip line comments,
/// collapse whitespace, trim. Text-level only; applied after any variant.
pub fn minify(code: &str) -> String {
    let block_comments = Regex::new(r"(?s)/\*.*?\*/").expect("block comment regex should compile");
    let line_comments = Regex::new(r"(?m)//[^\n]*").expect("line comment regex should compile");
    let whitespace = Regex::new(r"\s+").expect("whitespace regex should compile");

    let stripped = block_comments.replace_all(code, "");
    let stripped = line_comments.replace_all(&stripped, "");
    whitespace.replace_all(&stripped, " ").trim().to_string()
}

/// Download file name for a generated module: sanitized display name plus a
/// format-dependent extension.
pub fn download_file_name(display_name: &str, format: OutputFormat) -> String {
    let mut sanitized = String::new();
    let mut last_was_dash = true;
    for ch in display_name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch);
            last_was_dash = false;
        } else if !last_was_dash {
            sanitized.push('-');
            last_was_dash = true;
        }
    }
    let sanitized = sanitized.trim_end_matches('-');
    let name = if sanitized.is_empty() { "export" } else { sanitized };
    format!("figma-{name}.{}", format.file_extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embed_json_uses_requested_indent() {
        let value = json!({"a": {"b": 1}});
        let two = embed_json(&value, 2);
        assert!(two.contains("\n  \"a\""));
        let four = embed_json(&value, 4);
        assert!(four.contains("\n    \"a\""));
    }

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
    }

    #[test]
    fn export_blocks_reference_binding() {
        for style in [OutputStyle::Es6, OutputStyle::Commonjs, OutputStyle::Umd] {
            let block = export_block(style, "figmaData");
            assert!(block.contains("figmaData"), "missing binding for {style:?}");
        }
        assert!(export_block(OutputStyle::Es6, "figmaData").contains("export default figmaData;"));
        assert!(export_block(OutputStyle::Umd, "figmaData").contains("define([], factory)"));
    }

    #[test]
    fn minify_strips_comments_and_collapses_whitespace() {
        let code = "/* header */\nconst a = 1; // trailing\nconst b = 2;";
        assert_eq!(minify(code), "const a = 1; const b = 2;");
    }

    #[test]
    fn download_name_sanitizes_and_picks_extension() {
        assert_eq!(
            download_file_name("My Design (v2)", OutputFormat::Minimal),
            "figma-my-design-v2.js"
        );
        assert_eq!(
            download_file_name("Landing", OutputFormat::Typescript),
            "figma-landing.ts"
        );
        assert_eq!(download_file_name("***", OutputFormat::Complete), "figma-export.js");
    }
}
