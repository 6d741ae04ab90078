//! Complete export: flat data consts plus a `figmaData` object with bound
//! helper methods.

use serde_json::json;

use super::toolkit::{self, HELPER_BUNDLE, TYPE_DEFINITIONS};
use super::{design_system_value, SynthesisInput};
use crate::types::options::GenerationOptions;

const BOUND_METHODS: &str = r#"
  // Helper methods
  getComponentById: function(id) {
    return this.components[id] || null;
  },

  getStyleById: function(id) {
    return this.styles[id] || null;
  },

  getAllTextNodes: function() {
    const textNodes = [];
    const traverse = (node) => {
      if (node.type === 'TEXT') {
        textNodes.push(node);
      }
      if (node.children) {
        node.children.forEach(traverse);
      }
    };
    traverse(this.document);
    return textNodes;
  },

  getColorPalette: function() {
    const colors = new Set();
    const traverse = (node) => {
      if (node.fills) {
        node.fills.forEach(fill => {
          if (fill.type === 'SOLID' && fill.color) {
            const { r, g, b } = fill.color;
            const hex = '#' + [r, g, b].map(x =>
              Math.round(x * 255).toString(16).padStart(2, '0')
            ).join('');
            colors.add(hex);
          }
        });
      }
      if (node.children) {
        node.children.forEach(traverse);
      }
    };
    traverse(this.document);
    return Array.from(colors);
  }
};
"#;

pub fn render(input: &SynthesisInput, options: &GenerationOptions) -> String {
    let mut code = String::new();

    if options.include_comments {
        code.push_str(&toolkit::doc_header(
            "Figma Design JavaScript Export",
            &[
                ("Generated", input.generated_at),
                ("File", input.metadata.file_name.as_str()),
                ("Source", input.metadata.source_url.as_str()),
                ("Format", "Complete Export"),
            ],
            "This file contains the complete digital fingerprint of your Figma component,\n * including all metadata, styling, layout, and structural information.",
        ));
    }

    if options.include_types {
        code.push_str(TYPE_DEFINITIONS);
    }

    if options.include_helpers {
        code.push_str(HELPER_BUNDLE);
    }

    code.push_str("// ===== METADATA AND GENERAL INFORMATION =====\n");
    code.push_str(&format!(
        "const figmaMetaData = {};\n\n",
        toolkit::embed_json(input.metadata, 2)
    ));

    code.push_str("// ===== MAIN COMPONENT STRUCTURE =====\n");
    code.push_str(&format!(
        "const mainComponentData = {};\n\n",
        toolkit::embed_json(input.document, 2)
    ));

    code.push_str("// ===== EXTERNAL COMPONENTS AND STYLES =====\n");
    let external = json!({
        "components": input.components,
        "styles": input.styles,
    });
    code.push_str(&format!(
        "const externalElements = {};\n\n",
        toolkit::embed_json(&external, 2)
    ));

    code.push_str("// ===== DESIGN TOKENS =====\n");
    code.push_str(&format!(
        "const designTokens = {};\n\n",
        toolkit::embed_json(input.tokens, 2)
    ));

    let css = input.css_data();
    if let Some(css) = css {
        code.push_str("// ===== CSS INTEGRATION =====\n");
        code.push_str(&format!(
            "const cssData = {};\n\n",
            toolkit::embed_json(css, 2)
        ));
        code.push_str(&format!(
            "const designSystem = {};\n\n",
            toolkit::embed_json(&design_system_value(css), 2)
        ));
    }

    code.push_str("// ===== COMPLETE FIGMA DATA =====\n");
    code.push_str("const figmaData = {\n");
    code.push_str("  metadata: figmaMetaData,\n");
    code.push_str("  document: mainComponentData,\n");
    code.push_str("  components: externalElements.components,\n");
    code.push_str("  styles: externalElements.styles,\n");
    code.push_str("  designTokens: designTokens,\n");
    if css.is_some() {
        code.push_str("  cssData: cssData,\n");
        code.push_str("  designSystem: designSystem,\n");
    }
    code.push_str(BOUND_METHODS);

    code.push_str(&toolkit::export_block(options.output_style, "figmaData"));
    code
}
