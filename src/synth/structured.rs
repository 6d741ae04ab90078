//! Structured export: a class wrapping the data with traversal, search, and
//! CSS-generation methods, plus one exported instance.

use super::toolkit;
use super::{design_system_value, SynthesisInput};
use crate::types::options::{GenerationOptions, OutputStyle};

const METHODS: &str = r#"
  // Get component metadata
  getMetadata() {
    return this.metadata;
  }

  // Get component structure
  getStructure() {
    return this.structure;
  }

  // Find nodes by type
  findNodesByType(type) {
    const results = [];
    const traverse = (node) => {
      if (node.type === type) {
        results.push(node);
      }
      if (node.children) {
        node.children.forEach(traverse);
      }
    };
    traverse(this.structure);
    return results;
  }

  // Find node by ID
  findNodeById(id) {
    const traverse = (node) => {
      if (node.id === id) return node;
      if (node.children) {
        for (const child of node.children) {
          const result = traverse(child);
          if (result) return result;
        }
      }
      return null;
    };
    return traverse(this.structure);
  }

  // Generate CSS declarations for a node
  generateCSSForNode(id) {
    const node = this.findNodeById(id);
    if (!node) return '';
    let css = `/* ${node.name} */\n`;
    if (node.fills && node.fills[0] && node.fills[0].type === 'SOLID' && node.fills[0].color) {
      const { r, g, b, a = 1 } = node.fills[0].color;
      css += `  background-color: rgba(${Math.round(r*255)}, ${Math.round(g*255)}, ${Math.round(b*255)}, ${a});\n`;
    }
    return css;
  }
}
"#;

pub fn render(input: &SynthesisInput, options: &GenerationOptions) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "/**\n * Structured Figma Component Export\n * Component: {}\n */\n\n",
        input.metadata.file_name
    ));

    code.push_str("class FigmaComponent {\n");
    code.push_str("  constructor() {\n");
    code.push_str(&format!(
        "    this.metadata = {};\n",
        toolkit::embed_json(input.metadata, 4)
    ));
    code.push_str(&format!(
        "    this.structure = {};\n",
        toolkit::embed_json(input.document, 4)
    ));
    code.push_str(&format!(
        "    this.components = {};\n",
        toolkit::embed_json(input.components, 4)
    ));
    code.push_str(&format!(
        "    this.styles = {};\n",
        toolkit::embed_json(input.styles, 4)
    ));
    if let Some(css) = input.css_data() {
        code.push_str(&format!(
            "    this.cssData = {};\n",
            toolkit::embed_json(css, 4)
        ));
        code.push_str(&format!(
            "    this.designSystem = {};\n",
            toolkit::embed_json(&design_system_value(css), 4)
        ));
    }
    code.push_str("  }\n");
    code.push_str(METHODS);

    code.push_str("\n// Create instance\nconst figmaComponent = new FigmaComponent();\n");

    code.push_str("\n// Export\n");
    match options.output_style {
        OutputStyle::Es6 => {
            code.push_str("export default figmaComponent;\nexport { FigmaComponent };\n");
        }
        _ => {
            code.push_str(
                "module.exports = figmaComponent;\nmodule.exports.FigmaComponent = FigmaComponent;\n",
            );
        }
    }
    code
}
