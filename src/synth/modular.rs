//! Modular export: independently importable bindings, no default export.

use super::toolkit;
use super::{design_system_value, SynthesisInput};
use crate::types::options::GenerationOptions;

const GET_BY_ID: &str = r#"
  getById: (id) => {
    const find = (node) => {
      if (node.id === id) return node;
      if (node.children) {
        for (const child of node.children) {
          const found = find(child);
          if (found) return found;
        }
      }
      return null;
    };
    return find(figmaComponent.structure);
  }
};
"#;

const UTILS: &str = r#"// Utilities module
export const figmaUtils = {
  extractColors: () => {
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
    traverse(figmaComponent.structure);
    return Array.from(colors);
  }
};
"#;

/// The modular format always uses named ES exports regardless of
/// `outputStyle`; partial imports are the point.
pub fn render(input: &SynthesisInput, _options: &GenerationOptions) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// Modular Figma Export - {}\n// Optimized for tree-shaking and modular imports\n\n",
        input.metadata.file_name
    ));

    code.push_str("// Core module\n");
    code.push_str("export const figmaCore = {\n");
    code.push_str(&format!(
        "  metadata: {},\n",
        toolkit::embed_json(input.metadata, 2)
    ));
    code.push_str("  version: '2.0.0',\n");
    code.push_str("  format: 'modular'\n};\n\n");

    code.push_str("// Component module\n");
    code.push_str("export const figmaComponent = {\n");
    code.push_str(&format!(
        "  structure: {},\n",
        toolkit::embed_json(input.document, 2)
    ));
    code.push_str(GET_BY_ID);
    code.push('\n');

    code.push_str(UTILS);

    if let Some(css) = input.css_data() {
        code.push('\n');
        code.push_str("// CSS design system module\n");
        code.push_str("export const figmaDesignSystem = {\n");
        code.push_str(&format!("  cssData: {},\n", toolkit::embed_json(css, 2)));
        code.push_str(&format!(
            "  summary: {}\n",
            toolkit::embed_json(&design_system_value(css), 2)
        ));
        code.push_str("};\n");
    }

    code
}
