//! Minimal export: one object literal with two convenience methods.

use super::toolkit::{self, js_string};
use super::{design_system_value, SynthesisInput};
use crate::types::options::{GenerationOptions, OutputStyle};

const METHODS: &str = r#"
  // Essential methods
  findById: function(id) {
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
    return find(this.structure);
  },

  getColors: function() {
    const colors = [];
    const traverse = (node) => {
      if (node.fills) {
        node.fills.forEach(fill => {
          if (fill.type === 'SOLID' && fill.color) {
            const { r, g, b } = fill.color;
            const hex = '#' + [r, g, b].map(x =>
              Math.round(x * 255).toString(16).padStart(2, '0')
            ).join('');
            if (!colors.includes(hex)) colors.push(hex);
          }
        });
      }
      if (node.children) node.children.forEach(traverse);
    };
    traverse(this.structure);
    return colors;
  }
};
"#;

pub fn render(input: &SynthesisInput, options: &GenerationOptions) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// Minimal Figma Export - {}\n",
        input.metadata.file_name
    ));
    code.push_str("const figmaComponent = {\n");
    code.push_str(&format!(
        "  name: \"{}\",\n",
        js_string(&input.metadata.file_name)
    ));
    code.push_str(&format!("  id: \"{}\",\n", js_string(&input.document.id)));
    code.push_str(&format!(
        "  type: \"{}\",\n",
        js_string(&input.document.node_type)
    ));
    code.push_str(&format!(
        "  fileKey: \"{}\",\n",
        js_string(&input.metadata.file_key)
    ));
    code.push_str(&format!(
        "  lastModified: \"{}\",\n",
        js_string(&input.metadata.last_modified)
    ));
    code.push_str(&format!(
        "  structure: {},\n",
        toolkit::embed_json(input.document, 2)
    ));

    if let Some(css) = input.css_data() {
        code.push_str(&format!("  cssData: {},\n", toolkit::embed_json(css, 2)));
        code.push_str(&format!(
            "  designSystem: {},\n",
            toolkit::embed_json(&design_system_value(css), 2)
        ));
    }

    code.push_str(METHODS);

    code.push('\n');
    match options.output_style {
        OutputStyle::Es6 => code.push_str("export default figmaComponent;\n"),
        _ => code.push_str("module.exports = figmaComponent;\n"),
    }
    code
}
