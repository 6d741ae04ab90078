//! Typed export: interface declarations plus a class over a typed literal.

use serde_json::{Map, Value};

use super::toolkit;
use super::{design_system_value, SynthesisInput};
use crate::types::options::GenerationOptions;

const INTERFACES: &str = r#"// Type Definitions
interface FigmaNode {
  id: string;
  name: string;
  type: string;
  depth: number;
  children?: FigmaNode[];
  fills?: any[];
  effects?: any[];
  style?: any;
}

interface FigmaMetadata {
  fileKey: string;
  fileName: string;
  lastModified: string;
  version: string;
  role: string;
  editorType: string;
  thumbnailUrl?: string;
}
"#;

const DESIGN_SYSTEM_INTERFACE: &str = r#"
interface FigmaDesignSystem {
  colors: string[];
  fonts: string[];
  spacing: string[];
  borderRadius: string[];
  shadows: string[];
  animations: string[];
}
"#;

const CLASS_BODY: &str = r#"
export class FigmaComponent {
  private readonly data: FigmaComponentData;

  constructor(data: FigmaComponentData) {
    this.data = data;
  }

  public get metadata(): FigmaMetadata {
    return this.data.metadata;
  }

  public get structure(): FigmaNode {
    return this.data.structure;
  }

  public findNodeById(id: string): FigmaNode | null {
    const traverse = (node: FigmaNode): FigmaNode | null => {
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
}
"#;

/// The typescript format keeps its idiomatic export shape regardless of
/// `outputStyle`.
pub fn render(input: &SynthesisInput, _options: &GenerationOptions) -> String {
    let css = input.css_data();
    let mut code = String::new();

    code.push_str(&toolkit::doc_header(
        "TypeScript Figma Export",
        &[("Generated", input.generated_at)],
        "Type-safe Figma component with full IntelliSense support.",
    ));

    code.push_str(INTERFACES);
    if css.is_some() {
        code.push_str(DESIGN_SYSTEM_INTERFACE);
    }

    code.push_str("\ninterface FigmaComponentData {\n");
    code.push_str("  metadata: FigmaMetadata;\n");
    code.push_str("  structure: FigmaNode;\n");
    code.push_str("  components: Record<string, any>;\n");
    code.push_str("  styles: Record<string, any>;\n");
    if css.is_some() {
        code.push_str("  cssData?: any;\n");
        code.push_str("  designSystem?: FigmaDesignSystem;\n");
    }
    code.push_str("}\n");

    code.push_str(CLASS_BODY);

    let mut data = Map::new();
    data.insert(
        "metadata".to_string(),
        serde_json::to_value(input.metadata).unwrap_or(Value::Null),
    );
    data.insert(
        "structure".to_string(),
        serde_json::to_value(input.document).unwrap_or(Value::Null),
    );
    data.insert(
        "components".to_string(),
        Value::Object(input.components.clone()),
    );
    data.insert("styles".to_string(), Value::Object(input.styles.clone()));
    if let Some(css) = css {
        data.insert(
            "cssData".to_string(),
            serde_json::to_value(css).unwrap_or(Value::Null),
        );
        data.insert("designSystem".to_string(), design_system_value(css));
    }

    code.push_str("\n// Create and export instance\n");
    code.push_str(&format!(
        "const figmaComponentData: FigmaComponentData = {};\n",
        toolkit::embed_json(&Value::Object(data), 2)
    ));
    code.push_str("const figmaComponent = new FigmaComponent(figmaComponentData);\n\n");
    code.push_str("export default figmaComponent;\n");
    code.push_str("export { type FigmaComponentData, type FigmaNode, type FigmaMetadata };\n");
    code
}
