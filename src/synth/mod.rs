//! Code synthesis: one dispatcher over a closed format enum.
//!
//! Every variant is a pure function of the same input bundle and shares the
//! assembly toolkit; format selection happens once, here.

pub mod toolkit;

mod complete;
mod minimal;
mod modular;
mod structured;
mod typescript;

use serde_json::{Map, Value};

use crate::css::ParsedCssData;
use crate::metadata::FileMetadata;
use crate::types::normalized::NormalizedNode;
use crate::types::options::{GenerationOptions, OutputFormat};
use crate::types::tokens::DesignTokenSet;

pub use toolkit::download_file_name;

/// Everything a format renderer may embed. The generation timestamp is
/// supplied by the caller so repeated calls differ only in that field.
pub struct SynthesisInput<'a> {
    pub metadata: &'a FileMetadata,
    pub document: &'a NormalizedNode,
    pub components: &'a Map<String, Value>,
    pub styles: &'a Map<String, Value>,
    pub tokens: &'a DesignTokenSet,
    pub css: Option<&'a ParsedCssData>,
    pub generated_at: &'a str,
}

impl<'a> SynthesisInput<'a> {
    /// CSS data participates in synthesis only when it contains rules.
    pub fn css_data(&self) -> Option<&'a ParsedCssData> {
        self.css.filter(|css| !css.rules.is_empty())
    }
}

/// Render the selected format, then apply the format-independent minify
/// post-pass when requested.
pub fn synthesize(input: &SynthesisInput, options: &GenerationOptions) -> String {
    let code = match options.format {
        OutputFormat::Complete => complete::render(input, options),
        OutputFormat::Minimal => minimal::render(input, options),
        OutputFormat::Structured => structured::render(input, options),
        OutputFormat::Modular => modular::render(input, options),
        OutputFormat::Typescript => typescript::render(input, options),
    };

    if options.minify {
        toolkit::minify(&code)
    } else {
        code
    }
}

/// The CSS-derived design-system summary embedded next to `cssData`.
pub(crate) fn design_system_value(css: &ParsedCssData) -> Value {
    serde_json::json!({
        "colors": css.colors,
        "fonts": css.fonts,
        "spacing": css.spacing,
        "borderRadius": css.border_radius,
        "shadows": css.shadows,
        "animations": css.animations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::CssParser;
    use crate::metadata::extract_metadata;
    use crate::normalize::normalize_document;
    use crate::tokens::extract_design_tokens;
    use crate::types::figma::FigmaFileData;
    use crate::types::options::OutputStyle;
    use serde_json::json;

    fn sample_data() -> FigmaFileData {
        serde_json::from_value(json!({
            "document": {
                "id": "0:1", "name": "Hero Frame", "type": "FRAME",
                "children": [{
                    "id": "0:2", "name": "Title", "type": "TEXT",
                    "characters": "Hello",
                    "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}]
                }]
            },
            "components": {"9:1": {"name": "Button", "description": ""}},
            "styles": {},
            "name": "Demo File",
            "lastModified": "2024-06-06T00:00:00Z",
            "version": "3",
            "role": "viewer",
            "editorType": "figma"
        }))
        .expect("parse sample data")
    }

    fn balanced(code: &str, open: char, close: char) -> bool {
        code.matches(open).count() == code.matches(close).count()
    }

    #[test]
    fn every_format_balances_delimiters_and_embeds_metadata() {
        let data = sample_data();
        let document = normalize_document(data.document.as_ref().unwrap());
        let metadata = extract_metadata(&data, "KEY42", Some("0:1"));
        let tokens = extract_design_tokens(&data);
        let css = CssParser::parse(".layer-hero { color: #fff; }");

        for format in [
            OutputFormat::Complete,
            OutputFormat::Minimal,
            OutputFormat::Structured,
            OutputFormat::Modular,
            OutputFormat::Typescript,
        ] {
            for css_case in [None, Some(&css)] {
                let input = SynthesisInput {
                    metadata: &metadata,
                    document: &document,
                    components: &data.components,
                    styles: &data.styles,
                    tokens: &tokens,
                    css: css_case,
                    generated_at: "2024-06-06T12:00:00.000Z",
                };
                let options = GenerationOptions {
                    format,
                    ..GenerationOptions::default()
                };
                let code = synthesize(&input, &options);

                assert!(balanced(&code, '{', '}'), "braces unbalanced for {format:?}");
                assert!(balanced(&code, '(', ')'), "parens unbalanced for {format:?}");
                assert!(
                    code.contains("Demo File"),
                    "file name missing for {format:?}"
                );
                assert!(code.contains("KEY42"), "file key missing for {format:?}");
                if css_case.is_some() {
                    assert!(
                        code.contains("designSystem") || code.contains("figmaDesignSystem"),
                        "design system missing for {format:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn minify_post_pass_applies_to_any_format() {
        let data = sample_data();
        let document = normalize_document(data.document.as_ref().unwrap());
        let metadata = extract_metadata(&data, "KEY42", None);
        let tokens = extract_design_tokens(&data);
        let input = SynthesisInput {
            metadata: &metadata,
            document: &document,
            components: &data.components,
            styles: &data.styles,
            tokens: &tokens,
            css: None,
            generated_at: "2024-06-06T12:00:00.000Z",
        };
        let options = GenerationOptions {
            format: OutputFormat::Structured,
            minify: true,
            ..GenerationOptions::default()
        };

        let code = synthesize(&input, &options);
        assert!(!code.contains("/**"), "minified output keeps no header");
        assert!(!code.contains('\n'), "minified output is a single line");
    }

    #[test]
    fn minimal_es6_export_matches_contract() {
        let data = sample_data();
        let document = normalize_document(data.document.as_ref().unwrap());
        let metadata = extract_metadata(&data, "KEY42", None);
        let tokens = extract_design_tokens(&data);
        let input = SynthesisInput {
            metadata: &metadata,
            document: &document,
            components: &data.components,
            styles: &data.styles,
            tokens: &tokens,
            css: None,
            generated_at: "2024-06-06T12:00:00.000Z",
        };
        let options = GenerationOptions {
            format: OutputFormat::Minimal,
            output_style: OutputStyle::Es6,
            ..GenerationOptions::default()
        };

        let code = synthesize(&input, &options);
        assert!(code.contains("export default figmaComponent;"));
        assert!(code.contains("\"characters\": \"Hello\""));
    }
}
