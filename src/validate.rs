//! Advisory static checks over synthesized source text.
//!
//! This is not a compiler: false positives and negatives are acceptable,
//! and no check may panic or return an error. Internal check failures are
//! escalated into the `errors` list of the result instead.

use crate::types::generated::ValidationResult;

/// Canonical size threshold; crossing it is a warning, not an error.
pub const SIZE_WARNING_BYTES: usize = 100_000;

/// Validate generated code text; always returns a result, never fails.
pub fn validate_generated_code(code: &str) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    if code.trim().is_empty() {
        errors.push("Generated code is empty".to_string());
        return ValidationResult::new(errors, warnings, suggestions);
    }

    let open_braces = code.matches('{').count();
    let close_braces = code.matches('}').count();
    if open_braces != close_braces {
        errors.push("Mismatched curly brackets detected".to_string());
    }

    let open_parens = code.matches('(').count();
    let close_parens = code.matches(')').count();
    if open_parens != close_parens {
        errors.push("Mismatched parentheses detected".to_string());
    }

    let scan = scan_structure(code);
    match &scan {
        Err(detail) => {
            errors.push(format!("Code does not parse as a function body: {detail}"));
        }
        Ok(outcome) => {
            if outcome.max_depth > 8 && code.len() > 10_000 {
                suggestions.push(
                    "Large JSON structures detected - consider using the structured format"
                        .to_string(),
                );
            }
        }
    }

    if code.contains("eval(") {
        errors.push("Dynamic evaluation via eval() detected - unsafe in generated code".to_string());
    }
    if code.contains("Function(") {
        errors.push("Dynamic Function() construction detected - unsafe in generated code".to_string());
    }

    if !code.contains("export") && !code.contains("module.exports") {
        warnings.push("No exports found in generated code".to_string());
    }

    if code.len() > SIZE_WARNING_BYTES {
        warnings.push("Generated code is quite large (>100KB)".to_string());
        suggestions.push("Consider using the minimal format for smaller output".to_string());
    }

    if !code.to_lowercase().contains("figma") {
        warnings.push(
            "Generated code does not reference Figma data - verify the input".to_string(),
        );
    }

    if !code.contains("function") && !code.contains("=>") {
        suggestions.push(
            "No helper functions detected - consider enabling helpers for better usability"
                .to_string(),
        );
    }

    ValidationResult::new(errors, warnings, suggestions)
}

struct ScanOutcome {
    max_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Code,
    Single,
    Double,
    TemplateText,
    LineComment,
    BlockComment,
}

/// String-literal-aware delimiter scan.
///
/// Tracks quote/template/comment state so braces inside literals do not
/// count, and verifies `{}`/`()`/`[]` nest correctly. Template `${ ... }`
/// expressions re-enter code context via a marker on the same stack.
fn scan_structure(code: &str) -> Result<ScanOutcome, String> {
    let mut stack: Vec<char> = Vec::new();
    let mut max_depth = 0usize;
    let mut state = ScanState::Code;

    let chars: Vec<char> = code.chars().collect();
    let mut i = 0usize;
    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            ScanState::Code => match ch {
                '\'' => state = ScanState::Single,
                '"' => state = ScanState::Double,
                '`' => {
                    stack.push('`');
                    state = ScanState::TemplateText;
                }
                '/' if next == Some('/') => {
                    state = ScanState::LineComment;
                    i += 1;
                }
                '/' if next == Some('*') => {
                    state = ScanState::BlockComment;
                    i += 1;
                }
                '{' | '(' | '[' => {
                    stack.push(ch);
                    max_depth = max_depth.max(stack.len());
                }
                '}' => match stack.pop() {
                    Some('{') => {}
                    Some('$') => state = ScanState::TemplateText,
                    _ => return Err("unexpected '}'".to_string()),
                },
                ')' => {
                    if stack.pop() != Some('(') {
                        return Err("unexpected ')'".to_string());
                    }
                }
                ']' => {
                    if stack.pop() != Some('[') {
                        return Err("unexpected ']'".to_string());
                    }
                }
                _ => {}
            },
            ScanState::Single => match ch {
                '\\' => i += 1,
                '\'' => state = ScanState::Code,
                '\n' => return Err("unterminated string literal".to_string()),
                _ => {}
            },
            ScanState::Double => match ch {
                '\\' => i += 1,
                '"' => state = ScanState::Code,
                '\n' => return Err("unterminated string literal".to_string()),
                _ => {}
            },
            ScanState::TemplateText => match ch {
                '\\' => i += 1,
                '`' => {
                    if stack.pop() != Some('`') {
                        return Err("unexpected '`'".to_string());
                    }
                    state = ScanState::Code;
                }
                '$' if next == Some('{') => {
                    stack.push('$');
                    max_depth = max_depth.max(stack.len());
                    state = ScanState::Code;
                    i += 1;
                }
                _ => {}
            },
            ScanState::LineComment => {
                if ch == '\n' {
                    state = ScanState::Code;
                }
            }
            ScanState::BlockComment => {
                if ch == '*' && next == Some('/') {
                    state = ScanState::Code;
                    i += 1;
                }
            }
        }

        i += 1;
    }

    match state {
        ScanState::Single | ScanState::Double => Err("unterminated string literal".to_string()),
        ScanState::TemplateText => Err("unterminated template literal".to_string()),
        ScanState::BlockComment => Err("unterminated block comment".to_string()),
        _ if !stack.is_empty() => Err(format!("{} unclosed delimiter(s)", stack.len())),
        _ => Ok(ScanOutcome { max_depth }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_is_an_error() {
        let result = validate_generated_code("   \n  ");
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"Generated code is empty".to_string()));
    }

    #[test]
    fn mismatched_braces_are_errors() {
        let result = validate_generated_code("const figmaData = { a: 1 ;\nexport default figmaData;");
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Mismatched curly brackets detected".to_string()));
    }

    #[test]
    fn balanced_module_is_valid() {
        let code = "const figmaData = { name: \"x\" };\nexport default figmaData;\nexport { figmaData };\nfunction noop() { return null; }";
        let result = validate_generated_code(code);
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn braces_inside_strings_do_not_break_the_scan() {
        let code = "const figmaData = { label: \"{ not a block }\" };\nexport default figmaData;\nconst f = () => null;";
        let result = validate_generated_code(code);
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn template_expressions_are_scanned_as_code() {
        let code = "const figmaData = { f: (node) => `/* ${node.name} */\\n${ { depth: 1 }.depth }` };\nexport default figmaData;";
        let result = validate_generated_code(code);
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn dynamic_evaluation_is_an_error() {
        let code = "const figmaData = {};\nexport default figmaData;\neval('1 + 1');\nconst f = () => null;";
        let result = validate_generated_code(code);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("eval()")));

        let ctor = "const figmaData = {};\nexport default figmaData;\nconst f = new Function('return 1');";
        let result = validate_generated_code(ctor);
        assert!(result.errors.iter().any(|e| e.contains("Function()")));
    }

    #[test]
    fn missing_exports_is_a_warning() {
        let result = validate_generated_code("const figmaData = { a: 1 };\nconst f = () => null;");
        assert!(result.is_valid);
        assert!(result
            .warnings
            .contains(&"No exports found in generated code".to_string()));
    }

    #[test]
    fn oversized_code_warns_and_suggests_minimal_format() {
        let code = format!(
            "const figmaData = \"{}\";\nexport default figmaData;\nconst f = () => null;",
            "x".repeat(SIZE_WARNING_BYTES)
        );
        let result = validate_generated_code(&code);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains(">100KB")));
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("minimal format")));
    }

    #[test]
    fn missing_figma_vocabulary_is_a_warning() {
        let result =
            validate_generated_code("const data = { a: 1 };\nexport default data;\nconst f = () => null;");
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("does not reference Figma")));
    }

    #[test]
    fn missing_helpers_is_a_suggestion() {
        let result = validate_generated_code("const figmaData = { a: 1 };\nexport default figmaData;");
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("enabling helpers")));
    }

    #[test]
    fn unterminated_string_fails_the_syntax_scan() {
        let result = validate_generated_code("const figmaData = \"unterminated;\nexport default figmaData;");
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("function body")));
    }
}
