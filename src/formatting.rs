use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use figx_lib::output::FIGX_OUTPUT_VERSION;
use figx_lib::{ErrorOutput, FigxError, FigxOutput};

use crate::cli::OutputMode;

/// Write output in the requested format.
pub fn write_output(
    body: &FigxOutput,
    format: OutputMode,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputMode::Json => write_json_output(body, output.as_deref())?,
        OutputMode::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: FigxError, format: OutputMode, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = FigxOutput::Error(ErrorOutput {
        version: FIGX_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputMode::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputMode::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Reserve exit code 2 for fatal errors; failed validation uses 1.
    ExitCode::from(2)
}

/// Exit code for commands gated on a validation result.
pub fn exit_code_for_validation(is_valid: bool) -> ExitCode {
    if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn write_json_output(
    body: &FigxOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

fn write_pretty_output(body: &FigxOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &FigxOutput, colorize: bool) -> String {
    match body {
        FigxOutput::Generate(out) => {
            let mut buf = String::new();
            let status = if out.validation.is_valid {
                color("VALID", "32", colorize)
            } else {
                color("INVALID", "31", colorize)
            };
            writeln!(
                buf,
                "{} Generated {} module from {}",
                status, out.format, out.metadata.file_name
            )
            .ok();
            writeln!(
                buf,
                "Size: {} bytes | download name: {}",
                out.metadata.size, out.download_name
            )
            .ok();
            writeln!(
                buf,
                "Nodes: {} total, {} text, {} components, depth {} ({:?} complexity)",
                out.statistics.total_nodes,
                out.statistics.text_nodes,
                out.statistics.components,
                out.statistics.max_depth,
                out.statistics.complexity
            )
            .ok();
            if let Some(path) = &out.output_path {
                writeln!(buf, "Code written to {}", path.display()).ok();
            }
            append_validation_lines(
                &mut buf,
                &out.validation.errors,
                &out.validation.warnings,
                &out.validation.suggestions,
                colorize,
            );
            if !out.issues.is_empty() {
                writeln!(buf, "Input issues:").ok();
                for issue in &out.issues {
                    match &issue.path {
                        Some(path) => writeln!(buf, "- {} ({})", issue.message, path).ok(),
                        None => writeln!(buf, "- {}", issue.message).ok(),
                    };
                }
            }
            buf
        }
        FigxOutput::Tokens(out) => {
            let mut buf = String::new();
            let header = color("[TOKENS]", "36", colorize);
            writeln!(buf, "{} Design tokens from {}", header, out.input.value).ok();
            writeln!(
                buf,
                "Colors: {} | Typography: {} | Spacing: {} | Effects: {}",
                out.tokens.colors.len(),
                out.tokens.typography.len(),
                out.tokens.spacing.len(),
                out.tokens.effects.len()
            )
            .ok();
            for (name, value) in &out.tokens.colors {
                writeln!(buf, "- {:24} {}", name, value).ok();
            }
            for (name, value) in out.tokens.spacing.iter() {
                writeln!(buf, "- {:24} {}px", name, value).ok();
            }
            buf
        }
        FigxOutput::Validate(out) => {
            let mut buf = String::new();
            let status = if out.validation.is_valid {
                color("VALID", "32", colorize)
            } else {
                color("INVALID", "31", colorize)
            };
            writeln!(buf, "{} {}", status, out.input.display()).ok();
            append_validation_lines(
                &mut buf,
                &out.validation.errors,
                &out.validation.warnings,
                &out.validation.suggestions,
                colorize,
            );
            buf
        }
        FigxOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

fn append_validation_lines(
    buf: &mut String,
    errors: &[String],
    warnings: &[String],
    suggestions: &[String],
    colorize: bool,
) {
    if !errors.is_empty() {
        writeln!(buf, "{}:", color("Errors", "31", colorize)).ok();
        for error in errors {
            writeln!(buf, "- {}", error).ok();
        }
    }
    if !warnings.is_empty() {
        writeln!(buf, "{}:", color("Warnings", "33", colorize)).ok();
        for warning in warnings {
            writeln!(buf, "- {}", warning).ok();
        }
    }
    if !suggestions.is_empty() {
        writeln!(buf, "Suggestions:").ok();
        for suggestion in suggestions {
            writeln!(buf, "- {}", suggestion).ok();
        }
    }
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
