use std::path::PathBuf;
use std::process::ExitCode;

use figx_lib::output::FIGX_OUTPUT_VERSION;
use figx_lib::{validate_generated_code, FigxError, FigxOutput, ValidateOutput};

use crate::cli::OutputMode;
use crate::formatting::{exit_code_for_validation, render_error, write_output};

/// Run the validate command over an existing generated module.
pub async fn run_validate(code_path: PathBuf, verbose: bool, format: OutputMode) -> ExitCode {
    if verbose {
        eprintln!("Validating {}…", code_path.display());
    }

    let code = match std::fs::read_to_string(&code_path) {
        Ok(code) => code,
        Err(err) => return render_error(FigxError::Io(err), format, None),
    };

    let validation = validate_generated_code(&code);

    let body = FigxOutput::Validate(ValidateOutput {
        version: FIGX_OUTPUT_VERSION.to_string(),
        input: code_path,
        validation: validation.clone(),
    });

    if let Err(err) = write_output(&body, format, None) {
        return render_error(FigxError::Config(err.to_string()), format, None);
    }

    exit_code_for_validation(validation.is_valid)
}
