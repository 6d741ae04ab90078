use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use figx_lib::output::FIGX_OUTPUT_VERSION;
use figx_lib::{extract_design_tokens, FigxError, FigxOutput, ResourceDescriptor, TokensOutput};

use crate::cli::OutputMode;
use crate::formatting::{render_error, write_output};
use crate::progress::ProgressCallback;
use crate::settings::load_config;

/// Run the tokens command.
pub async fn run_tokens(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: String,
    node_id: Option<String>,
    output: Option<PathBuf>,
    format: OutputMode,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };

    let input_res = match figx_lib::parse_resource(&input) {
        Ok(res) => res,
        Err(err) => return render_error(FigxError::Config(err.to_string()), format, output),
    };

    let progress: Option<ProgressCallback> = if verbose {
        Some(Arc::new(|msg: &str| eprintln!("{msg}")))
    } else {
        None
    };

    let resolved =
        match super::resolve_input(&input_res, node_id.as_deref(), &config, progress).await {
            Ok(resolved) => resolved,
            Err(err) => return render_error(err, format, output),
        };

    if verbose {
        eprintln!("Extracting design tokens for {}…", resolved.file_key);
    }
    let tokens = extract_design_tokens(&resolved.data);

    let body = FigxOutput::Tokens(TokensOutput {
        version: FIGX_OUTPUT_VERSION.to_string(),
        input: ResourceDescriptor {
            kind: input_res.kind,
            value: input_res.value,
        },
        tokens,
    });

    if let Err(err) = write_output(&body, format, output) {
        return render_error(FigxError::Config(err.to_string()), format, None);
    }

    ExitCode::SUCCESS
}
