use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use figx_lib::output::FIGX_OUTPUT_VERSION;
use figx_lib::{
    generate_with_timeout, FigxError, FigxOutput, GenerateOutput, GenerationRequest,
    ResourceDescriptor,
};

use crate::cli::{FormatVariant, OutputMode, StyleVariant};
use crate::formatting::{exit_code_for_validation, render_error, write_output};
use crate::progress::ProgressCallback;
use crate::settings::{load_config, resolve_generation_options, resolve_generation_timeout};

/// Run the generate command.
#[allow(clippy::too_many_arguments)]
pub async fn run_generate(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: String,
    node_id: Option<String>,
    css: Option<PathBuf>,
    variant: Option<FormatVariant>,
    output_style: Option<StyleVariant>,
    minify: bool,
    no_types: bool,
    no_comments: bool,
    no_helpers: bool,
    output: Option<PathBuf>,
    timeout: Option<u64>,
    format: OutputMode,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, None),
    };
    let options = resolve_generation_options(
        variant,
        output_style,
        minify,
        no_types,
        no_comments,
        no_helpers,
        &config,
    );
    let generation_timeout = resolve_generation_timeout(timeout, &config);

    if verbose {
        eprintln!("Parsing input resource…");
    }
    let input_res = match figx_lib::parse_resource(&input) {
        Ok(res) => res,
        Err(err) => return render_error(FigxError::Config(err.to_string()), format, None),
    };

    let css_text = match &css {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) => return render_error(FigxError::Io(err), format, None),
        },
        None => None,
    };

    let progress: Option<ProgressCallback> = if verbose {
        Some(Arc::new(|msg: &str| eprintln!("{msg}")))
    } else {
        None
    };

    let resolved =
        match super::resolve_input(&input_res, node_id.as_deref(), &config, progress).await {
            Ok(resolved) => resolved,
            Err(err) => return render_error(err, format, None),
        };

    if verbose {
        eprintln!(
            "Generating {} module for {}…",
            options.format.as_str(),
            resolved.file_key
        );
    }

    let request = GenerationRequest {
        data: resolved.data,
        file_key: resolved.file_key,
        node_id: resolved.node_id,
        css_text,
        options: options.clone(),
    };

    let outcome = match generate_with_timeout(request, generation_timeout).await {
        Ok(outcome) => outcome,
        Err(err) => return render_error(err, format, None),
    };

    if let Some(path) = &output {
        if verbose {
            eprintln!("Writing generated code to {}", path.display());
        }
        if let Err(err) = std::fs::write(path, outcome.generated.code.as_bytes()) {
            return render_error(FigxError::Io(err), format, None);
        }
    }

    let code = if output.is_none() {
        Some(outcome.generated.code.clone())
    } else {
        None
    };

    let body = FigxOutput::Generate(GenerateOutput {
        version: FIGX_OUTPUT_VERSION.to_string(),
        input: ResourceDescriptor {
            kind: input_res.kind,
            value: input_res.value,
        },
        format: options.format.as_str().to_string(),
        output_style: options.output_style.as_str().to_string(),
        output_path: output.clone(),
        download_name: outcome.download_file_name.clone(),
        code,
        metadata: outcome.generated.metadata.clone(),
        validation: outcome.validation.clone(),
        statistics: outcome.statistics.clone(),
        issues: outcome.issues.clone(),
    });

    if let Err(err) = write_output(&body, format, None) {
        return render_error(FigxError::Config(err.to_string()), format, None);
    }

    exit_code_for_validation(outcome.validation.is_valid)
}
