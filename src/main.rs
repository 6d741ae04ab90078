mod cli;
mod commands;
mod formatting;
mod progress;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_generate, run_tokens, run_validate};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let args = cli::parse();

    match args.command {
        Commands::Generate {
            input,
            node_id,
            css,
            variant,
            output_style,
            minify,
            no_types,
            no_comments,
            no_helpers,
            output,
            timeout,
            format,
        } => {
            run_generate(
                args.config,
                args.verbose,
                input,
                node_id,
                css,
                variant,
                output_style,
                minify,
                no_types,
                no_comments,
                no_helpers,
                output,
                timeout,
                format,
            )
            .await
        }
        Commands::Tokens {
            input,
            node_id,
            output,
            format,
        } => run_tokens(args.config, args.verbose, input, node_id, output, format).await,
        Commands::Validate { code, format } => run_validate(code, args.verbose, format).await,
    }
}
