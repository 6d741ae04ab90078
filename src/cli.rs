use clap::{Parser, Subcommand, ValueEnum};
use figx_lib::{OutputFormat, OutputStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figx")]
#[command(
    version,
    about = "Figma Export (figx) - Generate JavaScript modules from Figma designs",
    long_about = "Figma Export (figx)\n\nModes:\n- generate: import a Figma file (URL, file key, or saved API response) and emit a JavaScript/TypeScript module.\n- tokens: extract named color/typography/spacing/effect tokens.\n- validate: run static checks over a previously generated module.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for retry/timeouts/generation; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a JavaScript/TypeScript module from a Figma design
    Generate {
        #[arg(
            long,
            help = "Input resource (Figma URL, bare file key, or saved API response .json)"
        )]
        input: String,

        #[arg(
            long,
            value_name = "ID",
            help = "Figma node id (e.g. 1:2 or 1-2); overrides any node-id in the URL"
        )]
        node_id: Option<String>,

        #[arg(
            long,
            value_name = "PATH",
            help = "CSS file pasted from Figma's copy-as-code, merged into the output"
        )]
        css: Option<PathBuf>,

        #[arg(long, value_enum, help = "Output format variant")]
        variant: Option<FormatVariant>,

        #[arg(long, value_enum, help = "Module system for the export surface")]
        output_style: Option<StyleVariant>,

        #[arg(long, help = "Strip comments and collapse whitespace in the output")]
        minify: bool,

        #[arg(long, help = "Skip the type declaration block")]
        no_types: bool,

        #[arg(long, help = "Skip the documentation header")]
        no_comments: bool,

        #[arg(long, help = "Skip the helper function library")]
        no_helpers: bool,

        #[arg(
            long,
            short,
            value_name = "PATH",
            help = "Write generated code to this file (the JSON report goes to stdout)"
        )]
        output: Option<PathBuf>,

        #[arg(
            long,
            value_name = "SECONDS",
            help = "Generation timeout in seconds (overrides config)"
        )]
        timeout: Option<u64>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputMode,
    },

    /// Extract design tokens from a Figma design
    Tokens {
        #[arg(
            long,
            help = "Input resource (Figma URL, bare file key, or saved API response .json)"
        )]
        input: String,

        #[arg(
            long,
            value_name = "ID",
            help = "Figma node id (e.g. 1:2 or 1-2); overrides any node-id in the URL"
        )]
        node_id: Option<String>,

        #[arg(long, short, value_name = "PATH", help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputMode,
    },

    /// Run static checks over a previously generated module
    Validate {
        #[arg(long, value_name = "PATH", help = "Path to a generated .js/.ts file")]
        code: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputMode,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatVariant {
    Complete,
    Minimal,
    Structured,
    Modular,
    Typescript,
}

impl From<FormatVariant> for OutputFormat {
    fn from(variant: FormatVariant) -> Self {
        match variant {
            FormatVariant::Complete => OutputFormat::Complete,
            FormatVariant::Minimal => OutputFormat::Minimal,
            FormatVariant::Structured => OutputFormat::Structured,
            FormatVariant::Modular => OutputFormat::Modular,
            FormatVariant::Typescript => OutputFormat::Typescript,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StyleVariant {
    Es6,
    Commonjs,
    Umd,
}

impl From<StyleVariant> for OutputStyle {
    fn from(style: StyleVariant) -> Self {
        match style {
            StyleVariant::Es6 => OutputStyle::Es6,
            StyleVariant::Commonjs => OutputStyle::Commonjs,
            StyleVariant::Umd => OutputStyle::Umd,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputMode {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
