//! Command-line interface for microdata extraction.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{normalize_type_filter, SourceKind, DEFAULT_MAX_RESPONSE_SIZE};
use crate::error::Result;
use crate::extractor::{extract_from_str, load_source, InputFormat};
use crate::output::{render, save_output, OutputFormat, SerializeOptions};

/// RegelRecht Microdata - Extract HTML microdata items as JSON or YAML.
#[derive(Parser)]
#[command(name = "regelrecht-microdata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract microdata items from a file, URL, or stdin.
    Extract {
        /// File path, http(s) URL, or `-` for stdin
        source: String,

        /// Only return top-level items whose itemtype equals this value
        #[arg(short = 't', long = "type")]
        item_type: Option<String>,

        /// Parser to use for the source document
        #[arg(short, long, value_enum, default_value_t = InputFormat::Html)]
        input_format: InputFormat,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// Include each item's text content as `rawText`
        #[arg(long)]
        raw_text: bool,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum size of a fetched document in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_RESPONSE_SIZE)]
        max_size: u64,
    },
}

/// Options for a single extract run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractArgs {
    pub source: String,
    pub item_type: Option<String>,
    pub input_format: InputFormat,
    pub format: OutputFormat,
    pub options: SerializeOptions,
    pub output: Option<PathBuf>,
    pub max_size: u64,
}

impl From<Commands> for ExtractArgs {
    fn from(command: Commands) -> Self {
        let Commands::Extract {
            source,
            item_type,
            input_format,
            format,
            pretty,
            raw_text,
            output,
            max_size,
        } = command;

        Self {
            source,
            item_type,
            input_format,
            format,
            options: SerializeOptions {
                pretty,
                include_raw_text: raw_text,
            },
            output,
            max_size,
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    extract_command(&ExtractArgs::from(cli.command))
}

/// Execute the extract command.
fn extract_command(args: &ExtractArgs) -> Result<()> {
    let content = load_with_spinner(&args.source, args.max_size)?;

    let type_filter = normalize_type_filter(args.item_type.as_deref());
    let items = extract_from_str(&content, args.input_format, type_filter)?;
    let rendered = render(&items, args.format, &args.options)?;

    match &args.output {
        Some(path) => {
            save_output(&rendered, path)?;
            eprintln!(
                "{} {} item(s) to {}",
                style("Saved").green().bold(),
                items.len(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Load the source, showing a spinner on stderr while fetching URLs.
fn load_with_spinner(source: &str, max_size: u64) -> Result<String> {
    if SourceKind::detect(source) != SourceKind::Url {
        return load_source(source, max_size);
    }

    eprintln!("{} {}", style("Fetching").bold(), style(source).cyan());

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Downloading document...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = load_source(source, max_size);
    pb.finish_and_clear();
    result
}
