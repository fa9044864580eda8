use crate::io::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bigolens")]
#[command(about = "Algorithmic complexity classification and reporting for source code", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a source file and print, export, or browse the findings
    Analyze {
        /// Source file to analyze
        path: PathBuf,

        /// Language tag; detected from the file extension when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Export format (prints a terminal summary when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Export destination (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the interactive report after analyzing
        #[arg(short, long)]
        interactive: bool,

        /// Config file (defaults to .bigolens.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured maximum source size, in characters
        #[arg(long)]
        max_size: Option<usize>,
    },

    /// List the languages the inference engine supports
    Languages,
}
