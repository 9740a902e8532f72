use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "htmltoc")]
#[command(about = "Build a table of contents from the headings of an HTML document", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to _toc.yml and friends in the current directory)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Output format for the outline dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    Json,
    Yaml,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render the table of contents markup
    #[command(alias = "g")]
    Generate {
        /// HTML document to read (stdin when omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the markup to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Heading tags to include, comma separated (e.g. h2,h3)
        #[arg(long, value_name = "TAGS", value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Selectors to strip from heading text, comma separated
        #[arg(long, value_name = "SELECTORS", value_delimiter = ',')]
        ignore: Option<Vec<String>>,

        /// Use <ul> instead of <ol>
        #[arg(short, long, default_value_t = false)]
        unordered: bool,

        /// Wrapper element name
        #[arg(long, value_name = "TAG")]
        wrapper: Option<String>,

        /// Wrapper CSS class
        #[arg(long, value_name = "CLASS")]
        wrapper_class: Option<String>,

        /// Caption rendered before the outline
        #[arg(long, value_name = "TEXT")]
        heading: Option<String>,

        /// Wrap the outline in a <details> block
        #[arg(long, default_value_t = false)]
        details: bool,

        /// Summary label for the <details> block
        #[arg(long, value_name = "TEXT")]
        summary: Option<String>,
    },

    /// Print the outline hierarchy
    #[command(alias = "t")]
    Tree {
        /// HTML document to read (stdin when omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TreeFormat::Yaml)]
        format: TreeFormat,
    },
}
