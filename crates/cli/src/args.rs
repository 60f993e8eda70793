use clap::Parser;
use std::path::PathBuf;

use crate::output::Format;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Builds a line-level program dependency graph from a Java source file",
    long_about = "Converts a single-file Java program into a line-level program \
dependency graph: for every source line, the set of other lines it depends on, \
each edge tagged with its dependency kind (lexical scope, control flow, data \
flow, call flow, instantiation). The graph is the substrate for program-slicing \
and fault-localization tooling."
)]
pub struct Cli {
    /// Name of the target file (without extension) inside the input directory
    pub target: Option<String>,
    /// Directory containing the source files to analyze
    #[arg(long, default_value = "temp")]
    pub input_dir: PathBuf,
    /// Path the dependency graph document is written to
    #[arg(long, default_value = "temp/dependencies.json")]
    pub output: PathBuf,
    /// Output format for the graph document
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
