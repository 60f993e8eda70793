//! Drives one analysis run: resolve the target path, parse, infer, write.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use crate::args::Cli;

pub fn run(cli: Cli) -> Result<()> {
    let Some(target) = cli.target else {
        // a missing argument is a usage question, not a failure
        eprintln!("{}", Cli::command().render_help());
        return Ok(());
    };

    let level = if cli.quiet {
        LevelFilter::OFF
    } else if cli.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let input = cli.input_dir.join(format!("{target}.java"));
    debug!(input = %input.display(), "resolved target");
    let content = fs::read_to_string(&input)
        .with_context(|| format!("read source file {}", input.display()))?;

    let tree = parsers::parse_java(&content, &input.to_string_lossy())?;
    let graph = engine::build_graph(&tree);
    info!(
        vertices = graph.lines().count(),
        edges = graph.edge_count(),
        "analysis complete"
    );

    reporters::write_graph(&graph, cli.format.into(), &cli.output)?;
    if !cli.quiet {
        println!("Graph saved to {}", cli.output.display());
    }
    Ok(())
}
