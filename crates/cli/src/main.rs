//! Entry point for the command-line interface.
//! Delegates to dedicated modules for argument handling and the
//! analysis run itself.

use depgraph::args::parse_cli;
use depgraph::run::run;

fn main() -> anyhow::Result<()> {
    run(parse_cli())
}
