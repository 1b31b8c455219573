//! stepgen CLI Application
//!
//! Command-line interface for the metadata-driven step generator.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        generate,
        no_color,
        print_schema,
    } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    if print_schema {
        return cli.print_schema();
    }

    info!("stepgen started");
    cli.generate(&generate.into())
}
