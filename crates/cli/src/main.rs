mod cli;
mod pipeline;

use clap::Parser;
use cli::Cli;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    install_tracing(cli.log_level());

    if let Err(error) = pipeline::run(&cli) {
        eprintln!("{}: {}", "error".bold().red(), error);
        process::exit(1);
    }
}

fn install_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
