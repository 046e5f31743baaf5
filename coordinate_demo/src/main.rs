use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;
mod demo;
mod errors;

use console::StdConsole;
use demo::DemoOptions;

const DEFAULT_LOG_FILTER: &str = "coordinate_demo=warn,coordinate_systems=warn";

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Polar, Cartesian and cylindrical coordinate systems demo",
    long_about = None
)]
struct Cli {
    /// Menu selection (1-4) to run instead of prompting for one
    #[arg(short, long)]
    selection: Option<String>,

    /// Exit right away instead of waiting for Enter
    #[arg(long)]
    no_wait: bool,
}

fn main() -> ExitCode {
    // logs go to stderr so they never interleave with the demo output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    info!("starting with {:?}", cli);

    let options = DemoOptions {
        selection: cli.selection,
        wait_for_exit: !cli.no_wait,
    };

    let mut console = StdConsole::new();
    match demo::run(&mut console, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn error(s: &str) {
    eprintln!("{}", s.red())
}
