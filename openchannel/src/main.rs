// openchannel/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use openchannel_common::config::Config;
use openchannel_common::error::{OcError, Result as ocResult};
use openchannel_net::Client;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::CliArgs;

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("OC_LOG")
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

fn run(cli_args: &CliArgs) -> ocResult<()> {
    let config = Config::load()?;
    debug!("Using {:?}", config);
    let client = Client::new(config)?;
    cli_args.command.run(&client)
}

// API failures are already logged with their body by the client.
fn error_line(e: &OcError) -> String {
    format!("{}: {:#}", "Error".red().bold(), e)
}

fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    if let Err(e) = run(&cli_args) {
        eprintln!("{}", error_line(&e));
        process::exit(1);
    }
    debug!("Command completed successfully.");
}
