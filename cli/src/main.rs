//! `shortio`: shorten one URL from the command line.
//!
//! Exit codes: 0 when a link was created, 1 when the API returned an error
//! model, 2 when no response was obtained.

mod args;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use args::Args;
use shortio_core::{ClientConfig, ShortIoClient, ShortenParams};

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let config = ClientConfig::from(args);
    debug!(endpoint = %config.endpoint(), timeout = ?config.timeout, "client configured");

    let client = ShortIoClient::with_config(config);
    let params = ShortenParams::from(args);
    let result = client
        .shorten(&args.api_key, &params)
        .context("shorten request failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.is_success())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
