use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::control;
use log::error;
use std::process::ExitCode;

mod commands;
mod logging;
mod models;
mod output;
mod services;

use commands::{run_check, CheckStatus, OutputFormat};
use logging::LogLevel;
use output::default_kind_color;
use services::DnsService;

#[derive(Parser)]
#[command(name = "mailserver-check")]
#[command(version)]
#[command(
    about = "Takes a mailserver domain, checks relevant records for that domain, and returns the records as well as whether they were found or not.",
    long_about = None
)]
struct Cli {
    /// The domain whose records you want to check
    #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
    domain: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimum log level written to stderr (overrides RUST_LOG)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Handle color output
    if cli.no_color {
        control::set_override(false);
    }

    logging::init_logger(cli.log_level.into())?;

    let status = run_check(
        cli.domain.as_deref(),
        DnsService::new,
        cli.output,
        default_kind_color,
        &mut std::io::stdout().lock(),
    )
    .inspect_err(|e| error!("Mail server check failed: {e:#}"))?;

    if status == CheckStatus::MissingDomain {
        Cli::command().print_help()?;
    }

    Ok(ExitCode::from(status.exit_code()))
}
