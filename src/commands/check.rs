use anyhow::Result;
use clap::ValueEnum;
use log::info;
use std::io::Write;

use crate::models::{InitializationError, MailserverRecordSet};
use crate::output::{format_check_header, format_step, format_summary, KindStyle};
use crate::services::{DomainValidator, MailResolver};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored groups, printed as each lookup completes
    Table,
    /// The whole record set as pretty JSON once all lookups ran
    Json,
}

/// How a check ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Every step ran; non-address failures may have been reported
    Completed,
    /// The forward address lookup failed
    FatalFailure,
    /// No domain was given, nothing was looked up
    MissingDomain,
}

impl CheckStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            CheckStatus::Completed => 0,
            CheckStatus::FatalFailure | CheckStatus::MissingDomain => 1,
        }
    }
}

/// Trimmed domain, or `None` when nothing usable was given
pub fn normalize_domain(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Check one domain and write the results to `out`.
///
/// The resolver is only built once a domain is known, so a missing domain
/// performs no DNS work at all.
pub fn run_check<R, F, W>(
    domain: Option<&str>,
    connect: F,
    format: OutputFormat,
    style: KindStyle,
    out: &mut W,
) -> Result<CheckStatus>
where
    R: MailResolver,
    F: FnOnce() -> Result<R, InitializationError>,
    W: Write,
{
    let Some(domain) = normalize_domain(domain) else {
        return Ok(CheckStatus::MissingDomain);
    };

    let validator = DomainValidator::new(connect()?);
    info!("Checking mail server records for {domain}");

    let result = match format {
        OutputFormat::Table => stream_table(&validator, &domain, style, out)?,
        OutputFormat::Json => {
            let result = validator.validate(&domain);
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            result
        }
    };
    out.flush()?;

    if result.has_fatal_failure() {
        Ok(CheckStatus::FatalFailure)
    } else {
        Ok(CheckStatus::Completed)
    }
}

/// Print each step before the next lookup starts
fn stream_table<R, W>(
    validator: &DomainValidator<R>,
    domain: &str,
    style: KindStyle,
    out: &mut W,
) -> Result<MailserverRecordSet>
where
    R: MailResolver,
    W: Write,
{
    writeln!(out, "{}", format_check_header(domain))?;
    out.flush()?;

    let mut written: std::io::Result<()> = Ok(());
    let result = validator.validate_with(domain, |step| {
        if written.is_ok() {
            written = out
                .write_all(format_step(domain, step, style).as_bytes())
                .and_then(|_| out.flush());
        }
    });
    written?;

    write!(out, "{}", format_summary(&result))?;
    Ok(result)
}
