use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

use super::error::ResolutionError;

/// DKIM selector queried for every domain
pub const DKIM_SELECTOR: &str = "dk";

// ============================================================================
// Lookup Kinds
// ============================================================================

/// The five lookups of a mail server check, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Address,
    Mx,
    Reverse,
    Spf,
    Dkim,
}

impl LookupKind {
    #[cfg(test)]
    pub const ORDER: [LookupKind; 5] = [
        LookupKind::Address,
        LookupKind::Mx,
        LookupKind::Reverse,
        LookupKind::Spf,
        LookupKind::Dkim,
    ];

    /// Section title used by the table renderer
    pub fn title(self) -> &'static str {
        match self {
            LookupKind::Address => "IP Addresses",
            LookupKind::Mx => "MX Records",
            LookupKind::Reverse => "Reverse Lookup (PTR)",
            LookupKind::Spf => "SPF Records",
            LookupKind::Dkim => "DKIM Records",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupKind::Address => "address",
            LookupKind::Mx => "MX",
            LookupKind::Reverse => "reverse",
            LookupKind::Spf => "SPF",
            LookupKind::Dkim => "DKIM",
        };
        f.write_str(name)
    }
}

/// Name holding the DKIM key for `domain`
pub fn dkim_name(domain: &str) -> String {
    format!("{}._domainkey.{}", DKIM_SELECTOR, domain)
}

// ============================================================================
// Record Types
// ============================================================================

/// Mail exchanger with its preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxRecord {
    pub priority: u16,
    pub host: String,
}

impl fmt::Display for MxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority: {})", self.host, self.priority)
    }
}

/// Outcome of one lookup step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupStatus<T> {
    Found { records: Vec<T> },
    Failed { error: ResolutionError },
    Skipped { reason: String },
}

impl<T> LookupStatus<T> {
    pub fn records(&self) -> &[T] {
        match self {
            LookupStatus::Found { records } => records,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&ResolutionError> {
        match self {
            LookupStatus::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&str> {
        match self {
            LookupStatus::Skipped { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupStatus::Found { .. })
    }
}

// ============================================================================
// Mail Server Record Set
// ============================================================================

/// Everything one check learned about a domain
#[derive(Debug, Clone, Serialize)]
pub struct MailserverRecordSet {
    pub domain: String,
    #[serde(rename = "checkedAt")]
    pub checked_at: DateTime<Utc>,
    pub addresses: LookupStatus<IpAddr>,
    #[serde(rename = "mxRecords")]
    pub mx_records: LookupStatus<MxRecord>,
    #[serde(rename = "reverseNames")]
    pub reverse_names: LookupStatus<String>,
    #[serde(rename = "spfTexts")]
    pub spf_texts: LookupStatus<String>,
    #[serde(rename = "dkimTexts")]
    pub dkim_texts: LookupStatus<String>,
}

impl MailserverRecordSet {
    /// Steps in lookup order
    pub fn steps(&self) -> [Step<'_>; 5] {
        [
            Step::Addresses(&self.addresses),
            Step::MailExchangers(&self.mx_records),
            Step::ReverseNames(&self.reverse_names),
            Step::Spf(&self.spf_texts),
            Step::Dkim(&self.dkim_texts),
        ]
    }

    /// A missing forward address makes the whole check fail
    pub fn has_fatal_failure(&self) -> bool {
        !self.addresses.is_found()
    }

    pub fn failures(&self) -> Vec<&ResolutionError> {
        self.steps().iter().filter_map(|s| s.error()).collect()
    }
}

/// Borrowed view of one completed step
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    Addresses(&'a LookupStatus<IpAddr>),
    MailExchangers(&'a LookupStatus<MxRecord>),
    ReverseNames(&'a LookupStatus<String>),
    Spf(&'a LookupStatus<String>),
    Dkim(&'a LookupStatus<String>),
}

impl<'a> Step<'a> {
    pub fn kind(&self) -> LookupKind {
        match self {
            Step::Addresses(_) => LookupKind::Address,
            Step::MailExchangers(_) => LookupKind::Mx,
            Step::ReverseNames(_) => LookupKind::Reverse,
            Step::Spf(_) => LookupKind::Spf,
            Step::Dkim(_) => LookupKind::Dkim,
        }
    }

    pub fn error(&self) -> Option<&'a ResolutionError> {
        match *self {
            Step::Addresses(s) => s.error(),
            Step::MailExchangers(s) => s.error(),
            Step::ReverseNames(s) | Step::Spf(s) | Step::Dkim(s) => s.error(),
        }
    }

    pub fn skip_reason(&self) -> Option<&'a str> {
        match *self {
            Step::Addresses(s) => s.skip_reason(),
            Step::MailExchangers(s) => s.skip_reason(),
            Step::ReverseNames(s) | Step::Spf(s) | Step::Dkim(s) => s.skip_reason(),
        }
    }

    /// Records rendered one per line
    pub fn lines(&self) -> Vec<String> {
        match *self {
            Step::Addresses(s) => s.records().iter().map(|ip| ip.to_string()).collect(),
            Step::MailExchangers(s) => s.records().iter().map(|mx| mx.to_string()).collect(),
            Step::ReverseNames(s) | Step::Spf(s) | Step::Dkim(s) => s.records().to_vec(),
        }
    }
}
