//! Error types for lookups and startup.

use log::SetLoggerError;
use serde::Serialize;
use thiserror::Error;

use super::types::LookupKind;

/// A lookup step that did not produce any record.
///
/// Carries which lookup failed, the name that was queried (the domain, the
/// DKIM selector name, or the address for reverse lookups) and the resolver's
/// own message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} lookup for {name} failed: {message}")]
pub struct ResolutionError {
    pub kind: LookupKind,
    pub name: String,
    pub message: String,
}

impl ResolutionError {
    pub fn new(kind: LookupKind, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            message: message.into(),
        }
    }

    /// The resolver answered, but with zero records.
    pub fn no_records(kind: LookupKind, name: impl Into<String>) -> Self {
        Self::new(kind, name, "no records found")
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] SetLoggerError),

    /// Neither the system configuration nor the built-in defaults produced a resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolver(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_display() {
        let err = ResolutionError::new(LookupKind::Spf, "example.com", "connection refused");
        assert_eq!(
            err.to_string(),
            "SPF lookup for example.com failed: connection refused"
        );
    }

    #[test]
    fn test_no_records_message() {
        let err = ResolutionError::no_records(LookupKind::Reverse, "192.0.2.1");
        assert_eq!(err.kind, LookupKind::Reverse);
        assert_eq!(err.name, "192.0.2.1");
        assert_eq!(err.message, "no records found");
    }
}
