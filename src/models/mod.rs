mod error;
mod types;

pub use error::{InitializationError, ResolutionError};
pub use types::{dkim_name, LookupKind, LookupStatus, MailserverRecordSet, MxRecord, Step};
