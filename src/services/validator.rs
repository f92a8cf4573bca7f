use chrono::Utc;
use log::{debug, warn};
use trust_dns_resolver::error::ResolveError;

use crate::models::{
    dkim_name, LookupKind, LookupStatus, MailserverRecordSet, ResolutionError, Step,
};
use crate::services::MailResolver;

/// Runs the five mail server lookups for a domain, strictly in order:
/// addresses, MX, reverse of the first address, SPF text, DKIM text.
///
/// A failed step is recorded and the next one still runs. Reverse lookup is
/// the only dependent step: with no forward address it is skipped, never
/// queried.
pub struct DomainValidator<R> {
    resolver: R,
}

impl<R: MailResolver> DomainValidator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Check `domain` and return the populated record set
    pub fn validate(&self, domain: &str) -> MailserverRecordSet {
        self.validate_with(domain, |_| {})
    }

    /// Check `domain`, handing each step to `on_step` as soon as it completes
    pub fn validate_with<F>(&self, domain: &str, mut on_step: F) -> MailserverRecordSet
    where
        F: FnMut(Step<'_>),
    {
        let checked_at = Utc::now();

        let addresses = self.lookup(LookupKind::Address, domain, |r| {
            r.resolve_addresses(domain)
        });
        on_step(Step::Addresses(&addresses));

        let mx_records = self.lookup(LookupKind::Mx, domain, |r| {
            r.resolve_mail_exchangers(domain)
        });
        on_step(Step::MailExchangers(&mx_records));

        let reverse_names = match addresses.records().first() {
            Some(&address) => self.lookup(LookupKind::Reverse, &address.to_string(), |r| {
                r.resolve_reverse_names(address)
            }),
            None => {
                debug!("Skipping reverse lookup: no forward address for {domain}");
                LookupStatus::Skipped {
                    reason: format!("no forward address found for {domain}"),
                }
            }
        };
        on_step(Step::ReverseNames(&reverse_names));

        let spf_texts = self.lookup(LookupKind::Spf, domain, |r| r.resolve_text(domain));
        on_step(Step::Spf(&spf_texts));

        let dkim = dkim_name(domain);
        let dkim_texts = self.lookup(LookupKind::Dkim, &dkim, |r| r.resolve_text(&dkim));
        on_step(Step::Dkim(&dkim_texts));

        MailserverRecordSet {
            domain: domain.to_string(),
            checked_at,
            addresses,
            mx_records,
            reverse_names,
            spf_texts,
            dkim_texts,
        }
    }

    fn lookup<T, Q>(&self, kind: LookupKind, name: &str, query: Q) -> LookupStatus<T>
    where
        Q: FnOnce(&R) -> Result<Vec<T>, ResolveError>,
    {
        debug!("{kind} lookup for {name}");

        let error = match query(&self.resolver) {
            Ok(records) if !records.is_empty() => {
                debug!("{kind} lookup for {name} returned {} record(s)", records.len());
                return LookupStatus::Found { records };
            }
            Ok(_) => ResolutionError::no_records(kind, name),
            Err(e) => ResolutionError::new(kind, name, e.to_string()),
        };

        warn!("{error}");
        LookupStatus::Failed { error }
    }
}
