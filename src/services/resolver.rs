use std::net::IpAddr;

use trust_dns_resolver::error::ResolveError;

use crate::models::MxRecord;

/// The DNS queries a mail server check needs.
///
/// Every method returns the records in resolver order, or the resolver's
/// error untouched. Turning an empty answer or an error into a
/// `ResolutionError` is the validator's job.
pub trait MailResolver {
    /// A and AAAA records for `domain`
    fn resolve_addresses(&self, domain: &str) -> Result<Vec<IpAddr>, ResolveError>;

    /// MX records for `domain`, lowest priority value first
    fn resolve_mail_exchangers(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError>;

    /// PTR names for a single address
    fn resolve_reverse_names(&self, address: IpAddr) -> Result<Vec<String>, ResolveError>;

    /// TXT records for any name, each record's strings joined together
    fn resolve_text(&self, name: &str) -> Result<Vec<String>, ResolveError>;
}

impl<R: MailResolver + ?Sized> MailResolver for &R {
    fn resolve_addresses(&self, domain: &str) -> Result<Vec<IpAddr>, ResolveError> {
        (**self).resolve_addresses(domain)
    }

    fn resolve_mail_exchangers(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        (**self).resolve_mail_exchangers(domain)
    }

    fn resolve_reverse_names(&self, address: IpAddr) -> Result<Vec<String>, ResolveError> {
        (**self).resolve_reverse_names(address)
    }

    fn resolve_text(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        (**self).resolve_text(name)
    }
}
