use log::{debug, warn};
use std::net::IpAddr;
use trust_dns_resolver::{
    config::{LookupIpStrategy, ResolverConfig, ResolverOpts},
    error::ResolveError,
    system_conf::read_system_conf,
    Resolver,
};

use crate::models::{InitializationError, MxRecord};
use crate::services::MailResolver;

/// `MailResolver` backed by the platform's DNS configuration
pub struct DnsService {
    resolver: Resolver,
}

impl DnsService {
    /// Build a resolver from the system configuration, falling back to the
    /// library's default upstreams when it cannot be read.
    pub fn new() -> Result<Self, InitializationError> {
        let (config, opts) = match read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                warn!("Could not read system resolver configuration ({e}), using defaults");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        let resolver = Resolver::new(config, resolver_opts(opts))?;

        Ok(Self { resolver })
    }
}

/// Keep `opts` as configured, but ask for A and AAAA records together
fn resolver_opts(mut opts: ResolverOpts) -> ResolverOpts {
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    opts
}

impl MailResolver for DnsService {
    fn resolve_addresses(&self, domain: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let response = self.resolver.lookup_ip(domain)?;
        Ok(response.iter().collect())
    }

    fn resolve_mail_exchangers(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let response = self.resolver.mx_lookup(domain)?;
        let mut records: Vec<_> = response
            .iter()
            .map(|mx| MxRecord {
                priority: mx.preference(),
                host: host_name(mx.exchange()),
            })
            .collect();

        // Stable, so equal priorities keep resolver order
        records.sort_by_key(|r| r.priority);
        Ok(records)
    }

    fn resolve_reverse_names(&self, address: IpAddr) -> Result<Vec<String>, ResolveError> {
        let response = self.resolver.reverse_lookup(address)?;
        Ok(response.iter().map(host_name).collect())
    }

    fn resolve_text(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        let response = self.resolver.txt_lookup(name)?;
        let texts: Vec<String> = response
            .iter()
            .map(|txt| join_segments(txt.iter().map(|data| &data[..])))
            .collect();
        debug!("{} TXT record(s) for {}", texts.len(), name);
        Ok(texts)
    }
}

/// Hostname without the trailing root dot
fn host_name(name: impl ToString) -> String {
    name.to_string().trim_end_matches('.').to_string()
}

/// A TXT record may be split into several character-strings; they form one value
fn join_segments<'a>(segments: impl Iterator<Item = &'a [u8]>) -> String {
    segments
        .map(|data| String::from_utf8_lossy(data).to_string())
        .collect::<Vec<_>>()
        .join("")
}
