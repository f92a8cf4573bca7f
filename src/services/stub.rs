//! In-memory resolver for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::net::IpAddr;

use trust_dns_resolver::error::ResolveError;

use crate::models::MxRecord;
use crate::services::MailResolver;

/// A query the stub received, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Addresses(String),
    Mx(String),
    Reverse(IpAddr),
    Text(String),
}

/// Answers from fixed tables; anything absent fails like NXDOMAIN would
#[derive(Default)]
pub struct StubResolver {
    pub addresses: HashMap<String, Vec<IpAddr>>,
    pub mx: HashMap<String, Vec<MxRecord>>,
    pub reverse: HashMap<IpAddr, Vec<String>>,
    pub txt: HashMap<String, Vec<String>>,
    calls: RefCell<Vec<Call>>,
}

impl StubResolver {
    /// A resolver that fails every query
    pub fn failing() -> Self {
        Self::default()
    }

    /// The records published for example.com
    pub fn example_com() -> Self {
        let ip: IpAddr = "93.184.216.34".parse().unwrap();
        let mut stub = Self::default();
        stub.addresses.insert("example.com".into(), vec![ip]);
        stub.mx.insert(
            "example.com".into(),
            vec![MxRecord {
                priority: 10,
                host: "mail.example.com".into(),
            }],
        );
        stub.reverse.insert(ip, vec!["example.com".into()]);
        stub.txt
            .insert("example.com".into(), vec!["v=spf1 -all".into()]);
        stub.txt.insert(
            "dk._domainkey.example.com".into(),
            vec!["v=DKIM1; k=rsa; p=...".into()],
        );
        stub
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn answer<K, T>(table: &HashMap<K, Vec<T>>, key: &K) -> Result<Vec<T>, ResolveError>
where
    K: std::hash::Hash + Eq,
    T: Clone,
{
    table
        .get(key)
        .cloned()
        .ok_or_else(|| ResolveError::from("stub: no such name"))
}

impl MailResolver for StubResolver {
    fn resolve_addresses(&self, domain: &str) -> Result<Vec<IpAddr>, ResolveError> {
        self.record(Call::Addresses(domain.to_string()));
        answer(&self.addresses, &domain.to_string())
    }

    fn resolve_mail_exchangers(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        self.record(Call::Mx(domain.to_string()));
        answer(&self.mx, &domain.to_string())
    }

    fn resolve_reverse_names(&self, address: IpAddr) -> Result<Vec<String>, ResolveError> {
        self.record(Call::Reverse(address));
        answer(&self.reverse, &address)
    }

    fn resolve_text(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        self.record(Call::Text(name.to_string()));
        answer(&self.txt, &name.to_string())
    }
}
