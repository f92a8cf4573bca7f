mod dns;
mod resolver;
#[cfg(test)]
pub mod stub;
mod validator;

pub use dns::DnsService;
pub use resolver::MailResolver;
pub use validator::DomainValidator;
