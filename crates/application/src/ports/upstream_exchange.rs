use async_trait::async_trait;
use bytes::Bytes;
use bypass_dns_domain::{DnsQuery, DomainError};

/// A complete upstream DNS response in wire format.
///
/// Opaque to the application layer; the infrastructure handler extracts
/// the answer section when it builds the reply.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamAnswer {
    pub wire_data: Bytes,
}

impl UpstreamAnswer {
    pub fn new(wire_data: Bytes) -> Self {
        Self { wire_data }
    }
}

/// Port for the synchronous request/response exchange against a resolver.
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    async fn exchange(&self, query: &DnsQuery) -> Result<UpstreamAnswer, DomainError>;
}
