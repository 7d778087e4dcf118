use super::message_builder::MessageBuilder;
use async_trait::async_trait;
use bypass_dns_application::ports::{UpstreamAnswer, UpstreamExchange};
use bypass_dns_domain::{DnsQuery, DomainError};
use bytes::Bytes;
use hickory_proto::op::{Message, MessageType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP exchange against a single fixed endpoint.
///
/// One ephemeral socket per exchange. Both the send and the receive are
/// bounded by the configured timeout; the raw response is parsed once here
/// so a garbled upstream surfaces as an error rather than as a reply.
pub struct UdpExchanger {
    endpoint: SocketAddr,
    timeout: Duration,
}

impl UdpExchanger {
    pub fn new(endpoint: SocketAddr, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    pub fn endpoint(&self) -> SocketAddr {
        self.endpoint
    }
}

#[async_trait]
impl UpstreamExchange for UdpExchanger {
    async fn exchange(&self, query: &DnsQuery) -> Result<UpstreamAnswer, DomainError> {
        let (id, message_bytes) =
            MessageBuilder::build_query_with_id(&query.domain, &query.record_type)?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.endpoint.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout(self.timeout, socket.send_to(&message_bytes, self.endpoint))
                .await
                .map_err(|_| DomainError::QueryTimeout)?
                .map_err(|e| {
                    DomainError::ExchangeFailed(format!(
                        "failed to send UDP query to {}: {}",
                        self.endpoint, e
                    ))
                })?;

        debug!(
            server = %self.endpoint,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::QueryTimeout)?
                .map_err(|e| {
                    DomainError::ExchangeFailed(format!(
                        "failed to receive UDP response from {}: {}",
                        self.endpoint, e
                    ))
                })?;

        // Validate response source
        if from_addr.ip() != self.endpoint.ip() {
            warn!(
                expected = %self.endpoint,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        let response = Message::from_vec(&recv_buf).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("failed to parse upstream response: {}", e))
        })?;
        if response.id() != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                response.id(),
                id
            )));
        }
        if response.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "upstream sent a query, not a response".to_string(),
            ));
        }

        debug!(
            server = %self.endpoint,
            bytes_received = bytes_received,
            answers = response.answers().len(),
            "UDP response received"
        );

        Ok(UpstreamAnswer::new(Bytes::from(recv_buf)))
    }
}
