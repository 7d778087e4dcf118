//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use bypass_dns_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a standard recursive query and serialize it, returning the
    /// message id alongside the bytes for response matching.
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::RecordType as HickoryRecordType;

    #[test]
    fn built_query_round_trips_through_the_wire_codec() {
        let (id, bytes) = MessageBuilder::build_query_with_id("example.com.", &RecordType::A)
            .expect("valid query");

        let parsed = Message::from_vec(&bytes).expect("self-built message must parse");
        assert_eq!(parsed.id(), id);
        assert_eq!(parsed.message_type(), MessageType::Query);
        assert!(parsed.recursion_desired());

        let queries = parsed.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].query_type(), HickoryRecordType::A);
        assert_eq!(queries[0].name().to_utf8(), "example.com.");
    }

    #[test]
    fn malformed_names_are_rejected() {
        let result = MessageBuilder::build_query_with_id("bad..name.", &RecordType::A);
        assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
    }
}
