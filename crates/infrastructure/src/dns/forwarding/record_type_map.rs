use bypass_dns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::HTTPS => HickoryRecordType::HTTPS,
            RecordType::SVCB => HickoryRecordType::SVCB,
        }
    }

    /// Convert hickory RecordType → domain RecordType (for incoming queries)
    ///
    /// Returns `None` for record types this server does not model; those
    /// queries bypass nothing and go straight down the chain.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::SRV => Some(RecordType::SRV),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::CAA => Some(RecordType::CAA),
            HickoryRecordType::HTTPS => Some(RecordType::HTTPS),
            HickoryRecordType::SVCB => Some(RecordType::SVCB),
            _ => None,
        }
    }
}
