use crate::ports::{BanListStore, UpstreamAnswer, UpstreamExchange};
use bypass_dns_domain::DnsQuery;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the caller should do with a query after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryDisposition {
    /// Not handled here; hand the query to the next stage of the chain.
    Defer,
    /// Answer the client with this upstream response, marked authoritative.
    Respond(UpstreamAnswer),
}

/// Decides, per query, whether the requested name is resolved here.
///
/// Names on the ban list are looked up through the designated resolver and
/// answered directly; everything else defers (non-members, non-address
/// record types, and any exchange failure). A deferral caused by a failed
/// exchange is indistinguishable from a non-member to the client; the
/// failure only shows up in the logs.
///
/// Stateless across queries; the shared ban list snapshot is the only state
/// it reads.
pub struct HandleQueryUseCase {
    ban_list: Arc<dyn BanListStore>,
    upstream: Arc<dyn UpstreamExchange>,
}

impl HandleQueryUseCase {
    pub fn new(ban_list: Arc<dyn BanListStore>, upstream: Arc<dyn UpstreamExchange>) -> Self {
        Self { ban_list, upstream }
    }

    pub async fn execute(&self, query: &DnsQuery) -> QueryDisposition {
        // Wire-form names are root-terminated; the list holds bare names.
        let domain = query.domain.strip_suffix('.').unwrap_or(&query.domain);

        if !self.ban_list.contains(domain) {
            return QueryDisposition::Defer;
        }

        if !query.record_type.is_address() {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                "listed domain with non-address query type, deferring"
            );
            return QueryDisposition::Defer;
        }

        info!(
            domain = %query.domain,
            record_type = %query.record_type,
            "listed domain, resolving via designated upstream"
        );

        match self.upstream.exchange(query).await {
            Ok(answer) => QueryDisposition::Respond(answer),
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    error = %e,
                    "upstream exchange failed, deferring to next stage"
                );
                QueryDisposition::Defer
            }
        }
    }
}
