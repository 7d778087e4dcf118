use super::{send_error_response, send_records};
use crate::dns::forwarding::RecordTypeMapper;
use bypass_dns_application::use_cases::{HandleQueryUseCase, QueryDisposition};
use bypass_dns_domain::DnsQuery;
use hickory_proto::op::{Header, Message, ResponseCode};
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{error, warn};

/// Handler decorator in front of the normal resolution chain.
///
/// Queries for names on the ban list are answered here, authoritatively,
/// with whatever the designated resolver returned; everything else is
/// handed to the wrapped handler unchanged. The wrapped handler never
/// learns whether a deferral came from a non-member, an unsupported query
/// type, or a failed exchange.
pub struct BypassHandler<N: RequestHandler> {
    use_case: Arc<HandleQueryUseCase>,
    next: N,
}

impl<N: RequestHandler> BypassHandler<N> {
    pub fn new(use_case: Arc<HandleQueryUseCase>, next: N) -> Self {
        Self { use_case, next }
    }
}

#[async_trait::async_trait]
impl<N: RequestHandler> RequestHandler for BypassHandler<N> {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        // Types we do not model are never bypass candidates.
        let record_type = match RecordTypeMapper::from_hickory(request_info.query.query_type()) {
            Some(rt) => rt,
            None => return self.next.handle_request(request, response_handle).await,
        };

        let query = DnsQuery::new(request_info.query.name().to_utf8(), record_type);

        match self.use_case.execute(&query).await {
            QueryDisposition::Respond(answer) => {
                let upstream = match Message::from_vec(&answer.wire_data) {
                    Ok(message) => message,
                    Err(e) => {
                        warn!(error = %e, domain = %query.domain, "Unparseable upstream answer, deferring");
                        return self.next.handle_request(request, response_handle).await;
                    }
                };

                let mut header = Header::response_from_request(request.header());
                header.set_authoritative(true);
                send_records(request, &mut response_handle, header, upstream.answers()).await
            }
            QueryDisposition::Defer => self.next.handle_request(request, response_handle).await,
        }
    }
}
