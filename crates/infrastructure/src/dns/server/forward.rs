use super::{send_error_response, send_records};
use crate::dns::forwarding::RecordTypeMapper;
use bypass_dns_application::ports::UpstreamExchange;
use bypass_dns_domain::DnsQuery;
use hickory_proto::op::{Header, Message, ResponseCode};
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Chain tail: a plain forwarder for everything the bypass layer declined.
///
/// Tries the configured upstreams in order and relays the first answer it
/// gets, non-authoritatively. All upstreams failing is the one case that
/// surfaces to the client, as SERVFAIL.
pub struct ForwardHandler {
    upstreams: Vec<Arc<dyn UpstreamExchange>>,
}

impl ForwardHandler {
    pub fn new(upstreams: Vec<Arc<dyn UpstreamExchange>>) -> Self {
        Self { upstreams }
    }
}

#[async_trait::async_trait]
impl RequestHandler for ForwardHandler {
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

        let record_type = match RecordTypeMapper::from_hickory(request_info.query.query_type()) {
            Some(rt) => rt,
            None => {
                debug!(record_type = ?request_info.query.query_type(), "Unsupported record type");
                return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                    .await;
            }
        };

        let query = DnsQuery::new(request_info.query.name().to_utf8(), record_type);

        for upstream in &self.upstreams {
            match upstream.exchange(&query).await {
                Ok(answer) => match Message::from_vec(&answer.wire_data) {
                    Ok(message) => {
                        let mut header = Header::response_from_request(request.header());
                        header.set_response_code(message.response_code());
                        header.set_recursion_available(true);
                        return send_records(
                            request,
                            &mut response_handle,
                            header,
                            message.answers(),
                        )
                        .await;
                    }
                    Err(e) => {
                        warn!(error = %e, "Unparseable upstream answer, trying next upstream")
                    }
                },
                Err(e) => warn!(error = %e, "Upstream exchange failed, trying next upstream"),
            }
        }

        error!(domain = %query.domain, "All upstreams failed");
        send_error_response(request, &mut response_handle, ResponseCode::ServFail).await
    }
}
