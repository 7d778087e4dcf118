pub mod bypass;
pub mod forward;

pub use bypass::BypassHandler;
pub use forward::ForwardHandler;

use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, ResponseHandler, ResponseInfo};
use tracing::error;

pub(crate) async fn send_records<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    header: Header,
    answers: &[Record],
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.build(header, answers.iter(), &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}

pub(crate) async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    send_records(request, response_handle, header, &[]).await
}
