use crate::responder::Responder;
use crate::types::{RequestCode, RilRequest, Token};

/// A backend that services requests on behalf of the dispatch table.
///
/// The direct OEM-hook handler and the hosted-runtime bridge both implement
/// this, so the dispatcher treats them the same way.
pub trait RequestHandler: Send + Sync {
    /// Version string reported to the host.
    fn version(&self) -> &str;

    /// Whether `code` is serviced by this backend.
    fn supports(&self, code: RequestCode) -> bool;

    /// Service a supported request. The responder completes it, either
    /// before returning or later from another thread.
    fn on_request(&self, request: RilRequest<'_>, responder: Responder);

    /// Advisory cancel. Must return immediately.
    fn on_cancel(&self, token: Token);
}
