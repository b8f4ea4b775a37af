use crate::types::{RilErrno, Token};

/// Callbacks the host daemon hands to the adapter at registration.
pub trait HostEnv: Send + Sync {
    /// Complete the request identified by `token`.
    ///
    /// Must be called exactly once per accepted request.
    fn on_request_complete(&self, token: Token, errno: RilErrno, response: &[u8]);

    /// Deliver an unsolicited `RIL_UNSOL_*` notification.
    fn on_unsolicited_response(&self, code: i32, data: &[u8]);
}
