//! The dispatch table published to the host at registration.

use std::sync::Arc;

use crate::responder::Responder;
use crate::traits::{HostEnv, RequestHandler};
use crate::types::{RadioState, RequestCode, RilRequest, Token, RIL_VERSION};

/// Entry points the host daemon calls after a successful registration.
///
/// Immutable once published. Clones share the same backend.
#[derive(Clone)]
pub struct DispatchTable {
    env: Arc<dyn HostEnv>,
    handler: Arc<dyn RequestHandler>,
}

impl DispatchTable {
    pub(crate) fn new(env: Arc<dyn HostEnv>, handler: Arc<dyn RequestHandler>) -> Self {
        Self { env, handler }
    }

    /// RIL interface version this table implements.
    pub fn ril_version(&self) -> u32 {
        RIL_VERSION
    }

    /// Request entry point.
    ///
    /// `data` is the host's buffer and `declared_len` the length the host
    /// passed with it; the payload seen by the backend is bounded by both.
    /// Unsupported codes are dropped without a completion, since the host
    /// should have checked [`supports`](Self::supports) first.
    pub fn on_request(&self, code: RequestCode, data: &[u8], declared_len: usize, token: Token) {
        if !self.handler.supports(code) {
            log::debug!("ignoring unsupported {code} {token:?}");
            return;
        }
        if declared_len > data.len() {
            log::warn!(
                "{code} {token:?}: declared length {declared_len} exceeds buffer of {} bytes",
                data.len()
            );
        }

        let request = RilRequest::new(code, data, declared_len, token);
        let responder = Responder::new(Arc::clone(&self.env), token, code);
        self.handler.on_request(request, responder);
    }

    /// Current radio state.
    ///
    /// Always `Unavailable`: neither backend brings up a real radio.
    pub fn on_state_request(&self) -> RadioState {
        RadioState::Unavailable
    }

    pub fn supports(&self, code: RequestCode) -> bool {
        self.handler.supports(code)
    }

    /// Advisory cancel. Returns immediately; the request may still complete
    /// normally.
    pub fn on_cancel(&self, token: Token) {
        self.handler.on_cancel(token);
    }

    pub fn version(&self) -> &str {
        self.handler.version()
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("ril_version", &RIL_VERSION)
            .field("version", &self.handler.version())
            .finish_non_exhaustive()
    }
}
