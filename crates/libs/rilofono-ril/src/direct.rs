//! Direct backend: services `OEM_HOOK_RAW` interface-configure records
//! in-process.

use std::sync::Arc;

use rilofono_oemhook::{wire_to_ipv4, IfcConfigureRecord};

use crate::error::RilError;
use crate::registration::Backend;
use crate::responder::Responder;
use crate::traits::{HostEnv, InterfaceConfigurator, RequestHandler};
use crate::types::{RequestCode, RilErrno, RilRequest, Token};

/// Version string reported by the direct backend.
pub const HELPER_VERSION: &str = "rilofono helper rild library";

/// Registers a [`DirectRadio`]. Setup has no side effects.
pub struct DirectBackend<C> {
    configurator: C,
}

impl<C> DirectBackend<C> {
    pub fn new(configurator: C) -> Self {
        Self { configurator }
    }
}

impl<C: InterfaceConfigurator + 'static> Backend for DirectBackend<C> {
    fn setup(
        self,
        _env: &Arc<dyn HostEnv>,
        _args: &[String],
    ) -> Result<Arc<dyn RequestHandler>, RilError> {
        Ok(Arc::new(DirectRadio::new(self.configurator)))
    }
}

/// Handles exactly one request kind: `OEM_HOOK_RAW` carrying an
/// [`IfcConfigureRecord`].
///
/// Each request is decoded, applied and completed on the calling thread.
pub struct DirectRadio<C> {
    configurator: C,
}

impl<C: InterfaceConfigurator> DirectRadio<C> {
    pub fn new(configurator: C) -> Self {
        Self { configurator }
    }

    /// Decode `payload` and apply it, returning the configuration result
    /// code on success.
    pub fn handle_oem_hook(&self, payload: &[u8]) -> Result<i32, RilError> {
        let record = IfcConfigureRecord::decode(payload)?;
        self.apply(&record)
    }

    fn apply(&self, record: &IfcConfigureRecord) -> Result<i32, RilError> {
        if record.is_teardown() {
            log::info!("oemhook: tear down {}", record.ifname);
            self.configurator.remove(&record.ifname)?;
            return Ok(0);
        }

        log::info!(
            "oemhook: configure {} {}/{} gw {} dns {} {}",
            record.ifname,
            wire_to_ipv4(record.ipaddr),
            record.prefix_length,
            wire_to_ipv4(record.gateway),
            wire_to_ipv4(record.dns[0]),
            wire_to_ipv4(record.dns[1]),
        );
        let code = self.configurator.configure(
            &record.ifname,
            record.ipaddr,
            record.prefix_length,
            record.gateway,
            record.dns[0],
            record.dns[1],
        );
        if code != 0 {
            return Err(RilError::ConfigurationFailed {
                ifname: record.ifname.clone(),
                reason: format!("configure returned {code}"),
                code: Some(code),
            });
        }
        Ok(code)
    }
}

impl<C: InterfaceConfigurator> RequestHandler for DirectRadio<C> {
    fn version(&self) -> &str {
        HELPER_VERSION
    }

    fn supports(&self, code: RequestCode) -> bool {
        code == RequestCode::OEM_HOOK_RAW
    }

    fn on_request(&self, request: RilRequest<'_>, responder: Responder) {
        if request.code != RequestCode::OEM_HOOK_RAW {
            responder.complete(RilErrno::RequestNotSupported, &[]);
            return;
        }
        match self.handle_oem_hook(request.data) {
            Ok(code) => responder.succeed(&code.to_ne_bytes()),
            Err(err) => responder.fail(&err),
        }
    }

    /// Nothing to cancel: requests complete before `on_request` returns.
    fn on_cancel(&self, token: Token) {
        log::debug!("cancel {token:?} ignored; no request is ever pending");
    }
}
