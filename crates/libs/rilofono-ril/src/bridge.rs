//! Bridge backend: forwards every request to a radio object hosted in an
//! embedded runtime.
//!
//! Registration launches the runtime, constructs the hosted class and calls
//! its `init`. Requests are copied out of the host's buffer and handled on a
//! tokio executor, so host threads never wait on the hosted side.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::BridgeConfig;
use crate::error::RilError;
use crate::registration::Backend;
use crate::responder::Responder;
use crate::traits::{EmbeddedRuntime, HostEnv, HostedRadio, RequestHandler, RuntimeLauncher};
use crate::types::{RequestCode, RilRequest, Token};

/// Version string reported by the bridge backend.
pub const BRIDGE_VERSION: &str = "rilofono v0.1";

/// Registers a [`BridgeRadio`].
pub struct BridgeBackend {
    launcher: Arc<dyn RuntimeLauncher>,
    config: BridgeConfig,
    executor: Handle,
}

impl BridgeBackend {
    pub fn new(launcher: Arc<dyn RuntimeLauncher>, config: BridgeConfig, executor: Handle) -> Self {
        Self {
            launcher,
            config,
            executor,
        }
    }
}

impl Backend for BridgeBackend {
    fn setup(
        self,
        env: &Arc<dyn HostEnv>,
        args: &[String],
    ) -> Result<Arc<dyn RequestHandler>, RilError> {
        let options = self.config.runtime_options();
        let mut runtime = self.launcher.launch(&options).map_err(|fault| {
            log::error!("failed to create embedded runtime: {fault}");
            RilError::backend_setup("launch", fault)
        })?;

        match start_hosted(runtime.as_mut(), &self.config.hosted_class, env, args) {
            Ok(hosted) => Ok(Arc::new(BridgeRadio {
                hosted,
                executor: self.executor,
                _runtime: runtime,
            })),
            Err(err) => {
                if let Some(fault) = runtime.take_pending_fault() {
                    log::error!("pending runtime fault: {fault}");
                }
                runtime.destroy();
                Err(err)
            }
        }
    }
}

fn start_hosted(
    runtime: &mut dyn EmbeddedRuntime,
    class: &str,
    env: &Arc<dyn HostEnv>,
    args: &[String],
) -> Result<Arc<dyn HostedRadio>, RilError> {
    let hosted = runtime.construct(class).map_err(|fault| {
        log::error!("error constructing {class}: {fault}");
        RilError::backend_setup("construct", fault)
    })?;
    hosted.init(Arc::clone(env), args).map_err(|fault| {
        log::error!("{class}.init() failed: {fault}");
        RilError::backend_setup("init", fault)
    })?;
    Ok(hosted)
}

/// Forwards requests to the hosted radio.
///
/// Owns the embedded runtime for the rest of the process.
pub struct BridgeRadio {
    hosted: Arc<dyn HostedRadio>,
    executor: Handle,
    _runtime: Box<dyn EmbeddedRuntime>,
}

impl RequestHandler for BridgeRadio {
    fn version(&self) -> &str {
        BRIDGE_VERSION
    }

    fn supports(&self, code: RequestCode) -> bool {
        self.hosted.supports(code)
    }

    fn on_request(&self, request: RilRequest<'_>, responder: Responder) {
        let request = request.to_owned_request();
        let hosted = Arc::clone(&self.hosted);
        log::trace!("forward {} {:?} ({} bytes)", request.code, request.token, request.data.len());
        // A panic in the hosted call drops the responder, which fails the request.
        self.executor.spawn(async move {
            match hosted.on_request(request).await {
                Ok(response) => responder.succeed(&response),
                Err(err) => responder.fail(&err),
            }
        });
    }

    fn on_cancel(&self, token: Token) {
        self.hosted.on_cancel(token);
    }
}
