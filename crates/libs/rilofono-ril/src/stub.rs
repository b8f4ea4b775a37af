use std::sync::Arc;

use async_trait::async_trait;

use crate::config::RuntimeOptions;
use crate::error::{RilError, RuntimeFault};
use crate::traits::*;
use crate::types::*;

/// A hosted radio that claims no request codes and rejects anything
/// forwarded to it with `NotImplemented`.
///
/// This is the starting point for the bridge: wire it in, then replace it
/// with a real hosted object.
pub struct StubHostedRadio;

#[async_trait]
impl HostedRadio for StubHostedRadio {
    fn init(&self, _host: Arc<dyn HostEnv>, args: &[String]) -> Result<(), RuntimeFault> {
        log::debug!("stub hosted radio init ({} args)", args.len());
        Ok(())
    }

    fn supports(&self, _code: RequestCode) -> bool {
        false
    }

    async fn on_request(&self, request: OwnedRequest) -> Result<Vec<u8>, RilError> {
        Err(RilError::NotImplemented {
            request: request.code,
        })
    }
}

/// An in-process runtime whose only class is [`StubHostedRadio`].
pub struct StubRuntime {
    class: String,
}

impl EmbeddedRuntime for StubRuntime {
    fn construct(&mut self, class: &str) -> Result<Arc<dyn HostedRadio>, RuntimeFault> {
        if class != self.class {
            return Err(RuntimeFault::ClassNotFound(class.to_string()));
        }
        Ok(Arc::new(StubHostedRadio))
    }

    fn take_pending_fault(&mut self) -> Option<String> {
        None
    }

    fn destroy(self: Box<Self>) {
        log::debug!("stub runtime destroyed");
    }
}

/// Launches [`StubRuntime`]s serving `class`.
pub struct StubLauncher {
    class: String,
}

impl StubLauncher {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl RuntimeLauncher for StubLauncher {
    fn launch(&self, options: &RuntimeOptions) -> Result<Box<dyn EmbeddedRuntime>, RuntimeFault> {
        log::debug!("stub runtime launch {:?}", options.options);
        Ok(Box::new(StubRuntime {
            class: self.class.clone(),
        }))
    }
}
