use std::sync::Arc;

use async_trait::async_trait;

use crate::config::RuntimeOptions;
use crate::error::{RilError, RuntimeFault};
use crate::traits::HostEnv;
use crate::types::{OwnedRequest, RequestCode, Token};

/// The radio object living inside the embedded runtime.
#[async_trait]
pub trait HostedRadio: Send + Sync {
    /// Called once after construction, before any request is forwarded.
    fn init(&self, host: Arc<dyn HostEnv>, args: &[String]) -> Result<(), RuntimeFault>;

    fn supports(&self, code: RequestCode) -> bool;

    /// Handle one request. The returned bytes become the success response.
    async fn on_request(&self, request: OwnedRequest) -> Result<Vec<u8>, RilError>;

    /// Advisory cancel; the default ignores it.
    fn on_cancel(&self, _token: Token) {}
}

/// A live embedded runtime instance.
pub trait EmbeddedRuntime: Send + Sync {
    /// Resolve `class`, its zero-argument constructor and its `init` entry
    /// point, then construct an instance.
    fn construct(&mut self, class: &str) -> Result<Arc<dyn HostedRadio>, RuntimeFault>;

    /// Take the fault left pending by the last failed call, clearing it.
    fn take_pending_fault(&mut self) -> Option<String>;

    /// Tear the runtime down.
    fn destroy(self: Box<Self>);
}

/// Creates embedded runtime instances.
pub trait RuntimeLauncher: Send + Sync {
    fn launch(&self, options: &RuntimeOptions) -> Result<Box<dyn EmbeddedRuntime>, RuntimeFault>;
}
