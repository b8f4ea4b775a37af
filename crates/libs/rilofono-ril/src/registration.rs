//! One-time registration handshake with the host daemon.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::dispatch::DispatchTable;
use crate::error::RilError;
use crate::traits::{HostEnv, RequestHandler};
use crate::types::RIL_VERSION;

static GLOBAL_STATE: AdapterState = AdapterState::new();

/// Registration state for one adapter.
///
/// A real host loads the adapter once per process and uses
/// [`AdapterState::global`]; tests build their own.
#[derive(Debug, Default)]
pub struct AdapterState {
    initialized: AtomicBool,
}

impl AdapterState {
    pub const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    /// The process-wide state.
    pub fn global() -> &'static Self {
        &GLOBAL_STATE
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

/// Backend-specific setup run by [`register`].
pub trait Backend {
    /// Build the request handler. On failure, release everything created so
    /// far before returning.
    fn setup(
        self,
        env: &Arc<dyn HostEnv>,
        args: &[String],
    ) -> Result<Arc<dyn RequestHandler>, RilError>;
}

/// Register `backend` with the host and return the dispatch table.
///
/// Fails with `AlreadyInitialized`, before touching the backend, if a
/// registration already succeeded on `state`. A failed setup leaves `state`
/// uninitialized.
pub fn register<B: Backend>(
    state: &AdapterState,
    env: Arc<dyn HostEnv>,
    args: &[String],
    backend: B,
) -> Result<DispatchTable, RilError> {
    log::debug!("register({} args)", args.len());
    if state.is_initialized() {
        log::error!("host called register a second time; failing");
        return Err(RilError::AlreadyInitialized);
    }

    let handler = backend.setup(&env, args)?;

    if state
        .initialized
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        log::error!("concurrent registration won the race; failing");
        return Err(RilError::AlreadyInitialized);
    }

    log::info!("registered '{}' (RIL version {RIL_VERSION})", handler.version());
    Ok(DispatchTable::new(env, handler))
}
