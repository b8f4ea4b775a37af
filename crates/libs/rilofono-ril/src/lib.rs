//! rild adapter for rilofono.
//!
//! rild loads a vendor RIL library, calls its init entry point once and then
//! drives it through a fixed table of callbacks. This crate implements that
//! contract in safe Rust:
//!
//! - **[`register`]** — the one-time handshake, guarded by [`AdapterState`]
//! - **[`DispatchTable`]** — request, state query, capability query, cancel
//!   and version entry points
//! - **[`Responder`]** — completes each accepted request exactly once
//! - **[`RilError`]** — registration and per-request failures
//!
//! # Backends
//!
//! Two [`RequestHandler`] implementations sit behind the table:
//!
//! - [`DirectRadio`] — answers `OEM_HOOK_RAW` interface-configure records
//!   through an [`InterfaceConfigurator`]
//! - [`BridgeRadio`] — forwards everything to a [`HostedRadio`] running in
//!   an [`EmbeddedRuntime`]
//!
//! [`StubHostedRadio`] and [`StubLauncher`] stand in for the hosted side
//! until a real one is wired up.

pub mod bridge;
pub mod config;
pub mod direct;
pub mod dispatch;
pub mod error;
pub mod registration;
pub mod responder;
pub mod traits;
pub mod types;

pub use bridge::{BridgeBackend, BridgeRadio, BRIDGE_VERSION};
pub use config::{BridgeConfig, RuntimeOptions};
pub use direct::{DirectBackend, DirectRadio, HELPER_VERSION};
pub use dispatch::DispatchTable;
pub use error::{IfcError, IfcStep, RilError, RuntimeFault};
pub use registration::{register, AdapterState, Backend};
pub use responder::Responder;
pub use traits::{
    EmbeddedRuntime, HostEnv, HostedRadio, InterfaceConfigurator, RequestHandler, RuntimeLauncher,
};
pub use types::*;

mod stub;
pub use stub::{StubHostedRadio, StubLauncher, StubRuntime};
