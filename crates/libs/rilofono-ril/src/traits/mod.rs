mod handler;
mod host;
mod hosted;
mod ifc;

pub use handler::RequestHandler;
pub use host::HostEnv;
pub use hosted::{EmbeddedRuntime, HostedRadio, RuntimeLauncher};
pub use ifc::InterfaceConfigurator;
