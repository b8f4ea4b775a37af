use std::fmt;

use rilofono_oemhook::WireError;

use crate::types::{RequestCode, RilErrno};

/// Errors returned by adapter operations.
///
/// Registration errors (`AlreadyInitialized`, `BackendSetupFailed`) are fatal
/// to the registration call only. Everything else is confined to a single
/// request and reported through its completion status, see [`RilError::errno`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RilError {
    #[error("adapter already initialized")]
    AlreadyInitialized,

    #[error("backend setup failed during {stage}: {reason}")]
    BackendSetupFailed { stage: &'static str, reason: String },

    #[error("malformed OEM hook record: {0}")]
    MalformedRecord(#[from] WireError),

    #[error("configuring {ifname} failed: {reason}")]
    ConfigurationFailed {
        ifname: String,
        reason: String,
        code: Option<i32>,
    },

    #[error("not implemented: {request}")]
    NotImplemented { request: RequestCode },

    #[error("hosted radio error: {message}")]
    Hosted { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl RilError {
    /// Convenience constructor for `BackendSetupFailed`.
    pub fn backend_setup(stage: &'static str, reason: impl fmt::Display) -> Self {
        Self::BackendSetupFailed {
            stage,
            reason: reason.to_string(),
        }
    }

    /// Convenience constructor for `Hosted`.
    pub fn hosted(message: impl Into<String>) -> Self {
        Self::Hosted {
            message: message.into(),
        }
    }

    /// Completion status reported to the host for a request that failed
    /// with this error.
    pub fn errno(&self) -> RilErrno {
        match self {
            Self::NotImplemented { .. } => RilErrno::RequestNotSupported,
            _ => RilErrno::GenericFailure,
        }
    }

    /// Response bytes sent alongside a failure status.
    ///
    /// A failed configuration call carries its raw result code so the
    /// requester sees the same integer a success would have carried.
    pub fn response(&self) -> Vec<u8> {
        match self {
            Self::ConfigurationFailed {
                code: Some(code), ..
            } => code.to_ne_bytes().to_vec(),
            _ => Vec::new(),
        }
    }
}

/// Step of an interface configuration call that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IfcStep {
    Configure,
    RemoveDefaultRoute,
    ClearAddresses,
    Down,
}

impl fmt::Display for IfcStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configure => "configure",
            Self::RemoveDefaultRoute => "remove default route",
            Self::ClearAddresses => "clear addresses",
            Self::Down => "interface down",
        };
        f.write_str(name)
    }
}

/// A failed interface configuration primitive.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{step} failed on {ifname} with code {code}")]
pub struct IfcError {
    pub ifname: String,
    pub step: IfcStep,
    pub code: i32,
}

impl From<IfcError> for RilError {
    fn from(err: IfcError) -> Self {
        Self::ConfigurationFailed {
            reason: err.to_string(),
            ifname: err.ifname,
            code: Some(err.code),
        }
    }
}

/// Faults surfaced by the embedded runtime while bootstrapping the hosted
/// radio object.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuntimeFault {
    #[error("failed to create runtime: {0}")]
    Launch(String),

    #[error("class not found: {0}")]
    ClassNotFound(String),

    #[error("no zero-argument constructor on {0}")]
    ConstructorNotFound(String),

    #[error("constructing {0} failed")]
    ConstructionFailed(String),

    #[error("method {method} not found on {class}")]
    MethodNotFound { class: String, method: String },

    #[error("exception in {context}: {message}")]
    Exception { context: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_to_completion_status() {
        assert_eq!(
            RilError::NotImplemented {
                request: RequestCode::OEM_HOOK_RAW
            }
            .errno(),
            RilErrno::RequestNotSupported
        );
        assert_eq!(
            RilError::MalformedRecord(WireError::TooShort(4)).errno(),
            RilErrno::GenericFailure
        );
        assert_eq!(RilError::hosted("boom").errno(), RilErrno::GenericFailure);
    }

    #[test]
    fn configuration_failure_carries_result_code() {
        let err: RilError = IfcError {
            ifname: "wlan0".into(),
            step: IfcStep::Down,
            code: -1,
        }
        .into();
        assert_eq!(err.errno(), RilErrno::GenericFailure);
        assert_eq!(err.response(), (-1i32).to_ne_bytes().to_vec());
        assert_eq!(
            err.to_string(),
            "configuring wlan0 failed: interface down failed on wlan0 with code -1"
        );
    }

    #[test]
    fn other_failures_carry_no_response() {
        assert!(RilError::MalformedRecord(WireError::EmptyName).response().is_empty());
        assert!(RilError::AlreadyInitialized.response().is_empty());
    }

    #[test]
    fn backend_setup_names_the_stage() {
        let err = RilError::backend_setup("construct", RuntimeFault::ClassNotFound("rilofono/Ril".into()));
        assert_eq!(
            err.to_string(),
            "backend setup failed during construct: class not found: rilofono/Ril"
        );
    }
}
