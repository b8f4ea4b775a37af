use std::fmt;

use serde::{Deserialize, Serialize};

/// RIL interface version advertised in the dispatch table.
pub const RIL_VERSION: u32 = 9;

// ── Request codes ─────────────────────────────────────────────────────────────

/// A `RIL_REQUEST_*` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestCode(pub i32);

impl RequestCode {
    /// Vendor escape hatch carrying an opaque binary payload.
    pub const OEM_HOOK_RAW: Self = Self(59);

    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RequestCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OEM_HOOK_RAW => f.write_str("OEM_HOOK_RAW"),
            Self(code) => write!(f, "request {code}"),
        }
    }
}

// ── Tokens ────────────────────────────────────────────────────────────────────

/// Host-owned handle identifying one in-flight request.
///
/// The adapter only compares and echoes tokens back; it never computes on
/// their bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u64);

impl Token {
    pub const fn from_raw(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:#x})", self.0)
    }
}

// ── Radio state & completion status ───────────────────────────────────────────

/// `RIL_RadioState` values reported by the state query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum RadioState {
    Off = 0,
    Unavailable = 1,
    On = 10,
}

impl RadioState {
    pub const fn raw(self) -> i32 {
        self as i32
    }
}

/// `RIL_Errno` completion statuses the adapter reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum RilErrno {
    Success = 0,
    RadioNotAvailable = 1,
    GenericFailure = 2,
    RequestNotSupported = 6,
    RequestCancelled = 7,
}

impl RilErrno {
    pub const fn raw(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

// ── Requests ──────────────────────────────────────────────────────────────────

/// A request as delivered by the host, borrowing the host's buffer for the
/// duration of the call.
#[derive(Clone, Copy, Debug)]
pub struct RilRequest<'a> {
    pub code: RequestCode,
    pub data: &'a [u8],
    pub token: Token,
}

impl<'a> RilRequest<'a> {
    /// Build a request from the host's `(data, datalen)` pair.
    ///
    /// The payload never extends past either the declared length or the
    /// buffer actually supplied.
    pub fn new(code: RequestCode, data: &'a [u8], declared_len: usize, token: Token) -> Self {
        let len = declared_len.min(data.len());
        Self {
            code,
            data: &data[..len],
            token,
        }
    }

    /// Copy the payload so the request can outlive the host call.
    pub fn to_owned_request(&self) -> OwnedRequest {
        OwnedRequest {
            code: self.code,
            data: self.data.to_vec(),
            token: self.token,
        }
    }
}

/// A request detached from the host's buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedRequest {
    pub code: RequestCode,
    pub data: Vec<u8>,
    pub token: Token,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_length_bounds_payload() {
        let buf = [1u8, 2, 3, 4, 5, 6];
        let token = Token::from_raw(0xdead_beef);

        let short = RilRequest::new(RequestCode::OEM_HOOK_RAW, &buf, 4, token);
        assert_eq!(short.data, &[1, 2, 3, 4]);

        let overstated = RilRequest::new(RequestCode::OEM_HOOK_RAW, &buf, 64, token);
        assert_eq!(overstated.data.len(), buf.len());

        let owned = short.to_owned_request();
        assert_eq!(owned.data, vec![1, 2, 3, 4]);
        assert_eq!(owned.token, token);
    }

    #[test]
    fn raw_values_match_host_constants() {
        assert_eq!(RequestCode::OEM_HOOK_RAW.raw(), 59);
        assert_eq!(RadioState::Unavailable.raw(), 1);
        assert_eq!(RadioState::On.raw(), 10);
        assert_eq!(RilErrno::GenericFailure.raw(), 2);
        assert_eq!(RilErrno::RequestCancelled.raw(), 7);
    }

    #[test]
    fn token_debug_is_hex() {
        assert_eq!(format!("{:?}", Token::from_raw(255)), "Token(0xff)");
        assert_eq!(Token::from_raw(7).into_raw(), 7);
    }

    #[test]
    fn request_code_display() {
        assert_eq!(RequestCode::OEM_HOOK_RAW.to_string(), "OEM_HOOK_RAW");
        assert_eq!(RequestCode(10).to_string(), "request 10");
    }
}
