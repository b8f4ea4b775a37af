//! # rilofono-oemhook
//!
//! Binary record format carried inside `RIL_REQUEST_OEM_HOOK_RAW` requests
//! between the hosted telephony stack and the rild helper library.
//!
//! The record asks the helper to configure (or tear down) a network
//! interface on behalf of the hosted side, which lacks the privileges to do
//! it itself.
//!
//! ## Record Layout
//!
//! ```text
//! [ifname:16][ipaddr:4][prefix_length:4][gateway:4][dns0:4][dns1:4]
//!  NUL-term   i32        u32              i32        i32      i32
//! ```
//!
//! All integers are in host-native byte order. Address fields hold an IPv4
//! address whose octets sit in memory in network order, so they are passed
//! to the interface configuration layer exactly as read.
//!
//! ## Example
//!
//! ```rust
//! use std::net::Ipv4Addr;
//! use rilofono_oemhook::IfcConfigureRecord;
//!
//! let record = IfcConfigureRecord::configure(
//!     "rmnet0",
//!     Ipv4Addr::new(10, 0, 0, 1),
//!     24,
//!     Some(Ipv4Addr::new(10, 0, 0, 254)),
//!     None,
//!     None,
//! );
//! let encoded = record.encode().unwrap();
//! let decoded = IfcConfigureRecord::decode(&encoded).unwrap();
//! assert_eq!(decoded, record);
//! ```

pub mod record;

pub use record::{ipv4_to_wire, wire_to_ipv4, IfcConfigureRecord, WireError};

/// Size of the NUL-terminated interface name buffer.
pub const IFNAME_SIZE: usize = 16;

/// Total encoded size of an interface-configure record.
pub const RECORD_SIZE: usize = IFNAME_SIZE + 5 * 4;
