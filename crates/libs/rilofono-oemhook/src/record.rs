//! Interface-configure record encode/decode.
//!
//! Byte-compatible with the record the hosted side builds in a native-order
//! byte buffer and submits through `invokeOemRilRequestRaw`.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::{IFNAME_SIZE, RECORD_SIZE};

const IPADDR_OFFSET: usize = IFNAME_SIZE;
const PREFIX_OFFSET: usize = IFNAME_SIZE + 4;
const GATEWAY_OFFSET: usize = IFNAME_SIZE + 8;
const DNS_OFFSET: usize = IFNAME_SIZE + 12;

/// Errors from record encode/decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("record too short: {0} bytes (expected {RECORD_SIZE})")]
    TooShort(usize),

    #[error("interface name is not NUL-terminated within {IFNAME_SIZE} bytes")]
    UnterminatedName,

    #[error("interface name is empty")]
    EmptyName,

    #[error("interface name is not printable ASCII")]
    InvalidName,

    #[error("interface name too long: {0} bytes (maximum {max})", max = IFNAME_SIZE - 1)]
    NameTooLong(usize),
}

/// Convert an IPv4 address to its wire integer.
///
/// The octets keep network order in memory, whatever the host byte order.
pub fn ipv4_to_wire(addr: Ipv4Addr) -> i32 {
    i32::from_ne_bytes(addr.octets())
}

/// Inverse of [`ipv4_to_wire`].
pub fn wire_to_ipv4(value: i32) -> Ipv4Addr {
    Ipv4Addr::from(value.to_ne_bytes())
}

/// A decoded OEM-hook interface-configure record.
///
/// `ipaddr == 0` asks for the interface configuration to be removed; any
/// other value asks for it to be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfcConfigureRecord {
    pub ifname: String,
    pub ipaddr: i32,
    pub prefix_length: u32,
    pub gateway: i32,
    pub dns: [i32; 2],
}

impl IfcConfigureRecord {
    /// Build a record that applies an address, route and DNS servers.
    ///
    /// Absent gateway or DNS entries are sent as zero.
    pub fn configure(
        ifname: impl Into<String>,
        addr: Ipv4Addr,
        prefix_length: u32,
        gateway: Option<Ipv4Addr>,
        dns1: Option<Ipv4Addr>,
        dns2: Option<Ipv4Addr>,
    ) -> Self {
        let wire = |addr: Option<Ipv4Addr>| addr.map(ipv4_to_wire).unwrap_or(0);
        Self {
            ifname: ifname.into(),
            ipaddr: ipv4_to_wire(addr),
            prefix_length,
            gateway: wire(gateway),
            dns: [wire(dns1), wire(dns2)],
        }
    }

    /// Build a record that removes all configuration from `ifname`.
    pub fn teardown(ifname: impl Into<String>) -> Self {
        Self::configure(ifname, Ipv4Addr::UNSPECIFIED, 0, None, None, None)
    }

    /// True when this record asks for the interface to be torn down.
    pub fn is_teardown(&self) -> bool {
        self.ipaddr == 0
    }

    /// Encode to the fixed 36-byte layout.
    pub fn encode(&self) -> Result<[u8; RECORD_SIZE], WireError> {
        validate_name(self.ifname.as_bytes())?;
        if self.ifname.len() >= IFNAME_SIZE {
            return Err(WireError::NameTooLong(self.ifname.len()));
        }

        let mut buf = [0u8; RECORD_SIZE];
        buf[..self.ifname.len()].copy_from_slice(self.ifname.as_bytes());
        buf[IPADDR_OFFSET..PREFIX_OFFSET].copy_from_slice(&self.ipaddr.to_ne_bytes());
        buf[PREFIX_OFFSET..GATEWAY_OFFSET].copy_from_slice(&self.prefix_length.to_ne_bytes());
        buf[GATEWAY_OFFSET..DNS_OFFSET].copy_from_slice(&self.gateway.to_ne_bytes());
        buf[DNS_OFFSET..DNS_OFFSET + 4].copy_from_slice(&self.dns[0].to_ne_bytes());
        buf[DNS_OFFSET + 4..RECORD_SIZE].copy_from_slice(&self.dns[1].to_ne_bytes());
        Ok(buf)
    }

    /// Decode from wire bytes.
    ///
    /// `data` must hold at least [`RECORD_SIZE`] bytes; anything after the
    /// record is ignored. The name is never read past its 16-byte buffer.
    pub fn decode(data: &[u8]) -> Result<Self, WireError> {
        if data.len() < RECORD_SIZE {
            return Err(WireError::TooShort(data.len()));
        }

        let name_buf = &data[..IFNAME_SIZE];
        let name_len = name_buf
            .iter()
            .position(|&b| b == 0)
            .ok_or(WireError::UnterminatedName)?;
        let name = &name_buf[..name_len];
        validate_name(name)?;

        Ok(Self {
            ifname: String::from_utf8_lossy(name).into_owned(),
            ipaddr: read_i32(data, IPADDR_OFFSET),
            prefix_length: read_u32(data, PREFIX_OFFSET),
            gateway: read_i32(data, GATEWAY_OFFSET),
            dns: [read_i32(data, DNS_OFFSET), read_i32(data, DNS_OFFSET + 4)],
        })
    }
}

fn validate_name(name: &[u8]) -> Result<(), WireError> {
    if name.is_empty() {
        return Err(WireError::EmptyName);
    }
    if !name.iter().all(|b| b.is_ascii_graphic()) {
        return Err(WireError::InvalidName);
    }
    Ok(())
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);
    i32::from_ne_bytes(word)
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);
    u32::from_ne_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_record(name: &[u8], ipaddr: i32, prefix: u32, gateway: i32, dns: [i32; 2]) -> Vec<u8> {
        let mut buf = vec![0u8; RECORD_SIZE];
        buf[..name.len()].copy_from_slice(name);
        buf[16..20].copy_from_slice(&ipaddr.to_ne_bytes());
        buf[20..24].copy_from_slice(&prefix.to_ne_bytes());
        buf[24..28].copy_from_slice(&gateway.to_ne_bytes());
        buf[28..32].copy_from_slice(&dns[0].to_ne_bytes());
        buf[32..36].copy_from_slice(&dns[1].to_ne_bytes());
        buf
    }

    #[test]
    fn record_size_is_36() {
        assert_eq!(RECORD_SIZE, 36);
        let encoded = IfcConfigureRecord::teardown("wlan0").encode().expect("encode");
        assert_eq!(encoded.len(), 36);
    }

    #[test]
    fn decodes_fields_at_fixed_offsets() {
        let data = raw_record(b"wlan0", 0x0A00_0001, 24, 0x0A00_00FE, [0x0808_0808, 0x0808_0404]);
        let record = IfcConfigureRecord::decode(&data).expect("decode");
        assert_eq!(record.ifname, "wlan0");
        assert_eq!(record.ipaddr, 0x0A00_0001);
        assert_eq!(record.prefix_length, 24);
        assert_eq!(record.gateway, 0x0A00_00FE);
        assert_eq!(record.dns, [0x0808_0808, 0x0808_0404]);
        assert!(!record.is_teardown());
    }

    #[test]
    fn rejects_every_truncation() {
        let data = raw_record(b"wlan0", 1, 24, 0, [0, 0]);
        for len in 0..RECORD_SIZE {
            assert_eq!(
                IfcConfigureRecord::decode(&data[..len]),
                Err(WireError::TooShort(len)),
                "length {len} must be rejected"
            );
        }
    }

    #[test]
    fn ignores_trailing_bytes() {
        let mut data = raw_record(b"rmnet0", 0, 0, 0, [0, 0]);
        data.extend_from_slice(&[0xAA; 8]);
        let record = IfcConfigureRecord::decode(&data).expect("decode");
        assert_eq!(record.ifname, "rmnet0");
        assert!(record.is_teardown());
    }

    #[test]
    fn rejects_unterminated_name() {
        let data = raw_record(b"abcdefghijklmnop", 1, 24, 0, [0, 0]);
        assert_eq!(IfcConfigureRecord::decode(&data), Err(WireError::UnterminatedName));
    }

    #[test]
    fn accepts_fifteen_byte_name() {
        let data = raw_record(b"abcdefghijklmno", 1, 24, 0, [0, 0]);
        let record = IfcConfigureRecord::decode(&data).expect("decode");
        assert_eq!(record.ifname.len(), 15);
    }

    #[test]
    fn ignores_garbage_after_terminator() {
        let mut data = raw_record(b"wlan0", 1, 24, 0, [0, 0]);
        data[6..16].copy_from_slice(&[0xFF; 10]);
        let record = IfcConfigureRecord::decode(&data).expect("decode");
        assert_eq!(record.ifname, "wlan0");
    }

    #[test]
    fn rejects_empty_and_non_ascii_names() {
        let empty = raw_record(b"", 1, 24, 0, [0, 0]);
        assert_eq!(IfcConfigureRecord::decode(&empty), Err(WireError::EmptyName));

        let non_ascii = raw_record(&[b'w', 0xC3, 0xA9], 1, 24, 0, [0, 0]);
        assert_eq!(IfcConfigureRecord::decode(&non_ascii), Err(WireError::InvalidName));

        let spaced = raw_record(b"wl an0", 1, 24, 0, [0, 0]);
        assert_eq!(IfcConfigureRecord::decode(&spaced), Err(WireError::InvalidName));
    }

    #[test]
    fn encode_rejects_long_name() {
        let record = IfcConfigureRecord::teardown("abcdefghijklmnop");
        assert_eq!(record.encode(), Err(WireError::NameTooLong(16)));
    }

    #[test]
    fn encode_matches_raw_layout() {
        let record = IfcConfigureRecord {
            ifname: "wlan0".into(),
            ipaddr: 0x0A00_0001,
            prefix_length: 24,
            gateway: 0x0A00_00FE,
            dns: [0x0808_0808, 0x0808_0404],
        };
        let expected = raw_record(b"wlan0", 0x0A00_0001, 24, 0x0A00_00FE, [0x0808_0808, 0x0808_0404]);
        assert_eq!(record.encode().expect("encode").to_vec(), expected);
    }

    #[test]
    fn address_octets_stay_in_network_order() {
        let addr = Ipv4Addr::new(192, 168, 1, 20);
        let wire = ipv4_to_wire(addr);
        assert_eq!(wire.to_ne_bytes(), [192, 168, 1, 20]);
        assert_eq!(wire_to_ipv4(wire), addr);
    }

    #[test]
    fn configure_fills_missing_addresses_with_zero() {
        let record =
            IfcConfigureRecord::configure("rmnet0", Ipv4Addr::new(10, 1, 2, 3), 30, None, None, None);
        assert_eq!(record.gateway, 0);
        assert_eq!(record.dns, [0, 0]);
        assert_eq!(wire_to_ipv4(record.ipaddr), Ipv4Addr::new(10, 1, 2, 3));
    }
}
