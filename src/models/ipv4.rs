//! IPv4 address and CIDR notation utilities.
//!
//! Provides the strict dotted-quad parser, mask arithmetic and the [`Cidr`]
//! struct for `address/prefix` pairs.

use crate::error::SubnetError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length of an IPv4 CIDR prefix (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Parse a dotted-quad IPv4 address.
///
/// Stricter than [`Ipv4Addr::from_str`] about what it reports: exactly four
/// groups of ASCII digits, each `0..=255`, and no leading zero on any group
/// (`"0"` is fine, `"01"` is not).
///
/// # Examples
/// ```
/// use techcalc::models::parse_ipv4;
/// assert!(parse_ipv4("10.0.0.1").is_ok());
/// assert!(parse_ipv4("10.0.0.01").is_err());
/// ```
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, SubnetError> {
    let invalid = || SubnetError::InvalidAddress(s.to_string());

    let mut octets = [0u8; 4];
    let mut groups = s.split('.');
    for octet in octets.iter_mut() {
        let group = groups.next().ok_or_else(invalid)?;
        *octet = parse_octet(group).ok_or_else(invalid)?;
    }
    if groups.next().is_some() {
        return Err(invalid());
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(group: &str) -> Option<u8> {
    if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if group.len() > 1 && group.starts_with('0') {
        return None;
    }
    group.parse::<u8>().ok()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use techcalc::models::cidr_mask_bits;
/// assert_eq!(cidr_mask_bits(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn cidr_mask_bits(prefix: u8) -> Result<u32, SubnetError> {
    if prefix > MAX_PREFIX {
        Err(SubnetError::InvalidPrefix(prefix))
    } else if prefix == 0 {
        Ok(0)
    } else {
        let right_len = MAX_PREFIX - prefix;
        let all_bits = u32::MAX as u64;
        let mask = (all_bits << right_len) & all_bits;
        Ok(mask as u32)
    }
}

/// Count the prefix length of a mask, rejecting non-contiguous masks.
pub fn mask_prefix_len(mask: u32) -> Option<u8> {
    let ones = mask.leading_ones();
    // Every bit after the leading ones must be zero.
    if mask.checked_shl(ones).unwrap_or(0) != 0 {
        return None;
    }
    Some(ones as u8)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = cidr_mask_bits(prefix)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
///
/// A /32 is its own broadcast address.
pub fn broadcast_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = cidr_mask_bits(prefix)?;
    let network_bits = u32::from(addr) & mask;
    if prefix == MAX_PREFIX {
        return Ok(Ipv4Addr::from(network_bits));
    }
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Render a 32-bit value as four zero-padded 8-bit groups joined by dots.
pub fn dotted_binary(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Classful network class, kept for teaching purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
}

impl IpClass {
    /// Class from the leading bits of the first octet.
    pub fn of(addr: Ipv4Addr) -> IpClass {
        match addr.octets()[0] {
            0..=127 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            _ => IpClass::E,
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let class = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D (multicast)",
            IpClass::E => "E (reserved)",
        };
        write!(f, "{class}")
    }
}

/// IPv4 address with CIDR prefix, e.g. `192.168.1.100/24`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The IPv4 address as entered (not reduced to the network address).
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Create a new [`Cidr`], checking the prefix range.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Cidr, SubnetError> {
        if prefix > MAX_PREFIX {
            return Err(SubnetError::InvalidPrefix(prefix));
        }
        Ok(Cidr { addr, prefix })
    }

    /// Lowest (network) address of the block.
    pub fn network(&self) -> Result<Ipv4Addr, SubnetError> {
        network_addr(self.addr, self.prefix)
    }

    /// Highest (broadcast) address of the block.
    pub fn broadcast(&self) -> Result<Ipv4Addr, SubnetError> {
        broadcast_addr(self.addr, self.prefix)
    }

    /// Subnet mask as u32. The fields are public, so the prefix is checked
    /// again here.
    pub fn mask(&self) -> Result<u32, SubnetError> {
        cidr_mask_bits(self.prefix)
    }
}

impl FromStr for Cidr {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| SubnetError::InvalidCidr(s.to_string()))?;
        let addr = parse_ipv4(addr)?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| SubnetError::InvalidCidr(s.to_string()))?;
        Cidr::new(addr, prefix)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(de::Error::custom)
    }
}
