//! IPv4 subnet calculations.
//!
//! Address ⇄ u32 packing, CIDR ⇄ mask/wildcard and the full
//! [`SubnetReport`] for one address and prefix.

use crate::error::SubnetError;
use crate::models::{
    cidr_mask_bits, dotted_binary, mask_prefix_len, parse_ipv4, Cidr, IpClass, SubnetReport,
    MAX_PREFIX, NOT_APPLICABLE,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref RAW_IP_BITS: Regex = Regex::new(r"^[01]{32}$").expect("Invalid Regex?");
}

/// True for exactly four dot-separated octets in `0..=255` without leading
/// zeros.
pub fn is_valid_ipv4(s: &str) -> bool {
    parse_ipv4(s).is_ok()
}

/// Pack a dotted-quad address into a big-endian u32.
pub fn ip_to_u32(s: &str) -> Result<u32, SubnetError> {
    parse_ipv4(s).map(u32::from)
}

/// Render a u32 as a dotted-quad address.
pub fn u32_to_ip(n: u32) -> String {
    Ipv4Addr::from(n).to_string()
}

/// Subnet mask for a CIDR prefix, e.g. `24` -> `255.255.255.0`.
pub fn cidr_to_mask(prefix: u8) -> Result<String, SubnetError> {
    cidr_mask_bits(prefix).map(u32_to_ip)
}

fn wildcard_bits(prefix: u8) -> Result<u32, SubnetError> {
    match prefix {
        MAX_PREFIX => Ok(0),
        0 => Ok(u32::MAX),
        _ => cidr_mask_bits(prefix).map(|mask| !mask),
    }
}

/// Wildcard (inverse) mask for a CIDR prefix, e.g. `24` -> `0.0.0.255`.
pub fn cidr_to_wildcard(prefix: u8) -> Result<String, SubnetError> {
    wildcard_bits(prefix).map(u32_to_ip)
}

/// Prefix length of a dotted subnet mask, e.g. `255.255.240.0` -> `20`.
pub fn mask_to_cidr(mask: &str) -> Result<u8, SubnetError> {
    let bits = ip_to_u32(mask).map_err(|_| SubnetError::InvalidMask(mask.to_string()))?;
    mask_prefix_len(bits).ok_or_else(|| SubnetError::InvalidMask(mask.to_string()))
}

/// Compute every derived field for `ip` with `prefix`.
///
/// # Examples
/// ```
/// use techcalc::processing::subnet_report;
/// let report = subnet_report("192.168.1.100", 24).unwrap();
/// assert_eq!(report.network_address, "192.168.1.0");
/// assert_eq!(report.usable_hosts, 254);
/// ```
pub fn subnet_report(ip: &str, prefix: u8) -> Result<SubnetReport, SubnetError> {
    let addr = parse_ipv4(ip)?;
    subnet_report_for(&Cidr::new(addr, prefix)?)
}

/// [`subnet_report`] for an already parsed [`Cidr`].
pub fn subnet_report_for(cidr: &Cidr) -> Result<SubnetReport, SubnetError> {
    let prefix = cidr.prefix;
    let mask = cidr.mask()?;
    let network = cidr.network()?;
    let broadcast = cidr.broadcast()?;

    let host_bits = u32::from(MAX_PREFIX - prefix);
    let total_addresses = 1u64 << host_bits;
    let (usable_hosts, first_usable, last_usable) = if prefix >= MAX_PREFIX - 1 {
        // /31 point-to-point and /32 host routes have no usable range.
        (0, NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string())
    } else {
        (
            total_addresses - 2,
            u32_to_ip(u32::from(network) + 1),
            u32_to_ip(u32::from(broadcast) - 1),
        )
    };

    log::debug!(
        "subnet_report({cidr}) network={network} broadcast={broadcast} usable={usable_hosts}"
    );

    Ok(SubnetReport {
        ip_address: cidr.addr.to_string(),
        cidr: format!("{network}/{prefix}"),
        prefix,
        subnet_mask: u32_to_ip(mask),
        wildcard_mask: u32_to_ip(wildcard_bits(prefix)?),
        network_address: network.to_string(),
        broadcast_address: broadcast.to_string(),
        first_usable,
        last_usable,
        total_addresses,
        usable_hosts,
        ip_class: IpClass::of(cidr.addr),
        // 10/8, 172.16/12 and 192.168/16
        is_private: cidr.addr.is_private(),
        ip_binary: ip_binary_string(u32::from(cidr.addr)),
        mask_binary: ip_binary_string(mask),
        network_binary: ip_binary_string(u32::from(network)),
        broadcast_binary: ip_binary_string(u32::from(broadcast)),
    })
}

/// Dotted binary form of a u32 address.
pub fn ip_binary_string(n: u32) -> String {
    dotted_binary(n)
}

/// Reformat a 32-character bit string as four dotted 8-bit groups.
///
/// Already dotted input is normalised the same way. Anything that is not 32
/// bits is returned unchanged; `None` gives `"N/A"`.
pub fn format_ip_binary(bits: Option<&str>) -> String {
    let Some(bits) = bits else {
        return NOT_APPLICABLE.to_string();
    };
    let raw: String = bits.chars().filter(|c| *c != '.').collect();
    if !RAW_IP_BITS.is_match(&raw) {
        log::debug!("format_ip_binary: {bits:?} is not a 32-bit string, left as is");
        return bits.to_string();
    }
    match u32::from_str_radix(&raw, 2) {
        Ok(n) => dotted_binary(n),
        Err(_) => bits.to_string(),
    }
}
