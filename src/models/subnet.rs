//! Subnet report data model.

use super::IpClass;
use serde::Serialize;

/// Placeholder for fields that have no value, e.g. usable hosts of a /31.
pub const NOT_APPLICABLE: &str = "N/A";

/// Snapshot of everything derived from one `(address, prefix)` query.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubnetReport {
    /// Address as entered.
    pub ip_address: String,
    /// Network address with prefix, e.g. `192.168.1.0/24`.
    pub cidr: String,
    pub prefix: u8,
    pub subnet_mask: String,
    pub wildcard_mask: String,
    pub network_address: String,
    pub broadcast_address: String,
    /// First host address, or `"N/A"` for /31 and /32.
    pub first_usable: String,
    /// Last host address, or `"N/A"` for /31 and /32.
    pub last_usable: String,
    /// Number of addresses in the block, `2^(32-prefix)`.
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub ip_class: IpClass,
    /// Inside one of the RFC 1918 private ranges.
    pub is_private: bool,
    pub ip_binary: String,
    pub mask_binary: String,
    pub network_binary: String,
    pub broadcast_binary: String,
}
