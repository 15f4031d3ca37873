//! Calculation logic.
//!
//! Three independent groups of pure functions:
//! - [`subnet`] - IPv4 subnetting arithmetic
//! - [`base`] - arbitrary precision base conversion
//! - [`resistor_decode`], [`resistor_encode`] and [`resistance_value`] -
//!   resistor color codes in both directions

pub mod base;
pub mod resistance_value;
pub mod resistor_decode;
pub mod resistor_encode;
pub mod subnet;

// Re-export public functions
pub use base::{convert, convert_all, format_chunked, format_for_display, format_in_base, parse_in_base};
pub use resistance_value::parse_value;
pub use resistor_decode::{decode, format_resistance};
pub use resistor_encode::{encode, EncodedBands};
pub use subnet::{
    cidr_to_mask, cidr_to_wildcard, format_ip_binary, ip_binary_string, ip_to_u32,
    is_valid_ipv4, mask_to_cidr, subnet_report, subnet_report_for, u32_to_ip,
};
