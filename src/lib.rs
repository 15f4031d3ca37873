//! Calculation engine for a networking and electronics teaching toolkit.
//!
//! Three independent groups of pure functions:
//! - IPv4 subnetting: address ⇄ u32, CIDR ⇄ masks, [`SubnetReport`]
//! - base conversion on unbounded integers, with chunked display
//! - resistor color codes: bands ⇄ resistance, tolerance and temperature
//!   coefficient
//!
//! The functions at the crate root are the surface used by front ends.
//! Input that users get wrong in the normal course of things (a mistyped
//! address, a digit outside the base) comes back as `None`; values a caller
//! is expected to have checked (a prefix above 32) come back as typed errors.

pub mod cmd;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use error::{ResistorError, SubnetError};
use models::{BandCount, Conversions, Radix, ResistorBandSet, ResistorValue, SubnetReport};
use processing::EncodedBands;

pub use error::Error;

/// True for a dotted-quad IPv4 address without leading zeros.
pub fn is_valid_ipv4(s: &str) -> bool {
    processing::is_valid_ipv4(s)
}

/// Subnet report for `ip` and `prefix`, or `None` when either is invalid.
pub fn calculate_subnet_details(ip: &str, prefix: u8) -> Option<SubnetReport> {
    processing::subnet_report(ip, prefix)
        .map_err(|e| log::debug!("calculate_subnet_details: {e}"))
        .ok()
}

/// Dotted subnet mask for `prefix`.
pub fn cidr_to_subnet_mask(prefix: u8) -> Result<String, SubnetError> {
    processing::cidr_to_mask(prefix)
}

/// Dotted wildcard mask for `prefix`.
pub fn cidr_to_wildcard_mask(prefix: u8) -> Result<String, SubnetError> {
    processing::cidr_to_wildcard(prefix)
}

/// Convert `value` between bases; `None` when it is not a valid `from`
/// number.
pub fn convert_base(value: &str, from: Radix, to: Radix) -> Option<String> {
    processing::convert(value, from, to)
}

/// Convert `value` into all three bases; `None` when it does not parse.
pub fn perform_conversions(value: &str, from: Radix) -> Option<Conversions> {
    processing::convert_all(value, from)
}

/// Zero-pad and group a bit string, `chunk_size` bits per group. Front ends
/// pass 8 unless the user picked another grouping.
pub fn format_binary_string(bits: &str, chunk_size: usize) -> String {
    processing::format_chunked(bits, chunk_size)
}

/// Dotted 4x8-bit form of a 32-bit string, `"N/A"` without one.
pub fn format_ip_binary_string(bits: Option<&str>) -> String {
    processing::format_ip_binary(bits)
}

/// Read `bands` as a `count`-band resistor.
pub fn calculate_resistor_from_bands(bands: &ResistorBandSet, count: BandCount) -> ResistorValue {
    processing::decode(bands, count)
}

/// Color bands for a typed resistance such as `"4k7"`.
///
/// `preferred` lists the band counts to try, in order.
pub fn value_to_resistor_bands(
    value: &str,
    tolerance_percent: Option<f64>,
    preferred: &[BandCount],
) -> Result<EncodedBands, ResistorError> {
    let ohms = processing::parse_value(value)?;
    processing::encode(ohms, tolerance_percent, preferred)
}

/// Resistance in ohms, or `None` when the text does not read as one.
pub fn parse_resistance_value(value: &str) -> Option<f64> {
    processing::parse_value(value).ok()
}
