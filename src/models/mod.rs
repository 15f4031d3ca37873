//! Value types shared by the calculation modules.
//!
//! - [`Cidr`] and the IPv4 mask helpers
//! - [`SubnetReport`] - result of a subnet query
//! - [`Radix`] and [`Conversions`] - positional bases
//! - [`BandColor`], [`ResistorBandSet`] and [`ResistorValue`] - resistor color codes

mod ipv4;
mod radix;
mod resistor;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cidr_mask_bits, dotted_binary, mask_prefix_len, network_addr, parse_ipv4,
    Cidr, IpClass, MAX_PREFIX,
};
pub use radix::{Conversions, Radix};
pub use resistor::{
    BandAttribute, BandColor, BandCount, BandRole, BandSlot, ResistorBandSet, ResistorValue,
    DIGIT_PREFERENCE, MULTIPLIER_PREFERENCE, TOLERANCE_PREFERENCE,
};
pub use subnet::{SubnetReport, NOT_APPLICABLE};
