//! CSV output formatting for calculation results.

use crate::models::{Conversions, ResistorValue, SubnetReport};
use crate::processing::EncodedBands;
use itertools::Itertools;

use super::terminal::format_field;

/// Header and one row for a subnet report.
pub fn subnet_report_csv(report: &SubnetReport) -> String {
    let header = [
        "cidr",
        "mask",
        "wildcard",
        "network",
        "broadcast",
        "first_usable",
        "last_usable",
        "total",
        "usable",
    ]
    .iter()
    .map(|name| format_field(name, 0))
    .join(",");

    let row = [
        format_field(&report.cidr, 20),
        format_field(&report.subnet_mask, 17),
        format_field(&report.wildcard_mask, 17),
        format_field(&report.network_address, 17),
        format_field(&report.broadcast_address, 17),
        format_field(&report.first_usable, 17),
        format_field(&report.last_usable, 17),
        format_field(report.total_addresses, 12),
        format_field(report.usable_hosts, 12),
    ]
    .join(",");

    format!("{header}\n{row}\n")
}

/// Header and one row for a base conversion.
pub fn conversions_csv(conversions: &Conversions) -> String {
    format!(
        "\"binary\",\"decimal\",\"hexadecimal\"\n{},{},{}\n",
        format_field(&conversions.binary, 0),
        format_field(&conversions.decimal, 0),
        format_field(&conversions.hexadecimal, 0),
    )
}

/// Header and one row for a decoded resistor.
pub fn resistor_value_csv(value: &ResistorValue) -> String {
    let optional = |v: Option<String>| v.unwrap_or_default();
    format!(
        "\"ohms\",\"tolerance_percent\",\"temp_coefficient_ppm\",\"formatted\"\n{},{},{},{}\n",
        format_field(optional(value.resistance_ohms.map(|r| r.to_string())), 0),
        format_field(optional(value.tolerance_percent.map(|t| t.to_string())), 0),
        format_field(optional(value.temp_coefficient_ppm.map(|t| t.to_string())), 0),
        format_field(&value.formatted, 0),
    )
}

/// Header and one row listing encoded band colors.
pub fn encoded_bands_csv(encoded: &EncodedBands) -> String {
    let colors = encoded.colors();
    let header = (1..=colors.len())
        .map(|i| format_field(format!("band{i}"), 0))
        .join(",");
    let row = colors.iter().map(|c| format_field(c, 0)).join(",");
    format!("{header}\n{row}\n")
}
