//! Terminal output utilities.
//!
//! Renders reports as aligned `label: value` lines, with colors where the
//! terminal supports them.

use crate::models::{BandColor, Conversions, Radix, ResistorValue, SubnetReport};
use crate::processing::format_for_display;
use colored::{Color, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:>18}: {value}\n", label.bold())
}

/// All fields of a subnet report, one per line.
pub fn render_subnet_report(report: &SubnetReport) -> String {
    let mut out = String::new();
    out.push_str(&line("Address", &report.ip_address));
    out.push_str(&line("Network", report.cidr.green()));
    out.push_str(&line("Subnet mask", &report.subnet_mask));
    out.push_str(&line("Wildcard mask", &report.wildcard_mask));
    out.push_str(&line("Network address", &report.network_address));
    out.push_str(&line("Broadcast address", &report.broadcast_address));
    out.push_str(&line("First usable", &report.first_usable));
    out.push_str(&line("Last usable", &report.last_usable));
    out.push_str(&line("Total addresses", report.total_addresses));
    out.push_str(&line("Usable hosts", report.usable_hosts));
    out.push_str(&line(
        "Class",
        format!(
            "{} ({})",
            report.ip_class,
            if report.is_private { "private" } else { "public" }
        ),
    ));
    out.push_str(&line("Address (bin)", &report.ip_binary));
    out.push_str(&line("Mask (bin)", report.mask_binary.cyan()));
    out.push_str(&line("Network (bin)", &report.network_binary));
    out.push_str(&line("Broadcast (bin)", &report.broadcast_binary));
    out
}

/// A number in all three bases, grouped `chunk_bits` bits at a time.
pub fn render_conversions(conversions: &Conversions, chunk_bits: usize) -> String {
    Radix::ALL
        .iter()
        .map(|radix| {
            line(
                &radix.to_string(),
                format_for_display(conversions.get(*radix), *radix, chunk_bits),
            )
        })
        .collect()
}

/// Display color for a band swatch; the "none" band stays plain.
fn band_swatch_color(color: BandColor) -> Option<Color> {
    let swatch = match color {
        BandColor::Black => Color::Black,
        BandColor::Brown => Color::TrueColor {
            r: 139,
            g: 69,
            b: 19,
        },
        BandColor::Red => Color::Red,
        BandColor::Orange => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        BandColor::Yellow => Color::Yellow,
        BandColor::Green => Color::Green,
        BandColor::Blue => Color::Blue,
        BandColor::Violet => Color::Magenta,
        BandColor::Gray => Color::BrightBlack,
        BandColor::White => Color::White,
        BandColor::Gold => Color::TrueColor {
            r: 212,
            g: 175,
            b: 55,
        },
        BandColor::Silver => Color::TrueColor {
            r: 192,
            g: 192,
            b: 192,
        },
        BandColor::None => return None,
    };
    Some(swatch)
}

/// Band names in physical order, each tinted with its own color.
/// Empty slots show as `-`.
pub fn render_bands(bands: &[Option<BandColor>]) -> String {
    bands
        .iter()
        .map(|band| match band {
            Some(color) => match band_swatch_color(*color) {
                Some(swatch) => color.to_string().color(swatch).to_string(),
                None => color.to_string(),
            },
            None => "-".to_string(),
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Decoded resistor value as report lines.
pub fn render_resistor_value(value: &ResistorValue) -> String {
    let mut out = line("Resistance", value.formatted.green());
    out.push_str(&line(
        "Tolerance",
        value
            .tolerance_percent
            .map_or("N/A".to_string(), |t| format!("±{t}%")),
    ));
    if let Some(ppm) = value.temp_coefficient_ppm {
        out.push_str(&line("Temp coefficient", format!("{ppm} ppm/K")));
    }
    if !value.is_complete() {
        out.push_str(&line("Note", "incomplete band selection".yellow()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResistorBandSet;
    use crate::processing::{convert_all, decode, subnet_report};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_render_subnet_report() {
        colored::control::set_override(false);
        let report = subnet_report("10.1.2.3", 30).unwrap();
        let out = render_subnet_report(&report);
        assert!(out.contains("           Network: 10.1.2.0/30\n"));
        assert!(out.contains("      Usable hosts: 2\n"));
        assert!(out.contains("             Class: A (private)\n"));
        assert_eq!(out.lines().count(), 15);
    }

    #[test]
    fn test_render_conversions() {
        colored::control::set_override(false);
        let conversions = convert_all("513", Radix::Decimal).unwrap();
        let out = render_conversions(&conversions, 8);
        assert!(out.contains("binary: 00000010 00000001\n"));
        assert!(out.contains("decimal: 513\n"));
        assert!(out.contains("hexadecimal: 02 01\n"));
    }

    #[test]
    fn test_render_resistor_value() {
        colored::control::set_override(false);
        let (bands, count) = ResistorBandSet::from_colors(&[
            BandColor::Brown,
            BandColor::Black,
            BandColor::Red,
            BandColor::Gold,
        ])
        .unwrap();
        let out = render_resistor_value(&decode(&bands, count));
        assert!(out.contains("        Resistance: 1 kΩ\n"));
        assert!(out.contains("         Tolerance: ±5%\n"));
        assert!(!out.contains("incomplete"));

        let (bands, count) = ResistorBandSet::from_colors(&[
            BandColor::None,
            BandColor::Black,
            BandColor::Red,
            BandColor::Gold,
        ])
        .unwrap();
        let out = render_resistor_value(&decode(&bands, count));
        assert!(out.contains("        Resistance: N/A\n"));
        assert!(out.contains("              Note: incomplete band selection\n"));
    }

    #[test]
    fn test_render_bands() {
        colored::control::set_override(false);
        let bands = [Some(BandColor::Brown), None, Some(BandColor::Gold)];
        assert_eq!(render_bands(&bands), "brown - gold");
    }
}
