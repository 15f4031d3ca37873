//! Output formatting for calculation results.
//!
//! This module handles formatting results for the command line:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{conversions_csv, encoded_bands_csv, resistor_value_csv, subnet_report_csv};
pub use terminal::{
    format_field, render_bands, render_conversions, render_resistor_value, render_subnet_report,
};
