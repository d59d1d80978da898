//! # Output Module
//!
//! Text and JSON renderers for the command line tool. Every renderer
//! writes to a `std::io::Write` so the binary can hand it stdout and the
//! tests a byte buffer.

pub mod band_listing;
pub mod note_table;

/// Formats a float in shortest round-trip form, keeping at least one
/// decimal digit (`440.0`, `3.5`, `261.6255653005986`).
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
