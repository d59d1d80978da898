//! # Note Table
//!
//! Reference listing of note names, frequencies and MIDI numbers.

use harmonics_core::tuning::NoteTableRow;
use std::io::{self, Write};

/// Writes one `name  frequency  midi` row per note.
pub fn write_text<W: Write>(out: &mut W, rows: &[NoteTableRow]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{:5}{:>8.3}{:>5}", row.name, row.frequency, row.midi)?;
    }
    Ok(())
}

/// Writes the rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, rows: &[NoteTableRow]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)
}
