//! # Band Listing
//!
//! Renders generated bands as `key_<n> = value` lines for the equalizer,
//! as a plain frequency column, or as JSON.

use super::format_float;
use harmonics_core::{BandDescriptor, BandParams, Note};
use serde::Serialize;
use std::io::{self, Write};

/// JSON document for one invocation.
#[derive(Debug, Serialize)]
struct BandListing<'a> {
    note: String,
    octave: i32,
    frequency: f64,
    bands: &'a [BandDescriptor],
}

/// Writes the `# <note>, frequency: <f>` header line.
pub fn write_header<W: Write>(out: &mut W, note: &Note) -> io::Result<()> {
    writeln!(out, "# {}, frequency: {}", note, format_float(note.frequency()))
}

/// Writes the header followed by every band.
///
/// Bands without parameters (frequency-only mode) become a single
/// right-aligned frequency line, labelled with the harmonic number from
/// the fundamental upwards. Bands with parameters become the six
/// equalizer keys `f`, `g`, `ft`, `q`, `s` and `fm`.
pub fn write_text<W: Write>(out: &mut W, note: &Note, bands: &[BandDescriptor]) -> io::Result<()> {
    write_header(out, note)?;
    for band in bands {
        match &band.params {
            None => write_frequency_line(out, band)?,
            Some(params) => write_band_keys(out, band.key_index(), band.frequency, params)?,
        }
    }
    Ok(())
}

fn write_frequency_line<W: Write>(out: &mut W, band: &BandDescriptor) -> io::Result<()> {
    let label = band
        .harmonic_number
        .map(|n| format!("{n:3}"))
        .unwrap_or_default();
    writeln!(out, "{:>22.14}{}", band.frequency, label)
}

fn write_band_keys<W: Write>(
    out: &mut W,
    n: u64,
    frequency: f64,
    params: &BandParams,
) -> io::Result<()> {
    writeln!(out, "f_{n} = {}", format_float(frequency))?;
    writeln!(out, "g_{n} = {} db", format_float(params.gain_db))?;
    writeln!(out, "ft_{n} = {}", params.filter.code())?;
    writeln!(out, "q_{n} = {}", format_float(params.q))?;
    writeln!(out, "s_{n} = {}", params.slope)?;
    writeln!(out, "fm_{n} = {}", params.filter_mode)
}

/// Writes the note and its bands as a pretty-printed JSON document.
pub fn write_json<W: Write>(out: &mut W, note: &Note, bands: &[BandDescriptor]) -> io::Result<()> {
    let listing = BandListing {
        note: note.to_string(),
        octave: note.octave(),
        frequency: note.frequency(),
        bands,
    };
    serde_json::to_writer_pretty(&mut *out, &listing)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonics_core::{harmonics, BandSettings, FilterType};

    fn render(note: &str, count: u32, settings: BandSettings, only_frequency: bool) -> String {
        let note = Note::parse(note).unwrap();
        let bands = harmonics::generate(note.frequency(), count, &settings, only_frequency);
        let mut out = Vec::new();
        write_text(&mut out, &note, &bands).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn equalizer_keys_for_a4() {
        let settings = BandSettings { gain_db: 3.0, q: 10.0, filter: FilterType::Bell };
        let text = render("A4", 2, settings, false);
        let expected = "\
# A4, frequency: 440.0
f_0 = 220.0
g_0 = 0.0 db
ft_0 = 2
q_0 = 0.0
s_0 = 1
fm_0 = 4
f_1 = 440.0
g_1 = 0.0 db
ft_1 = 8
q_1 = 0.0
s_1 = 0
fm_1 = 0
f_2 = 880.0
g_2 = 3.0 db
ft_2 = 1
q_2 = 10.0
s_2 = 0
fm_2 = 0
f_3 = 1320.0
g_3 = 3.0 db
ft_3 = 1
q_3 = 10.0
s_3 = 0
fm_3 = 0
";
        assert_eq!(text, expected);
    }

    #[test]
    fn frequency_only_for_a4() {
        let settings = BandSettings { gain_db: 0.0, q: 18.0, filter: FilterType::Bell };
        let text = render("A4", 1, settings, true);
        let expected = "\
# A4, frequency: 440.0
    220.00000000000000
    440.00000000000000  1
    880.00000000000000  2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn frequency_only_for_c4_has_three_bands() {
        let settings = BandSettings { gain_db: 0.0, q: 18.0, filter: FilterType::Bell };
        let text = render("C4", 1, settings, true);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# C4, frequency: 261.6255653005986");
        assert_eq!(lines[1].len(), 22);
        assert!(lines[2].ends_with("  1"));
        assert!(lines[3].ends_with("  2"));
    }

    #[test]
    fn header_keeps_user_spelling() {
        let note = Note::parse("Db3").unwrap();
        let mut out = Vec::new();
        write_header(&mut out, &note).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("# Db3, frequency: 138.59"));
    }

    #[test]
    fn json_listing() {
        let note = Note::parse("A4").unwrap();
        let settings = BandSettings { gain_db: 3.0, q: 10.0, filter: FilterType::Bell };
        let bands = harmonics::generate(note.frequency(), 1, &settings, false);
        let mut out = Vec::new();
        write_json(&mut out, &note, &bands).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["note"], "A4");
        assert_eq!(value["octave"], 4);
        assert_eq!(value["frequency"], 440.0);
        assert_eq!(value["bands"].as_array().unwrap().len(), 3);
        assert_eq!(value["bands"][0]["role"], "sub-harmonic");
        assert_eq!(value["bands"][0]["params"]["filter"], "hi-pass");
        assert_eq!(value["bands"][1]["harmonic_number"], 1);
        assert_eq!(value["bands"][2]["params"]["gain_db"], 3.0);
    }
}
