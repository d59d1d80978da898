//! # Musical Tuning Module
//!
//! Note name handling and equal temperament frequency calculations.
//! A4 is the 440 Hz reference point; every other pitch is derived from it
//! with the twelfth root of two per semitone.
//!
//! ## Features
//! - Pitch class lookup for natural, sharp and flat spellings
//! - Note argument parsing (`G1`, `C#3`, `Bb0`)
//! - Equal temperament frequency calculation for any integer octave
//! - Note/frequency/MIDI reference table

use crate::error::{HarmonicsError, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Reference frequency of A4 in Hz.
pub const REFERENCE_FREQUENCY: f64 = 440.0;

/// Semitone index of A within an octave.
const REFERENCE_SEMITONE: i32 = 9;

/// Octave holding the reference pitch.
const REFERENCE_OCTAVE: i32 = 4;

/// Canonical (sharp) spelling of each semitone, starting at C.
const CANONICAL_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Every accepted spelling mapped to its semitone index.
///
/// Enharmonic spellings share an index. `Fb` and `E#` stay inside the
/// octave they are written in.
static SPELLINGS: Lazy<BTreeMap<&'static str, u8>> = Lazy::new(|| {
    [
        ("C", 0), ("C#", 1), ("Db", 1), ("D", 2), ("D#", 3), ("Eb", 3),
        ("Fb", 4), ("E", 4), ("E#", 5), ("F", 5), ("F#", 6), ("Gb", 6),
        ("G", 7), ("G#", 8), ("Ab", 8), ("A", 9), ("A#", 10), ("Bb", 10),
        ("B", 11),
    ]
    .into_iter()
    .collect()
});

/// Letter with optional accidentals followed by the octave digits.
static NOTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][#b]*)(\d+)$").unwrap() // This is safe as the pattern is a literal.
});

/// One of the twelve semitones of an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Looks up a pitch class by spelling (`"C"`, `"C#"`, `"Db"`, ...).
    pub fn from_name(name: &str) -> Result<Self> {
        SPELLINGS
            .get(name)
            .map(|&semitone| PitchClass(semitone))
            .ok_or_else(|| HarmonicsError::InvalidNoteName(name.to_string()))
    }

    /// Semitone index above C (0-11).
    pub fn semitone(self) -> u8 {
        self.0
    }

    /// Canonical sharp spelling.
    pub fn name(self) -> &'static str {
        CANONICAL_NAMES[self.0 as usize]
    }

    /// All twelve pitch classes in ascending order from C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculates the equal temperament frequency of a pitch class in an octave.
///
/// The semitone offset inside the octave and the octave offset are applied
/// separately, so the octave factor is an exact power of two and raising
/// the octave by one doubles the result exactly. Negative octaves are
/// valid and give sub-audio frequencies.
///
/// # Arguments
/// * `pitch_class` - Pitch class of the note
/// * `octave` - Octave number (A4 = 440 Hz)
///
/// # Returns
/// * Frequency in Hz
pub fn frequency_of(pitch_class: PitchClass, octave: i32) -> f64 {
    let semitone_offset = (pitch_class.semitone() as i32 - REFERENCE_SEMITONE) as f64;
    let in_octave = REFERENCE_FREQUENCY * 2.0_f64.powf(semitone_offset / 12.0);
    in_octave * 2.0_f64.powi(octave - REFERENCE_OCTAVE)
}

/// Resolves a pitch class spelling and an octave to a frequency in Hz.
///
/// # Errors
/// * `InvalidNoteName` - the spelling is not a recognized pitch class
pub fn resolve(name: &str, octave: i32) -> Result<f64> {
    let pitch_class = PitchClass::from_name(name)?;
    Ok(frequency_of(pitch_class, octave))
}

/// A parsed note argument: the spelling as written plus its octave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    spelling: String,
    pitch_class: PitchClass,
    octave: i32,
}

impl Note {
    /// Creates a note from a spelling and octave.
    ///
    /// # Errors
    /// * `InvalidNoteName` - the spelling is not a recognized pitch class
    /// * `NoteOutOfRange` - the frequency overflows to infinity or
    ///   underflows to zero
    pub fn new(spelling: &str, octave: i32) -> Result<Self> {
        let pitch_class = PitchClass::from_name(spelling)?;
        let frequency = frequency_of(pitch_class, octave);
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(HarmonicsError::NoteOutOfRange(format!("{spelling}{octave}")));
        }
        Ok(Self {
            spelling: spelling.to_string(),
            pitch_class,
            octave,
        })
    }

    /// Parses a note argument such as `"G1"`, `"C#3"` or `"Bb0"`.
    ///
    /// # Errors
    /// * `InvalidNoteSyntax` - not a letter, accidentals and octave digits
    /// * `InvalidNoteName` - the letter part is not a known spelling (`"H3"`)
    /// * `NoteOutOfRange` - the octave is too high to give a finite frequency
    pub fn parse(text: &str) -> Result<Self> {
        let caps = NOTE_PATTERN
            .captures(text)
            .ok_or_else(|| HarmonicsError::InvalidNoteSyntax(text.to_string()))?;
        let octave = caps[2]
            .parse::<i32>()
            .map_err(|_| HarmonicsError::InvalidNoteSyntax(text.to_string()))?;
        let note = Self::new(&caps[1], octave)?;
        debug!("Parsed note {} -> {:.6} Hz", note, note.frequency());
        Ok(note)
    }

    /// The spelling as given by the user (e.g. `"Db"`).
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Equal temperament frequency of this note in Hz.
    pub fn frequency(&self) -> f64 {
        frequency_of(self.pitch_class, self.octave)
    }

    /// MIDI note number, with C4 = 60.
    pub fn midi_number(&self) -> i32 {
        12 * (self.octave + 1) + self.pitch_class.semitone() as i32
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelling, self.octave)
    }
}

impl std::str::FromStr for Note {
    type Err = HarmonicsError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

/// One row of the note reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteTableRow {
    /// Canonical name with octave (e.g. `"C#2"`)
    pub name: String,
    /// Frequency in Hz
    pub frequency: f64,
    /// MIDI note number
    pub midi: i32,
}

/// Builds the reference table of all twelve notes for octaves `0..octaves`.
///
/// Rows are in ascending pitch order starting at C0 (MIDI 12).
pub fn note_table(octaves: u8) -> Vec<NoteTableRow> {
    let mut rows = Vec::with_capacity(usize::from(octaves) * 12);
    for octave in 0..i32::from(octaves) {
        for pitch_class in PitchClass::all() {
            let note = Note {
                spelling: pitch_class.name().to_string(),
                pitch_class,
                octave,
            };
            rows.push(NoteTableRow {
                name: note.to_string(),
                frequency: note.frequency(),
                midi: note.midi_number(),
            });
        }
    }
    rows
}
