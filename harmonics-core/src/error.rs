//! Error types for note and filter validation.

use thiserror::Error;

/// Result type for harmonics operations.
pub type Result<T> = std::result::Result<T, HarmonicsError>;

/// Errors raised while validating user input.
///
/// All of these are detected before any band is computed; once the inputs
/// are valid the generator itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonicsError {
    /// The note argument is not a letter, optional accidentals and an octave.
    #[error("invalid note argument '{0}', expected e.g. G1, C#3 or Bb0")]
    InvalidNoteSyntax(String),

    /// The letter part is not a recognized pitch class spelling.
    #[error("invalid note name '{0}'")]
    InvalidNoteName(String),

    /// The note's frequency is zero or too large to represent.
    #[error("note '{0}' is outside the representable frequency range")]
    NoteOutOfRange(String),

    /// The filter name is not one of the known filter types.
    #[error("invalid filter '{0}', expected one of: off, bell, hi-pass, hi-shelf, lo-pass, lo-shelf, notch, resonance, allpass")]
    InvalidFilterName(String),
}
