// harmonics-core/src/lib.rs

//! The core logic for the harmonic equalizer band calculator.
//! This crate maps note names to equal temperament frequencies and
//! derives equalizer bands for a fundamental and its harmonics. It is
//! completely headless and does no printing.

pub mod error;
pub mod filter;
pub mod harmonics;
pub mod tuning;

pub use error::{HarmonicsError, Result};
pub use filter::FilterType;
pub use harmonics::{BandDescriptor, BandParams, BandRole, BandSettings};
pub use tuning::Note;
