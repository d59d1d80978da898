//! # Eq Harmonics - Harmonic Band Calculator
//!
//! Command line front end that turns a note into parametric equalizer
//! settings for its harmonic series: a high-pass an octave below the
//! fundamental, an allpass on the fundamental and shaping bands on each
//! harmonic above it.
//!
//! ## Architecture
//! - **Core**: `harmonics-core` resolves the note and generates the bands
//! - **Output**: text/JSON renderers writing to stdout
//! - **Logging**: `env_logger` on stderr, `RUST_LOG` selects the level

mod output;
mod profile;

use anyhow::{Context, Result};
use clap::Parser;
use harmonics_core::{harmonics, tuning, FilterType, Note};
use log::info;
use profile::Profile;
use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;

/// Upper bound for `--hn`.
const MAX_HARMONICS: i64 = 1024;

/// Generate harmonic bands for a parametric equalizer
#[derive(Debug, Parser)]
#[command(name = "eq-harmonics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Note, e.g. G1
    #[arg(short = 'n', long, value_parser = Note::parse, required_unless_present = "table")]
    note: Option<Note>,

    /// Number of harmonics/bands above the fundamental
    #[arg(long = "hn", default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=MAX_HARMONICS))]
    harm_num: u32,

    /// Default gain, Q and filter set
    #[arg(long, value_enum, default_value_t = Profile::Flat)]
    profile: Profile,

    /// EQ gain, dB (default from profile)
    #[arg(long, allow_hyphen_values = true)]
    gain: Option<f64>,

    /// EQ Q (default from profile)
    #[arg(long = "eqq")]
    eq_q: Option<f64>,

    /// Filter type, one of: off,bell,hi-pass,hi-shelf,lo-pass,lo-shelf,notch,resonance,allpass
    #[arg(long, value_parser = FilterType::from_str)]
    filter: Option<FilterType>,

    /// Print only frequency
    #[arg(short = 'f', long = "only-freq")]
    only_freq: bool,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Print the note/frequency/MIDI reference table instead of bands
    #[arg(long, conflicts_with = "note")]
    table: bool,

    /// Number of octaves in the reference table, starting at octave 0
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..=24))]
    octaves: u8,
}

fn main() -> ExitCode {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Dispatches to the note table or the band listing.
fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.note {
        Some(note) => print_bands(&mut out, cli, note)?,
        None => print_note_table(&mut out, cli)?,
    }

    out.flush().context("Failed to flush output")
}

fn print_bands<W: Write>(out: &mut W, cli: &Cli, note: &Note) -> Result<()> {
    let fundamental = note.frequency();
    let settings = cli.profile.settings(cli.gain, cli.eq_q, cli.filter);
    info!(
        "{} = {:.6} Hz, {} harmonics, {:?} profile, {:?}",
        note, fundamental, cli.harm_num, cli.profile, settings
    );

    let bands = harmonics::generate(fundamental, cli.harm_num, &settings, cli.only_freq);
    let written = if cli.json {
        output::band_listing::write_json(out, note, &bands)
    } else {
        output::band_listing::write_text(out, note, &bands)
    };
    written.context("Failed to write band listing")
}

fn print_note_table<W: Write>(out: &mut W, cli: &Cli) -> Result<()> {
    let rows = tuning::note_table(cli.octaves);
    info!("Note table with {} rows", rows.len());

    let written = if cli.json {
        output::note_table::write_json(out, &rows)
    } else {
        output::note_table::write_text(out, &rows)
    };
    written.context("Failed to write note table")
}
