//! # Band Profiles
//!
//! Named sets of defaults for the harmonic bands. Explicit command line
//! values always win over the profile.

use clap::ValueEnum;
use harmonics_core::{BandSettings, FilterType};

/// Built-in default sets for gain, Q and filter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Profile {
    /// Neutral bands: 0 dB gain, Q 18
    #[default]
    Flat,
    /// Gentle overtone boost: 2 dB gain, Q 16
    Boost,
}

impl Profile {
    /// Band settings this profile provides when nothing is overridden.
    pub fn defaults(self) -> BandSettings {
        match self {
            Profile::Flat => BandSettings {
                gain_db: 0.0,
                q: 18.0,
                filter: FilterType::Bell,
            },
            Profile::Boost => BandSettings {
                gain_db: 2.0,
                q: 16.0,
                filter: FilterType::Bell,
            },
        }
    }

    /// Applies any explicit overrides on top of the profile defaults.
    pub fn settings(
        self,
        gain_db: Option<f64>,
        q: Option<f64>,
        filter: Option<FilterType>,
    ) -> BandSettings {
        let defaults = self.defaults();
        BandSettings {
            gain_db: gain_db.unwrap_or(defaults.gain_db),
            q: q.unwrap_or(defaults.q),
            filter: filter.unwrap_or(defaults.filter),
        }
    }
}
