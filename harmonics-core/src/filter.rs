//! Equalizer filter types and their numeric codes.

use crate::error::{HarmonicsError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Filter type of an equalizer band.
///
/// The discriminants are the codes the equalizer expects in its `ft_<n>`
/// parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterType {
    Off = 0,
    #[default]
    Bell = 1,
    HiPass = 2,
    HiShelf = 3,
    LoPass = 4,
    LoShelf = 5,
    Notch = 6,
    Resonance = 7,
    Allpass = 8,
}

impl FilterType {
    /// All filter types in code order.
    pub const ALL: [FilterType; 9] = [
        FilterType::Off,
        FilterType::Bell,
        FilterType::HiPass,
        FilterType::HiShelf,
        FilterType::LoPass,
        FilterType::LoShelf,
        FilterType::Notch,
        FilterType::Resonance,
        FilterType::Allpass,
    ];

    /// Numeric code used by the equalizer.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            FilterType::Off => "off",
            FilterType::Bell => "bell",
            FilterType::HiPass => "hi-pass",
            FilterType::HiShelf => "hi-shelf",
            FilterType::LoPass => "lo-pass",
            FilterType::LoShelf => "lo-shelf",
            FilterType::Notch => "notch",
            FilterType::Resonance => "resonance",
            FilterType::Allpass => "allpass",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterType {
    type Err = HarmonicsError;

    fn from_str(s: &str) -> Result<Self> {
        FilterType::ALL
            .into_iter()
            .find(|filter| filter.name() == s)
            .ok_or_else(|| HarmonicsError::InvalidFilterName(s.to_string()))
    }
}
