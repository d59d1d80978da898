//! # Harmonic Band Module
//!
//! Builds the equalizer bands for a harmonic series: one band an octave
//! below the fundamental, the fundamental itself, and a run of harmonics
//! above it. Each band's filter settings depend only on where it sits
//! relative to the fundamental.

use crate::filter::FilterType;
use log::debug;
use serde::Serialize;

/// Slope flag set on the sub-harmonic's high-pass band.
const SUB_HARMONIC_SLOPE: u8 = 1;

/// Filter mode tag set on the sub-harmonic's high-pass band.
const SUB_HARMONIC_FILTER_MODE: u8 = 4;

/// User-supplied shaping applied to every band above the fundamental.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandSettings {
    pub gain_db: f64,
    pub q: f64,
    pub filter: FilterType,
}

/// Where a band sits relative to the fundamental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BandRole {
    /// The fundamental divided by two.
    SubHarmonic,
    Fundamental,
    /// An integer multiple (2x, 3x, ...) of the fundamental.
    Harmonic,
}

/// Equalizer parameters of a single band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandParams {
    pub filter: FilterType,
    pub gain_db: f64,
    pub q: f64,
    pub slope: u8,
    pub filter_mode: u8,
}

impl BandParams {
    /// Parameters for a band in the given role.
    ///
    /// The fundamental is left untouched with an allpass band, the
    /// sub-harmonic gets a high-pass to cut content below the fundamental,
    /// and harmonics take the user's filter, gain and Q.
    pub fn for_role(role: BandRole, settings: &BandSettings) -> Self {
        match role {
            BandRole::Fundamental => Self {
                filter: FilterType::Allpass,
                gain_db: 0.0,
                q: 0.0,
                slope: 0,
                filter_mode: 0,
            },
            BandRole::SubHarmonic => Self {
                filter: FilterType::HiPass,
                gain_db: 0.0,
                q: 0.0,
                slope: SUB_HARMONIC_SLOPE,
                filter_mode: SUB_HARMONIC_FILTER_MODE,
            },
            BandRole::Harmonic => Self {
                filter: settings.filter,
                gain_db: settings.gain_db,
                q: settings.q,
                slope: 0,
                filter_mode: 0,
            },
        }
    }
}

/// One computed equalizer band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandDescriptor {
    /// Harmonic index: -1 for the sub-harmonic, 0 for the fundamental,
    /// `i >= 1` for the `(i + 1)`-th harmonic.
    pub index: i64,
    /// Band frequency in Hz.
    pub frequency: f64,
    pub role: BandRole,
    /// Running 1-based harmonic label; the fundamental is harmonic 1.
    /// `None` below the fundamental.
    pub harmonic_number: Option<u64>,
    /// Filter parameters, absent in frequency-only mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<BandParams>,
}

impl BandDescriptor {
    /// Equalizer band slot (`i + 1`), used in `f_<n>` style keys.
    pub fn key_index(&self) -> u64 {
        (self.index + 1) as u64
    }
}

impl BandRole {
    /// Role of the band with harmonic index `index`.
    fn from_index(index: i64) -> Self {
        match index {
            i64::MIN..=-1 => BandRole::SubHarmonic,
            0 => BandRole::Fundamental,
            _ => BandRole::Harmonic,
        }
    }
}

fn band(
    fundamental: f64,
    index: i64,
    settings: &BandSettings,
    only_frequency: bool,
) -> BandDescriptor {
    let role = BandRole::from_index(index);
    let (frequency, harmonic_number) = match role {
        BandRole::SubHarmonic => (fundamental / 2.0, None),
        _ => (fundamental * (index + 1) as f64, Some((index + 1) as u64)),
    };
    let params = if only_frequency {
        None
    } else {
        Some(BandParams::for_role(role, settings))
    };

    BandDescriptor {
        index,
        frequency,
        role,
        harmonic_number,
        params,
    }
}

/// Generates the bands for a fundamental and `harmonic_count` harmonics.
///
/// The result holds `harmonic_count + 2` bands for harmonic indices
/// `-1..=harmonic_count`, in ascending index (and, for a finite positive
/// fundamental, ascending frequency) order. Roles and harmonic labels
/// follow the index alone.
///
/// # Arguments
/// * `fundamental` - Fundamental frequency in Hz
/// * `harmonic_count` - Number of harmonics above the fundamental
/// * `settings` - Filter, gain and Q for the harmonics
/// * `only_frequency` - Skip the filter parameters
pub fn generate(
    fundamental: f64,
    harmonic_count: u32,
    settings: &BandSettings,
    only_frequency: bool,
) -> Vec<BandDescriptor> {
    let bands: Vec<_> = std::iter::once(-1)
        .chain(0..=i64::from(harmonic_count))
        .map(|index| band(fundamental, index, settings, only_frequency))
        .collect();

    debug!(
        "Generated {} bands for fundamental {:.6} Hz",
        bands.len(),
        fundamental
    );
    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(gain_db: f64, q: f64, filter: FilterType) -> BandSettings {
        BandSettings { gain_db, q, filter }
    }

    #[test]
    fn zero_harmonics_yield_sub_and_fundamental() {
        let bands = generate(100.0, 0, &settings(0.0, 18.0, FilterType::Bell), false);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].frequency, 50.0);
        assert_eq!(bands[0].role, BandRole::SubHarmonic);
        assert_eq!(bands[1].frequency, 100.0);
        assert_eq!(bands[1].role, BandRole::Fundamental);
    }

    #[test]
    fn band_count_and_ordering() {
        let fundamental = 48.999_429_497_718_66;
        for count in 0..20 {
            let bands = generate(fundamental, count, &settings(2.0, 16.0, FilterType::Bell), false);
            assert_eq!(bands.len(), count as usize + 2);
            assert!(bands.windows(2).all(|w| w[0].frequency < w[1].frequency));
            assert!(bands.windows(2).all(|w| w[0].index + 1 == w[1].index));
        }
    }

    #[test]
    fn fixed_bands_ignore_user_settings() {
        let bands = generate(261.0, 3, &settings(-6.0, 4.0, FilterType::Notch), false);

        let sub = bands[0].params.unwrap();
        assert_eq!(sub.filter, FilterType::HiPass);
        assert_eq!(sub.gain_db, 0.0);
        assert_eq!(sub.q, 0.0);
        assert_eq!(sub.slope, 1);
        assert_eq!(sub.filter_mode, 4);

        let fundamental = bands[1].params.unwrap();
        assert_eq!(fundamental.filter, FilterType::Allpass);
        assert_eq!(fundamental.gain_db, 0.0);
        assert_eq!(fundamental.q, 0.0);
        assert_eq!(fundamental.slope, 0);
        assert_eq!(fundamental.filter_mode, 0);
    }

    #[test]
    fn a4_scenario() {
        let bands = generate(440.0, 2, &settings(3.0, 10.0, FilterType::Bell), false);
        let rows: Vec<_> = bands
            .iter()
            .map(|band| {
                let p = band.params.unwrap();
                (band.frequency, p.filter, p.gain_db, p.q, p.slope)
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                (220.0, FilterType::HiPass, 0.0, 0.0, 1),
                (440.0, FilterType::Allpass, 0.0, 0.0, 0),
                (880.0, FilterType::Bell, 3.0, 10.0, 0),
                (1320.0, FilterType::Bell, 3.0, 10.0, 0),
            ]
        );
        assert!(bands[2..].iter().all(|b| b.role == BandRole::Harmonic));
        assert!(bands[2..].iter().all(|b| b.params.unwrap().filter_mode == 0));
    }

    #[test]
    fn frequency_only_drops_params_and_labels_harmonics() {
        let bands = generate(261.625_565_300_598_6, 1, &settings(0.0, 18.0, FilterType::Bell), true);
        assert_eq!(bands.len(), 3);
        assert!(bands.iter().all(|b| b.params.is_none()));
        let labels: Vec<_> = bands.iter().map(|b| b.harmonic_number).collect();
        assert_eq!(labels, vec![None, Some(1), Some(2)]);
    }

    #[test]
    fn roles_follow_index_for_infinite_fundamental() {
        let bands = generate(f64::INFINITY, 2, &settings(3.0, 10.0, FilterType::Bell), false);
        let roles: Vec<_> = bands.iter().map(|b| b.role).collect();
        assert_eq!(
            roles,
            vec![BandRole::SubHarmonic, BandRole::Fundamental, BandRole::Harmonic, BandRole::Harmonic]
        );
        assert_eq!(bands[0].params.unwrap().filter, FilterType::HiPass);
        assert_eq!(bands[0].params.unwrap().slope, 1);
        assert_eq!(bands[0].harmonic_number, None);
        assert_eq!(bands[1].params.unwrap().filter, FilterType::Allpass);
        assert_eq!(bands[1].harmonic_number, Some(1));
    }

    #[test]
    fn large_harmonic_count_keeps_every_index() {
        let count = 5000;
        let bands = generate(20.0, count, &settings(0.0, 18.0, FilterType::Bell), true);
        assert_eq!(bands.len(), count as usize + 2);
        assert_eq!(bands.last().unwrap().index, i64::from(count));
        assert_eq!(bands.last().unwrap().harmonic_number, Some(u64::from(count) + 1));
    }

    #[test]
    fn key_index_is_shifted_by_one() {
        let bands = generate(55.0, 2, &settings(0.0, 18.0, FilterType::Bell), false);
        let keys: Vec<_> = bands.iter().map(BandDescriptor::key_index).collect();
        assert_eq!(keys, vec![0, 1, 2, 3]);
        assert_eq!(bands[3].frequency, 165.0);
        assert_eq!(bands[3].harmonic_number, Some(3));
    }
}
