// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frequency grids.
//!
//! A grid is made of one or more bands of evenly-spaced channels. Bands are
//! concatenated in the order they are given; gaps and overlaps between bands
//! are allowed, so a grid is only guaranteed to be ascending *within* each
//! band.

mod error;

pub use error::FreqGridError;

use log::trace;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use vec1::Vec1;

use crate::{
    constants::{MAX_NUM_FREQS, MHZ_TO_HZ},
    math::{is_strictly_increasing, lambda_sq},
};

/// A band of evenly-spaced channels. Both band edges are channel frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreqBand {
    /// The frequency of the first channel \[MHz\].
    pub min_mhz: f64,

    /// The frequency of the last channel \[MHz\].
    pub max_mhz: f64,

    /// The number of channels. Must be at least 2.
    pub num_chans: usize,
}

impl FreqBand {
    pub const fn new(min_mhz: f64, max_mhz: f64, num_chans: usize) -> FreqBand {
        FreqBand {
            min_mhz,
            max_mhz,
            num_chans,
        }
    }

    fn validate(&self) -> Result<(), FreqGridError> {
        let FreqBand {
            min_mhz,
            max_mhz,
            num_chans,
        } = *self;

        // With fewer than 2 channels the channel spacing is a division by zero.
        if num_chans < 2 {
            return Err(FreqGridError::TooFewChannels { num_chans });
        }
        if num_chans > MAX_NUM_FREQS {
            return Err(FreqGridError::TooManyChannels { num_chans });
        }
        if !min_mhz.is_finite() || !max_mhz.is_finite() {
            return Err(FreqGridError::NonFiniteEdges { min_mhz, max_mhz });
        }
        if min_mhz <= 0.0 {
            return Err(FreqGridError::NonPositiveFreq { min_mhz });
        }
        if max_mhz <= min_mhz {
            return Err(FreqGridError::EdgesNotAscending { min_mhz, max_mhz });
        }
        Ok(())
    }

    /// Get the channel frequencies of this band \[Hz\]. Channel `k` is at
    /// `min + k * (max - min) / (num_chans - 1)`.
    pub fn freqs_hz(&self) -> Result<Vec1<f64>, FreqGridError> {
        self.validate()?;

        let min_hz = self.min_mhz * MHZ_TO_HZ;
        let max_hz = self.max_mhz * MHZ_TO_HZ;
        let denom = (self.num_chans - 1) as f64;
        let freqs = (0..self.num_chans)
            .map(|k| k as f64 * (max_hz - min_hz) / denom + min_hz)
            .collect();
        Vec1::try_from_vec(freqs).map_err(|_| FreqGridError::TooFewChannels {
            num_chans: self.num_chans,
        })
    }
}

impl std::fmt::Display for FreqBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} MHz ({} channels)",
            self.min_mhz, self.max_mhz, self.num_chans
        )
    }
}

/// Telescopes (and telescope configurations) with known observing bands.
#[derive(Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum InstrumentProfile {
    /// Westerbork Synthesis Radio Telescope.
    #[strum(serialize = "WSRT")]
    Wsrt,

    /// ASKAP with bands 1+2 and band 3.
    #[strum(serialize = "ASKAP12")]
    Askap12,

    /// The 36-antenna ASKAP band.
    #[strum(serialize = "ASKAP36")]
    Askap36,
}

const WSRT_BANDS: [FreqBand; 1] = [FreqBand::new(310.0, 380.0, 400)];
const ASKAP12_BANDS: [FreqBand; 2] = [
    FreqBand::new(700.0, 1300.0, 600),
    FreqBand::new(1500.0, 1800.0, 300),
];
const ASKAP36_BANDS: [FreqBand; 1] = [FreqBand::new(1130.0, 1430.0, 300)];

impl InstrumentProfile {
    /// The bands of this profile, in the order they are concatenated.
    pub fn bands(self) -> &'static [FreqBand] {
        match self {
            InstrumentProfile::Wsrt => &WSRT_BANDS,
            InstrumentProfile::Askap12 => &ASKAP12_BANDS,
            InstrumentProfile::Askap36 => &ASKAP36_BANDS,
        }
    }
}

/// Frequency samples \[Hz\] and the bands they came from. A grid always has at
/// least 2 samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FreqGrid {
    freqs: Vec1<f64>,
    bands: Vec1<FreqBand>,
}

impl FreqGrid {
    /// A single band of `num_chans` channels from `min_mhz` to `max_mhz`
    /// (inclusive).
    pub fn from_range(
        min_mhz: f64,
        max_mhz: f64,
        num_chans: usize,
    ) -> Result<FreqGrid, FreqGridError> {
        FreqGrid::from_bands(&[FreqBand::new(min_mhz, max_mhz, num_chans)])
    }

    /// Concatenate the channels of each band, in order. No checks are made
    /// between bands.
    pub fn from_bands(bands: &[FreqBand]) -> Result<FreqGrid, FreqGridError> {
        let bands = Vec1::try_from_vec(bands.to_vec()).map_err(|_| FreqGridError::NoBands)?;

        let num_chans = bands
            .iter()
            .fold(0_usize, |total, b| total.saturating_add(b.num_chans));
        if num_chans > MAX_NUM_FREQS {
            return Err(FreqGridError::TooManyChannels { num_chans });
        }
        let mut freqs = Vec::with_capacity(num_chans);
        for band in &bands {
            trace!("Adding band {band}");
            freqs.extend(band.freqs_hz()?);
        }
        // Every band has at least 2 channels, so this can't fail.
        let freqs = Vec1::try_from_vec(freqs).map_err(|_| FreqGridError::NoBands)?;

        Ok(FreqGrid { freqs, bands })
    }

    /// The grid of a known instrument.
    pub fn from_profile(profile: InstrumentProfile) -> FreqGrid {
        FreqGrid::from_bands(profile.bands())
            .unwrap_or_else(|e| panic!("{profile} has invalid bands: {e}"))
    }

    /// 310 - 380 MHz, 400 channels.
    pub fn wsrt() -> FreqGrid {
        FreqGrid::from_profile(InstrumentProfile::Wsrt)
    }

    /// 700 - 1300 MHz (600 channels) followed by 1500 - 1800 MHz (300
    /// channels).
    pub fn askap12() -> FreqGrid {
        FreqGrid::from_profile(InstrumentProfile::Askap12)
    }

    /// 1130 - 1430 MHz, 300 channels.
    pub fn askap36() -> FreqGrid {
        FreqGrid::from_profile(InstrumentProfile::Askap36)
    }

    /// The frequencies \[Hz\].
    pub fn freqs(&self) -> &[f64] {
        self.freqs.as_slice()
    }

    pub fn bands(&self) -> &[FreqBand] {
        self.bands.as_slice()
    }

    /// The number of frequency samples.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    /// Always false; grids have at least 2 samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over each band and its frequencies \[Hz\].
    pub fn iter_bands(&self) -> impl Iterator<Item = (&FreqBand, &[f64])> {
        let mut start = 0;
        self.bands.iter().map(move |band| {
            let freqs = &self.freqs.as_slice()[start..start + band.num_chans];
            start += band.num_chans;
            (band, freqs)
        })
    }

    /// Is the whole grid ascending, i.e. are there no overlapping or
    /// out-of-order bands?
    pub fn is_ascending(&self) -> bool {
        is_strictly_increasing(self.freqs())
    }

    /// The wavelength squared of each frequency \[metres^2\].
    pub fn lambda_sqs(&self) -> Array1<f64> {
        self.freqs.iter().copied().map(lambda_sq).collect()
    }

    /// The theoretical resolution in Faraday depth of this grid, i.e. the
    /// FWHM of its RM spread function \[rad/m^2\]: 2 sqrt(3) / Δλ².
    pub fn rmsf_fwhm(&self) -> f64 {
        let (min, max) = self
            .lambda_sqs()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &l| {
                (min.min(l), max.max(l))
            });
        2.0 * 3.0_f64.sqrt() / (max - min)
    }
}
