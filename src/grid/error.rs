// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with building frequency grids.

use thiserror::Error;

use crate::{constants::MAX_NUM_FREQS, ErrorKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FreqGridError {
    #[error("Cannot make a frequency band with {num_chans} channel(s); at least 2 are required")]
    TooFewChannels { num_chans: usize },

    #[error("Cannot make a frequency grid with {num_chans} channels; at most {max} are allowed", max = MAX_NUM_FREQS)]
    TooManyChannels { num_chans: usize },

    #[error("Frequency band edges must be finite (got {min_mhz} MHz to {max_mhz} MHz)")]
    NonFiniteEdges { min_mhz: f64, max_mhz: f64 },

    #[error("The lowest frequency of a band must be positive (got {min_mhz} MHz)")]
    NonPositiveFreq { min_mhz: f64 },

    #[error("The highest frequency of a band ({max_mhz} MHz) must be greater than its lowest frequency ({min_mhz} MHz)")]
    EdgesNotAscending { min_mhz: f64, max_mhz: f64 },

    #[error("No frequency bands were supplied")]
    NoBands,
}

impl FreqGridError {
    /// All frequency-grid errors are configuration errors.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidConfiguration
    }
}
