// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with synthesising polarisation spectra.

use thiserror::Error;

use crate::ErrorKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Every component needs a flux, a Faraday depth and a polarisation angle, but got {num_fluxes} fluxes, {num_depths} depths and {num_chis} angles")]
    DimensionMismatch {
        num_fluxes: usize,
        num_depths: usize,
        num_chis: usize,
    },

    #[error("At least one Faraday-thin component is required")]
    NoComponents,
}

impl SynthesisError {
    /// Both a ragged and an empty component set are dimension mismatches.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::DimensionMismatch
    }
}
