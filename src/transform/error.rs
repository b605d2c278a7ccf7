// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with RM synthesis.

use thiserror::Error;

use crate::{constants::MAX_NUM_DEPTHS, ErrorKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("The Faraday-depth range [{phi_low}, {phi_high}) has no trial depths in it; the upper bound must be greater than the lower bound")]
    InvalidRange { phi_low: i64, phi_high: i64 },

    #[error("The Faraday-depth range [{phi_low}, {phi_high}) has more than {max} trial depths in it", max = MAX_NUM_DEPTHS)]
    TooManyDepths { phi_low: i64, phi_high: i64 },

    #[error("The polarisation spectrum has {num_pols} values, but the frequency grid has {num_freqs} frequencies")]
    DimensionMismatch { num_freqs: usize, num_pols: usize },
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::InvalidRange { .. } | TransformError::TooManyDepths { .. } => {
                ErrorKind::InvalidRange
            }
            TransformError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
        }
    }
}
