// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from running pipeline stages.

use thiserror::Error;

use super::Stage;
use crate::{synth::SynthesisError, transform::TransformError, ErrorKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("{attempted} was attempted before {missing} was done")]
    PreconditionViolation { attempted: Stage, missing: Stage },

    #[error("The noise injector returned {got} values for a spectrum with {expected} values")]
    NoiseLengthMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::PreconditionViolation { .. } => ErrorKind::PreconditionViolation,
            PipelineError::NoiseLengthMismatch { .. } => ErrorKind::DimensionMismatch,
            PipelineError::Synthesis(e) => e.kind(),
            PipelineError::Transform(e) => e.kind(),
        }
    }
}
