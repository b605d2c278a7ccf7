// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all errors from the `rmsynth` binary. This should be the
//! *only* CLI error enum that is publicly visible.

use thiserror::Error;

use super::{common::BandArgsError, simulate::SimulateArgsError};
use crate::{
    grid::FreqGridError,
    io::FileWriteError,
    params::SimulateError,
    pipeline::PipelineError,
    synth::SynthesisError,
    transform::TransformError,
};

/// The *only* publicly visible error from the `rmsynth` binary.
#[derive(Error, Debug)]
pub enum RmSynthError {
    /// An error related to making a frequency grid.
    #[error("{0}\n\nRun `rmsynth profiles` to list the known instrument profiles.")]
    Grid(String),

    /// An error related to Faraday-thin components or spectrum synthesis.
    #[error("{0}")]
    Synthesis(String),

    /// An error related to the trial Faraday depths or the transform.
    #[error("{0}")]
    Transform(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// An error related to writing output files.
    #[error("{0}")]
    FileWrite(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<BandArgsError> for RmSynthError {
    fn from(e: BandArgsError) -> Self {
        Self::Grid(e.to_string())
    }
}

impl From<SimulateArgsError> for RmSynthError {
    fn from(e: SimulateArgsError) -> Self {
        let s = e.to_string();
        match e {
            SimulateArgsError::BadComponent(_) => Self::Synthesis(s),
            SimulateArgsError::MaximaThreshold(_) => Self::Generic(s),
        }
    }
}

impl From<SimulateError> for RmSynthError {
    fn from(e: SimulateError) -> Self {
        match e {
            SimulateError::Pipeline(e) => Self::from(e),
            SimulateError::FileWrite(e) => Self::from(e),
        }
    }
}

impl From<PipelineError> for RmSynthError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Synthesis(e) => Self::from(e),
            PipelineError::Transform(e) => Self::from(e),
            e => Self::Generic(e.to_string()),
        }
    }
}

impl From<FreqGridError> for RmSynthError {
    fn from(e: FreqGridError) -> Self {
        Self::Grid(e.to_string())
    }
}

impl From<SynthesisError> for RmSynthError {
    fn from(e: SynthesisError) -> Self {
        Self::Synthesis(e.to_string())
    }
}

impl From<TransformError> for RmSynthError {
    fn from(e: TransformError) -> Self {
        Self::Transform(e.to_string())
    }
}

impl From<FileWriteError> for RmSynthError {
    fn from(e: FileWriteError) -> Self {
        Self::FileWrite(e.to_string())
    }
}

impl From<toml::ser::Error> for RmSynthError {
    fn from(e: toml::ser::Error) -> Self {
        Self::ArgFile(format!("Couldn't serialise the arguments to toml: {e}"))
    }
}

impl From<std::io::Error> for RmSynthError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
