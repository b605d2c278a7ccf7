// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid -> spectrum -> Faraday dispersion function sequence.
//!
//! [`Pipeline`] holds the output of each stage that has been run. Each stage
//! consumes the pipeline and hands back a new one; running a stage before the
//! stage it depends on is an error, and re-running a stage discards the
//! outputs of every stage after it.

mod error;

pub use error::PipelineError;

use log::debug;
use strum_macros::Display;

use crate::{
    grid::FreqGrid,
    noise::NoiseInjector,
    synth::{synthesize_components, FaradayComponents, PolSpectrum},
    transform::{rm_synthesis, Fdf},
};

/// The stages of a [`Pipeline`], in order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    #[strum(serialize = "frequency-grid construction")]
    Grid,

    #[strum(serialize = "spectrum synthesis")]
    Synthesis,

    #[strum(serialize = "noise injection")]
    Noise,

    #[strum(serialize = "RM synthesis")]
    Transform,

    #[strum(serialize = "output")]
    Output,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    grid: Option<FreqGrid>,
    spectrum: Option<PolSpectrum>,
    fdf: Option<Fdf>,
}

impl Pipeline {
    /// A pipeline with no stages run.
    pub fn new() -> Pipeline {
        Pipeline::default()
    }

    /// Use this frequency grid. Any spectrum or dispersion function from an
    /// earlier grid is discarded.
    pub fn with_grid(self, grid: FreqGrid) -> Pipeline {
        debug!("Pipeline: using a grid of {} frequencies", grid.len());
        Pipeline {
            grid: Some(grid),
            spectrum: None,
            fdf: None,
        }
    }

    /// Synthesise the spectrum of `components` over the grid.
    pub fn synthesize(self, components: &FaradayComponents) -> Result<Pipeline, PipelineError> {
        let grid = self.grid.ok_or(PipelineError::PreconditionViolation {
            attempted: Stage::Synthesis,
            missing: Stage::Grid,
        })?;
        let spectrum = synthesize_components(&grid, components);
        Ok(Pipeline {
            grid: Some(grid),
            spectrum: Some(spectrum),
            fdf: None,
        })
    }

    /// Replace the synthesised spectrum with a perturbed copy of it.
    pub fn add_noise<N>(self, injector: &N, sigma: f64) -> Result<Pipeline, PipelineError>
    where
        N: NoiseInjector + ?Sized,
    {
        let spectrum = self.spectrum.ok_or(PipelineError::PreconditionViolation {
            attempted: Stage::Noise,
            missing: Stage::Synthesis,
        })?;
        let noisy = injector.inject(&spectrum, sigma);
        if noisy.len() != spectrum.len() {
            return Err(PipelineError::NoiseLengthMismatch {
                expected: spectrum.len(),
                got: noisy.len(),
            });
        }
        Ok(Pipeline {
            grid: self.grid,
            spectrum: Some(noisy),
            fdf: None,
        })
    }

    /// RM synthesis of the spectrum over trial depths `[phi_low, phi_high)`.
    pub fn transform(self, phi_low: i64, phi_high: i64) -> Result<Pipeline, PipelineError> {
        let (grid, spectrum) = match (self.grid, self.spectrum) {
            (Some(grid), Some(spectrum)) => (grid, spectrum),
            (None, _) => {
                return Err(PipelineError::PreconditionViolation {
                    attempted: Stage::Transform,
                    missing: Stage::Grid,
                })
            }
            (Some(_), None) => {
                return Err(PipelineError::PreconditionViolation {
                    attempted: Stage::Transform,
                    missing: Stage::Synthesis,
                })
            }
        };
        let fdf = rm_synthesis(&grid, &spectrum, phi_low, phi_high)?;
        Ok(Pipeline {
            grid: Some(grid),
            spectrum: Some(spectrum),
            fdf: Some(fdf),
        })
    }

    pub fn grid(&self) -> Option<&FreqGrid> {
        self.grid.as_ref()
    }

    pub fn spectrum(&self) -> Option<&PolSpectrum> {
        self.spectrum.as_ref()
    }

    pub fn fdf(&self) -> Option<&Fdf> {
        self.fdf.as_ref()
    }

    /// Take the Faraday dispersion function out of the pipeline.
    pub fn into_fdf(self) -> Result<Fdf, PipelineError> {
        self.fdf.ok_or(PipelineError::PreconditionViolation {
            attempted: Stage::Output,
            missing: Stage::Transform,
        })
    }
}
