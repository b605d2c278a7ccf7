// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Synthesis of polarisation spectra from Faraday-thin components.
//!
//! Component i contributes flux_i exp(2i (chi_i + depth_i λ²)) at each
//! frequency, and the spectrum is the sum of every component's contribution.

mod error;

pub use error::SynthesisError;

use log::debug;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{c64, grid::FreqGrid, math::cexp};

/// A source at a single Faraday depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaradayThinComponent {
    /// Polarised flux density.
    pub flux: f64,

    /// Faraday depth \[rad/m^2\].
    pub depth: f64,

    /// Intrinsic polarisation angle \[radians\].
    pub chi: f64,
}

/// A set of Faraday-thin components, stored as parallel arrays. There is
/// always at least one component.
#[derive(Debug, Clone, PartialEq)]
pub struct FaradayComponents {
    fluxes: Array1<f64>,
    depths: Array1<f64>,
    chis: Array1<f64>,
}

impl FaradayComponents {
    /// All three slices must have the same, non-zero length.
    pub fn new(
        fluxes: &[f64],
        depths: &[f64],
        chis: &[f64],
    ) -> Result<FaradayComponents, SynthesisError> {
        if fluxes.len() != depths.len() || fluxes.len() != chis.len() {
            return Err(SynthesisError::DimensionMismatch {
                num_fluxes: fluxes.len(),
                num_depths: depths.len(),
                num_chis: chis.len(),
            });
        }
        if fluxes.is_empty() {
            return Err(SynthesisError::NoComponents);
        }

        Ok(FaradayComponents {
            fluxes: Array1::from(fluxes.to_vec()),
            depths: Array1::from(depths.to_vec()),
            chis: Array1::from(chis.to_vec()),
        })
    }

    pub fn from_components<I>(components: I) -> Result<FaradayComponents, SynthesisError>
    where
        I: IntoIterator<Item = FaradayThinComponent>,
    {
        let (mut fluxes, mut depths, mut chis) = (vec![], vec![], vec![]);
        for FaradayThinComponent { flux, depth, chi } in components {
            fluxes.push(flux);
            depths.push(depth);
            chis.push(chi);
        }
        FaradayComponents::new(&fluxes, &depths, &chis)
    }

    /// The number of components.
    pub fn len(&self) -> usize {
        self.fluxes.len()
    }

    /// Always false; there is always at least one component.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn fluxes(&self) -> ArrayView1<f64> {
        self.fluxes.view()
    }

    pub fn depths(&self) -> ArrayView1<f64> {
        self.depths.view()
    }

    pub fn chis(&self) -> ArrayView1<f64> {
        self.chis.view()
    }

    pub fn iter(&self) -> impl Iterator<Item = FaradayThinComponent> + '_ {
        self.fluxes
            .iter()
            .zip(self.depths.iter())
            .zip(self.chis.iter())
            .map(|((&flux, &depth), &chi)| FaradayThinComponent { flux, depth, chi })
    }
}

/// Complex polarisation, one value per frequency of the grid it was made
/// with.
#[derive(Debug, Clone, PartialEq)]
pub struct PolSpectrum {
    pols: Array1<c64>,
}

impl PolSpectrum {
    pub fn new(pols: Array1<c64>) -> PolSpectrum {
        PolSpectrum { pols }
    }

    pub fn view(&self) -> ArrayView1<c64> {
        self.pols.view()
    }

    pub fn into_inner(self) -> Array1<c64> {
        self.pols
    }

    pub fn len(&self) -> usize {
        self.pols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pols.is_empty()
    }
}

impl From<Vec<c64>> for PolSpectrum {
    fn from(pols: Vec<c64>) -> Self {
        PolSpectrum::new(Array1::from(pols))
    }
}

/// Synthesise the polarisation spectrum of Faraday-thin components over a
/// frequency grid. `fluxes`, `depths` and `chis` are parallel; see
/// [`FaradayComponents::new`].
pub fn synthesize(
    grid: &FreqGrid,
    fluxes: &[f64],
    depths: &[f64],
    chis: &[f64],
) -> Result<PolSpectrum, SynthesisError> {
    let components = FaradayComponents::new(fluxes, depths, chis)?;
    Ok(synthesize_components(grid, &components))
}

/// Synthesise the polarisation spectrum of Faraday-thin components over a
/// frequency grid.
///
/// The rotation of every component at every frequency is computed up front
/// (a `[component][frequency]` matrix), then the fluxes are multiplied through
/// it, summing over the component axis.
pub fn synthesize_components(grid: &FreqGrid, components: &FaradayComponents) -> PolSpectrum {
    debug!(
        "Synthesising {} Faraday-thin component(s) over {} frequencies",
        components.len(),
        grid.len()
    );

    let lambda_sqs = grid.lambda_sqs();
    let rotations = Array2::from_shape_fn(
        (components.len(), lambda_sqs.len()),
        |(i_comp, i_freq)| {
            cexp(2.0 * (components.chis[i_comp] + components.depths[i_comp] * lambda_sqs[i_freq]))
        },
    );
    let fluxes = components.fluxes.mapv(|flux| c64::new(flux, 0.0));

    PolSpectrum::new(fluxes.dot(&rotations))
}
