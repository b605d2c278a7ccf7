// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! RM synthesis: the Faraday dispersion function of a polarisation spectrum.
//!
//! For each trial Faraday depth φ,
//!
//! F(φ) = (1/N) Σ_ν P(ν) exp(-2i φ (λ²(ν) - <λ²>))
//!
//! where the sum is over all N frequencies of the grid. This is done by
//! direct summation rather than an FFT, so frequency grids with gaps and
//! irregular sampling are fine. Trial depths are independent of each other
//! and are done in parallel.

mod error;

pub use error::TransformError;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, trace};
use ndarray::{prelude::*, Zip};

use crate::{
    c64, constants::MAX_NUM_DEPTHS, grid::FreqGrid, math::cexp, synth::PolSpectrum,
    PROGRESS_BARS,
};

/// A Faraday dispersion function: complex values at ascending, integer trial
/// Faraday depths \[rad/m^2\].
#[derive(Debug, Clone, PartialEq)]
pub struct Fdf {
    depths: Array1<i64>,
    values: Array1<c64>,
}

impl Fdf {
    /// The trial Faraday depths \[rad/m^2\].
    pub fn depths(&self) -> ArrayView1<i64> {
        self.depths.view()
    }

    /// The dispersion-function values, index-aligned with the depths.
    pub fn values(&self) -> ArrayView1<c64> {
        self.values.view()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Always false; there is always at least one trial depth.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, c64)> + '_ {
        self.depths.iter().copied().zip(self.values.iter().copied())
    }

    /// |F| at each trial depth.
    pub fn abs(&self) -> Array1<f64> {
        self.values.mapv(|v| v.norm())
    }

    /// The trial depth with the largest |F|, and F there. The first depth
    /// wins ties.
    pub fn peak(&self) -> (i64, c64) {
        self.iter()
            .reduce(|best, this| {
                if this.1.norm() > best.1.norm() {
                    this
                } else {
                    best
                }
            })
            .unwrap_or((self.depths[0], self.values[0]))
    }

    /// The trial depths where |F| is greater than `threshold` and greater
    /// than |F| at both neighbouring depths, with |F| there. The first and
    /// last depths are never included.
    pub fn local_maxima(&self, threshold: f64) -> Vec<(i64, f64)> {
        let abs = self.abs();
        abs.windows(3)
            .into_iter()
            .zip(self.depths.iter().skip(1))
            .filter(|(w, _)| w[1] > threshold && w[1] > w[0] && w[1] > w[2])
            .map(|(w, &depth)| (depth, w[1]))
            .collect()
    }
}

/// Get the Faraday dispersion function of `spectrum` at every integer trial
/// depth in `[phi_low, phi_high)`. `spectrum` must be index-aligned with
/// `grid`.
pub fn rm_synthesis(
    grid: &FreqGrid,
    spectrum: &PolSpectrum,
    phi_low: i64,
    phi_high: i64,
) -> Result<Fdf, TransformError> {
    let num_depths = num_trial_depths(phi_low, phi_high)?;
    if spectrum.is_empty() || spectrum.len() != grid.len() {
        return Err(TransformError::DimensionMismatch {
            num_freqs: grid.len(),
            num_pols: spectrum.len(),
        });
    }

    let num_freqs = grid.len();
    let lambda_sqs = grid.lambda_sqs();
    let mean_lambda_sq = lambda_sqs.sum() / num_freqs as f64;
    trace!("Mean lambda^2: {mean_lambda_sq} m^2");
    // Removing the mean centres the rotation of each trial depth.
    let delta_lambda_sqs = lambda_sqs.mapv(|l| l - mean_lambda_sq);

    let depths = Array1::from_iter(phi_low..phi_high);
    debug!(
        "RM synthesis over {num_depths} trial depths ({phi_low} to {}) and {num_freqs} frequencies",
        phi_high - 1
    );

    let progress = ProgressBar::with_draw_target(
        Some(num_depths as _),
        if PROGRESS_BARS.load() {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        },
    )
    .with_style(
        ProgressStyle::default_bar()
            .template(
                "{msg:13}: [{wide_bar:.blue}] {pos:4}/{len:4} depths ({elapsed_precise}<{eta_precise})",
            )
            .unwrap()
            .progress_chars("=> "),
    )
    .with_position(0)
    .with_message("RM synthesis");

    let pols = spectrum.view();
    let mut values = Array1::zeros(num_depths);
    Zip::from(&mut values)
        .and(&depths)
        .par_for_each(|value, &phi| {
            *value = dispersion_at(phi as f64, pols, delta_lambda_sqs.view(), num_freqs);
            progress.inc(1);
        });
    progress.finish_with_message("RM synthesis");

    Ok(Fdf { depths, values })
}

/// The number of integer trial depths in `[phi_low, phi_high)`.
pub fn num_trial_depths(phi_low: i64, phi_high: i64) -> Result<usize, TransformError> {
    if phi_high <= phi_low {
        return Err(TransformError::InvalidRange { phi_low, phi_high });
    }
    match usize::try_from(phi_high.abs_diff(phi_low)) {
        Ok(n) if n <= MAX_NUM_DEPTHS => Ok(n),
        _ => Err(TransformError::TooManyDepths { phi_low, phi_high }),
    }
}

/// The RM spread function of a grid, i.e. the Faraday dispersion function of
/// a flat, unit polarisation spectrum.
pub fn rmsf(grid: &FreqGrid, phi_low: i64, phi_high: i64) -> Result<Fdf, TransformError> {
    let unit = PolSpectrum::new(Array1::from_elem(grid.len(), c64::new(1.0, 0.0)));
    rm_synthesis(grid, &unit, phi_low, phi_high)
}

/// F at a single trial depth. The sum over frequencies is done in frequency
/// order.
fn dispersion_at(
    phi: f64,
    pols: ArrayView1<c64>,
    delta_lambda_sqs: ArrayView1<f64>,
    num_freqs: usize,
) -> c64 {
    let sum = pols
        .iter()
        .zip(delta_lambda_sqs.iter())
        .fold(c64::new(0.0, 0.0), |acc, (&pol, &delta)| {
            acc + pol * cexp(-2.0 * phi * delta)
        });
    sum / num_freqs as f64
}
