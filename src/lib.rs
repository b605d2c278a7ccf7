// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Simulate polarised radio spectra of Faraday-thin sources over the observing
bands of a telescope, and recover their Faraday depths with a direct (non-FFT)
RM synthesis.

The pipeline has three stages, each a pure function of its inputs:

1. [`FreqGrid`] construction (an explicit range or an [`InstrumentProfile`]);
2. [`synthesize`] a [`PolSpectrum`] from Faraday-thin components;
3. [`rm_synthesis`] of that spectrum into a Faraday dispersion function
   ([`Fdf`]).

A [`NoiseInjector`] may be applied between stages 2 and 3. [`Pipeline`] strings
the stages together and checks that they are run in order.
 */

mod cli;
pub mod constants;
mod error;
pub mod grid;
mod io;
pub(crate) mod math;
pub mod noise;
mod params;
pub mod pipeline;
pub mod synth;
pub mod transform;

// Re-exports.
pub use cli::{RmSynth, RmSynthError};
pub use error::ErrorKind;
pub use grid::{FreqBand, FreqGrid, FreqGridError, InstrumentProfile};
pub use noise::{NoNoise, NoiseInjector};
pub use pipeline::{Pipeline, PipelineError, Stage};
pub use synth::{
    synthesize, synthesize_components, FaradayComponents, FaradayThinComponent, PolSpectrum,
    SynthesisError,
};
pub use transform::{rm_synthesis, rmsf, Fdf, TransformError};

use crossbeam_utils::atomic::AtomicCell;

/// Double-precision complex numbers. All calculations are done in double
/// precision.
#[allow(non_camel_case_types)]
pub type c64 = num_complex::Complex64;

/// Should progress bars be drawn? Library users get no progress bars unless
/// they ask for them.
pub static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
