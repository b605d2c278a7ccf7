// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Simulate the polarisation spectrum of Faraday-thin components and recover
//! their Faraday depths.

use std::{borrow::Cow, path::PathBuf};

use log::info;
use thiserror::Error;

use crate::{
    cli::InfoPrinter,
    grid::FreqGrid,
    io::{write_fdf, write_spectrum, FileWriteError, OutputType},
    pipeline::{Pipeline, PipelineError},
    synth::FaradayComponents,
    transform::Fdf,
};

/// Parameters needed to do a simulation and RM synthesis.
#[derive(Debug)]
pub(crate) struct SimulateParams {
    pub(crate) grid: FreqGrid,

    pub(crate) components: FaradayComponents,

    /// The first trial Faraday depth \[rad/m^2\].
    pub(crate) phi_low: i64,

    /// One past the last trial Faraday depth \[rad/m^2\].
    pub(crate) phi_high: i64,

    /// Local maxima of |F| are only reported if they are at least this
    /// fraction of the peak.
    pub(crate) maxima_threshold: f64,

    /// Where to write the Faraday dispersion function.
    pub(crate) fdf_outputs: Vec<(PathBuf, OutputType)>,

    /// Where to write the synthesised polarisation spectrum.
    pub(crate) spectrum_outputs: Vec<(PathBuf, OutputType)>,
}

impl SimulateParams {
    pub(crate) fn run(&self) -> Result<Fdf, SimulateError> {
        let SimulateParams {
            grid,
            components,
            phi_low,
            phi_high,
            maxima_threshold,
            fdf_outputs,
            spectrum_outputs,
        } = self;

        let pipeline = Pipeline::new()
            .with_grid(grid.clone())
            .synthesize(components)?;
        if let Some(spectrum) = pipeline.spectrum() {
            for (file, output_type) in spectrum_outputs {
                write_spectrum(grid, spectrum, file, *output_type)?;
                info!("Wrote polarisation spectrum to '{}'", file.display());
            }
        }

        let fdf = pipeline.transform(*phi_low, *phi_high)?.into_fdf()?;
        report_fdf(&fdf, *maxima_threshold);

        for (file, output_type) in fdf_outputs {
            write_fdf(&fdf, file, *output_type)?;
            info!("Wrote Faraday dispersion function to '{}'", file.display());
        }

        Ok(fdf)
    }
}

fn report_fdf(fdf: &Fdf, maxima_threshold: f64) {
    let (peak_depth, peak) = fdf.peak();
    let peak_abs = peak.norm();
    let mut printer = InfoPrinter::new("Faraday dispersion function".into());
    printer.push_line(format!("Peak |F| = {peak_abs:.4} at {peak_depth} rad/m^2").into());

    let maxima = fdf.local_maxima(maxima_threshold * peak_abs);
    if maxima.is_empty() {
        printer.push_line("No local maxima".into());
    } else {
        let mut block: Vec<Cow<'static, str>> = vec![format!(
            "Local maxima above {:.0}% of the peak:",
            maxima_threshold * 100.0
        )
        .into()];
        for (depth, abs) in maxima {
            block.push(format!("{depth:>6} rad/m^2: |F| = {abs:.4}").into());
        }
        printer.push_block(block);
    }
    printer.display();
}

#[derive(Error, Debug)]
pub(crate) enum SimulateError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    FileWrite(#[from] FileWriteError),
}
