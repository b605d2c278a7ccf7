// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::info;

use crate::{
    grid::FreqGrid,
    io::{write_grid, FileWriteError, OutputType},
};

/// Parameters needed to write out a frequency grid.
pub(crate) struct GridParams {
    pub(crate) grid: FreqGrid,

    /// The files to write the grid to. If there are none, only a summary of
    /// the grid is reported.
    pub(crate) outputs: Vec<(PathBuf, OutputType)>,
}

impl GridParams {
    pub(crate) fn run(&self) -> Result<(), FileWriteError> {
        let GridParams { grid, outputs } = self;

        for (i_band, (band, freqs)) in grid.iter_bands().enumerate() {
            info!(
                "Band {i_band}: {band}, first {} Hz, last {} Hz",
                freqs[0],
                freqs[freqs.len() - 1]
            );
        }

        for (file, output_type) in outputs {
            write_grid(grid, file, *output_type)?;
            info!("Wrote grid to '{}'", file.display());
        }

        Ok(())
    }
}
