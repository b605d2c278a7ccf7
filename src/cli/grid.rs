// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Report or write out a frequency grid.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, grid_info, BandArgs, ARG_FILE_HELP, OUTPUT_TYPES_HELP};
use crate::{io::parse_outputs, params::GridParams, RmSynthError};

lazy_static::lazy_static! {
    static ref OUTPUTS_HELP: String =
        format!("Paths to write the frequency grid to. {}", *OUTPUT_TYPES_HELP);
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct GridArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(
        short = 'o',
        long,
        multiple_values(true),
        help = OUTPUTS_HELP.as_str(),
        help_heading = "OUTPUT FILES"
    )]
    pub(super) outputs: Option<Vec<PathBuf>>,

    #[clap(flatten)]
    #[serde(rename = "grid")]
    #[serde(default)]
    pub(super) band_args: BandArgs,
}

impl GridArgs {
    pub(super) fn merge(self) -> Result<GridArgs, RmSynthError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let GridArgs {
                args_file: _,
                outputs,
                band_args,
            } = unpack_arg_file!(arg_file);

            Ok(GridArgs {
                args_file: None,
                outputs: cli_args.outputs.or(outputs),
                band_args: cli_args.band_args.merge(band_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<GridParams, RmSynthError> {
        let GridArgs {
            args_file: _,
            outputs,
            band_args,
        } = self;

        let grid = band_args.parse()?;
        let outputs = parse_outputs(outputs.unwrap_or_default())?;

        grid_info(&grid).display();
        display_warnings();

        Ok(GridParams { grid, outputs })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), RmSynthError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}
