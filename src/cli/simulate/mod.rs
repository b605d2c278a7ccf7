// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Synthesise the polarisation spectrum of Faraday-thin components and recover
//! their Faraday depths with RM synthesis.


use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    display_warnings, grid_info, split_triple, BandArgs, InfoPrinter, ARG_FILE_HELP,
    OUTPUT_TYPES_HELP,
};
use crate::{
    constants::{DEFAULT_PHI_HIGH, DEFAULT_PHI_LOW},
    io::parse_outputs,
    params::SimulateParams,
    synth::{FaradayComponents, FaradayThinComponent},
    transform::num_trial_depths,
    RmSynthError,
};

const DEFAULT_COMPONENTS: [FaradayThinComponent; 2] = [
    FaradayThinComponent {
        flux: 1.0,
        depth: 7.0,
        chi: 0.0,
    },
    FaradayThinComponent {
        flux: 1.0,
        depth: 40.0,
        chi: 0.0,
    },
];
const DEFAULT_MAXIMA_THRESHOLD: f64 = 0.5;

lazy_static::lazy_static! {
    static ref COMPONENT_HELP: String =
        format!("A Faraday-thin component, given as its polarised flux density, Faraday depth [rad/m^2] and polarisation angle [radians], e.g. 1,7,0. May be given multiple times. Default: {}",
                DEFAULT_COMPONENTS.iter().map(|c| format!("{},{},{}", c.flux, c.depth, c.chi)).join(" "));

    static ref PHI_LOW_HELP: String =
        format!("The first trial Faraday depth [rad/m^2]. Default: {DEFAULT_PHI_LOW}");

    static ref PHI_HIGH_HELP: String =
        format!("Trial Faraday depths stop one short of this value [rad/m^2]. Default: {DEFAULT_PHI_HIGH}");

    static ref MAXIMA_THRESHOLD_HELP: String =
        format!("Only report local maxima of |F| that are at least this fraction of the peak. Default: {DEFAULT_MAXIMA_THRESHOLD}");

    static ref OUTPUTS_HELP: String =
        format!("Paths to write the Faraday dispersion function to. {}", *OUTPUT_TYPES_HELP);

    static ref SPECTRUM_OUTPUTS_HELP: String =
        format!("Paths to write the synthesised polarisation spectrum to. {}", *OUTPUT_TYPES_HELP);
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct SimulateCliArgs {
    #[clap(
        short = 'c',
        long = "component",
        multiple_occurrences(true),
        allow_hyphen_values = true,
        value_name = "FLUX,DEPTH,CHI",
        help = COMPONENT_HELP.as_str(),
        help_heading = "SOURCE COMPONENTS"
    )]
    pub(super) components: Option<Vec<String>>,

    #[clap(long, allow_hyphen_values = true, help = PHI_LOW_HELP.as_str(), help_heading = "FARADAY DEPTHS")]
    pub(super) phi_low: Option<i64>,

    #[clap(long, allow_hyphen_values = true, help = PHI_HIGH_HELP.as_str(), help_heading = "FARADAY DEPTHS")]
    pub(super) phi_high: Option<i64>,

    #[clap(long, help = MAXIMA_THRESHOLD_HELP.as_str(), help_heading = "FARADAY DEPTHS")]
    pub(super) maxima_threshold: Option<f64>,

    #[clap(
        short = 'o',
        long,
        multiple_values(true),
        help = OUTPUTS_HELP.as_str(),
        help_heading = "OUTPUT FILES"
    )]
    pub(super) outputs: Option<Vec<PathBuf>>,

    #[clap(
        long,
        multiple_values(true),
        help = SPECTRUM_OUTPUTS_HELP.as_str(),
        help_heading = "OUTPUT FILES"
    )]
    pub(super) spectrum_outputs: Option<Vec<PathBuf>>,
}

impl SimulateCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            components: self.components.or(other.components),
            phi_low: self.phi_low.or(other.phi_low),
            phi_high: self.phi_high.or(other.phi_high),
            maxima_threshold: self.maxima_threshold.or(other.maxima_threshold),
            outputs: self.outputs.or(other.outputs),
            spectrum_outputs: self.spectrum_outputs.or(other.spectrum_outputs),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct SimulateArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "grid")]
    #[serde(default)]
    pub(super) band_args: BandArgs,

    #[clap(flatten)]
    #[serde(rename = "simulate")]
    #[serde(default)]
    pub(super) simulate_args: SimulateCliArgs,
}

impl SimulateArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<SimulateArgs, RmSynthError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let SimulateArgs {
                args_file: _,
                band_args,
                simulate_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(SimulateArgs {
                args_file: None,
                band_args: cli_args.band_args.merge(band_args),
                simulate_args: cli_args.simulate_args.merge(simulate_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<SimulateParams, RmSynthError> {
        debug!("{:#?}", self);

        let SimulateArgs {
            args_file: _,
            band_args,
            simulate_args:
                SimulateCliArgs {
                    components,
                    phi_low,
                    phi_high,
                    maxima_threshold,
                    outputs,
                    spectrum_outputs,
                },
        } = self;

        let grid = band_args.parse()?;

        let components = match components {
            Some(components) => components
                .iter()
                .map(|s| parse_component(s))
                .collect::<Result<Vec<_>, _>>()?,
            None => DEFAULT_COMPONENTS.to_vec(),
        };
        let components = FaradayComponents::from_components(components)?;

        let phi_low = phi_low.unwrap_or(DEFAULT_PHI_LOW);
        let phi_high = phi_high.unwrap_or(DEFAULT_PHI_HIGH);
        let num_depths = num_trial_depths(phi_low, phi_high)?;

        let maxima_threshold = maxima_threshold.unwrap_or(DEFAULT_MAXIMA_THRESHOLD);
        if !(0.0..=1.0).contains(&maxima_threshold) {
            return Err(SimulateArgsError::MaximaThreshold(maxima_threshold).into());
        }

        let fdf_outputs = parse_outputs(outputs.unwrap_or_default())?;
        let spectrum_outputs = parse_outputs(spectrum_outputs.unwrap_or_default())?;

        grid_info(&grid).display();

        let mut component_printer = InfoPrinter::new("Faraday-thin components".into());
        component_printer.push_block(
            components
                .iter()
                .map(|FaradayThinComponent { flux, depth, chi }| {
                    format!("flux {flux}, depth {depth} rad/m^2, angle {chi} rad").into()
                })
                .collect(),
        );
        component_printer.display();

        let mut depth_printer = InfoPrinter::new("Trial Faraday depths".into());
        depth_printer.push_line(
            format!(
                "{num_depths} depths, {phi_low} to {} rad/m^2",
                phi_high - 1
            )
            .into(),
        );
        depth_printer.display();

        let mut output_printer = InfoPrinter::new("Output files".into());
        if fdf_outputs.is_empty() && spectrum_outputs.is_empty() {
            output_printer.push_line("None; results are only reported".into());
        }
        for (file, _) in &fdf_outputs {
            output_printer.push_line(format!("FDF: {}", file.display()).into());
        }
        for (file, _) in &spectrum_outputs {
            output_printer.push_line(format!("Spectrum: {}", file.display()).into());
        }
        output_printer.display();

        display_warnings();

        Ok(SimulateParams {
            grid,
            components,
            phi_low,
            phi_high,
            maxima_threshold,
            fdf_outputs,
            spectrum_outputs,
        })
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

/// Parse "FLUX,DEPTH,CHI" into a component.
fn parse_component(s: &str) -> Result<FaradayThinComponent, SimulateArgsError> {
    let err = || SimulateArgsError::BadComponent(s.to_string());
    let (flux, depth, chi) = split_triple(s).ok_or_else(err)?;
    Ok(FaradayThinComponent {
        flux: flux.parse().map_err(|_| err())?,
        depth: depth.parse().map_err(|_| err())?,
        chi: chi.parse().map_err(|_| err())?,
    })
}

#[derive(Error, Debug)]
pub(super) enum SimulateArgsError {
    #[error("Couldn't parse component '{0}'; expected FLUX,DEPTH,CHI, e.g. 1,7,0")]
    BadComponent(String),

    #[error("The local-maxima threshold must be between 0 and 1 (got {0})")]
    MaximaThreshold(f64),
}
