// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. e.g. the `simulate` and
//! `grid` subcommands both need a frequency grid, so the same grid arguments
//! are shared between them.

mod printers;
#[cfg(test)]
mod tests;

pub(crate) use printers::{display_warnings, InfoPrinter, Warn};

use std::str::FromStr;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    grid::{FreqBand, FreqGrid, FreqGridError, InstrumentProfile},
    io::OUTPUT_EXTENSIONS,
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref PROFILES_COMMA_SEPARATED: String = InstrumentProfile::iter().join(", ");

    static ref PROFILE_HELP: String =
        format!("The instrument whose observing bands make up the frequency grid. Supported profiles: {}. Default: {}",
                *PROFILES_COMMA_SEPARATED, DEFAULT_PROFILE);

    pub(super) static ref OUTPUT_TYPES_HELP: String =
        format!("Supported formats: {}", *OUTPUT_EXTENSIONS);
}

/// The instrument used when no frequency grid is specified.
pub(super) const DEFAULT_PROFILE: InstrumentProfile = InstrumentProfile::Askap12;

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(RmSynthError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(RmSynthError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(RmSynthError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Arguments that describe a frequency grid: either a named instrument
/// profile, or explicit bands.
#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct BandArgs {
    #[clap(short, long, help = PROFILE_HELP.as_str(), help_heading = "FREQUENCY GRID")]
    pub(super) profile: Option<String>,

    /// A band of evenly-spaced channels, given as the first and last channel
    /// frequencies [MHz] and the number of channels, e.g. 700,1300,600. May be
    /// given multiple times; bands are concatenated in the order given.
    #[clap(
        long = "band",
        multiple_occurrences(true),
        conflicts_with("profile"),
        value_name = "MIN,MAX,NCHAN",
        help_heading = "FREQUENCY GRID"
    )]
    pub(super) bands: Option<Vec<String>>,
}

impl BandArgs {
    /// A profile and bands are alternatives to each other, so whichever
    /// of `self` and `other` specifies a grid wins, preferring `self`.
    pub(super) fn merge(self, other: Self) -> Self {
        if self.profile.is_some() || self.bands.is_some() {
            self
        } else {
            other
        }
    }

    pub(super) fn parse(self) -> Result<FreqGrid, BandArgsError> {
        let BandArgs { profile, bands } = self;

        let grid = match (profile, bands) {
            (Some(_), Some(_)) => return Err(BandArgsError::ProfileAndBands),

            (None, Some(bands)) => {
                let bands = bands
                    .iter()
                    .map(|s| parse_band(s))
                    .collect::<Result<Vec<_>, _>>()?;
                FreqGrid::from_bands(&bands)?
            }

            (Some(profile), None) => {
                let profile = InstrumentProfile::from_str(&profile)
                    .map_err(|_| BandArgsError::UnknownProfile(profile))?;
                debug!("Using the {profile} profile");
                FreqGrid::from_profile(profile)
            }

            (None, None) => {
                debug!("No grid specified; using the {DEFAULT_PROFILE} profile");
                FreqGrid::from_profile(DEFAULT_PROFILE)
            }
        };

        if !grid.is_ascending() {
            "The frequency bands overlap or are out of order; the grid is not ascending".warn();
        }

        Ok(grid)
    }
}

/// Parse three comma-separated values.
pub(super) fn split_triple(s: &str) -> Option<(&str, &str, &str)> {
    s.split(',').map(str::trim).collect_tuple()
}

/// Parse "MIN,MAX,NCHAN" into a band. The band itself is checked when the
/// grid is made.
pub(super) fn parse_band(s: &str) -> Result<FreqBand, BandArgsError> {
    let err = || BandArgsError::BadBand(s.to_string());
    let (min, max, num_chans) = split_triple(s).ok_or_else(err)?;
    Ok(FreqBand::new(
        min.parse().map_err(|_| err())?,
        max.parse().map_err(|_| err())?,
        num_chans.parse().map_err(|_| err())?,
    ))
}

/// Describe a grid with one line per band.
pub(super) fn grid_info(grid: &FreqGrid) -> InfoPrinter {
    let mut printer = InfoPrinter::new("Frequency grid".into());
    printer.push_line(format!("{} frequencies", grid.len()).into());
    printer.push_block(
        grid.bands()
            .iter()
            .map(|band| format!("{band}").into())
            .collect(),
    );
    printer.push_line(
        format!(
            "Resolution in Faraday depth: {:.2} rad/m^2",
            grid.rmsf_fwhm()
        )
        .into(),
    );
    printer
}

#[derive(Error, Debug)]
pub(super) enum BandArgsError {
    #[error("Both an instrument profile and bands were specified; only one may be used")]
    ProfileAndBands,

    #[error("Unrecognised instrument profile '{0}'. Supported profiles: {profiles}", profiles = *PROFILES_COMMA_SEPARATED)]
    UnknownProfile(String),

    #[error("Couldn't parse band '{0}'; expected MIN_MHZ,MAX_MHZ,NUM_CHANS, e.g. 700,1300,600")]
    BadBand(String),

    #[error("Invalid frequency grid: {0}")]
    Grid(#[from] FreqGridError),
}
