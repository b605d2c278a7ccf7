// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle writing out frequency grids, polarisation spectra and
//! Faraday dispersion functions.
//!
//! JSON outputs are an array of row objects. Text outputs have a commented
//! header line followed by one row per line; "txt" columns are separated by
//! spaces and "tsv" columns by tabs.

mod error;

pub(crate) use error::FileWriteError;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;
use log::{debug, trace};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{cli::Warn, grid::FreqGrid, synth::PolSpectrum, transform::Fdf};

/// All supported output file formats.
#[derive(Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputType {
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "txt")]
    Txt,
    #[strum(serialize = "tsv")]
    Tsv,
}

lazy_static::lazy_static! {
    pub(crate) static ref OUTPUT_EXTENSIONS: String = OutputType::iter().join(", ");
}

impl OutputType {
    /// Get the output type from a file's extension (case insensitive).
    pub(crate) fn from_path(file: &Path) -> Result<OutputType, FileWriteError> {
        file.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| OutputType::from_str(&e.to_lowercase()).ok())
            .ok_or_else(|| FileWriteError::UnrecognisedExtension(file.to_path_buf()))
    }

    fn delimiter(self) -> &'static str {
        match self {
            OutputType::Json | OutputType::Txt => " ",
            OutputType::Tsv => "\t",
        }
    }
}

/// A row of a table to be written out.
trait Row: Serialize {
    const COLUMNS: &'static [&'static str];

    /// The values of this row, in the same order as `COLUMNS`.
    fn cells(&self) -> Vec<String>;
}

#[derive(Serialize)]
struct GridRow {
    band: usize,
    freq_hz: f64,
    lambda_sq: f64,
}

impl Row for GridRow {
    const COLUMNS: &'static [&'static str] = &["band", "freq_hz", "lambda_sq"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.band.to_string(),
            self.freq_hz.to_string(),
            self.lambda_sq.to_string(),
        ]
    }
}

#[derive(Serialize)]
struct SpectrumRow {
    freq_hz: f64,
    lambda_sq: f64,
    re: f64,
    im: f64,
}

impl Row for SpectrumRow {
    const COLUMNS: &'static [&'static str] = &["freq_hz", "lambda_sq", "re", "im"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.freq_hz.to_string(),
            self.lambda_sq.to_string(),
            self.re.to_string(),
            self.im.to_string(),
        ]
    }
}

#[derive(Serialize)]
struct FdfRow {
    phi: i64,
    re: f64,
    im: f64,
    abs: f64,
}

impl Row for FdfRow {
    const COLUMNS: &'static [&'static str] = &["phi", "re", "im", "abs"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.phi.to_string(),
            self.re.to_string(),
            self.im.to_string(),
            self.abs.to_string(),
        ]
    }
}

fn write_rows<R: Row>(
    rows: &[R],
    file: &Path,
    output_type: OutputType,
) -> Result<(), FileWriteError> {
    debug!(
        "Writing {} rows to '{}' ({output_type})",
        rows.len(),
        file.display()
    );
    let mut f = BufWriter::new(File::create(file)?);
    match output_type {
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut f, rows)?;
            writeln!(f)?;
        }

        OutputType::Txt | OutputType::Tsv => {
            let delimiter = output_type.delimiter();
            writeln!(f, "# {}", R::COLUMNS.join(delimiter))?;
            for row in rows {
                writeln!(f, "{}", row.cells().join(delimiter))?;
            }
        }
    }
    f.flush()?;
    Ok(())
}

/// Write out each frequency of a grid with the (0-based) index of the band it
/// came from.
pub(crate) fn write_grid(
    grid: &FreqGrid,
    file: &Path,
    output_type: OutputType,
) -> Result<(), FileWriteError> {
    let lambda_sqs = grid.lambda_sqs();
    let rows = grid
        .iter_bands()
        .enumerate()
        .flat_map(|(i_band, (_, freqs))| freqs.iter().map(move |&f| (i_band, f)))
        .zip(lambda_sqs.iter().copied())
        .map(|((band, freq_hz), lambda_sq)| GridRow {
            band,
            freq_hz,
            lambda_sq,
        })
        .collect::<Vec<_>>();
    write_rows(&rows, file, output_type)
}

/// Write out a polarisation spectrum alongside the grid it was made with.
pub(crate) fn write_spectrum(
    grid: &FreqGrid,
    spectrum: &PolSpectrum,
    file: &Path,
    output_type: OutputType,
) -> Result<(), FileWriteError> {
    let lambda_sqs = grid.lambda_sqs();
    let rows = grid
        .freqs()
        .iter()
        .zip(lambda_sqs.iter().copied())
        .zip(spectrum.view())
        .map(|((&freq_hz, lambda_sq), pol)| SpectrumRow {
            freq_hz,
            lambda_sq,
            re: pol.re,
            im: pol.im,
        })
        .collect::<Vec<_>>();
    write_rows(&rows, file, output_type)
}

pub(crate) fn write_fdf(
    fdf: &Fdf,
    file: &Path,
    output_type: OutputType,
) -> Result<(), FileWriteError> {
    let rows = fdf
        .iter()
        .map(|(phi, v)| FdfRow {
            phi,
            re: v.re,
            im: v.im,
            abs: v.norm(),
        })
        .collect::<Vec<_>>();
    write_rows(&rows, file, output_type)
}

/// Check that each output has a recognised extension and can be written to.
pub(crate) fn parse_outputs(
    outputs: Vec<PathBuf>,
) -> Result<Vec<(PathBuf, OutputType)>, FileWriteError> {
    outputs
        .into_iter()
        .map(|file| {
            let output_type = OutputType::from_path(&file)?;
            can_write_to_file(&file)?;
            Ok((file, output_type))
        })
        .collect()
}

/// Test whether a file can be written to. Any directories leading up to the
/// file are created. If the file already exists, a warning is issued, because
/// it will be overwritten.
pub(crate) fn can_write_to_file(file: &Path) -> Result<(), FileWriteError> {
    trace!("Testing whether we can write to {}", file.display());

    if file.is_dir() {
        return Err(FileWriteError::FileNotWritable {
            file: file.display().to_string(),
        });
    }

    let file_exists = file.exists();
    match std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(file)
        .map_err(|e| e.kind())
    {
        // File is writable. Don't keep the empty file if we made it.
        Ok(_) => {
            if file_exists {
                format!("Will overwrite the existing file '{}'", file.display()).warn();
            } else {
                std::fs::remove_file(file)?;
            }
        }

        // The file's directory doesn't exist. Make it; if that fails, we can't
        // write the file anyway.
        Err(std::io::ErrorKind::NotFound) => {
            if let Some(p) = file.parent() {
                match std::fs::DirBuilder::new()
                    .recursive(true)
                    .create(p)
                    .map_err(|e| e.kind())
                {
                    Ok(()) => (),
                    Err(std::io::ErrorKind::PermissionDenied) => {
                        return Err(FileWriteError::NewDirectory(p.to_path_buf()))
                    }
                    Err(e) => return Err(FileWriteError::IO(e.into())),
                }
            }
        }

        Err(std::io::ErrorKind::PermissionDenied) => {
            return Err(FileWriteError::FileNotWritable {
                file: file.display().to_string(),
            })
        }

        Err(e) => return Err(FileWriteError::IO(e.into())),
    }

    Ok(())
}
