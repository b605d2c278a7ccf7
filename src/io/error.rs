// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with writing out files.

use std::path::PathBuf;

use thiserror::Error;

use super::OUTPUT_EXTENSIONS;

#[derive(Error, Debug)]
pub(crate) enum FileWriteError {
    #[error("Cannot write to the specified file '{file}'. Do you have write permissions set?")]
    FileNotWritable { file: String },

    #[error(
        "Couldn't create directory '{0}' for output files. Do you have write permissions set?"
    )]
    NewDirectory(PathBuf),

    #[error("Output file '{0}' doesn't have a recognised file extension! Valid extensions are: {ext}", ext = *OUTPUT_EXTENSIONS)]
    UnrecognisedExtension(PathBuf),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
