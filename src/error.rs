// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Broad categories of errors. Every error type in this crate can report
//! which category it falls into.

use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Grid parameters that can't produce a valid frequency grid (e.g. fewer
    /// than 2 channels).
    InvalidConfiguration,

    /// Sequences that must be index-aligned have different lengths.
    DimensionMismatch,

    /// A Faraday-depth range with no trial depths in it.
    InvalidRange,

    /// A stage was run before the stage it depends on.
    PreconditionViolation,
}
