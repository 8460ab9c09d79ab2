// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::makesourcedb::{Column, RECOGNISED_COLUMNS_COMMA_SEPARATED};
use crate::sexagesimal::SexagesimalError;

/// Errors associated with reading in a sky model.
#[derive(Error, Debug)]
pub enum ReadSkyModelError {
    #[error("Sky model header is missing the {0} column; recognised columns are: {}", *RECOGNISED_COLUMNS_COMMA_SEPARATED)]
    MissingColumn(Column),

    #[error("Sky model header: Could not parse a default reference frequency out of {0}")]
    BadDefaultReferenceFrequency(String),

    #[error("Sky model line {line_num}: Patch {patch} has not been defined before adding sources")]
    PatchNotDefined { line_num: u32, patch: String },

    /// Error when converting a string to a float.
    #[error("Sky model line {line_num}: Error converting {column} value {string} to a float")]
    ParseFloat {
        line_num: u32,
        column: Column,
        string: String,
    },

    #[error("Sky model line {line_num}: Source {source_name} has no reference frequency and the header supplies no default")]
    MissingReferenceFrequency { line_num: u32, source_name: String },

    #[error("Sky model line {line_num}: {err}")]
    Sexagesimal {
        line_num: u32,
        err: SexagesimalError,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
