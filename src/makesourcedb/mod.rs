// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle makesourcedb-style sky model files.
//!
//! These are CSV-like text files whose first line describes the columns of
//! every following line, e.g.:
//!
//! ```text
//! FORMAT = Name, Patch, Ra, Dec, I, ReferenceFrequency='60e6', SpectralIndex, LogarithmicSI
//! , bright, 03:30:00, +41.30.00, , , ,
//! 3c48, bright, 01:37:41.3, +33.09.35, 38.0, 60e6, [-0.8], true
//! ```
//!
//! Columns are identified by a case-insensitive substring match against the
//! header cells, so decorations like `FORMAT = ...` are tolerated; the first
//! matching cell wins. All columns other than `SpectralIndex` and
//! `LogarithmicSI` must be present. The `ReferenceFrequency` header cell may
//! embed a default (after a `=`) for rows that don't supply their own.
//!
//! A row whose `I` cell is empty defines a new patch at the row's position;
//! any other row is a source belonging to an already-defined patch. Lines
//! starting with `#` and lines containing nothing but commas are skipped.

mod read;

use itertools::Itertools;
use strum::IntoEnumIterator;

// Re-exports.
pub use read::parse_sky_model;

/// The recognised columns of a makesourcedb sky model, in the order they are
/// matched against header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter)]
pub enum Column {
    #[strum(serialize = "name")]
    Name,

    #[strum(serialize = "patch")]
    Patch,

    #[strum(serialize = "ra")]
    Ra,

    #[strum(serialize = "dec")]
    Dec,

    /// Stokes I flux density \[Jy\]
    #[strum(serialize = "i")]
    StokesI,

    #[strum(serialize = "referencefrequency")]
    ReferenceFrequency,

    #[strum(serialize = "spectralindex")]
    SpectralIndex,

    #[strum(serialize = "logarithmicsi")]
    LogarithmicSi,
}

impl Column {
    /// Is a header without this column an error?
    pub fn is_required(self) -> bool {
        !matches!(self, Column::SpectralIndex | Column::LogarithmicSi)
    }
}

lazy_static::lazy_static! {
    /// All of the recognised column names, comma separated.
    pub static ref RECOGNISED_COLUMNS_COMMA_SEPARATED: String = Column::iter().join(", ");
}
