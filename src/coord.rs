// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (right ascension, declination) coordinates.
 */

use serde::{Deserialize, Serialize};

use crate::sexagesimal::{parse_declination, parse_right_ascension, SexagesimalError};

/// A struct containing a Right Ascension and Declination. All units are in
/// degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RADec {
    /// Right ascension \[degrees\]
    pub ra: f64,
    /// Declination \[degrees\]
    pub dec: f64,
}

impl RADec {
    /// Make a new [`RADec`] struct from values in degrees.
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Make a new [`RADec`] struct from sexagesimal strings ("HH:MM:SS" right
    /// ascension, "DD.MM.SS" declination).
    pub fn from_sexagesimal(ra: &str, dec: &str) -> Result<Self, SexagesimalError> {
        Ok(Self {
            ra: parse_right_ascension(ra)?,
            dec: parse_declination(dec)?,
        })
    }
}

impl std::fmt::Display for RADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}°, {}°)", self.ra, self.dec)
    }
}
