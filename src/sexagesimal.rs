// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for handling conversion from sexagesimal strings.
 */

use thiserror::Error;

/// Convert a sexagesimal right ascension delimited by colons ("HH:MM:SS", the
/// seconds may have a fractional part) to a float \[degrees\]. One hour of
/// right ascension is 15 degrees. A negative angle is indicated solely by a
/// leading `-` on the hours field, so `-00:30:00` is negative.
///
/// # Examples
///
/// ```
/// # use skymodel::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = parse_right_ascension("05:12:30")?;
/// assert_abs_diff_eq!(f, 78.125);
/// # Ok(())
/// # }
/// ```
pub fn parse_right_ascension(ra: &str) -> Result<f64, SexagesimalError> {
    let ra = ra.trim();
    let mut split = Vec::with_capacity(3);
    for elem in ra.split(':') {
        let elem = elem.trim();
        split.push(
            elem.parse::<f64>()
                .map_err(|_| SexagesimalError::ParseFloat(elem.to_string()))?,
        );
    }
    if split.len() != 3 {
        return Err(SexagesimalError::WrongRaFieldCount(ra.to_string()));
    }
    let h = split[0];
    let m = split[1];
    let s = split[2];

    let deg = h.abs() * 15.0 + m / 4.0 + s / 240.0;
    if ra.starts_with('-') {
        Ok(-deg)
    } else {
        Ok(deg)
    }
}

/// Convert a sexagesimal declination delimited by dots ("DD.MM.SS", with an
/// optional leading sign and an optional fractional part on the seconds) to a
/// float \[degrees\]. Any dots after the third belong to the fractional
/// seconds, so `41.30.00.5` has 00.5 seconds. A negative angle is indicated
/// solely by a leading `-` on the degrees field, so `-00.30.00` is negative.
///
/// # Examples
///
/// ```
/// # use skymodel::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = parse_declination("+41.30.00")?;
/// assert_abs_diff_eq!(f, 41.5);
/// # Ok(())
/// # }
/// ```
pub fn parse_declination(dec: &str) -> Result<f64, SexagesimalError> {
    let cleaned: String = dec.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.trim_matches('+');

    let mut split = cleaned.splitn(3, '.');
    let (d, m, s) = match (split.next(), split.next(), split.next()) {
        (Some(d), Some(m), Some(s)) => (d, m, s),
        _ => return Err(SexagesimalError::WrongDecFieldCount(dec.to_string())),
    };
    let d = d
        .parse::<f64>()
        .map_err(|_| SexagesimalError::ParseFloat(d.to_string()))?;
    let m = m
        .parse::<f64>()
        .map_err(|_| SexagesimalError::ParseFloat(m.to_string()))?;
    let s = s
        .parse::<f64>()
        .map_err(|_| SexagesimalError::ParseFloat(s.to_string()))?;

    let deg = d.abs() + m / 60.0 + s / 3600.0;
    if cleaned.starts_with('-') {
        Ok(-deg)
    } else {
        Ok(deg)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SexagesimalError {
    /// A colon-delimited right ascension must have exactly three fields.
    #[error("Did not get three colon-delimited fields from right ascension: {0}")]
    WrongRaFieldCount(String),

    /// A dot-delimited declination must have at least three fields.
    #[error("Did not get three dot-delimited fields from declination: {0}")]
    WrongDecFieldCount(String),

    #[error("Could not parse {0} as a number")]
    ParseFloat(String),
}
