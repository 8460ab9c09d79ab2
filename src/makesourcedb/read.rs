// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of makesourcedb-style sky models.

use indexmap::{map::Entry, IndexMap};
use log::{debug, trace};
use strum::IntoEnumIterator;

use super::Column;
use crate::constants::DEFAULT_LOGARITHMIC_SI;
use crate::coord::RADec;
use crate::error::ReadSkyModelError;
use crate::types::{FluxDensity, FluxDensityType, Patch, SkyModel, Source};

/// Where each recognised column lives in a data row, along with the header's
/// default reference frequency (if it supplies one).
struct ColumnMap {
    indices: IndexMap<Column, usize>,
    default_reference_frequency: Option<f64>,
}

impl ColumnMap {
    /// Build a [`ColumnMap`] from a sky model's first line. Cells are matched
    /// by substring in [`Column`] declaration order; the first matching cell
    /// wins.
    fn from_header(header: &str) -> Result<ColumnMap, ReadSkyModelError> {
        let normalised = header
            .trim_end_matches(['\n', '\r'])
            .to_lowercase()
            .replace(' ', "");
        let cells: Vec<&str> = normalised.split(',').collect();

        let mut indices = IndexMap::new();
        let mut default_reference_frequency = None;
        for column in Column::iter() {
            let name = column.to_string();
            let position = match cells.iter().position(|cell| cell.contains(name.as_str())) {
                Some(p) => p,
                None if column.is_required() => {
                    return Err(ReadSkyModelError::MissingColumn(column))
                }
                None => continue,
            };
            indices.insert(column, position);

            // The matched ReferenceFrequency cell may embed a default after a
            // '='. Only digits, 'e' and '-' survive the quoting around the
            // value, so '60e6' and '5e-1' work but a '.' is dropped.
            if column == Column::ReferenceFrequency {
                if let Some((_, tail)) = cells[position].split_once('=') {
                    let filtered: String = tail
                        .chars()
                        .filter(|c| c.is_ascii_digit() || *c == 'e' || *c == '-')
                        .collect();
                    default_reference_frequency = Some(filtered.parse().map_err(|_| {
                        ReadSkyModelError::BadDefaultReferenceFrequency(cells[position].to_string())
                    })?);
                }
            }
        }

        Ok(ColumnMap {
            indices,
            default_reference_frequency,
        })
    }

    /// Get a column's whitespace-trimmed cell out of a data row. Unmapped
    /// columns and too-short rows read as the empty string.
    fn get<'a>(&self, cells: &[&'a str], column: Column) -> &'a str {
        self.indices
            .get(&column)
            .and_then(|&i| cells.get(i))
            .map_or("", |cell| cell.trim())
    }

    fn has(&self, column: Column) -> bool {
        self.indices.contains_key(&column)
    }
}

/// Parse a buffer containing a makesourcedb-style sky model into a
/// [`SkyModel`].
pub fn parse_sky_model<T: std::io::BufRead>(buf: &mut T) -> Result<SkyModel, ReadSkyModelError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;

    // The first line is always the header, even when it starts with '#' or
    // the input is empty.
    buf.read_line(&mut line)?;
    line_num += 1;
    let column_map = ColumnMap::from_header(&line)?;
    line.clear();

    let mut sky_model = SkyModel::new();

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;

        let row = line.trim_end_matches(['\n', '\r']);

        // Handle lines that aren't intended to be parsed (comments and lines
        // with nothing between the commas).
        if row.starts_with('#') || row.replace(',', "").is_empty() {
            line.clear();
            continue;
        }

        let cells: Vec<&str> = row.split(',').collect();
        let patch_name = column_map.get(&cells, Column::Patch);

        match sky_model.entry(patch_name.to_string()) {
            Entry::Vacant(entry) => {
                // A patch definition has an empty I cell; anything else is a
                // source whose patch was never defined.
                if !column_map.get(&cells, Column::StokesI).is_empty() {
                    return Err(ReadSkyModelError::PatchNotDefined {
                        line_num,
                        patch: patch_name.to_string(),
                    });
                }

                let radec = RADec::from_sexagesimal(
                    column_map.get(&cells, Column::Ra),
                    column_map.get(&cells, Column::Dec),
                )
                .map_err(|err| ReadSkyModelError::Sexagesimal { line_num, err })?;
                trace!("New patch {patch_name} at {radec}");
                entry.insert(Patch::new(radec));
            }

            Entry::Occupied(mut entry) => {
                let source_name = column_map.get(&cells, Column::Name);

                let stokes_i_cell = column_map.get(&cells, Column::StokesI);
                let stokes_i: f64 =
                    stokes_i_cell
                        .parse()
                        .map_err(|_| ReadSkyModelError::ParseFloat {
                            line_num,
                            column: Column::StokesI,
                            string: stokes_i_cell.to_string(),
                        })?;

                let radec = RADec::from_sexagesimal(
                    column_map.get(&cells, Column::Ra),
                    column_map.get(&cells, Column::Dec),
                )
                .map_err(|err| ReadSkyModelError::Sexagesimal { line_num, err })?;

                // A row without a usable reference frequency falls back to
                // the header's default.
                let freq = match column_map
                    .get(&cells, Column::ReferenceFrequency)
                    .parse::<f64>()
                {
                    Ok(freq) => freq,
                    Err(_) => match column_map.default_reference_frequency {
                        Some(freq) => freq,
                        None => {
                            return Err(ReadSkyModelError::MissingReferenceFrequency {
                                line_num,
                                source_name: source_name.to_string(),
                            })
                        }
                    },
                };

                let si =
                    parse_spectral_indices(column_map.get(&cells, Column::SpectralIndex), line_num)?;

                // A header without a LogarithmicSI column makes every source
                // logarithmic; a present-but-empty cell means linear.
                let logarithmic = if column_map.has(Column::LogarithmicSi) {
                    column_map
                        .get(&cells, Column::LogarithmicSi)
                        .eq_ignore_ascii_case("true")
                } else {
                    DEFAULT_LOGARITHMIC_SI
                };

                let fd = FluxDensity { freq, i: stokes_i };
                let flux_type = if logarithmic {
                    FluxDensityType::Logarithmic { fd, si }
                } else {
                    FluxDensityType::Linear { fd, si }
                };

                entry
                    .get_mut()
                    .sources
                    .insert(source_name.to_string(), Source { radec, flux_type });
            }
        }

        line.clear();
    }

    let counts = sky_model.get_counts();
    debug!(
        "Read {} patches and {} sources ({} logarithmic, {} linear)",
        counts.num_patches, counts.num_sources, counts.num_logarithmic, counts.num_linear
    );

    Ok(sky_model)
}

/// Parse a bracketed, comma-separated list of spectral-index terms (e.g.
/// `[-0.8, 0.02]`). An empty cell (or empty brackets) means no terms.
fn parse_spectral_indices(cell: &str, line_num: u32) -> Result<Box<[f64]>, ReadSkyModelError> {
    let inner = cell.trim_matches(|c| c == '[' || c == ']');
    if inner.trim().is_empty() {
        return Ok(Box::default());
    }

    let mut si = Vec::new();
    for term in inner.split(',') {
        let term = term.trim();
        si.push(term.parse().map_err(|_| ReadSkyModelError::ParseFloat {
            line_num,
            column: Column::SpectralIndex,
            string: term.to_string(),
        })?);
    }
    Ok(si.into_boxed_slice())
}
