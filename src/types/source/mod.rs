// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structures to describe sky-model sources.

use serde::{Deserialize, Serialize};

use super::{FluxDensity, FluxDensityType};
use crate::coord::RADec;

/// A point source on the sky.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// The source position.
    pub radec: RADec,

    /// How the source's brightness varies with frequency.
    pub flux_type: FluxDensityType,
}

impl Source {
    /// Estimate the source's flux density at a particular frequency.
    pub fn estimate_at_freq(&self, freq_hz: f64) -> FluxDensity {
        self.flux_type.estimate_at_freq(freq_hz)
    }
}
