// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A named group of sky-model sources.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Source;
use crate::coord::RADec;

/// A patch of sky. Sources are keyed by name, in the order they were added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// The nominal patch position.
    pub radec: RADec,

    /// The sources belonging to this patch.
    pub sources: IndexMap<String, Source>,
}

impl Patch {
    /// Create a [`Patch`] at a position with no sources.
    pub fn new(radec: RADec) -> Patch {
        Patch {
            radec,
            sources: IndexMap::new(),
        }
    }
}
