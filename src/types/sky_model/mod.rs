// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code surrounding the [`IndexMap`] used to contain a whole sky model.


use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{FluxDensityType, Patch};

/// An [`IndexMap`] of patch names for keys and [`Patch`] structs for values.
/// Patches keep the order in which they appeared in the sky model file.
///
/// By making [`SkyModel`] a new type (specifically, an anonymous struct),
/// useful methods can be put onto it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkyModel(IndexMap<String, Patch>);

impl SkyModel {
    /// Create an empty [`SkyModel`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get counts of the patches, sources and flux-density types.
    pub fn get_counts(&self) -> SourceCounts {
        let mut counts = SourceCounts {
            num_patches: self.len(),
            ..Default::default()
        };
        self.iter()
            .flat_map(|(_, patch)| patch.sources.iter())
            .for_each(|(_, src)| {
                counts.num_sources += 1;
                match src.flux_type {
                    FluxDensityType::Logarithmic { .. } => counts.num_logarithmic += 1,
                    FluxDensityType::Linear { .. } => counts.num_linear += 1,
                }
            });
        counts
    }
}

impl From<IndexMap<String, Patch>> for SkyModel {
    fn from(sm: IndexMap<String, Patch>) -> Self {
        Self(sm)
    }
}

impl<const N: usize> From<[(String, Patch); N]> for SkyModel {
    fn from(value: [(String, Patch); N]) -> Self {
        Self(IndexMap::from(value))
    }
}

impl Deref for SkyModel {
    type Target = IndexMap<String, Patch>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SkyModel {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, Patch)> for SkyModel {
    fn from_iter<I: IntoIterator<Item = (String, Patch)>>(iter: I) -> Self {
        let mut c = Self::new();
        for i in iter {
            c.insert(i.0, i.1);
        }
        c
    }
}

impl IntoIterator for SkyModel {
    type Item = (String, Patch);
    type IntoIter = indexmap::map::IntoIter<String, Patch>;

    fn into_iter(self) -> indexmap::map::IntoIter<String, Patch> {
        self.0.into_iter()
    }
}

/// Numbers of things inside a [`SkyModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub num_patches: usize,
    pub num_sources: usize,
    pub num_logarithmic: usize,
    pub num_linear: usize,
}
