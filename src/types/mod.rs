// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Types for sky-model patches and sources.

mod flux_density;
mod patch;
mod sky_model;
mod source;

pub use flux_density::*;
pub use patch::*;
pub use sky_model::*;
pub use source::*;
