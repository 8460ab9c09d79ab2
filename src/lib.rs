// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Read makesourcedb-style sky-model catalogues and estimate source flux
densities at arbitrary frequencies.
 */

pub mod constants;
pub mod coord;
mod error;
pub mod makesourcedb;
mod read;
pub mod sexagesimal;
mod types;

// Re-exports.
pub use coord::RADec;
pub use error::ReadSkyModelError;
pub use read::read_sky_model_file;
pub use types::*;
