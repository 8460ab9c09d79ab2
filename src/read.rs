// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common code for reading sky-model catalogue files.

use std::{fs::File, path::Path};

use log::debug;

use crate::error::ReadSkyModelError;
use crate::makesourcedb;
use crate::types::SkyModel;

/// Given the path to a makesourcedb-style sky model file, return a [SkyModel]
/// object.
pub fn read_sky_model_file<P: AsRef<Path>>(path: P) -> Result<SkyModel, ReadSkyModelError> {
    fn inner(path: &Path) -> Result<SkyModel, ReadSkyModelError> {
        debug!("Reading sky model file {}", path.display());
        let mut buf = std::io::BufReader::new(File::open(path)?);
        makesourcedb::parse_sky_model(&mut buf)
    }
    inner(path.as_ref())
}
