// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

/// When a sky model's header has no `LogarithmicSI` column, spectral-index
/// terms are applied logarithmically.
pub const DEFAULT_LOGARITHMIC_SI: bool = true;
