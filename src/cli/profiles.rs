// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! List the known instrument profiles.

use strum::IntoEnumIterator;

use super::common::grid_info;
use crate::grid::{FreqGrid, InstrumentProfile};

pub(super) fn list_profiles() {
    for profile in InstrumentProfile::iter() {
        let mut printer = grid_info(&FreqGrid::from_profile(profile));
        printer.overwrite_title(profile.to_string().into());
        printer.display();
    }
}
