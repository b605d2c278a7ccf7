// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision.
 */

/// Speed of light \[metres/second\]. This is *not* the SI value
/// (299792458 m/s); spectra are only reproducible against other simulations if
/// this stays at 2.99e8.
pub const VEL_C: f64 = 2.99e8;

/// Multiply MHz by this to get Hz.
pub const MHZ_TO_HZ: f64 = 1e6;

/// The lowest trial Faraday depth used when none is specified \[rad/m^2\].
pub const DEFAULT_PHI_LOW: i64 = -1000;

/// The trial Faraday depths stop just short of this value when none is
/// specified \[rad/m^2\].
pub const DEFAULT_PHI_HIGH: i64 = 1000;

/// The most trial Faraday depths a single RM synthesis will evaluate.
pub const MAX_NUM_DEPTHS: usize = 100_000_000;

/// The most frequencies a grid may hold.
pub const MAX_NUM_FREQS: usize = 100_000_000;
