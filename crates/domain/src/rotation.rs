// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! 5x1 rotation cycle calculation.
//!
//! The rotation is a fixed repeating pattern of 5 working days followed by
//! 1 day off. Each employee carries an anchor date known to be a regular
//! day off; every sixth day from the anchor, in either direction, is also
//! a regular day off.

use time::Date;

/// Length of the rotation in days (5 working days + 1 day off).
pub const ROTATION_PERIOD_DAYS: i64 = 6;

/// Returns whether `target_date` falls on the regular rotation day off
/// relative to `anchor_date`.
///
/// Pure function of the two dates; there are no error cases. Dates before
/// the anchor produce a negative day difference, so the remainder is
/// normalized into `[0, 6)` with `rem_euclid` before comparing to zero.
#[must_use]
pub fn is_cyclic_day_off(anchor_date: Date, target_date: Date) -> bool {
    let diff_days: i64 = i64::from(target_date.to_julian_day() - anchor_date.to_julian_day());
    diff_days.rem_euclid(ROTATION_PERIOD_DAYS) == 0
}
