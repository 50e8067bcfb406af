// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation interval containment.

use crate::dates::iso_date;
use serde::{Deserialize, Serialize};
use time::Date;

/// A closed vacation date range, inclusive on both ends.
///
/// Intervals are compared at day granularity. No ordering is enforced: an
/// interval whose `start` exceeds its `end` simply never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationInterval {
    /// First day of the vacation (inclusive).
    #[serde(with = "iso_date")]
    pub start: Date,
    /// Last day of the vacation (inclusive).
    #[serde(with = "iso_date")]
    pub end: Date,
}

impl VacationInterval {
    /// Creates a new `VacationInterval`.
    ///
    /// # Arguments
    ///
    /// * `start` - First day (inclusive)
    /// * `end` - Last day (inclusive)
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns whether the interval contains `target`, inclusive on both
    /// ends.
    #[must_use]
    pub fn contains(&self, target: Date) -> bool {
        self.start <= target && target <= self.end
    }
}

/// Returns whether `target` falls inside any of the given intervals.
///
/// An empty interval list returns false.
#[must_use]
pub fn is_on_vacation(intervals: &[VacationInterval], target: Date) -> bool {
    intervals.iter().any(|interval| interval.contains(target))
}
