// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Override creation eligibility.
//!
//! The store itself performs no re-validation; this filter is the single
//! enforcement point a well-behaved caller consults before offering an
//! employee as selectable for a new override.

use crate::resolve::baseline;
use escala_domain::{Employee, OverrideKind, ScheduleOverride};
use time::Date;

/// Derives the employees for whom creating an override of `kind` on `date`
/// is legal.
///
/// Rules:
/// - An employee already holding any override on that date is never
///   eligible (no stacking two overrides on one day).
/// - `EmergencyWork` requires the override-free baseline to be off duty —
///   you can only call in someone who would otherwise be off.
/// - `ExtraDayOff` requires the baseline to be working — you can only
///   excuse someone who would otherwise work.
///
/// Ordering follows roster order. Total function: an empty result is the
/// answer when nobody qualifies, never an error.
#[must_use]
pub fn eligible_for<'a>(
    kind: OverrideKind,
    date: Date,
    employees: &'a [Employee],
    overrides: &[ScheduleOverride],
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| {
            let already_overridden: bool = overrides
                .iter()
                .any(|ovr| ovr.applies_to(date, &employee.name));
            if already_overridden {
                return false;
            }

            let baseline_off: bool = baseline(employee, date).is_off_duty();
            match kind {
                OverrideKind::EmergencyWork => baseline_off,
                OverrideKind::ExtraDayOff => !baseline_off,
            }
        })
        .collect()
}
