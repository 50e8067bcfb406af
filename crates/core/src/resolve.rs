// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-employee, per-date status resolution.

use escala_domain::{
    DayStatus, Employee, OverrideKind, ScheduleOverride, is_cyclic_day_off, is_on_vacation,
};
use time::Date;

/// Resolves the status an employee would have from cycle and vacation
/// rules alone, ignoring any override.
///
/// Precedence: vacation, then cyclic day off, then working.
#[must_use]
pub fn baseline(employee: &Employee, date: Date) -> DayStatus {
    if is_on_vacation(&employee.vacations, date) {
        DayStatus::OnVacation
    } else if is_cyclic_day_off(employee.anchor_date, date) {
        DayStatus::CyclicDayOff
    } else {
        DayStatus::Working
    }
}

/// Resolves one employee's status on one date.
///
/// Total-order precedence, first match wins:
/// 1. An override for `(date, employee.name)` — first match in collection
///    order if duplicates exist.
/// 2. Vacation containment.
/// 3. Cyclic rotation day off.
/// 4. Working.
#[must_use]
pub fn resolve(employee: &Employee, date: Date, overrides: &[ScheduleOverride]) -> DayStatus {
    let matched: Option<&ScheduleOverride> = overrides
        .iter()
        .find(|ovr| ovr.applies_to(date, &employee.name));

    matched.map_or_else(
        || baseline(employee, date),
        |ovr| match ovr.kind {
            OverrideKind::EmergencyWork => DayStatus::EmergencyWork {
                note: ovr.note.clone(),
            },
            OverrideKind::ExtraDayOff => DayStatus::ExtraDayOff {
                note: ovr.note.clone(),
            },
        },
    )
}

/// The roster partitioned by resolved status for a single date.
///
/// The five groups are disjoint and together cover the whole roster;
/// ordering within each group follows roster order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayRoster<'a> {
    /// Employees inside a vacation interval.
    pub on_vacation: Vec<&'a Employee>,
    /// Employees on their regular rotation day off.
    pub on_day_off: Vec<&'a Employee>,
    /// Employees pulled in by an emergency-work override.
    pub emergency_work: Vec<&'a Employee>,
    /// Employees excused by an extra-day-off override.
    pub extra_day_off: Vec<&'a Employee>,
    /// Everyone else: a regular working day.
    pub working: Vec<&'a Employee>,
}

/// Resolves the whole roster for one date.
///
/// A pure re-application of [`resolve`] across the roster, grouped into
/// five disjoint sets to answer "who is doing what today".
#[must_use]
pub fn resolve_all<'a>(
    employees: &'a [Employee],
    date: Date,
    overrides: &[ScheduleOverride],
) -> DayRoster<'a> {
    let mut roster: DayRoster<'a> = DayRoster::default();

    for employee in employees {
        match resolve(employee, date, overrides) {
            DayStatus::OnVacation => roster.on_vacation.push(employee),
            DayStatus::CyclicDayOff => roster.on_day_off.push(employee),
            DayStatus::EmergencyWork { .. } => roster.emergency_work.push(employee),
            DayStatus::ExtraDayOff { .. } => roster.extra_day_off.push(employee),
            DayStatus::Working => roster.working.push(employee),
        }
    }

    roster
}
