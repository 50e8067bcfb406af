// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use escala_domain::{Employee, OverrideKind, ScheduleOverride, Trade, VacationInterval};
use time::{Date, Month};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

/// An employee anchored on 2025-12-03 with no vacations (the December 2025
/// scenario roster uses anchors 2025-12-01 through 2025-12-06).
pub fn create_test_employee(id: &str, name: &str, anchor_day: u8) -> Employee {
    Employee::new(
        id.to_string(),
        name.to_string(),
        Trade::Mechanic,
        date(2025, Month::December, anchor_day),
        Vec::new(),
    )
}

/// Same as `create_test_employee` but on vacation 2025-12-22 through
/// 2026-01-10.
pub fn create_vacationing_employee(id: &str, name: &str, anchor_day: u8) -> Employee {
    Employee::new(
        id.to_string(),
        name.to_string(),
        Trade::Electrician,
        date(2025, Month::December, anchor_day),
        vec![VacationInterval::new(
            date(2025, Month::December, 22),
            date(2026, Month::January, 10),
        )],
    )
}

pub fn create_override(
    id: &str,
    target: Date,
    employee_name: &str,
    kind: OverrideKind,
) -> ScheduleOverride {
    ScheduleOverride::new(
        id.to_string(),
        target,
        employee_name.to_string(),
        kind,
        None,
    )
}
