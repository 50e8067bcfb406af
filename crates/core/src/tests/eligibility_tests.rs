// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_override, create_test_employee, create_vacationing_employee, date,
};
use crate::{baseline, eligible_for};
use escala_domain::{DayStatus, Employee, OverrideKind, ScheduleOverride};
use time::Month;

#[test]
fn test_emergency_work_requires_baseline_off() {
    let employees: Vec<Employee> = vec![
        create_test_employee("emp-01", "Valci Jacinto", 3), // off on 12-09
        create_test_employee("emp-02", "Mauro Luiz", 1),    // working on 12-09
    ];
    let target = date(2025, Month::December, 9);

    let eligible: Vec<&Employee> =
        eligible_for(OverrideKind::EmergencyWork, target, &employees, &[]);

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].name, "Valci Jacinto");
}

#[test]
fn test_extra_day_off_requires_baseline_working() {
    let employees: Vec<Employee> = vec![
        create_test_employee("emp-01", "Valci Jacinto", 3), // off on 12-09
        create_test_employee("emp-02", "Mauro Luiz", 1),    // working on 12-09
    ];
    let target = date(2025, Month::December, 9);

    let eligible: Vec<&Employee> =
        eligible_for(OverrideKind::ExtraDayOff, target, &employees, &[]);

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].name, "Mauro Luiz");
}

#[test]
fn test_vacationing_employee_is_eligible_for_emergency_work() {
    let employees: Vec<Employee> =
        vec![create_vacationing_employee("emp-06", "Manuel Gonçalves", 5)];
    let target = date(2025, Month::December, 30);

    let eligible: Vec<&Employee> =
        eligible_for(OverrideKind::EmergencyWork, target, &employees, &[]);
    assert_eq!(eligible.len(), 1);

    let eligible: Vec<&Employee> =
        eligible_for(OverrideKind::ExtraDayOff, target, &employees, &[]);
    assert!(eligible.is_empty());
}

#[test]
fn test_existing_override_blocks_both_kinds() {
    // Employee normally off on 2025-12-09, holding an emergency_work
    // override for that date: excluded from emergency_work (already
    // overridden) and from extra_day_off (baseline is off, not working).
    let employees: Vec<Employee> = vec![create_test_employee("emp-01", "Valci Jacinto", 3)];
    let target = date(2025, Month::December, 9);
    let overrides: Vec<ScheduleOverride> = vec![create_override(
        "ovr-1",
        target,
        "Valci Jacinto",
        OverrideKind::EmergencyWork,
    )];

    assert_eq!(baseline(&employees[0], target), DayStatus::CyclicDayOff);
    assert!(eligible_for(OverrideKind::EmergencyWork, target, &employees, &overrides).is_empty());
    assert!(eligible_for(OverrideKind::ExtraDayOff, target, &employees, &overrides).is_empty());
}

#[test]
fn test_override_on_other_date_does_not_block() {
    let employees: Vec<Employee> = vec![create_test_employee("emp-01", "Valci Jacinto", 3)];
    let overrides: Vec<ScheduleOverride> = vec![create_override(
        "ovr-1",
        date(2025, Month::December, 9),
        "Valci Jacinto",
        OverrideKind::EmergencyWork,
    )];

    // 2025-12-15 is also a cyclic day off; the 12-09 override is unrelated.
    let eligible: Vec<&Employee> = eligible_for(
        OverrideKind::EmergencyWork,
        date(2025, Month::December, 15),
        &employees,
        &overrides,
    );
    assert_eq!(eligible.len(), 1);
}

#[test]
fn test_eligibility_never_includes_working_baseline_for_emergency() {
    let employees: Vec<Employee> = vec![
        create_test_employee("emp-01", "Valci Jacinto", 1),
        create_test_employee("emp-02", "Mauro Luiz", 2),
        create_test_employee("emp-03", "Antonio Marcos", 3),
    ];
    let target = date(2025, Month::December, 20);

    for employee in eligible_for(OverrideKind::EmergencyWork, target, &employees, &[]) {
        assert_ne!(baseline(employee, target), DayStatus::Working);
    }
    for employee in eligible_for(OverrideKind::ExtraDayOff, target, &employees, &[]) {
        assert_eq!(baseline(employee, target), DayStatus::Working);
    }
}

#[test]
fn test_eligibility_preserves_roster_order() {
    let employees: Vec<Employee> = vec![
        create_test_employee("emp-01", "Valci Jacinto", 1),
        create_test_employee("emp-02", "Mauro Luiz", 1),
        create_test_employee("emp-03", "Antonio Marcos", 1),
    ];
    // All three share the anchor, so all are off on it.
    let eligible: Vec<&Employee> = eligible_for(
        OverrideKind::EmergencyWork,
        date(2025, Month::December, 1),
        &employees,
        &[],
    );

    let names: Vec<&str> = eligible.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Valci Jacinto", "Mauro Luiz", "Antonio Marcos"]);
}
