// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Employee, Trade, validate_employee_fields, validate_roster};
use time::{Date, Month};

fn employee(id: &str, name: &str) -> Employee {
    Employee::new(
        id.to_string(),
        name.to_string(),
        Trade::Mechanic,
        Date::from_calendar_date(2025, Month::December, 1).unwrap(),
        Vec::new(),
    )
}

#[test]
fn test_valid_roster_passes() {
    let roster: Vec<Employee> = vec![
        employee("emp-01", "Valci Jacinto"),
        employee("emp-02", "Mauro Luiz"),
    ];
    assert!(validate_roster(&roster).is_ok());
}

#[test]
fn test_empty_id_is_rejected() {
    let result = validate_employee_fields(&employee("  ", "Valci Jacinto"));
    assert!(matches!(result, Err(DomainError::InvalidEmployeeId(_))));
}

#[test]
fn test_empty_name_is_rejected() {
    let result = validate_employee_fields(&employee("emp-01", ""));
    assert!(matches!(result, Err(DomainError::InvalidEmployeeName(_))));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let roster: Vec<Employee> = vec![
        employee("emp-01", "Valci Jacinto"),
        employee("emp-01", "Mauro Luiz"),
    ];
    assert!(matches!(
        validate_roster(&roster),
        Err(DomainError::DuplicateEmployeeId { .. })
    ));
}

#[test]
fn test_duplicate_name_is_rejected() {
    let roster: Vec<Employee> = vec![
        employee("emp-01", "Valci Jacinto"),
        employee("emp-02", "Valci Jacinto"),
    ];
    assert!(matches!(
        validate_roster(&roster),
        Err(DomainError::DuplicateEmployeeName { .. })
    ));
}

#[test]
fn test_empty_roster_is_valid() {
    assert!(validate_roster(&[]).is_ok());
}
