// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster configuration validation.

use crate::error::DomainError;
use crate::types::Employee;
use std::collections::HashSet;

/// Validates a single employee's identity fields.
///
/// # Errors
///
/// Returns an error if the stable identifier or the display name is empty
/// or whitespace-only.
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.employee_id.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeId(String::from(
            "Employee id must not be empty",
        )));
    }
    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeName(String::from(
            "Employee name must not be empty",
        )));
    }
    Ok(())
}

/// Validates a complete roster.
///
/// Checks every entry's identity fields and rejects duplicate stable
/// identifiers and duplicate display names. Names must be unique because
/// they are the override join key.
///
/// # Errors
///
/// Returns the first `DomainError` encountered.
pub fn validate_roster(employees: &[Employee]) -> Result<(), DomainError> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut seen_names: HashSet<&str> = HashSet::new();

    for employee in employees {
        validate_employee_fields(employee)?;

        if !seen_ids.insert(employee.employee_id.as_str()) {
            return Err(DomainError::DuplicateEmployeeId {
                employee_id: employee.employee_id.clone(),
            });
        }
        if !seen_names.insert(employee.name.as_str()) {
            return Err(DomainError::DuplicateEmployeeName {
                name: employee.name.clone(),
            });
        }
    }

    Ok(())
}
