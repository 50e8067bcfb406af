// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Override creation rules.
//!
//! This module enforces the legality rules for creating a new override.
//! The store stays permissive; this boundary check is the only place the
//! rules are applied.

use escala::baseline;
use escala_domain::{Employee, OverrideKind, ScheduleOverride};
use thiserror::Error;
use time::Date;

/// Override creation rule errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideRuleError {
    /// An override already exists for this (date, employee) pair.
    #[error("An override already exists for '{employee_name}' on {date}")]
    DuplicateOverride { employee_name: String, date: Date },

    /// Emergency work can only be assigned to an employee who would
    /// otherwise be off duty.
    #[error("'{employee_name}' is scheduled to work on {date}; emergency work only applies to an employee who is off duty")]
    NotEligibleForEmergencyWork { employee_name: String, date: Date },

    /// An extra day off can only be granted to an employee who would
    /// otherwise work.
    #[error("'{employee_name}' is already off duty on {date}; an extra day off only applies to an employee who is working")]
    NotEligibleForExtraDayOff { employee_name: String, date: Date },
}

/// Validates that creating an override of `kind` for `employee` on `date`
/// is legal given the current override collection.
///
/// # Errors
///
/// Returns an `OverrideRuleError` if the pair already has an override or
/// the employee's baseline status is incompatible with the requested kind.
pub fn validate_override_creation(
    employee: &Employee,
    date: Date,
    kind: OverrideKind,
    overrides: &[ScheduleOverride],
) -> Result<(), OverrideRuleError> {
    let already_overridden: bool = overrides
        .iter()
        .any(|ovr| ovr.applies_to(date, &employee.name));
    if already_overridden {
        return Err(OverrideRuleError::DuplicateOverride {
            employee_name: employee.name.clone(),
            date,
        });
    }

    let baseline_off: bool = baseline(employee, date).is_off_duty();
    match kind {
        OverrideKind::EmergencyWork if !baseline_off => {
            Err(OverrideRuleError::NotEligibleForEmergencyWork {
                employee_name: employee.name.clone(),
                date,
            })
        }
        OverrideKind::ExtraDayOff if baseline_off => {
            Err(OverrideRuleError::NotEligibleForExtraDayOff {
                employee_name: employee.name.clone(),
                date,
            })
        }
        _ => Ok(()),
    }
}
