// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Escala work-status engine.
//!
//! Operations here parse boundary input (date strings, kind discriminators),
//! enforce the override creation rules, and translate domain/persistence
//! errors into the API contract. Nothing below this layer sees raw request
//! data and nothing above it sees domain errors.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod override_rules;
mod request_response;
mod roster_csv;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use override_rules::{OverrideRuleError, validate_override_creation};
pub use request_response::{
    CreateOverrideRequest, DayScheduleResponse, DaySummary, EmployeeResponse,
    MonthScheduleResponse, OffDutyEntry, OffDutyReason, OverrideResponse,
};
pub use roster_csv::import_roster_csv;

use escala::{DayRoster, eligible_for, resolve_all};
use escala_domain::{
    DomainError, Employee, OverrideKind, ScheduleOverride, parse_date,
};
use escala_persistence::OverrideStore;
use std::str::FromStr;
use time::{Date, Month};
use tracing::info;

/// Resolves the full roster for one date.
///
/// # Errors
///
/// Returns an error if the date string does not parse.
pub fn day_schedule(
    employees: &[Employee],
    date_str: &str,
    overrides: &[ScheduleOverride],
) -> Result<DayScheduleResponse, ApiError> {
    let date: Date = parse_date(date_str).map_err(translate_domain_error)?;
    let roster: DayRoster<'_> = resolve_all(employees, date, overrides);
    Ok(DayScheduleResponse::from_roster(date, &roster))
}

/// Builds per-day summaries for a calendar month.
///
/// Each summary carries the vacation/day-off indicator flags and the
/// off-duty board for that day. Employees pulled in by an emergency work
/// override are working and never appear on the board.
///
/// # Errors
///
/// Returns an error if the month is not 1-12 or the year is out of the
/// supported calendar range.
pub fn month_schedule(
    employees: &[Employee],
    year: i32,
    month: u8,
    overrides: &[ScheduleOverride],
) -> Result<MonthScheduleResponse, ApiError> {
    let month_of_year: Month = Month::try_from(month).map_err(|e| ApiError::InvalidInput {
        field: String::from("month"),
        message: e.to_string(),
    })?;

    let day_count: u8 = time::util::days_in_month(month_of_year, year);
    let mut days: Vec<DaySummary> = Vec::with_capacity(usize::from(day_count));

    for day in 1..=day_count {
        let date: Date = Date::from_calendar_date(year, month_of_year, day).map_err(|e| {
            ApiError::InvalidInput {
                field: String::from("year"),
                message: e.to_string(),
            }
        })?;

        let roster: DayRoster<'_> = resolve_all(employees, date, overrides);

        let mut off_duty: Vec<OffDutyEntry> = Vec::new();
        for employee in &roster.on_day_off {
            off_duty.push(off_duty_entry(employee, OffDutyReason::Regular));
        }
        for employee in &roster.on_vacation {
            off_duty.push(off_duty_entry(employee, OffDutyReason::Vacation));
        }
        for employee in &roster.extra_day_off {
            off_duty.push(off_duty_entry(employee, OffDutyReason::Extra));
        }

        days.push(DaySummary {
            date,
            has_vacation: !roster.on_vacation.is_empty(),
            has_day_off: !roster.on_day_off.is_empty() || !roster.extra_day_off.is_empty(),
            off_duty,
        });
    }

    Ok(MonthScheduleResponse { year, month, days })
}

fn off_duty_entry(employee: &Employee, reason: OffDutyReason) -> OffDutyEntry {
    OffDutyEntry {
        name: employee.name.clone(),
        trade: employee.trade.as_str().to_string(),
        reason,
    }
}

/// Lists the employees for whom creating an override of the given kind on
/// the given date is legal.
///
/// # Errors
///
/// Returns an error if the kind discriminator or the date string does not
/// parse.
pub fn eligible_employees(
    kind_str: &str,
    date_str: &str,
    employees: &[Employee],
    overrides: &[ScheduleOverride],
) -> Result<Vec<EmployeeResponse>, ApiError> {
    let kind: OverrideKind = OverrideKind::from_str(kind_str).map_err(translate_domain_error)?;
    let date: Date = parse_date(date_str).map_err(translate_domain_error)?;

    Ok(eligible_for(kind, date, employees, overrides)
        .into_iter()
        .map(EmployeeResponse::from)
        .collect())
}

/// Lists the configured roster with trade glyph names.
#[must_use]
pub fn list_roster(employees: &[Employee]) -> Vec<EmployeeResponse> {
    employees.iter().map(EmployeeResponse::from).collect()
}

/// Lists the current override collection.
pub async fn list_overrides(store: &OverrideStore) -> Vec<OverrideResponse> {
    store
        .load()
        .await
        .into_iter()
        .map(OverrideResponse::from)
        .collect()
}

/// Creates a new override after validating the creation rules.
///
/// # Errors
///
/// Returns an error if the request does not parse, the employee is not on
/// the roster, a creation rule is violated, or persisting the override
/// fails.
pub async fn create_override(
    store: &OverrideStore,
    employees: &[Employee],
    request: CreateOverrideRequest,
) -> Result<OverrideResponse, ApiError> {
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;
    let kind: OverrideKind =
        OverrideKind::from_str(&request.kind).map_err(translate_domain_error)?;

    let employee: &Employee = employees
        .iter()
        .find(|e| e.name == request.employee_name)
        .ok_or_else(|| {
            translate_domain_error(DomainError::EmployeeNotFound {
                name: request.employee_name.clone(),
            })
        })?;

    let overrides: Vec<ScheduleOverride> = store.load().await;
    validate_override_creation(employee, date, kind, &overrides)?;

    let created: ScheduleOverride = store
        .create(date, request.employee_name, kind, request.note)
        .await
        .map_err(translate_persistence_error)?;

    info!(
        "Created {} override {} for '{}' on {date}",
        kind.as_str(),
        created.id,
        created.employee_name
    );
    Ok(OverrideResponse::from(created))
}

/// Deletes an override by id.
///
/// # Errors
///
/// Returns an error if no override carries the id or persisting the
/// updated collection fails.
pub async fn delete_override(store: &OverrideStore, id: &str) -> Result<(), ApiError> {
    store
        .delete(id)
        .await
        .map_err(translate_persistence_error)?;

    info!("Deleted override {id}");
    Ok(())
}
