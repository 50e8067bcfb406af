// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use escala::DayRoster;
use escala_domain::{Employee, OverrideKind, ScheduleOverride, iso_date};
use time::Date;

/// API request to create a new schedule override.
///
/// The date arrives as an ISO `YYYY-MM-DD` string and is parsed at the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOverrideRequest {
    /// The target calendar day (ISO `YYYY-MM-DD`).
    pub date: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The override kind discriminator (`emergency_work` or
    /// `extra_day_off`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

/// API response describing a single override.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideResponse {
    /// The override identifier.
    pub id: String,
    /// The target calendar day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The employee's display name.
    pub employee_name: String,
    /// The override kind.
    #[serde(rename = "type")]
    pub kind: OverrideKind,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<ScheduleOverride> for OverrideResponse {
    fn from(ovr: ScheduleOverride) -> Self {
        Self {
            id: ovr.id,
            date: ovr.date,
            employee_name: ovr.employee_name,
            kind: ovr.kind,
            note: ovr.note,
        }
    }
}

/// Roster entry with its display glyph.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// The stable employee identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// The trade tag.
    pub trade: String,
    /// The glyph name for the trade.
    pub glyph: String,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            trade: employee.trade.as_str().to_string(),
            glyph: employee.trade.glyph().to_string(),
        }
    }
}

/// API response for a single day: the roster partitioned by resolved
/// status. The five groups are disjoint and cover the whole roster.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScheduleResponse {
    /// The resolved calendar day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Employees working their regular rotation.
    pub working: Vec<EmployeeResponse>,
    /// Employees on their cyclic day off.
    pub on_day_off: Vec<EmployeeResponse>,
    /// Employees on vacation.
    pub on_vacation: Vec<EmployeeResponse>,
    /// Employees pulled in by an emergency work override.
    pub emergency_work: Vec<EmployeeResponse>,
    /// Employees excused by an extra day off override.
    pub extra_day_off: Vec<EmployeeResponse>,
}

impl DayScheduleResponse {
    pub(crate) fn from_roster(date: Date, roster: &DayRoster<'_>) -> Self {
        fn entries(group: &[&Employee]) -> Vec<EmployeeResponse> {
            group.iter().copied().map(EmployeeResponse::from).collect()
        }

        Self {
            date,
            working: entries(&roster.working),
            on_day_off: entries(&roster.on_day_off),
            on_vacation: entries(&roster.on_vacation),
            emergency_work: entries(&roster.emergency_work),
            extra_day_off: entries(&roster.extra_day_off),
        }
    }
}

/// Why an employee appears on the off-duty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffDutyReason {
    /// Regular cyclic day off.
    Regular,
    /// On vacation.
    Vacation,
    /// Extra day off override.
    Extra,
}

/// One off-duty board entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffDutyEntry {
    /// The employee's display name.
    pub name: String,
    /// The trade tag.
    pub trade: String,
    /// Why the employee is off duty.
    pub reason: OffDutyReason,
}

/// Per-day summary within a month schedule.
///
/// Employees pulled in by an emergency work override are working and never
/// appear on the off-duty board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// The calendar day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Whether anyone is on vacation this day.
    pub has_vacation: bool,
    /// Whether anyone has a day off this day (cyclic or extra).
    pub has_day_off: bool,
    /// Everyone off duty this day, in roster order per group.
    pub off_duty: Vec<OffDutyEntry>,
}

/// API response for a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthScheduleResponse {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u8,
    /// One summary per day of the month, in order.
    pub days: Vec<DaySummary>,
}
