// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Manual schedule overrides.
//!
//! An override is a single user-entered exception superseding the computed
//! baseline status for one employee on one date. Overrides persist until
//! deleted by id; there is no automatic expiry.

use crate::dates::iso_date;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The two kinds of manual exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// Pull the employee in despite being otherwise off.
    EmergencyWork,
    /// Excuse the employee from an otherwise-working day.
    ExtraDayOff,
}

impl FromStr for OverrideKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emergency_work" => Ok(Self::EmergencyWork),
            "extra_day_off" => Ok(Self::ExtraDayOff),
            _ => Err(DomainError::InvalidOverrideKind(format!(
                "Unknown override kind: {s} (must be emergency_work or extra_day_off)"
            ))),
        }
    }
}

impl std::fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OverrideKind {
    /// Converts this kind to its wire discriminator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmergencyWork => "emergency_work",
            Self::ExtraDayOff => "extra_day_off",
        }
    }
}

/// A single manual schedule exception.
///
/// Wire/storage shape:
/// `{ "id": "...", "date": "YYYY-MM-DD", "employeeName": "...",
///    "type": "emergency_work" | "extra_day_off", "note": "..." }`.
///
/// Overrides join to employees through the display name, not the stable
/// `employee_id`. At most one override is intended per (date, employee)
/// pair; the store does not enforce this, so readers must tolerate
/// duplicates (first match in collection order wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverride {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// The target calendar day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The employee's display name (join key).
    pub employee_name: String,
    /// The exception kind.
    #[serde(rename = "type")]
    pub kind: OverrideKind,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ScheduleOverride {
    /// Creates a new `ScheduleOverride`.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `date` - The target calendar day
    /// * `employee_name` - The employee's display name
    /// * `kind` - The exception kind
    /// * `note` - Optional free-text note
    #[must_use]
    pub const fn new(
        id: String,
        date: Date,
        employee_name: String,
        kind: OverrideKind,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            date,
            employee_name,
            kind,
            note,
        }
    }

    /// Returns whether this override targets the given (date, employee)
    /// pair.
    #[must_use]
    pub fn applies_to(&self, date: Date, employee_name: &str) -> bool {
        self.date == date && self.employee_name == employee_name
    }
}
