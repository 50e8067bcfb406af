// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::iso_date;
use crate::error::DomainError;
use crate::vacation::VacationInterval;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Represents an employee's trade classification.
///
/// The trade is informational only: it selects a display glyph and has no
/// effect on status resolution or eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trade {
    /// Maintenance mechanic.
    Mechanic,
    /// Maintenance electrician.
    Electrician,
}

impl FromStr for Trade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mechanic" => Ok(Self::Mechanic),
            "electrician" => Ok(Self::Electrician),
            _ => Err(DomainError::InvalidTrade(format!(
                "Unknown trade: {s} (must be mechanic or electrician)"
            ))),
        }
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Trade {
    /// Converts this trade to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mechanic => "mechanic",
            Self::Electrician => "electrician",
        }
    }

    /// Returns the icon name the presentation layer uses for this trade.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Mechanic => "wrench",
            Self::Electrician => "zap",
        }
    }
}

/// Represents one employee on the roster.
///
/// The roster is immutable deployment configuration: employees are not
/// created or destroyed at runtime. `employee_id` is the stable internal
/// identifier; `name` doubles as the override join key (a weak reference —
/// renaming an employee orphans their existing overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable internal identifier (opaque, immutable).
    pub employee_id: String,
    /// Display name, unique per roster. Also the override join key.
    pub name: String,
    /// Trade classification (display glyph only).
    pub trade: Trade,
    /// A calendar date known to be a regular rotation day off for this
    /// employee. All cyclic calculations are relative to it.
    #[serde(with = "iso_date")]
    pub anchor_date: Date,
    /// Zero or more vacation intervals. Not required to be disjoint or
    /// sorted.
    #[serde(default)]
    pub vacations: Vec<VacationInterval>,
}

impl Employee {
    /// Creates a new `Employee`.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The stable internal identifier
    /// * `name` - The display name
    /// * `trade` - The trade classification
    /// * `anchor_date` - A known regular day off
    /// * `vacations` - Vacation intervals (may be empty)
    #[must_use]
    pub const fn new(
        employee_id: String,
        name: String,
        trade: Trade,
        anchor_date: Date,
        vacations: Vec<VacationInterval>,
    ) -> Self {
        Self {
            employee_id,
            name,
            trade,
            anchor_date,
            vacations,
        }
    }
}
