// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse a date key from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Trade tag is not recognized.
    InvalidTrade(String),
    /// Override kind discriminator is not recognized.
    InvalidOverrideKind(String),
    /// Employee identifier is empty or invalid.
    InvalidEmployeeId(String),
    /// Employee display name is empty or invalid.
    InvalidEmployeeName(String),
    /// Two roster entries share the same stable identifier.
    DuplicateEmployeeId {
        /// The duplicated identifier.
        employee_id: String,
    },
    /// Two roster entries share the same display name.
    ///
    /// Display names are the override join key, so a duplicate would make
    /// override lookups ambiguous.
    DuplicateEmployeeName {
        /// The duplicated name.
        name: String,
    },
    /// No roster entry carries the given display name.
    EmployeeNotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidTrade(msg) => write!(f, "Invalid trade: {msg}"),
            Self::InvalidOverrideKind(msg) => write!(f, "Invalid override kind: {msg}"),
            Self::InvalidEmployeeId(msg) => write!(f, "Invalid employee id: {msg}"),
            Self::InvalidEmployeeName(msg) => write!(f, "Invalid employee name: {msg}"),
            Self::DuplicateEmployeeId { employee_id } => {
                write!(f, "Employee id '{employee_id}' appears more than once in the roster")
            }
            Self::DuplicateEmployeeName { name } => {
                write!(f, "Employee name '{name}' appears more than once in the roster")
            }
            Self::EmployeeNotFound { name } => {
                write!(f, "Employee '{name}' is not on the roster")
            }
        }
    }
}

impl std::error::Error for DomainError {}
