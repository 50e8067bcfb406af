// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::override_rules::OverrideRuleError;
use escala_domain::DomainError;
use escala_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A scheduling rule was violated.
    RuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The CSV roster data could not be parsed.
    InvalidCsvFormat {
        /// A description of the format problem.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::RuleViolation { rule, message } => {
                write!(f, "Rule violation ({rule}): {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<OverrideRuleError> for ApiError {
    fn from(err: OverrideRuleError) -> Self {
        let rule: &str = match err {
            OverrideRuleError::DuplicateOverride { .. } => "no_duplicate_override",
            OverrideRuleError::NotEligibleForEmergencyWork { .. } => {
                "emergency_work_requires_day_off"
            }
            OverrideRuleError::NotEligibleForExtraDayOff { .. } => {
                "extra_day_off_requires_working_day"
            }
        };
        Self::RuleViolation {
            rule: String::from(rule),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidTrade(msg) => ApiError::InvalidInput {
            field: String::from("trade"),
            message: msg,
        },
        DomainError::InvalidOverrideKind(msg) => ApiError::InvalidInput {
            field: String::from("type"),
            message: msg,
        },
        DomainError::InvalidEmployeeId(msg) => ApiError::InvalidInput {
            field: String::from("employee_id"),
            message: msg,
        },
        DomainError::InvalidEmployeeName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::DuplicateEmployeeId { employee_id } => ApiError::RuleViolation {
            rule: String::from("unique_employee_id"),
            message: format!("Employee id '{employee_id}' appears more than once"),
        },
        DomainError::DuplicateEmployeeName { name } => ApiError::RuleViolation {
            rule: String::from("unique_employee_name"),
            message: format!("Employee name '{name}' appears more than once"),
        },
        DomainError::EmployeeNotFound { name } => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee '{name}' is not on the roster"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures persistence errors are not
/// leaked directly.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::OverrideNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Override"),
            message: format!("Override '{id}' does not exist"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
