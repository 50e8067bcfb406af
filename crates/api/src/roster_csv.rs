// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV roster import.
//!
//! The roster is immutable configuration loaded once at startup. Rows are
//! validated individually and all errors are collected with their row
//! numbers so a bad file is reported in one pass.

use csv::StringRecord;
use escala_domain::{Employee, Trade, VacationInterval, parse_date, validate_roster};
use std::collections::HashMap;
use std::str::FromStr;
use time::Date;

use crate::error::{ApiError, translate_domain_error};

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["employee_id", "name", "trade", "anchor_date"];

/// Optional vacations column: `start..end` intervals joined by `;`.
const VACATIONS_HEADER: &str = "vacations";

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant
/// matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        let normalized: String = normalize_header(header);
        header_map.insert(normalized, idx);
    }

    let mut missing: Vec<String> = Vec::new();
    for required in REQUIRED_HEADERS {
        if !header_map.contains_key(*required) {
            missing.push(String::from(*required));
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Parses the optional vacations cell: `start..end` intervals joined by `;`.
fn parse_vacations(cell: &str) -> Result<Vec<VacationInterval>, String> {
    let mut intervals: Vec<VacationInterval> = Vec::new();

    for part in cell.split(';') {
        let part: &str = part.trim();
        if part.is_empty() {
            continue;
        }

        let Some((start_str, end_str)) = part.split_once("..") else {
            return Err(format!(
                "vacations: interval '{part}' is not in start..end form"
            ));
        };

        let start: Date =
            parse_date(start_str.trim()).map_err(|e| format!("vacations: {e}"))?;
        let end: Date = parse_date(end_str.trim()).map_err(|e| format!("vacations: {e}"))?;
        intervals.push(VacationInterval::new(start, end));
    }

    Ok(intervals)
}

/// Parses a CSV row into an `Employee` if possible.
///
/// Returns `Err(Vec<String>)` with one message per problem found.
fn parse_csv_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<Employee, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut required = |name: &str| -> String {
        get_field(name).unwrap_or_else(|| {
            errors.push(format!("{name}: required field is missing or empty"));
            String::new()
        })
    };

    let employee_id: String = required("employee_id");
    let name: String = required("name");
    let trade_str: String = required("trade");
    let anchor_str: String = required("anchor_date");

    if !errors.is_empty() {
        return Err(errors);
    }

    let trade: Trade = match Trade::from_str(&trade_str) {
        Ok(trade) => trade,
        Err(e) => {
            errors.push(format!("trade: {e}"));
            return Err(errors);
        }
    };

    let anchor_date: Date = match parse_date(&anchor_str) {
        Ok(date) => date,
        Err(e) => {
            errors.push(format!("anchor_date: {e}"));
            return Err(errors);
        }
    };

    let vacations: Vec<VacationInterval> = match get_field(VACATIONS_HEADER) {
        Some(cell) => match parse_vacations(&cell) {
            Ok(intervals) => intervals,
            Err(e) => {
                errors.push(e);
                return Err(errors);
            }
        },
        None => Vec::new(),
    };

    Ok(Employee::new(employee_id, name, trade, anchor_date, vacations))
}

/// Imports a roster from CSV content.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if headers are missing or any row
/// fails to parse (all row errors are collected and reported together), or
/// a rule violation if the parsed roster contains duplicate ids or names.
pub fn import_roster_csv(csv_content: &str) -> Result<Vec<Employee>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut employees: Vec<Employee> = Vec::new();
    let mut row_errors: Vec<String> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                row_errors.push(format!("row {row_number}: CSV parse error: {e}"));
                continue;
            }
        };

        match parse_csv_row(&record, &header_map) {
            Ok(employee) => employees.push(employee),
            Err(errors) => {
                for error in errors {
                    row_errors.push(format!("row {row_number}: {error}"));
                }
            }
        }
    }

    if !row_errors.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: row_errors.join("; "),
        });
    }

    validate_roster(&employees).map_err(translate_domain_error)?;

    Ok(employees)
}
