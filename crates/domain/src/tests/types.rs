// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DayStatus, Employee, OverrideKind, ScheduleOverride, Trade, VacationInterval};
use std::str::FromStr;
use time::{Date, Month};

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

#[test]
fn test_trade_parse_round_trip() {
    assert_eq!(Trade::from_str("mechanic").unwrap(), Trade::Mechanic);
    assert_eq!(Trade::from_str("electrician").unwrap(), Trade::Electrician);
    assert_eq!(Trade::Mechanic.as_str(), "mechanic");
    assert_eq!(Trade::Electrician.as_str(), "electrician");
}

#[test]
fn test_trade_rejects_unknown_tag() {
    assert!(Trade::from_str("plumber").is_err());
    assert!(Trade::from_str("").is_err());
}

#[test]
fn test_trade_glyph_selection() {
    assert_eq!(Trade::Mechanic.glyph(), "wrench");
    assert_eq!(Trade::Electrician.glyph(), "zap");
}

#[test]
fn test_override_kind_parse_round_trip() {
    assert_eq!(
        OverrideKind::from_str("emergency_work").unwrap(),
        OverrideKind::EmergencyWork
    );
    assert_eq!(
        OverrideKind::from_str("extra_day_off").unwrap(),
        OverrideKind::ExtraDayOff
    );
    assert!(OverrideKind::from_str("sick_leave").is_err());
}

#[test]
fn test_schedule_override_wire_shape() {
    let ovr: ScheduleOverride = ScheduleOverride::new(
        String::from("ovr-abc123"),
        date(2025, Month::December, 9),
        String::from("Valci Jacinto"),
        OverrideKind::EmergencyWork,
        Some(String::from("Pump failure")),
    );

    let json: serde_json::Value = serde_json::to_value(&ovr).unwrap();
    assert_eq!(json["id"], "ovr-abc123");
    assert_eq!(json["date"], "2025-12-09");
    assert_eq!(json["employeeName"], "Valci Jacinto");
    assert_eq!(json["type"], "emergency_work");
    assert_eq!(json["note"], "Pump failure");
}

#[test]
fn test_schedule_override_note_is_omitted_when_absent() {
    let ovr: ScheduleOverride = ScheduleOverride::new(
        String::from("ovr-xyz789"),
        date(2025, Month::December, 10),
        String::from("Mauro Luiz"),
        OverrideKind::ExtraDayOff,
        None,
    );

    let json: serde_json::Value = serde_json::to_value(&ovr).unwrap();
    assert!(json.get("note").is_none());
    assert_eq!(json["type"], "extra_day_off");
}

#[test]
fn test_schedule_override_deserializes_from_wire_form() {
    let raw: &str = r#"{
        "id": "ovr-1",
        "date": "2025-12-22",
        "employeeName": "Manuel Gonçalves",
        "type": "extra_day_off"
    }"#;

    let ovr: ScheduleOverride = serde_json::from_str(raw).unwrap();
    assert_eq!(ovr.date, date(2025, Month::December, 22));
    assert_eq!(ovr.employee_name, "Manuel Gonçalves");
    assert_eq!(ovr.kind, OverrideKind::ExtraDayOff);
    assert_eq!(ovr.note, None);
}

#[test]
fn test_override_applies_to_matches_on_date_and_name() {
    let ovr: ScheduleOverride = ScheduleOverride::new(
        String::from("ovr-1"),
        date(2025, Month::December, 9),
        String::from("Alan Pereira"),
        OverrideKind::EmergencyWork,
        None,
    );

    assert!(ovr.applies_to(date(2025, Month::December, 9), "Alan Pereira"));
    assert!(!ovr.applies_to(date(2025, Month::December, 10), "Alan Pereira"));
    assert!(!ovr.applies_to(date(2025, Month::December, 9), "Mauro Luiz"));
}

#[test]
fn test_day_status_off_duty_classification() {
    assert!(!DayStatus::Working.is_off_duty());
    assert!(DayStatus::CyclicDayOff.is_off_duty());
    assert!(DayStatus::OnVacation.is_off_duty());
    assert!(!DayStatus::EmergencyWork { note: None }.is_off_duty());
    assert!(DayStatus::ExtraDayOff { note: None }.is_off_duty());
}

#[test]
fn test_day_status_labels() {
    assert_eq!(DayStatus::Working.as_str(), "working");
    assert_eq!(DayStatus::CyclicDayOff.as_str(), "cyclic_day_off");
    assert_eq!(DayStatus::OnVacation.as_str(), "on_vacation");
    assert_eq!(DayStatus::EmergencyWork { note: None }.as_str(), "emergency_work");
    assert_eq!(DayStatus::ExtraDayOff { note: None }.as_str(), "extra_day_off");
}

#[test]
fn test_employee_serde_round_trip() {
    let employee: Employee = Employee::new(
        String::from("emp-06"),
        String::from("Manuel Gonçalves"),
        Trade::Mechanic,
        date(2025, Month::December, 5),
        vec![VacationInterval::new(
            date(2025, Month::December, 22),
            date(2026, Month::January, 10),
        )],
    );

    let json: String = serde_json::to_string(&employee).unwrap();
    let parsed: Employee = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, employee);
}

#[test]
fn test_employee_vacations_default_to_empty() {
    let raw: &str = r#"{
        "employeeId": "emp-01",
        "name": "Valci Jacinto",
        "trade": "mechanic",
        "anchorDate": "2025-12-01"
    }"#;

    let employee: Employee = serde_json::from_str(raw).unwrap();
    assert!(employee.vacations.is_empty());
}
