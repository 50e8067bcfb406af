// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use escala_domain::{OverrideKind, ScheduleOverride};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, Month};

static CACHE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A cache file path unique to this test run so tests can execute in
/// parallel without clobbering each other.
pub fn temp_cache_path() -> PathBuf {
    let counter: u64 = CACHE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "escala-overrides-{}-{counter}.json",
        std::process::id()
    ))
}

pub fn remove_cache(path: &PathBuf) {
    let _ = std::fs::remove_file(path);
}

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn create_test_override(id: &str, employee_name: &str) -> ScheduleOverride {
    ScheduleOverride::new(
        id.to_string(),
        date(2025, Month::December, 9),
        employee_name.to_string(),
        OverrideKind::EmergencyWork,
        None,
    )
}
