// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use escala_domain::{Employee, Trade, VacationInterval};
use escala_persistence::OverrideStore;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, Month};

static STORE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

/// A local-only store on a cache path unique to this test.
pub fn temp_store() -> (OverrideStore, PathBuf) {
    let counter: u64 = STORE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path: PathBuf = std::env::temp_dir().join(format!(
        "escala-api-overrides-{}-{counter}.json",
        std::process::id()
    ));
    (OverrideStore::local_only(&path), path)
}

pub fn remove_cache(path: &PathBuf) {
    let _ = std::fs::remove_file(path);
}

/// A small December 2025 roster: two mechanics on staggered anchors and an
/// electrician on vacation 2025-12-22 through 2026-01-10.
pub fn test_roster() -> Vec<Employee> {
    vec![
        Employee::new(
            String::from("emp-01"),
            String::from("Valci Jacinto"),
            Trade::Mechanic,
            date(2025, Month::December, 3),
            Vec::new(),
        ),
        Employee::new(
            String::from("emp-02"),
            String::from("Mauro Luiz"),
            Trade::Mechanic,
            date(2025, Month::December, 1),
            Vec::new(),
        ),
        Employee::new(
            String::from("emp-06"),
            String::from("Manuel Gonçalves"),
            Trade::Electrician,
            date(2025, Month::December, 5),
            vec![VacationInterval::new(
                date(2025, Month::December, 22),
                date(2026, Month::January, 10),
            )],
        ),
    ]
}
