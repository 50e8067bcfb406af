// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod overrides;
mod rotation;
mod status;
mod types;
mod vacation;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use dates::{iso_date, parse_date};
pub use error::DomainError;
pub use overrides::{OverrideKind, ScheduleOverride};
pub use rotation::{ROTATION_PERIOD_DAYS, is_cyclic_day_off};
pub use status::DayStatus;
pub use types::{Employee, Trade};
pub use vacation::{VacationInterval, is_on_vacation};
pub use validation::{validate_employee_fields, validate_roster};
