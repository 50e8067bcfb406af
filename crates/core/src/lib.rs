// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status resolution engine.
//!
//! Everything here is synchronous, pure, and single-threaded: the functions
//! read an immutable roster and an override snapshot passed by value and
//! never touch storage. Storage lifecycle lives in `escala-persistence`;
//! callers load a snapshot there and hand it to this crate.

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

mod eligibility;
mod resolve;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use eligibility::eligible_for;
pub use resolve::{DayRoster, baseline, resolve, resolve_all};
