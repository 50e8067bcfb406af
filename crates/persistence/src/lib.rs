// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Escala work-status engine.
//!
//! Overrides live in a local JSON cache file, optionally synced with a
//! remote document store. The local file is the source of truth; remote
//! sync is best-effort and never blocks an operation from completing
//! locally. See [`OverrideStore`] for the sync rules.

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

mod error;
mod remote;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use remote::RemoteConfig;
pub use store::OverrideStore;
