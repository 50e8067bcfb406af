// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading or writing the local cache file failed.
    Io(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// The remote document store could not be reached.
    RemoteUnavailable(String),
    /// The remote document store answered with a non-success status.
    RemoteStatus(u16),
    /// The requested override was not found.
    OverrideNotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::RemoteUnavailable(msg) => write!(f, "Remote store unavailable: {msg}"),
            Self::RemoteStatus(status) => {
                write!(f, "Remote store answered with status {status}")
            }
            Self::OverrideNotFound(id) => write!(f, "Override not found: {id}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for PersistenceError {
    fn from(err: reqwest::Error) -> Self {
        Self::RemoteUnavailable(err.to_string())
    }
}
