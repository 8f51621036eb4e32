// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Fleetwerk.

use thiserror::Error;

/// Top-level error type for all Fleetwerk operations.
#[derive(Debug, Error)]
pub enum FleetError {
    // -- Snapshot errors --
    #[error(
        "snapshot record {} is missing required field `{field}`",
        .key.as_deref().unwrap_or("<no key>")
    )]
    MissingField {
        /// Key of the offending record, if the key itself was present.
        key: Option<String>,
        field: &'static str,
    },

    #[error("snapshot could not be decoded: {0}")]
    Snapshot(String),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    // -- I/O / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FleetError>;
