// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operator-facing messages for monitor errors.
//
// Every technical error is mapped to plain English with a clear suggestion,
// so a failed poll tick can be shown on the wall display instead of a stack
// of serde details.

use crate::error::FleetError;

/// Severity of an error from the operator's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The next poll will likely succeed.
    Transient,
    /// Somebody has to fix a file or the backend.
    ActionRequired,
    /// Retrying will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the operator should try.
    pub suggestion: String,
    /// Whether the poller keeps retrying on its own.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `FleetError` into a `HumanError`.
pub fn humanize_error(err: &FleetError) -> HumanError {
    match err {
        FleetError::MissingField { key, field } => HumanError {
            message: match key {
                Some(key) => format!("Printer '{key}' sent incomplete data."),
                None => "A printer sent data without an identifier.".into(),
            },
            suggestion: format!(
                "The monitor backend left out `{field}`. Check the backend's printer configuration."
            ),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        FleetError::Snapshot(_) => HumanError {
            message: "The printer list couldn't be read.".into(),
            suggestion: "The backend may be restarting. We'll try again on the next update.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        FleetError::Config(detail) => HumanError {
            message: "The monitor settings are invalid.".into(),
            suggestion: format!("Fix the configuration file and restart. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The snapshot file couldn't be found.".into(),
                    suggestion: "Check the snapshot path, or wait for the exporter to write it.".into(),
                    retriable: true,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The monitor doesn't have permission to read that file.".into(),
                    suggestion: "Check the file permissions.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading a file.".into(),
                    suggestion: "We'll try again on the next update.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        FleetError::Serialization(_) => HumanError {
            message: "The monitor had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}
