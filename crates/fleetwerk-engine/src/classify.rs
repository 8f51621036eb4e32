// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// State classifier: machine state (+ job sub-status) → display label,
// severity colour and error/disconnect flags.
//
// The mapping lives in one static table that is searched in both directions
// (wire value → display state, display state → presentation).

use serde::Serialize;

use fleetwerk_core::types::NormalizedPrinter;

/// Severity tier used to colour badges, borders and card backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Dark,
    Light,
}

impl SeverityColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for SeverityColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display state of a printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayState {
    Ready,
    Printing,
    Paused,
    PrePrint,
    KlippyStartup,
    KlippyShutdown,
    KlippyError,
    KlippyDisconnected,
    Error,
    InternalError,
    Disconnected,
}

struct StateEntry {
    state: DisplayState,
    wire: &'static str,
    label: &'static str,
    color: SeverityColor,
    is_in_error: bool,
}

static STATE_TABLE: [StateEntry; 11] = [
    row(DisplayState::Ready, "ready", "Ready", SeverityColor::Dark, false),
    row(DisplayState::Printing, "printing", "Printing", SeverityColor::Primary, false),
    row(DisplayState::Paused, "pause", "Paused", SeverityColor::Warning, false),
    row(DisplayState::PrePrint, "pre_print", "PrePrint", SeverityColor::Info, false),
    row(DisplayState::KlippyStartup, "klippy_startup", "KlippyStartup", SeverityColor::Info, false),
    row(DisplayState::KlippyShutdown, "klippy_shutdown", "KlippyShutdown", SeverityColor::Danger, true),
    row(DisplayState::KlippyError, "klippy_error", "KlippyError", SeverityColor::Danger, true),
    row(DisplayState::KlippyDisconnected, "klippy_disconnected", "KlippyDisconnected", SeverityColor::Danger, true),
    row(DisplayState::Error, "error", "Error", SeverityColor::Danger, true),
    row(DisplayState::InternalError, "internal_error", "InternalError", SeverityColor::Danger, true),
    row(DisplayState::Disconnected, "disconnected", "Disconnected", SeverityColor::Secondary, false),
];

const fn row(
    state: DisplayState,
    wire: &'static str,
    label: &'static str,
    color: SeverityColor,
    is_in_error: bool,
) -> StateEntry {
    StateEntry {
        state,
        wire,
        label,
        color,
        is_in_error,
    }
}

/// Label used for machine states missing from the table.
pub const UNKNOWN_LABEL: &str = "Unknown";

impl DisplayState {
    /// Look up the display state for a Moonraker wire value.
    pub fn from_wire(value: &str) -> Option<Self> {
        STATE_TABLE
            .iter()
            .find(|e| e.wire == value)
            .map(|e| e.state)
    }

    pub fn wire_value(&self) -> &'static str {
        self.entry().wire
    }

    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    pub fn color(&self) -> SeverityColor {
        self.entry().color
    }

    pub fn is_in_error(&self) -> bool {
        self.entry().is_in_error
    }

    pub fn is_disconnected(&self) -> bool {
        *self == Self::Disconnected
    }

    fn entry(&self) -> &'static StateEntry {
        // Every variant has exactly one row.
        &STATE_TABLE[*self as usize]
    }
}

/// Classification result for one printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateInfo {
    /// `None` when the machine state is not one we know.
    pub state: Option<DisplayState>,
    pub label: &'static str,
    pub color: SeverityColor,
    pub is_in_error: bool,
    pub is_disconnected: bool,
}

/// Classify a printer's display state.
///
/// A `ready` printer whose last job finished is shown as `Complete` (success
/// colour) or `Cancelled`.  Unknown machine states never fail; they fall into
/// the `Unknown` secondary bucket.
pub fn classify(p: &NormalizedPrinter) -> StateInfo {
    let Some(state) = DisplayState::from_wire(p.state.as_wire()) else {
        return StateInfo {
            state: None,
            label: UNKNOWN_LABEL,
            color: SeverityColor::Secondary,
            is_in_error: false,
            is_disconnected: false,
        };
    };

    let mut info = StateInfo {
        state: Some(state),
        label: state.label(),
        color: state.color(),
        is_in_error: state.is_in_error(),
        is_disconnected: state.is_disconnected(),
    };

    if state == DisplayState::Ready {
        match p.printer_stats.as_ref().map(|s| s.sub_state.as_str()) {
            Some("complete") => {
                info.label = "Complete";
                info.color = SeverityColor::Success;
            }
            Some("cancelled") => info.label = "Cancelled",
            _ => {}
        }
    }

    info
}
