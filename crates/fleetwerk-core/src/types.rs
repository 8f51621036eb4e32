// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canonical printer model produced by normalising a raw snapshot record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse operational mode reported by Moonraker for a printer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MachineState {
    KlippyStartup,
    KlippyShutdown,
    KlippyError,
    KlippyDisconnected,
    Ready,
    PrePrint,
    Printing,
    Pause,
    Error,
    Disconnected,
    InternalError,
    /// Any value this build does not recognise, kept verbatim.
    Other(String),
}

impl MachineState {
    /// Parse the Moonraker wire value.  Never fails.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "klippy_startup" => Self::KlippyStartup,
            "klippy_shutdown" => Self::KlippyShutdown,
            "klippy_error" => Self::KlippyError,
            "klippy_disconnected" => Self::KlippyDisconnected,
            "ready" => Self::Ready,
            "pre_print" => Self::PrePrint,
            "printing" => Self::Printing,
            "pause" => Self::Pause,
            "error" => Self::Error,
            "disconnected" => Self::Disconnected,
            "internal_error" => Self::InternalError,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire value for this state.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::KlippyStartup => "klippy_startup",
            Self::KlippyShutdown => "klippy_shutdown",
            Self::KlippyError => "klippy_error",
            Self::KlippyDisconnected => "klippy_disconnected",
            Self::Ready => "ready",
            Self::PrePrint => "pre_print",
            Self::Printing => "printing",
            Self::Pause => "pause",
            Self::Error => "error",
            Self::Disconnected => "disconnected",
            Self::InternalError => "internal_error",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for MachineState {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<MachineState> for String {
    fn from(state: MachineState) -> Self {
        state.as_wire().to_string()
    }
}

impl std::fmt::Display for MachineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Accumulated statistics for the job currently on the printer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterStats {
    /// Time spent actually printing, in seconds.
    pub print_duration_sec: Option<f64>,
    /// Wall time since the job started, including pauses.
    pub total_duration_sec: Option<f64>,
    /// Filament consumed in millimetres.
    pub filament_used: f64,
    /// Job sub-status as reported by `print_stats.state`.
    pub sub_state: String,
}

/// Virtual SD card progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualSd {
    /// Completion fraction in `0.0..=1.0`.
    pub progress: Option<f64>,
    pub is_active: bool,
}

/// Gcode file metadata as far as the monitor cares about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GCodeMetadata {
    pub file_name: String,
    /// Slicer estimate in seconds, if the slicer wrote one.
    pub estimated_time_sec: Option<f64>,
    /// Unique id embedded by the slicer; `None` when missing or blank.
    pub uuid: Option<String>,
    pub has_thumbnail: bool,
}

/// Most recent entry of the printer's job history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    /// Moonraker history status (`in_progress`, `completed`, ...).
    pub status: String,
    pub file_name: String,
    pub metadata: Option<GCodeMetadata>,
}

/// Canonical, internally consistent view of one printer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPrinter {
    /// Stable identity, unique across a snapshot.
    pub key: String,
    pub name: String,
    pub url: String,

    /// Job id the operator registered, or empty.
    pub registered_job_id: String,
    pub allow_no_registered_print: bool,
    /// Grace period of print time before an unregistered job is paused.
    pub no_pause_duration_sec: Option<f64>,

    pub state: MachineState,
    pub printer_not_open: bool,
    pub display_message: Option<String>,
    pub error_message: Option<String>,
    pub last_update_time: Option<DateTime<Utc>>,

    pub printer_stats: Option<PrinterStats>,
    pub virtual_sd: Option<VirtualSd>,

    pub loaded_file: Option<GCodeMetadata>,
    pub latest_job: Option<Job>,
}

impl NormalizedPrinter {
    pub fn is_disconnected(&self) -> bool {
        self.state == MachineState::Disconnected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_round_trip_through_wire() {
        for wire in ["ready", "pause", "klippy_error", "internal_error"] {
            assert_eq!(MachineState::from_wire(wire).as_wire(), wire);
        }
    }

    #[test]
    fn unrecognised_state_is_kept() {
        let state = MachineState::from_wire("calibrating");
        assert_eq!(state, MachineState::Other("calibrating".into()));
        assert_eq!(state.to_string(), "calibrating");
    }

    #[test]
    fn state_serialises_as_wire_string() {
        let json = serde_json::to_string(&MachineState::PrePrint).unwrap();
        assert_eq!(json, "\"pre_print\"");
        let back: MachineState = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(back, MachineState::Other("unknown".into()));
    }
}
