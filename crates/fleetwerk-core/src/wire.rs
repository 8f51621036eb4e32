// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wire shapes served by the monitor backend's `GET /printers` endpoint.
//
// Every field is optional at this layer: the backend is free to omit
// anything, and presence itself carries meaning (no `loaded_file` means no
// file is loaded).  Normalisation into the canonical model happens in the
// engine crate.

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};

/// One printer's entry in a polled fleet snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    pub key: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,

    pub registered_job_id: Option<String>,
    pub allow_no_register_print: Option<bool>,
    /// Grace period before an unregistered job is paused, in seconds.
    pub no_pause_duration: Option<f64>,

    /// Moonraker printer state (`ready`, `printing`, `klippy_error`, ...).
    pub state: Option<String>,
    pub message: Option<String>,
    /// Unix milliseconds of the backend's last successful poll.
    pub last_update_time: Option<i64>,
    pub printer_not_open: Option<bool>,

    pub display_status: Option<RawDisplayStatus>,
    pub printer_stats: Option<RawPrintStats>,
    pub virtual_sd_card: Option<RawVirtualSdCard>,

    pub loaded_file: Option<RawGCodeMetadata>,
    pub latest_job: Option<RawJob>,
}

/// Klipper `display_status` printer object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDisplayStatus {
    pub message: Option<String>,
    pub progress: Option<f64>,
}

/// Klipper `print_stats` printer object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPrintStats {
    pub filename: Option<String>,
    pub print_duration: Option<f64>,
    pub total_duration: Option<f64>,
    pub filament_used: Option<f64>,
    /// Job sub-status (`standby`, `printing`, `complete`, `cancelled`, ...).
    pub state: Option<String>,
    pub message: Option<String>,
}

/// Klipper `virtual_sdcard` printer object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVirtualSdCard {
    pub progress: Option<f64>,
    pub is_active: Option<bool>,
}

/// Moonraker gcode file metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawGCodeMetadata {
    pub filename: Option<String>,
    /// Slicer-estimated print time in seconds.
    pub estimated_time: Option<f64>,
    pub uuid: Option<String>,
    pub thumbnails: Option<Vec<RawThumbnail>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawThumbnail {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size: Option<u64>,
    pub relative_path: Option<String>,
}

/// Moonraker job history entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJob {
    pub job_id: Option<String>,
    pub status: Option<String>,
    pub filename: Option<String>,
    pub metadata: Option<RawGCodeMetadata>,
}

/// Decode a fleet snapshot (a JSON array of printer records).
pub fn parse_snapshot(json: &str) -> Result<Vec<RawSnapshot>> {
    serde_json::from_str(json).map_err(|e| FleetError::Snapshot(e.to_string()))
}
