// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixtures shared by the unit tests.

use fleetwerk_core::types::{
    GCodeMetadata, Job, MachineState, NormalizedPrinter, PrinterStats, VirtualSd,
};

/// An idle, connected printer with no telemetry substructures.
pub fn printer(key: &str) -> NormalizedPrinter {
    NormalizedPrinter {
        key: key.into(),
        name: format!("V400 {key}"),
        url: format!("http://{key}.local:7125"),
        registered_job_id: String::new(),
        allow_no_registered_print: false,
        no_pause_duration_sec: None,
        state: MachineState::Ready,
        printer_not_open: false,
        display_message: None,
        error_message: None,
        last_update_time: None,
        printer_stats: None,
        virtual_sd: None,
        loaded_file: None,
        latest_job: None,
    }
}

pub fn gcode(uuid: &str, estimated_time_sec: Option<f64>) -> GCodeMetadata {
    GCodeMetadata {
        file_name: "FSR_20.gcode".into(),
        estimated_time_sec,
        uuid: Some(uuid.into()),
        has_thumbnail: false,
    }
}

pub fn job(job_id: &str, status: &str, metadata: Option<GCodeMetadata>) -> Job {
    Job {
        job_id: job_id.into(),
        status: status.into(),
        file_name: "FSR_20.gcode".into(),
        metadata,
    }
}

pub fn stats(print_duration_sec: f64, total_duration_sec: f64) -> PrinterStats {
    PrinterStats {
        print_duration_sec: Some(print_duration_sec),
        total_duration_sec: Some(total_duration_sec),
        filament_used: 0.0,
        sub_state: "printing".into(),
    }
}

pub fn sd(progress: f64) -> VirtualSd {
    VirtualSd {
        progress: Some(progress),
        is_active: true,
    }
}

/// A printing printer whose loaded file is its latest job.
pub fn printing(key: &str, job_id: &str) -> NormalizedPrinter {
    NormalizedPrinter {
        state: MachineState::Printing,
        loaded_file: Some(gcode("uuid-1", None)),
        latest_job: Some(job(job_id, "in_progress", Some(gcode("uuid-1", None)))),
        ..printer(key)
    }
}
