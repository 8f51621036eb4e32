// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Telemetry normaliser: raw snapshot record → canonical printer record.
//
// Identity fields are required and their absence is reported, never
// defaulted.  Optional substructures stay `None` when the backend left them
// out, and so do the durations and progress inside a present one, so "no
// data" is never confused with zero further down the pipeline.  Flags and
// labels inside a present substructure fall back to false or empty.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use fleetwerk_core::error::{FleetError, Result};
use fleetwerk_core::types::{
    GCodeMetadata, Job, MachineState, NormalizedPrinter, PrinterStats, VirtualSd,
};
use fleetwerk_core::wire::{
    RawGCodeMetadata, RawJob, RawPrintStats, RawSnapshot, RawVirtualSdCard,
};

/// Normalise one raw snapshot record.
#[instrument(skip_all, fields(key = raw.key.as_deref().unwrap_or("")))]
pub fn normalize(raw: &RawSnapshot) -> Result<NormalizedPrinter> {
    let key = raw.key.clone().ok_or(FleetError::MissingField {
        key: None,
        field: "key",
    })?;
    let name = required(&raw.name, &key, "name")?;
    let url = required(&raw.url, &key, "url")?;
    let state = MachineState::from_wire(&required(&raw.state, &key, "state")?);

    let printer = NormalizedPrinter {
        registered_job_id: raw.registered_job_id.clone().unwrap_or_default(),
        allow_no_registered_print: raw.allow_no_register_print.unwrap_or(false),
        no_pause_duration_sec: raw.no_pause_duration,

        state,
        printer_not_open: raw.printer_not_open.unwrap_or(false),
        display_message: non_blank(
            raw.display_status
                .as_ref()
                .and_then(|d| d.message.as_deref()),
        ),
        error_message: non_blank(raw.message.as_deref()),
        last_update_time: raw
            .last_update_time
            .and_then(DateTime::<Utc>::from_timestamp_millis),

        printer_stats: raw.printer_stats.as_ref().map(convert_print_stats),
        virtual_sd: raw.virtual_sd_card.as_ref().map(convert_virtual_sd),

        loaded_file: raw.loaded_file.as_ref().map(convert_gcode_metadata),
        latest_job: raw.latest_job.as_ref().map(convert_job),

        key,
        name,
        url,
    };

    debug!(
        state = %printer.state,
        has_stats = printer.printer_stats.is_some(),
        has_loaded_file = printer.loaded_file.is_some(),
        has_latest_job = printer.latest_job.is_some(),
        "printer normalised"
    );
    Ok(printer)
}

fn required(value: &Option<String>, key: &str, field: &'static str) -> Result<String> {
    value.clone().ok_or_else(|| FleetError::MissingField {
        key: Some(key.to_string()),
        field,
    })
}

/// Blank and whitespace-only strings mean "no value".
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn convert_print_stats(raw: &RawPrintStats) -> PrinterStats {
    PrinterStats {
        print_duration_sec: raw.print_duration,
        total_duration_sec: raw.total_duration,
        filament_used: raw.filament_used.unwrap_or(0.0),
        sub_state: raw.state.clone().unwrap_or_default(),
    }
}

fn convert_virtual_sd(raw: &RawVirtualSdCard) -> VirtualSd {
    VirtualSd {
        progress: raw.progress,
        is_active: raw.is_active.unwrap_or(false),
    }
}

fn convert_gcode_metadata(raw: &RawGCodeMetadata) -> GCodeMetadata {
    GCodeMetadata {
        file_name: raw.filename.clone().unwrap_or_default(),
        estimated_time_sec: raw.estimated_time,
        uuid: non_blank(raw.uuid.as_deref()),
        has_thumbnail: raw.thumbnails.as_ref().is_some_and(|t| !t.is_empty()),
    }
}

fn convert_job(raw: &RawJob) -> Job {
    Job {
        job_id: raw.job_id.clone().unwrap_or_default(),
        status: raw.status.clone().unwrap_or_default(),
        file_name: raw.filename.clone().unwrap_or_default(),
        metadata: raw.metadata.as_ref().map(convert_gcode_metadata),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetwerk_core::wire::{RawDisplayStatus, RawThumbnail};

    fn raw(key: &str) -> RawSnapshot {
        RawSnapshot {
            key: Some(key.into()),
            name: Some(format!("V400 {key}")),
            url: Some(format!("http://{key}.local:7125")),
            state: Some("ready".into()),
            ..RawSnapshot::default()
        }
    }

    #[test]
    fn minimal_record_has_no_substructures() {
        let p = normalize(&raw("a")).unwrap();
        assert_eq!(p.key, "a");
        assert_eq!(p.state, MachineState::Ready);
        assert_eq!(p.registered_job_id, "");
        assert!(!p.allow_no_registered_print);
        assert!(p.printer_stats.is_none());
        assert!(p.virtual_sd.is_none());
        assert!(p.loaded_file.is_none());
        assert!(p.latest_job.is_none());
        assert!(p.last_update_time.is_none());
        assert!(p.no_pause_duration_sec.is_none());
    }

    #[test]
    fn absent_durations_stay_absent() {
        let mut r = raw("a");
        r.printer_stats = Some(RawPrintStats {
            state: Some("printing".into()),
            ..RawPrintStats::default()
        });
        r.virtual_sd_card = Some(RawVirtualSdCard {
            progress: None,
            is_active: Some(true),
        });

        let p = normalize(&r).unwrap();
        let stats = p.printer_stats.unwrap();
        assert!(stats.print_duration_sec.is_none());
        assert!(stats.total_duration_sec.is_none());
        assert_eq!(stats.sub_state, "printing");
        assert!(p.virtual_sd.unwrap().progress.is_none());
    }

    #[test]
    fn missing_identity_fields_fail() {
        let mut r = raw("a");
        r.url = None;
        match normalize(&r) {
            Err(FleetError::MissingField { key, field }) => {
                assert_eq!(key.as_deref(), Some("a"));
                assert_eq!(field, "url");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }

        let mut r = raw("a");
        r.key = None;
        assert!(matches!(
            normalize(&r),
            Err(FleetError::MissingField { key: None, field: "key" })
        ));

        let mut r = raw("a");
        r.state = None;
        assert!(normalize(&r).is_err());
    }

    #[test]
    fn blank_display_message_is_dropped() {
        let mut r = raw("a");
        r.display_status = Some(RawDisplayStatus {
            message: Some("   ".into()),
            progress: Some(0.4),
        });
        r.message = Some("".into());
        let p = normalize(&r).unwrap();
        assert!(p.display_message.is_none());
        assert!(p.error_message.is_none());

        r.display_status = Some(RawDisplayStatus {
            message: Some("Heating bed".into()),
            progress: None,
        });
        assert_eq!(
            normalize(&r).unwrap().display_message.as_deref(),
            Some("Heating bed")
        );
    }

    #[test]
    fn thumbnail_flag_needs_a_non_empty_list() {
        let mut meta = RawGCodeMetadata {
            filename: Some("FSR_20.gcode".into()),
            uuid: Some("u-1".into()),
            thumbnails: Some(Vec::new()),
            ..RawGCodeMetadata::default()
        };
        assert!(!convert_gcode_metadata(&meta).has_thumbnail);

        meta.thumbnails = None;
        assert!(!convert_gcode_metadata(&meta).has_thumbnail);

        meta.thumbnails = Some(vec![RawThumbnail {
            relative_path: Some(".thumbs/FSR_20-300x300.png".into()),
            ..RawThumbnail::default()
        }]);
        assert!(convert_gcode_metadata(&meta).has_thumbnail);
    }

    #[test]
    fn blank_uuid_is_absent() {
        let meta = RawGCodeMetadata {
            uuid: Some("".into()),
            ..RawGCodeMetadata::default()
        };
        assert!(convert_gcode_metadata(&meta).uuid.is_none());
    }

    #[test]
    fn present_substructures_are_converted() {
        let mut r = raw("a");
        r.state = Some("printing".into());
        r.registered_job_id = Some("00002A".into());
        r.no_pause_duration = Some(600.0);
        r.last_update_time = Some(1_760_000_000_000);
        r.printer_stats = Some(RawPrintStats {
            print_duration: Some(120.0),
            total_duration: Some(150.0),
            state: Some("printing".into()),
            ..RawPrintStats::default()
        });
        r.virtual_sd_card = Some(RawVirtualSdCard {
            progress: Some(0.25),
            is_active: Some(true),
        });
        r.latest_job = Some(RawJob {
            job_id: Some("00002A".into()),
            status: Some("in_progress".into()),
            filename: Some("FSR_20.gcode".into()),
            metadata: None,
        });

        let p = normalize(&r).unwrap();
        assert_eq!(p.state, MachineState::Printing);
        assert_eq!(p.registered_job_id, "00002A");
        assert_eq!(p.no_pause_duration_sec, Some(600.0));
        assert_eq!(
            p.last_update_time.unwrap().timestamp_millis(),
            1_760_000_000_000
        );

        let stats = p.printer_stats.unwrap();
        assert_eq!(stats.print_duration_sec, Some(120.0));
        assert_eq!(stats.filament_used, 0.0);
        assert_eq!(stats.sub_state, "printing");

        let sd = p.virtual_sd.unwrap();
        assert_eq!(sd.progress, Some(0.25));
        assert!(sd.is_active);

        let job = p.latest_job.unwrap();
        assert_eq!(job.job_id, "00002A");
        assert!(job.metadata.is_none());
    }

    #[test]
    fn unknown_state_survives() {
        let mut r = raw("a");
        r.state = Some("unknown".into());
        assert_eq!(
            normalize(&r).unwrap().state,
            MachineState::Other("unknown".into())
        );
    }
}
