// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Whole-fleet derivation: one snapshot in, one complete view out.
//
// Every call is independent.  Nothing from a previous snapshot is reused,
// and a record that cannot be normalised fails the whole snapshot rather
// than producing a half-populated card.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use fleetwerk_core::error::Result;
use fleetwerk_core::types::NormalizedPrinter;
use fleetwerk_core::wire::RawSnapshot;

use crate::aggregate::{StateCounts, aggregate, duplicate_keys};
use crate::card::{Card, present};
use crate::classify::{StateInfo, classify};
use crate::estimate::{JobInfo, estimate_job};
use crate::normalize::normalize;

/// Everything the display needs for one printer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrinterView {
    pub printer: NormalizedPrinter,
    pub state: StateInfo,
    pub job: Option<JobInfo>,
    pub card: Card,
    /// Seconds since the backend last heard from the printer.
    pub last_update_age_sec: Option<f64>,
}

/// Derived view of the whole fleet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetView {
    /// Display order.
    pub printers: Vec<PrinterView>,
    pub state_counts: StateCounts,
    pub derived_at: DateTime<Utc>,
}

impl FleetView {
    pub fn get(&self, key: &str) -> Option<&PrinterView> {
        self.printers.iter().find(|v| v.printer.key == key)
    }
}

/// Run every derivation stage over a fleet snapshot.
#[instrument(skip_all, fields(printers = raw.len()))]
pub fn derive_fleet(raw: &[RawSnapshot], now: DateTime<Utc>) -> Result<FleetView> {
    let normalized = raw.iter().map(normalize).collect::<Result<Vec<_>>>()?;
    let duplicates = duplicate_keys(&normalized);
    if !duplicates.is_empty() {
        warn!(keys = ?duplicates, "printer keys repeat within one snapshot");
    }
    let summary = aggregate(normalized);

    let printers: Vec<PrinterView> = summary
        .printers
        .into_iter()
        .map(|printer| derive_printer(printer, now))
        .collect();

    info!(
        printers = printers.len(),
        labels = summary.state_counts.len(),
        will_pause = printers
            .iter()
            .filter_map(|v| v.job.as_ref().and_then(JobInfo::as_active))
            .filter(|a| a.job_will_pause)
            .count(),
        "fleet view derived"
    );

    Ok(FleetView {
        printers,
        state_counts: summary.state_counts,
        derived_at: now,
    })
}

fn derive_printer(printer: NormalizedPrinter, now: DateTime<Utc>) -> PrinterView {
    let state = classify(&printer);
    let job = estimate_job(&printer);
    let card = present(&printer, &state, job.as_ref());
    let last_update_age_sec = printer
        .last_update_time
        .map(|t| ((now - t).num_milliseconds() as f64 / 1000.0).max(0.0));

    PrinterView {
        printer,
        state,
        job,
        card,
        last_update_age_sec,
    }
}
