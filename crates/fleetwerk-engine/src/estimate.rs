// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Job progress estimation.
//
// The latest job of a printer is "active" when the file currently loaded on
// the printer is the same gcode (same slicer uuid) as the job record.  For
// an active job we derive elapsed/total time text, the remaining time, and
// the auto-pause verdict.
//
// Remaining time uses the first strategy the data allows:
//
// 1. Metadata: the slicer estimate scaled by virtual SD progress.
// 2. Extrapolation: elapsed print time stretched to 100% progress.
//
// Neither applicable → no estimate.  Unknown is never reported as zero.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tracing::trace;

use fleetwerk_core::types::{Job, NormalizedPrinter};

use crate::classify::SeverityColor;
use crate::duration::format_duration;
use crate::pause::{PauseVerdict, evaluate_pause};
use crate::thumbnail::thumbnail_path;

/// Fields shared by active and inactive jobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub id: String,
    pub file_name: String,
    pub status: String,
    pub status_color: SeverityColor,
    /// Relative thumbnail URL, when the job's gcode has thumbnails.
    pub image_url: Option<String>,
}

/// How the remaining time was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStrategy {
    Metadata,
    Extrapolated,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RemainingEstimate {
    /// Never negative.
    pub seconds: f64,
    pub strategy: EstimateStrategy,
}

/// The job currently on the printer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveJob {
    #[serde(flatten)]
    pub summary: JobSummary,
    pub print_time_text: Option<String>,
    pub total_time_text: Option<String>,
    pub estimated_remaining_sec: Option<f64>,
    pub estimate_strategy: Option<EstimateStrategy>,
    pub job_will_pause: bool,
    pub pause_remaining_sec: Option<f64>,
}

impl ActiveJob {
    /// Wall-clock completion time, evaluated against the caller's `now`.
    pub fn eta(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let remaining = self.estimated_remaining_sec?;
        let delta = TimeDelta::try_milliseconds((remaining * 1000.0).round() as i64)?;
        now.checked_add_signed(delta)
    }

    pub fn pause_verdict(&self) -> PauseVerdict {
        PauseVerdict {
            will_pause: self.job_will_pause,
            remaining_sec: self.pause_remaining_sec,
        }
    }
}

/// Latest job of a printer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobInfo {
    Inactive(JobSummary),
    Active(ActiveJob),
}

impl JobInfo {
    pub fn summary(&self) -> &JobSummary {
        match self {
            Self::Inactive(summary) => summary,
            Self::Active(active) => &active.summary,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn as_active(&self) -> Option<&ActiveJob> {
        match self {
            Self::Active(active) => Some(active),
            Self::Inactive(_) => None,
        }
    }
}

/// Colour for a Moonraker job history status.
pub fn job_status_color(status: &str) -> SeverityColor {
    match status {
        "in_progress" => SeverityColor::Primary,
        "completed" => SeverityColor::Success,
        "cancelled" => SeverityColor::Warning,
        "interrupted" | "error" | "klippy_disconnect" | "klippy_shutdown" | "server_exit" => {
            SeverityColor::Danger
        }
        _ => SeverityColor::Secondary,
    }
}

/// Derive the job info of a printer.  `None` iff it has no latest job.
///
/// The result does not depend on the clock; the ETA of an active job is
/// computed against a caller-supplied `now` with [`ActiveJob::eta`].
pub fn estimate_job(p: &NormalizedPrinter) -> Option<JobInfo> {
    let job = p.latest_job.as_ref()?;

    let summary = JobSummary {
        id: job.job_id.clone(),
        file_name: job.file_name.clone(),
        status: job.status.clone(),
        status_color: job_status_color(&job.status),
        image_url: job
            .metadata
            .as_ref()
            .filter(|m| m.has_thumbnail)
            .map(|_| thumbnail_path(&p.key)),
    };

    if !is_loaded(p, job) {
        return Some(JobInfo::Inactive(summary));
    }

    let stats = p.printer_stats.as_ref();
    let estimate = estimate_remaining(p);
    let verdict = evaluate_pause(p, &summary.id);

    trace!(
        key = %p.key,
        job_id = %summary.id,
        remaining = ?estimate.map(|e| e.seconds),
        will_pause = verdict.will_pause,
        "active job"
    );

    Some(JobInfo::Active(ActiveJob {
        summary,
        print_time_text: stats
            .and_then(|s| s.print_duration_sec)
            .map(format_duration),
        total_time_text: stats
            .and_then(|s| s.total_duration_sec)
            .map(format_duration),
        estimated_remaining_sec: estimate.map(|e| e.seconds),
        estimate_strategy: estimate.map(|e| e.strategy),
        job_will_pause: verdict.will_pause,
        pause_remaining_sec: verdict.remaining_sec,
    }))
}

/// Whether the loaded file is the job's gcode.  Both uuids must be known.
fn is_loaded(p: &NormalizedPrinter, job: &Job) -> bool {
    let loaded = p.loaded_file.as_ref().and_then(|f| f.uuid.as_deref());
    let latest = job.metadata.as_ref().and_then(|m| m.uuid.as_deref());
    matches!((loaded, latest), (Some(a), Some(b)) if a == b)
}

/// Remaining print time of the loaded file.  `None` whenever an input the
/// chosen strategy needs was not reported.
pub fn estimate_remaining(p: &NormalizedPrinter) -> Option<RemainingEstimate> {
    let progress = p.virtual_sd.as_ref()?.progress?;
    let elapsed = p.printer_stats.as_ref().and_then(|s| s.print_duration_sec);

    let (seconds, strategy) =
        if let Some(estimated) = p.loaded_file.as_ref().and_then(|f| f.estimated_time_sec) {
            (estimated - progress * estimated, EstimateStrategy::Metadata)
        } else if let Some(elapsed) = elapsed.filter(|_| progress > 0.0) {
            (elapsed / progress - elapsed, EstimateStrategy::Extrapolated)
        } else {
            return None;
        };

    if !seconds.is_finite() {
        return None;
    }
    Some(RemainingEstimate {
        seconds: seconds.max(0.0),
        strategy,
    })
}
