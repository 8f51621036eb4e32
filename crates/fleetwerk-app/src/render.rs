// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-text status board.
//
// ETAs are computed here, against the `now` of the moment the board is
// printed, not the `now` the view was derived with.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use fleetwerk_core::human_errors::HumanError;
use fleetwerk_engine::card::{CardBody, CardTone};
use fleetwerk_engine::duration::format_duration;
use fleetwerk_engine::estimate::JobInfo;
use fleetwerk_engine::pipeline::{FleetView, PrinterView};
use fleetwerk_engine::thumbnail::resolve_thumbnail_url;

/// Render the whole fleet.
pub fn render_fleet<Tz>(view: &FleetView, now: DateTime<Utc>, tz: &Tz, api_base: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    let counts: Vec<String> = view
        .state_counts
        .iter()
        .map(|c| format!("{} {}", c.count, c.label))
        .collect();
    if counts.is_empty() {
        out.push_str("3D Printer Fleet - no printers\n");
    } else {
        out.push_str(&format!("3D Printer Fleet - {}\n", counts.join(" | ")));
    }
    out.push_str(&format!(
        "Last updated at {}\n",
        view.derived_at.with_timezone(tz).format("%H:%M:%S")
    ));

    for printer in &view.printers {
        out.push('\n');
        render_printer(&mut out, printer, now, tz, api_base);
    }

    out
}

fn render_printer<Tz>(
    out: &mut String,
    view: &PrinterView,
    now: DateTime<Utc>,
    tz: &Tz,
    api_base: &str,
) where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tone = match view.card.tone {
        CardTone::Warning => "warning".to_string(),
        CardTone::Danger => "danger".to_string(),
        CardTone::Border(color) => color.to_string(),
    };
    out.push_str(&format!("[{tone}] {}\n", view.card.header));

    match &view.card.body {
        CardBody::Disconnected => {}
        CardBody::Error { message } => {
            out.push_str(&format!("  Error: {}\n", message.as_deref().unwrap_or("(no message)")));
        }
        CardBody::Normal {
            job_heading,
            pause_notice,
        } => {
            if let (Some(heading), Some(job)) = (job_heading, &view.job) {
                render_job(out, heading, job, now, tz, api_base);
            }
            if let Some(notice) = pause_notice {
                out.push_str(&format!("  {notice}\n"));
            }
        }
    }
}

fn render_job<Tz>(
    out: &mut String,
    heading: &str,
    job: &JobInfo,
    now: DateTime<Utc>,
    tz: &Tz,
    api_base: &str,
) where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let summary = job.summary();
    out.push_str(&format!("  {heading}: {} [{}]\n", summary.id, summary.status));
    out.push_str(&format!("  {}\n", summary.file_name));
    if let Some(image) = &summary.image_url {
        out.push_str(&format!("  Thumbnail: {}\n", resolve_thumbnail_url(api_base, image)));
    }

    let Some(active) = job.as_active() else {
        return;
    };

    if let Some(remaining) = active.estimated_remaining_sec.filter(|s| *s > 0.0) {
        let eta = active
            .eta(now)
            .map(|t| t.with_timezone(tz).format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "N/A".into());
        out.push_str(&format!("  Estimate: {}, ETA: {eta}\n", format_duration(remaining)));
    }

    out.push_str(&format!(
        "  Time (print / total): {} / {}\n",
        active.print_time_text.as_deref().unwrap_or("N/A"),
        active.total_time_text.as_deref().unwrap_or("N/A"),
    ));
}

/// Render a failed tick for the operator.
pub fn render_error(err: &HumanError) -> String {
    format!("{}\n{}\n", err.message, err.suggestion)
}
