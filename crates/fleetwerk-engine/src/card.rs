// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presentation hints for a printer card, derived from state and job info.

use serde::Serialize;

use fleetwerk_core::types::NormalizedPrinter;

use crate::classify::{SeverityColor, StateInfo};
use crate::estimate::JobInfo;

/// How the card as a whole is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tone", content = "color", rename_all = "snake_case")]
pub enum CardTone {
    /// The running job is about to be auto-paused.
    Warning,
    /// The printer is closed for use.
    Danger,
    /// Normal card, border in the state colour.
    Border(SeverityColor),
}

impl CardTone {
    /// Colour for the state text in the header, when the background is tinted.
    pub fn header_text_color(&self) -> Option<SeverityColor> {
        match self {
            Self::Warning => Some(SeverityColor::Dark),
            Self::Danger => Some(SeverityColor::Light),
            Self::Border(_) => None,
        }
    }
}

/// What the card body shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum CardBody {
    Disconnected,
    Error {
        message: Option<String>,
    },
    Normal {
        /// `"Current Job"` or `"Latest Job"`; `None` without a job.
        job_heading: Option<&'static str>,
        pause_notice: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub header: String,
    pub progress_text: Option<String>,
    pub tone: CardTone,
    pub body: CardBody,
}

/// Virtual SD progress as a percentage, while a print is running.
pub fn progress_text(p: &NormalizedPrinter) -> Option<String> {
    p.virtual_sd
        .filter(|sd| sd.is_active)
        .and_then(|sd| sd.progress)
        .map(|progress| format!("{:.1}%", progress * 100.0))
}

pub fn present(p: &NormalizedPrinter, state: &StateInfo, job: Option<&JobInfo>) -> Card {
    let active = job.and_then(JobInfo::as_active);
    let will_pause = active.is_some_and(|a| a.job_will_pause);

    let tone = if will_pause {
        CardTone::Warning
    } else if p.printer_not_open {
        CardTone::Danger
    } else {
        CardTone::Border(state.color)
    };

    let progress = progress_text(p);
    let header = match &progress {
        Some(pct) => format!("{} - {} {pct}", p.name, state.label),
        None => format!("{} - {}", p.name, state.label),
    };

    let body = if state.is_disconnected {
        CardBody::Disconnected
    } else if state.is_in_error {
        CardBody::Error {
            message: p.error_message.clone(),
        }
    } else {
        CardBody::Normal {
            job_heading: job.map(|j| {
                if j.is_active() {
                    "Current Job"
                } else {
                    "Latest Job"
                }
            }),
            pause_notice: active.and_then(|a| a.pause_verdict().notice()),
        }
    };

    Card {
        header,
        progress_text: progress,
        tone,
        body,
    }
}
