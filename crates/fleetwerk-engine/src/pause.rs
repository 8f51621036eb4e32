// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Auto-pause policy evaluation.
//
// A printer that does not allow unregistered prints pauses any running job
// whose id differs from the registered one once the grace period
// (`no_pause_duration_sec` of print time) is used up.  This module only
// computes the verdict and the countdown; the backend does the pausing.

use serde::Serialize;

use fleetwerk_core::types::NormalizedPrinter;

use crate::duration::format_duration;

/// Outcome of the auto-pause policy for one active job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PauseVerdict {
    pub will_pause: bool,
    /// Print time left before the pause, clamped at zero.  `None` unless both
    /// the grace period and the print duration were reported.
    pub remaining_sec: Option<f64>,
}

impl PauseVerdict {
    /// Operator warning shown under the job, if the job will pause.
    pub fn notice(&self) -> Option<String> {
        if !self.will_pause {
            return None;
        }
        Some(match self.remaining_sec.filter(|s| *s > 0.0) {
            Some(sec) => format!(
                "Job will be paused after {}, please register.",
                format_duration(sec)
            ),
            None => "Job will be paused, please register.".into(),
        })
    }
}

/// Evaluate the auto-pause policy for the active job `job_id`.
pub fn evaluate_pause(p: &NormalizedPrinter, job_id: &str) -> PauseVerdict {
    let printed = p.printer_stats.as_ref().and_then(|s| s.print_duration_sec);
    PauseVerdict {
        will_pause: !p.allow_no_registered_print && job_id != p.registered_job_id,
        remaining_sec: p
            .no_pause_duration_sec
            .zip(printed)
            .map(|(grace, printed)| (grace - printed).max(0.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{printer, stats};
    use fleetwerk_core::types::PrinterStats;

    #[test]
    fn unregistered_job_will_pause() {
        let p = NormalizedPrinter {
            registered_job_id: "A".into(),
            ..printer("a")
        };
        assert!(evaluate_pause(&p, "B").will_pause);
    }

    #[test]
    fn registered_job_does_not_pause() {
        let p = NormalizedPrinter {
            registered_job_id: "A".into(),
            ..printer("a")
        };
        assert!(!evaluate_pause(&p, "A").will_pause);
    }

    #[test]
    fn allow_flag_disables_policy() {
        let p = NormalizedPrinter {
            registered_job_id: "A".into(),
            allow_no_registered_print: true,
            ..printer("a")
        };
        assert!(!evaluate_pause(&p, "B").will_pause);
    }

    #[test]
    fn countdown_needs_stats_and_clamps() {
        let mut p = NormalizedPrinter {
            no_pause_duration_sec: Some(300.0),
            ..printer("a")
        };
        assert_eq!(evaluate_pause(&p, "B").remaining_sec, None);

        p.printer_stats = Some(PrinterStats {
            print_duration_sec: None,
            ..stats(0.0, 0.0)
        });
        assert_eq!(evaluate_pause(&p, "B").remaining_sec, None);

        p.printer_stats = Some(stats(120.0, 130.0));
        assert_eq!(evaluate_pause(&p, "B").remaining_sec, Some(180.0));

        p.printer_stats = Some(stats(900.0, 950.0));
        assert_eq!(evaluate_pause(&p, "B").remaining_sec, Some(0.0));

        p.no_pause_duration_sec = None;
        assert_eq!(evaluate_pause(&p, "B").remaining_sec, None);
    }

    #[test]
    fn notice_text() {
        let verdict = PauseVerdict {
            will_pause: true,
            remaining_sec: Some(270.0),
        };
        assert_eq!(
            verdict.notice().as_deref(),
            Some("Job will be paused after 04:30, please register.")
        );

        let verdict = PauseVerdict {
            will_pause: true,
            remaining_sec: Some(0.0),
        };
        assert_eq!(
            verdict.notice().as_deref(),
            Some("Job will be paused, please register.")
        );

        let verdict = PauseVerdict {
            will_pause: false,
            remaining_sec: Some(100.0),
        };
        assert!(verdict.notice().is_none());
    }
}
