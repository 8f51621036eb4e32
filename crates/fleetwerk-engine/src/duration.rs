// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Clock-style rendering of second counts.

/// Format a duration given in seconds.
///
/// * NaN → `"NaN"`
/// * negative or infinite → `"N/A"`
/// * under one hour → `MM:SS`
/// * otherwise `HH:MM:SS`; hours keep counting past 24 (`"25:00:00"`).
///
/// Fractional seconds are truncated.
pub fn format_duration(sec: f64) -> String {
    if sec.is_nan() {
        return "NaN".into();
    }
    if sec < 0.0 || !sec.is_finite() {
        return "N/A".into();
    }

    let total = sec.trunc() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours == 0 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
