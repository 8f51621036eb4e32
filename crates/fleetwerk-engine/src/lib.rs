// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fleetwerk Engine — pure derivation from raw printer telemetry to display
// models.  No I/O, no clocks: callers pass the snapshot and `now`, and get a
// complete `FleetView` back.
//
// Stages, leaves first: normalize → classify → estimate (+ pause policy) →
// aggregate.  `pipeline::derive_fleet` runs them all.

pub mod aggregate;
pub mod card;
pub mod classify;
pub mod duration;
pub mod estimate;
pub mod normalize;
pub mod pause;
pub mod pipeline;
pub mod thumbnail;

#[cfg(test)]
mod test_support;

pub use aggregate::{FleetSummary, StateCounts, aggregate};
pub use classify::{DisplayState, SeverityColor, StateInfo, classify};
pub use duration::format_duration;
pub use estimate::{ActiveJob, JobInfo, JobSummary, estimate_job};
pub use normalize::normalize;
pub use pause::{PauseVerdict, evaluate_pause};
pub use pipeline::{FleetView, PrinterView, derive_fleet};
