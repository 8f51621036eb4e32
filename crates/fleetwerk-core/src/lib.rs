// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fleetwerk — Core telemetry types, errors and configuration shared across
// all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;
pub mod wire;

pub use config::FleetConfig;
pub use error::FleetError;
pub use types::*;
pub use wire::RawSnapshot;
