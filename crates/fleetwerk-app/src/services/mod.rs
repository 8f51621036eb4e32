// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — fetches fleet snapshots and feeds them through the
// derivation engine on a fixed schedule.

pub mod poller;
pub mod snapshot_source;
