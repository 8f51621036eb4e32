// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where fleet snapshots come from.

use std::path::PathBuf;

use fleetwerk_core::error::Result;
use fleetwerk_core::wire::{RawSnapshot, parse_snapshot};
use tracing::debug;

/// Fetch boundary for fleet snapshots.
///
/// Implementations are blocking; the poller runs them on the blocking pool.
pub trait SnapshotSource: Send + Sync + 'static {
    /// Fetch the current snapshot of the whole fleet.
    fn fetch(&self) -> Result<Vec<RawSnapshot>>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

/// Reads a snapshot saved from the backend's `/printers` endpoint.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSource {
    fn fetch(&self) -> Result<Vec<RawSnapshot>> {
        let data = std::fs::read_to_string(&self.path)?;
        let snapshot = parse_snapshot(&data)?;
        debug!(path = %self.path.display(), printers = snapshot.len(), "snapshot read");
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
