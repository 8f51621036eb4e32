// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FleetError, Result};

/// Settings for the fleet monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Base the relative thumbnail paths are resolved against.
    pub api_base: String,
    /// Delay between two snapshot polls, in milliseconds.
    pub poll_interval_ms: u64,
    /// When false the monitor derives a single view and exits.
    pub polling_enabled: bool,
    /// Snapshot file saved from the backend's `/printers` endpoint.
    pub snapshot_path: PathBuf,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/v1".into(),
            poll_interval_ms: 2500,
            polling_enabled: true,
            snapshot_path: PathBuf::from("snapshot.json"),
        }
    }
}

impl FleetConfig {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| FleetError::Config(format!("{}: {e}", path.display())))?;
        config.poll_interval()?;

        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Poll period as a `Duration`.  Zero is rejected.
    pub fn poll_interval(&self) -> Result<Duration> {
        if self.poll_interval_ms == 0 {
            return Err(FleetError::Config(
                "poll_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(Duration::from_millis(self.poll_interval_ms))
    }
}
