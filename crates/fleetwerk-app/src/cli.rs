// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use fleetwerk_core::FleetConfig;

#[derive(Parser, Debug)]
#[command(
    name = "fleetwerk",
    version,
    about = "Live status board for a fleet of Klipper/Moonraker 3D printers"
)]
pub(crate) struct Args {
    /// JSON settings file; defaults apply when it does not exist.
    #[arg(long, default_value = "fleetwerk.json")]
    pub(crate) config: PathBuf,
    /// Snapshot file to read instead of the configured one.
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Derive and print a single view, then exit.
    #[arg(long)]
    pub(crate) once: bool,
    /// Poll period in milliseconds.
    #[arg(long)]
    pub(crate) interval_ms: Option<u64>,
    /// Emit the derived view as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

impl Args {
    /// Overlay command-line flags on top of the loaded settings.
    pub(crate) fn apply(&self, mut config: FleetConfig) -> FleetConfig {
        if let Some(path) = &self.snapshot {
            config.snapshot_path = path.clone();
        }
        if let Some(ms) = self.interval_ms {
            config.poll_interval_ms = ms;
        }
        if self.once {
            config.polling_enabled = false;
        }
        config
    }
}
