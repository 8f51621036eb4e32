// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed-interval snapshot polling.
//
// Each tick fetches a fresh snapshot, stamps it with a fresh `now` and
// derives a complete fleet view.  A tick's result replaces the previous one
// outright; a failed tick is reported and the loop carries on.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, instrument, warn};

use fleetwerk_core::error::{FleetError, Result};
use fleetwerk_engine::pipeline::{FleetView, derive_fleet};

use super::snapshot_source::SnapshotSource;

pub struct Poller<S: SnapshotSource> {
    source: Arc<S>,
    period: Duration,
    enabled: bool,
}

impl<S: SnapshotSource> Poller<S> {
    pub fn new(source: S, period: Duration, enabled: bool) -> Self {
        Self {
            source: Arc::new(source),
            period,
            enabled,
        }
    }

    /// Fetch one snapshot and derive its view.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn poll_once(&self) -> Result<FleetView> {
        let source = Arc::clone(&self.source);
        let raw = tokio::task::spawn_blocking(move || source.fetch())
            .await
            .map_err(|e| FleetError::Io(std::io::Error::other(e)))??;
        derive_fleet(&raw, Utc::now())
    }

    /// Poll until cancelled, handing every tick's outcome to `on_tick`.
    ///
    /// With polling disabled a single tick runs and the call returns.
    pub async fn run<F>(&self, mut on_tick: F)
    where
        F: FnMut(Result<FleetView>),
    {
        if !self.enabled {
            info!("polling disabled, deriving once");
            on_tick(self.poll_once().await);
            return;
        }

        info!(period_ms = self.period.as_millis() as u64, "polling started");
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let outcome = self.poll_once().await;
            if let Err(e) = &outcome {
                warn!(error = %e, "poll tick failed");
            }
            on_tick(outcome);
        }
    }
}
