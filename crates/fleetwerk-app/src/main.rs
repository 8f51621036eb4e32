// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fleetwerk — live status board for a 3D printer fleet.
//
// Entry point. Initialises logging, loads settings, and runs the snapshot
// poller until interrupted. Logs go to stderr; the board goes to stdout.

mod cli;
mod render;
mod services;

use std::process::ExitCode;

use chrono::{Local, Utc};
use clap::Parser;
use tracing::{error, info};

use fleetwerk_core::FleetConfig;
use fleetwerk_core::error::Result;
use fleetwerk_core::human_errors::humanize_error;
use fleetwerk_engine::pipeline::FleetView;

use cli::Args;
use services::poller::Poller;
use services::snapshot_source::FileSource;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match FleetConfig::load(&args.config).map(|c| args.apply(c)) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "could not load settings");
            eprint!("{}", render::render_error(&humanize_error(&e)));
            return ExitCode::FAILURE;
        }
    };
    let period = match config.poll_interval() {
        Ok(period) => period,
        Err(e) => {
            eprint!("{}", render::render_error(&humanize_error(&e)));
            return ExitCode::FAILURE;
        }
    };

    info!(
        snapshot = %config.snapshot_path.display(),
        polling = config.polling_enabled,
        "Fleetwerk starting"
    );

    let poller = Poller::new(
        FileSource::new(config.snapshot_path.clone()),
        period,
        config.polling_enabled,
    );

    let mut last_failed = false;
    tokio::select! {
        _ = poller.run(|outcome| {
            last_failed = outcome.is_err();
            show(outcome, &config, args.json);
        }) => {}
        _ = tokio::signal::ctrl_c() => info!("interrupted, shutting down"),
    }

    if last_failed && !config.polling_enabled {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn show(outcome: Result<FleetView>, config: &FleetConfig, json: bool) {
    match outcome {
        Ok(view) if json => match serde_json::to_string_pretty(&view) {
            Ok(text) => println!("{text}"),
            Err(e) => error!(error = %e, "could not serialise view"),
        },
        Ok(view) => print!(
            "{}",
            render::render_fleet(&view, Utc::now(), &Local, &config.api_base)
        ),
        Err(e) => eprint!("{}", render::render_error(&humanize_error(&e))),
    }
}
