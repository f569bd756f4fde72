//! Exposure Demo — drives the exposure engine from a line-oriented JSON
//! stream.
//!
//! Reads one `UiToEngine` message per stdin line and writes one
//! `EngineToUi` reply per stdout line. Logs go to stderr.

mod config;
mod ipc;
mod session;

use std::io::{self, BufRead, Write};

use clap::Parser;
use exposure_core::{ExposureEngine, ExposureError, ExposureReadout};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, BASELINE};
use crate::ipc::{EngineToUi, UiToEngine};
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Exposure(#[from] ExposureError),
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = AppConfig::parse();
    let mut engine = ExposureEngine::new(args.engine_config()?)?;
    let (f, t, iso, bias) = BASELINE;
    engine.set_baseline(f, t, iso, bias)?;

    let mut session = Session::new(engine);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write_reply(&mut stdout, &session.snapshot()?)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<UiToEngine>(&line) {
            Ok(command) => {
                tracing::debug!("command: {command:?}");
                session.handle(command)
            }
            Err(e) => {
                tracing::warn!("unparseable command: {e}");
                EngineToUi::Error {
                    message: format!("invalid command: {e}"),
                }
            }
        };
        if args.verbose
            && let EngineToUi::State { label, .. } = &reply
        {
            eprintln!("{label}");
        }
        write_reply(&mut stdout, &reply)?;
    }

    tracing::info!(
        "input closed, final exposure {}",
        ExposureReadout::capture(session.engine())
    );
    Ok(())
}

fn write_reply(out: &mut impl Write, reply: &EngineToUi) -> Result<(), DemoError> {
    serde_json::to_writer(&mut *out, reply)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
