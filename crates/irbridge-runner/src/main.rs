//! `irbridge` binary: runs the bridge against the console harness.

use clap::Parser;
use irbridge_runner::console::{AlwaysConnected, ConsoleTransport, LoggingTransmitter};
use irbridge_runner::{Bridge, RunnerConfig};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "irbridge", about = "Chat-to-infrared TV remote bridge")]
struct Args {
    /// Path to a YAML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Idle poll interval in milliseconds (overrides the config file).
    #[arg(long)]
    idle_poll_ms: Option<u64>,

    /// Offline poll interval in milliseconds (overrides the config file).
    #[arg(long)]
    offline_poll_ms: Option<u64>,

    /// Log filter, e.g. "info" or "irbridge_runner=debug".
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log)?)
        .init();

    let mut config = match &args.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    if let Some(ms) = args.idle_poll_ms {
        config.idle_poll_ms = ms;
    }
    if let Some(ms) = args.offline_poll_ms {
        config.offline_poll_ms = ms;
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let handler_flag = shutdown.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::Relaxed);
    })?;

    let mut bridge = Bridge::new(
        ConsoleTransport::new(),
        AlwaysConnected,
        LoggingTransmitter,
        config.bridge_config(),
    );
    bridge.run(&shutdown);

    Ok(())
}
