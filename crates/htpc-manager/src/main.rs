//! htpc-manager - one-shot power decision for the HTPC
//!
//! Each invocation (typically from a systemd timer):
//! - loads Tvheadend credentials from `~/.htpc_manager`
//! - queries Tvheadend for the next scheduled recording
//! - checks whether Kodi is running
//! - decides whether to power off, and if so arms the RTC wake alarm
//!   and invokes shutdown
//!
//! No flags or subcommands; exit code 0 covers both "staying up" and a
//! completed shutdown request, any error exits non-zero after logging.

use anyhow::{Context, Result};
use htpc_config::{default_config_path, load_credentials, PowerBuffers};
use htpc_core::{CycleOutcome, Manager};
use htpc_dvr::TvheadendClient;
use htpc_host_linux::LinuxHost;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter
const LOG_ENV_VAR: &str = "HTPC_MANAGER_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Route logs to journald (the machine runs headless); fall back to
/// stderr when no journal socket is available, e.g. when run by hand.
fn init_logging() {
    match tracing_journald::layer() {
        Ok(journald) => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(journald)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn run() -> Result<()> {
    let config_path = default_config_path();
    let credentials = load_credentials(&config_path)
        .with_context(|| format!("Failed to load credentials from {:?}", config_path))?;

    let buffers = PowerBuffers::default();
    buffers.validate().context("Inconsistent power buffers")?;

    let host = LinuxHost::new();
    let dvr = TvheadendClient::new(credentials).context("Failed to build Tvheadend client")?;

    let manager = Manager::new(&host, &dvr, buffers);
    let outcome = manager
        .run(chrono::Local::now())
        .context("Decision cycle failed")?;

    match outcome {
        CycleOutcome::StayUp => {}
        CycleOutcome::ShutdownInvoked { .. } => {
            info!("Shutdown requested; expecting the OS to take over");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    info!(version = env!("CARGO_PKG_VERSION"), "htpc-manager starting");

    if let Err(e) = run() {
        let chain = format!("{:#}", e);
        error!(error = %chain, "Run aborted");
        return Err(e);
    }

    Ok(())
}
