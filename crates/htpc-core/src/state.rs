//! Per-run system state

use chrono::{DateTime, Local};
use std::time::Duration;

/// Snapshot of the inputs to the shutdown decision
///
/// Built once per run and passed explicitly to the decision function;
/// nothing here is cached across invocations.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Whether the media player process is running
    pub playback_active: bool,

    /// Time since boot
    pub uptime: Duration,

    /// Earliest upcoming recording start, if any is scheduled
    pub next_recording: Option<DateTime<Local>>,
}
