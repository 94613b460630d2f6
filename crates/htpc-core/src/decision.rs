//! Shutdown decision logic

use chrono::{DateTime, Local};
use htpc_config::PowerBuffers;
use std::time::Duration;

use crate::SystemState;

fn to_chrono(d: Duration) -> chrono::Duration {
    // Buffers are whole minutes; second precision is plenty
    chrono::Duration::seconds(d.as_secs() as i64)
}

/// Whether the machine should power off right now.
///
/// True iff playback is inactive, the uptime exceeds the startup grace
/// period, and the next recording (if any) starts later than
/// `now + idle_shutdown_threshold`. With no upcoming recording there is
/// nothing to stay up for.
pub fn shutdown_required(state: &SystemState, buffers: &PowerBuffers, now: DateTime<Local>) -> bool {
    if state.playback_active {
        return false;
    }

    if state.uptime <= buffers.startup_grace {
        return false;
    }

    match state.next_recording {
        Some(start) => start > now + to_chrono(buffers.idle_shutdown_threshold),
        None => true,
    }
}

/// The moment the wake alarm should fire for the given recording start
pub fn wakeup_time(next_recording: DateTime<Local>, buffers: &PowerBuffers) -> DateTime<Local> {
    next_recording - to_chrono(buffers.wakeup_lead)
}
