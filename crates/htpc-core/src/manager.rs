//! One power-decision cycle

use chrono::{DateTime, Local};
use htpc_config::PowerBuffers;
use htpc_host_api::{HostAdapter, HostError};
use thiserror::Error;
use tracing::{info, warn};

use crate::{shutdown_required, wakeup_time, ScheduleError, ScheduleSource, SystemState};

/// Executable name of the media player, as it appears in the process table
pub const PLAYER_PROCESS: &str = "kodi.bin";

/// Errors from running a decision cycle
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Schedule check failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Host operation failed: {0}")]
    Host(#[from] HostError),
}

pub type CycleResult<T> = Result<T, CycleError>;

/// Outcome of a decision cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The machine stays up
    StayUp,

    /// Shutdown was invoked; `wakeup` is the armed wake time, or `None`
    /// when nothing is scheduled and the alarm was only cleared
    ShutdownInvoked { wakeup: Option<DateTime<Local>> },
}

/// Runs a single decision cycle against a host and a schedule source
///
/// Stateless across invocations: every run re-derives all inputs.
pub struct Manager<'a> {
    host: &'a dyn HostAdapter,
    schedule: &'a dyn ScheduleSource,
    buffers: PowerBuffers,
}

impl<'a> Manager<'a> {
    pub fn new(
        host: &'a dyn HostAdapter,
        schedule: &'a dyn ScheduleSource,
        buffers: PowerBuffers,
    ) -> Self {
        Self {
            host,
            schedule,
            buffers,
        }
    }

    /// Snapshot the decision inputs
    fn gather(&self) -> CycleResult<SystemState> {
        let playback_active = self.host.process_running(PLAYER_PROCESS);
        let uptime = self.host.uptime()?;
        let next_recording = self.schedule.next_recording()?;

        Ok(SystemState {
            playback_active,
            uptime,
            next_recording,
        })
    }

    /// Run one decision cycle.
    ///
    /// When shutdown is required this clears the wake alarm, arms it for
    /// `next_recording - wakeup_lead` (if a recording is known), and
    /// invokes the OS shutdown. On success of that last step the process
    /// is living on borrowed time.
    pub fn run(&self, now: DateTime<Local>) -> CycleResult<CycleOutcome> {
        let state = self.gather()?;
        let required = shutdown_required(&state, &self.buffers, now);

        info!(
            playback_active = state.playback_active,
            uptime_mins = state.uptime.as_secs() / 60,
            next_recording = state
                .next_recording
                .map(|t| t.to_rfc3339())
                .as_deref()
                .unwrap_or("none"),
            shutdown_required = required,
            "System status"
        );

        if !required {
            info!("Staying up");
            return Ok(CycleOutcome::StayUp);
        }

        // Always clear first: the RTC rejects a new alarm while one is
        // pending, and a stale alarm from an earlier run must not survive
        // a shutdown with an empty schedule.
        self.host.clear_wake_alarm()?;

        let wakeup = match state.next_recording {
            Some(start) => {
                let wake = wakeup_time(start, &self.buffers);
                self.host.arm_wake_alarm(wake.timestamp())?;
                info!(wakeup = %wake.to_rfc3339(), "Wake alarm set");
                Some(wake)
            }
            None => {
                warn!("No upcoming recordings; shutting down without a wake alarm");
                None
            }
        };

        info!("Shutting down");
        self.host.power_off()?;

        Ok(CycleOutcome::ShutdownInvoked { wakeup })
    }
}
