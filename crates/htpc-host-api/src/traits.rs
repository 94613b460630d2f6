//! Host adapter trait

use std::time::Duration;
use thiserror::Error;

/// Errors from host adapter operations
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to read uptime: {0}")]
    Uptime(String),

    #[error("Wake alarm write failed: {0}")]
    WakeAlarm(#[source] std::io::Error),

    #[error("Shutdown command failed: {0}")]
    Shutdown(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HostResult<T> = Result<T, HostError>;

/// Host adapter trait - implemented by platform-specific adapters
pub trait HostAdapter {
    /// Whether a process with the given executable name is currently running.
    ///
    /// Absence of a match is "not running", never an error.
    fn process_running(&self, name: &str) -> bool;

    /// Time since boot.
    fn uptime(&self) -> HostResult<Duration>;

    /// Clear any pending hardware wake alarm.
    fn clear_wake_alarm(&self) -> HostResult<()>;

    /// Arm the hardware wake alarm for the given Unix timestamp.
    ///
    /// Callers must clear the alarm first; the RTC rejects a new alarm
    /// while one is pending.
    fn arm_wake_alarm(&self, unix_time: i64) -> HostResult<()>;

    /// Power the machine off immediately.
    ///
    /// On success the OS begins shutting down and the calling process is
    /// not expected to survive much longer.
    fn power_off(&self) -> HostResult<()>;
}
