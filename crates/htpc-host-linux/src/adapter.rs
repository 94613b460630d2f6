//! Linux host adapter implementation

use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;
use tracing::{debug, info};

use htpc_host_api::{HostAdapter, HostError, HostResult};

const PROC_ROOT: &str = "/proc";
const WAKEALARM_PATH: &str = "/sys/class/rtc/rtc0/wakealarm";
const SHUTDOWN_COMMAND: &str = "/sbin/shutdown";

/// Linux host adapter
pub struct LinuxHost {
    proc_root: PathBuf,
    wakealarm_path: PathBuf,
}

impl LinuxHost {
    pub fn new() -> Self {
        Self {
            proc_root: PathBuf::from(PROC_ROOT),
            wakealarm_path: PathBuf::from(WAKEALARM_PATH),
        }
    }

    /// Construct with overridden pseudo-file locations (for tests)
    pub fn with_paths(proc_root: impl Into<PathBuf>, wakealarm_path: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            wakealarm_path: wakealarm_path.into(),
        }
    }

    fn write_wakealarm(&self, value: &str) -> HostResult<()> {
        std::fs::write(&self.wakealarm_path, value).map_err(HostError::WakeAlarm)?;
        debug!(path = %self.wakealarm_path.display(), value = %value, "Wrote wake alarm");
        Ok(())
    }
}

impl Default for LinuxHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostAdapter for LinuxHost {
    fn process_running(&self, name: &str) -> bool {
        crate::process_running(&self.proc_root, name)
    }

    fn uptime(&self) -> HostResult<Duration> {
        let path = self.proc_root.join("uptime");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| HostError::Uptime(format!("{}: {}", path.display(), e)))?;

        // First whitespace-separated token is seconds since boot
        let seconds = content
            .split_whitespace()
            .next()
            .ok_or_else(|| HostError::Uptime(format!("{}: empty file", path.display())))?
            .parse::<f64>()
            .map_err(|e| HostError::Uptime(format!("{}: {}", path.display(), e)))?;

        Duration::try_from_secs_f64(seconds).map_err(|_| {
            HostError::Uptime(format!(
                "{}: implausible uptime {}",
                path.display(),
                seconds
            ))
        })
    }

    fn clear_wake_alarm(&self) -> HostResult<()> {
        self.write_wakealarm("0")
    }

    fn arm_wake_alarm(&self, unix_time: i64) -> HostResult<()> {
        self.write_wakealarm(&unix_time.to_string())
    }

    fn power_off(&self) -> HostResult<()> {
        info!(command = SHUTDOWN_COMMAND, "Invoking shutdown");

        let status = Command::new(SHUTDOWN_COMMAND)
            .args(["-h", "now"])
            .status()
            .map_err(|e| HostError::Shutdown(format!("{}: {}", SHUTDOWN_COMMAND, e)))?;

        if !status.success() {
            return Err(HostError::Shutdown(format!(
                "{} exited with {}",
                SHUTDOWN_COMMAND, status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_parses_first_token() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("uptime"), "12345.67 98765.43\n").unwrap();

        let host = LinuxHost::with_paths(dir.path(), dir.path().join("wakealarm"));
        let uptime = host.uptime().unwrap();
        assert_eq!(uptime.as_secs(), 12345);
    }

    #[test]
    fn uptime_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("uptime"), "not-a-number\n").unwrap();

        let host = LinuxHost::with_paths(dir.path(), dir.path().join("wakealarm"));
        assert!(matches!(host.uptime(), Err(HostError::Uptime(_))));
    }

    #[test]
    fn uptime_rejects_overflowing_value() {
        let dir = tempfile::tempdir().unwrap();
        // Finite and non-negative, but far beyond what Duration can hold
        std::fs::write(dir.path().join("uptime"), "1e300 1e300\n").unwrap();

        let host = LinuxHost::with_paths(dir.path(), dir.path().join("wakealarm"));
        assert!(matches!(host.uptime(), Err(HostError::Uptime(_))));
    }

    #[test]
    fn uptime_rejects_negative_value() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("uptime"), "-12.5 10.0\n").unwrap();

        let host = LinuxHost::with_paths(dir.path(), dir.path().join("wakealarm"));
        assert!(matches!(host.uptime(), Err(HostError::Uptime(_))));
    }

    #[test]
    fn uptime_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let host = LinuxHost::with_paths(dir.path(), dir.path().join("wakealarm"));
        assert!(matches!(host.uptime(), Err(HostError::Uptime(_))));
    }

    #[test]
    fn clear_writes_zero() {
        let dir = tempfile::tempdir().unwrap();
        let alarm = dir.path().join("wakealarm");

        let host = LinuxHost::with_paths(dir.path(), &alarm);
        host.clear_wake_alarm().unwrap();

        assert_eq!(std::fs::read_to_string(&alarm).unwrap(), "0");
    }

    #[test]
    fn arm_writes_decimal_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let alarm = dir.path().join("wakealarm");

        let host = LinuxHost::with_paths(dir.path(), &alarm);
        host.arm_wake_alarm(1_700_000_000).unwrap();

        assert_eq!(std::fs::read_to_string(&alarm).unwrap(), "1700000000");
    }

    #[test]
    fn wakealarm_write_failure_is_hardware_error() {
        let dir = tempfile::tempdir().unwrap();
        // Point at a path whose parent does not exist
        let host = LinuxHost::with_paths(dir.path(), dir.path().join("missing").join("wakealarm"));

        assert!(matches!(
            host.clear_wake_alarm(),
            Err(HostError::WakeAlarm(_))
        ));
    }
}
