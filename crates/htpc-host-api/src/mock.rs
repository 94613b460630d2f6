//! Mock host adapter for testing

use std::sync::Mutex;
use std::time::Duration;

use crate::{HostAdapter, HostError, HostResult};

/// A recorded side-effecting call, in invocation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ClearWakeAlarm,
    ArmWakeAlarm { unix_time: i64 },
    PowerOff,
}

/// Mock host adapter for unit/integration testing
///
/// Side-effecting calls are journaled so tests can assert both what was
/// invoked and in what order.
pub struct MockHost {
    /// Process names reported as running
    pub running: Mutex<Vec<String>>,

    /// Reported uptime
    pub uptime: Mutex<Duration>,

    /// Configure wake alarm writes to fail
    pub fail_wake_alarm: Mutex<bool>,

    /// Configure power off to fail
    pub fail_power_off: Mutex<bool>,

    calls: Mutex<Vec<MockCall>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            running: Mutex::new(Vec::new()),
            uptime: Mutex::new(Duration::ZERO),
            fail_wake_alarm: Mutex::new(false),
            fail_power_off: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_uptime(self, uptime: Duration) -> Self {
        *self.uptime.lock().unwrap() = uptime;
        self
    }

    pub fn with_process(self, name: impl Into<String>) -> Self {
        self.running.lock().unwrap().push(name.into());
        self
    }

    /// Journal of side-effecting calls, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostAdapter for MockHost {
    fn process_running(&self, name: &str) -> bool {
        self.running.lock().unwrap().iter().any(|p| p == name)
    }

    fn uptime(&self) -> HostResult<Duration> {
        Ok(*self.uptime.lock().unwrap())
    }

    fn clear_wake_alarm(&self) -> HostResult<()> {
        if *self.fail_wake_alarm.lock().unwrap() {
            return Err(HostError::WakeAlarm(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock wake alarm failure",
            )));
        }
        self.record(MockCall::ClearWakeAlarm);
        Ok(())
    }

    fn arm_wake_alarm(&self, unix_time: i64) -> HostResult<()> {
        if *self.fail_wake_alarm.lock().unwrap() {
            return Err(HostError::WakeAlarm(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock wake alarm failure",
            )));
        }
        self.record(MockCall::ArmWakeAlarm { unix_time });
        Ok(())
    }

    fn power_off(&self) -> HostResult<()> {
        if *self.fail_power_off.lock().unwrap() {
            return Err(HostError::Shutdown("Mock power off failure".into()));
        }
        self.record(MockCall::PowerOff);
        Ok(())
    }
}
