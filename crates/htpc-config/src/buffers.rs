//! Power-policy buffers
//!
//! These are fixed per run. The idle threshold must strictly exceed the
//! wakeup lead time: otherwise the machine could shut down and then be
//! woken by its own alarm before the slack it just validated against has
//! elapsed.

use std::time::Duration;

use crate::{ConfigError, ConfigResult};

/// Minutes before the next recording start to schedule the wakeup
const DEFAULT_WAKEUP_LEAD_MINS: u64 = 10;

/// Minimum slack before the next recording required to permit shutdown
const DEFAULT_IDLE_SHUTDOWN_THRESHOLD_MINS: u64 = 15;

/// Minimum uptime before shutdown is permitted, so a wake-triggered boot
/// is not powered off before a playback session could plausibly start
const DEFAULT_STARTUP_GRACE_MINS: u64 = 30;

/// Time buffers governing the shutdown decision
#[derive(Debug, Clone, Copy)]
pub struct PowerBuffers {
    /// Duration before a recording to schedule the wake alarm
    pub wakeup_lead: Duration,

    /// Minimum slack before the next recording required to shut down
    pub idle_shutdown_threshold: Duration,

    /// Minimum uptime before shutdown is permitted
    pub startup_grace: Duration,
}

impl PowerBuffers {
    /// Construct validated buffers
    pub fn new(
        wakeup_lead: Duration,
        idle_shutdown_threshold: Duration,
        startup_grace: Duration,
    ) -> ConfigResult<Self> {
        let buffers = Self {
            wakeup_lead,
            idle_shutdown_threshold,
            startup_grace,
        };
        buffers.validate()?;
        Ok(buffers)
    }

    /// Check the threshold/lead invariant
    pub fn validate(&self) -> ConfigResult<()> {
        if self.idle_shutdown_threshold <= self.wakeup_lead {
            return Err(ConfigError::InvalidBuffers {
                threshold: self.idle_shutdown_threshold,
                lead: self.wakeup_lead,
            });
        }
        Ok(())
    }
}

impl Default for PowerBuffers {
    fn default() -> Self {
        Self {
            wakeup_lead: Duration::from_secs(DEFAULT_WAKEUP_LEAD_MINS * 60),
            idle_shutdown_threshold: Duration::from_secs(
                DEFAULT_IDLE_SHUTDOWN_THRESHOLD_MINS * 60,
            ),
            startup_grace: Duration::from_secs(DEFAULT_STARTUP_GRACE_MINS * 60),
        }
    }
}
