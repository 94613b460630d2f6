//! Linux host adapter for htpc-manager
//!
//! Provides:
//! - Process lookup by executable name via `/proc/<pid>/comm`
//! - Uptime from `/proc/uptime`
//! - RTC wake alarm programming via `/sys/class/rtc/rtc0/wakealarm`
//! - Immediate shutdown via `/sbin/shutdown -h now`

mod adapter;
mod process;

pub use adapter::*;
pub use process::*;
