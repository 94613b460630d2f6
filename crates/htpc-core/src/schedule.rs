//! Recording schedule source trait

use chrono::{DateTime, Local};
use thiserror::Error;

/// Errors from querying the recording schedule
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("DVR backend request failed: {0}")]
    Network(String),

    #[error("DVR backend returned HTTP status {0}")]
    Status(u16),

    #[error("Failed to parse DVR response: {0}")]
    Parse(String),

    #[error("Entry start time {0} is not a representable timestamp")]
    InvalidTimestamp(i64),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Source of the next scheduled recording time
///
/// Implemented by the Tvheadend client; mocked in tests.
pub trait ScheduleSource {
    /// Earliest upcoming recording start, or `None` when nothing is
    /// scheduled.
    fn next_recording(&self) -> ScheduleResult<Option<DateTime<Local>>>;
}
