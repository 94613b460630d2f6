//! Tvheadend grid_upcoming client

use chrono::{DateTime, Local, TimeZone};
use htpc_config::Credentials;
use htpc_core::{ScheduleError, ScheduleResult, ScheduleSource};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// The upcoming-entries endpoint of a local Tvheadend instance
pub const DEFAULT_GRID_UPCOMING_URL: &str =
    "http://localhost:9981/api/dvr/entry/grid_upcoming";

/// Request and connect timeout for the DVR query
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response shape of `grid_upcoming`
///
/// Entries carry many more fields; only the start time matters here and
/// the rest are ignored.
#[derive(Debug, Deserialize)]
struct GridUpcoming {
    entries: Vec<GridEntry>,
}

#[derive(Debug, Deserialize)]
struct GridEntry {
    /// Recording start in Unix epoch seconds, including padding
    start_real: i64,
}

/// Blocking Tvheadend client
pub struct TvheadendClient {
    client: reqwest::blocking::Client,
    url: String,
    credentials: Credentials,
}

impl TvheadendClient {
    /// Client against the default local endpoint
    pub fn new(credentials: Credentials) -> ScheduleResult<Self> {
        Self::with_url(DEFAULT_GRID_UPCOMING_URL, credentials)
    }

    pub fn with_url(url: impl Into<String>, credentials: Credentials) -> ScheduleResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ScheduleError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            credentials,
        })
    }
}

impl ScheduleSource for TvheadendClient {
    fn next_recording(&self) -> ScheduleResult<Option<DateTime<Local>>> {
        debug!(url = %self.url, "Querying upcoming recordings");

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .map_err(|e| ScheduleError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| ScheduleError::Network(e.to_string()))?;

        parse_next_recording(&body)
    }
}

/// Extract the earliest upcoming recording start from a `grid_upcoming`
/// response body
pub fn parse_next_recording(body: &str) -> ScheduleResult<Option<DateTime<Local>>> {
    let grid: GridUpcoming =
        serde_json::from_str(body).map_err(|e| ScheduleError::Parse(e.to_string()))?;

    let earliest = grid.entries.iter().map(|e| e.start_real).min();

    match earliest {
        Some(epoch) => Local
            .timestamp_opt(epoch, 0)
            .single()
            .ok_or(ScheduleError::InvalidTimestamp(epoch))
            .map(Some),
        None => {
            warn!("DVR reports no upcoming recordings");
            Ok(None)
        }
    }
}
