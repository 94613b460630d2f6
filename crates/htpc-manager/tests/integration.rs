//! Integration tests for htpc-manager
//!
//! These drive a full decision cycle through the real config parser and
//! DVR response parsing, with the host mocked out.

use chrono::{DateTime, Local};
use htpc_config::{parse_credentials, PowerBuffers};
use htpc_core::{CycleOutcome, Manager, ScheduleResult, ScheduleSource, PLAYER_PROCESS};
use htpc_dvr::{parse_next_recording, TvheadendClient};
use htpc_host_api::{MockCall, MockHost};
use std::time::Duration;

/// Schedule source backed by a canned grid_upcoming response body,
/// exercising the real parsing path without a backend
struct CannedSchedule(String);

impl ScheduleSource for CannedSchedule {
    fn next_recording(&self) -> ScheduleResult<Option<DateTime<Local>>> {
        parse_next_recording(&self.0)
    }
}

fn mins(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

fn grid_body(starts: &[i64]) -> String {
    let entries: Vec<String> = starts
        .iter()
        .map(|s| format!(r#"{{"uuid": "x", "title": "Show", "start_real": {}}}"#, s))
        .collect();
    format!(
        r#"{{"entries": [{}], "total": {}}}"#,
        entries.join(", "),
        starts.len()
    )
}

#[test]
fn idle_machine_schedules_wake_and_shuts_down() {
    let now = Local::now();
    // Two upcoming recordings; the earlier one must drive the wake time
    let body = grid_body(&[now.timestamp() + 5 * 3600, now.timestamp() + 3600]);

    let host = MockHost::new().with_uptime(mins(40));
    let schedule = CannedSchedule(body);
    let buffers = PowerBuffers::new(mins(10), mins(15), mins(30)).unwrap();

    let outcome = Manager::new(&host, &schedule, buffers).run(now).unwrap();

    let expected_wake = now.timestamp() + 3600 - 600;
    match outcome {
        CycleOutcome::ShutdownInvoked { wakeup: Some(wake) } => {
            assert_eq!(wake.timestamp(), expected_wake);
        }
        other => panic!("expected shutdown with wake alarm, got {:?}", other),
    }
    assert_eq!(
        host.calls(),
        vec![
            MockCall::ClearWakeAlarm,
            MockCall::ArmWakeAlarm {
                unix_time: expected_wake
            },
            MockCall::PowerOff,
        ]
    );
}

#[test]
fn playback_keeps_the_machine_up() {
    let now = Local::now();
    let body = grid_body(&[now.timestamp() + 12 * 3600]);

    let host = MockHost::new()
        .with_uptime(mins(300))
        .with_process(PLAYER_PROCESS);
    let schedule = CannedSchedule(body);

    let outcome = Manager::new(&host, &schedule, PowerBuffers::default())
        .run(now)
        .unwrap();

    assert_eq!(outcome, CycleOutcome::StayUp);
    assert!(host.calls().is_empty());
}

#[test]
fn recent_boot_keeps_the_machine_up() {
    let now = Local::now();
    let body = grid_body(&[now.timestamp() + 12 * 3600]);

    let host = MockHost::new().with_uptime(mins(2));
    let schedule = CannedSchedule(body);

    let outcome = Manager::new(&host, &schedule, PowerBuffers::default())
        .run(now)
        .unwrap();

    assert_eq!(outcome, CycleOutcome::StayUp);
    assert!(host.calls().is_empty());
}

#[test]
fn empty_schedule_shuts_down_without_arming() {
    let now = Local::now();
    let host = MockHost::new().with_uptime(mins(40));
    let schedule = CannedSchedule(grid_body(&[]));

    let outcome = Manager::new(&host, &schedule, PowerBuffers::default())
        .run(now)
        .unwrap();

    assert_eq!(outcome, CycleOutcome::ShutdownInvoked { wakeup: None });
    assert_eq!(
        host.calls(),
        vec![MockCall::ClearWakeAlarm, MockCall::PowerOff]
    );
}

#[test]
fn credentials_wire_into_the_client() {
    let creds = parse_credentials(
        r#"
        [CREDENTIALS]
        tvheadend_user = "hts"
        tvheadend_password = "secret"
    "#,
    )
    .unwrap();

    // Client construction must succeed with loaded credentials; no
    // request is issued here.
    assert!(TvheadendClient::new(creds).is_ok());
}
