// src/scheduler.rs
//! Daily refresh trigger.
//!
//! Fires once per day at a wall-clock time in the canonical time zone and runs
//! the scheduled freshness check. A failed run is logged and not retried; the
//! next day's run covers it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::{error, info};

use crate::service::{DailyPromptService, ScheduledOutcome};

/// Next instant strictly after `now` whose local time in `tz` is `at`.
///
/// Times inside a DST gap move to the same wall time one hour later; times
/// repeated by a DST fold resolve to the earlier instant.
pub fn next_run_after(now: DateTime<Utc>, tz: Tz, at: NaiveTime) -> DateTime<Utc> {
    let mut date = now.with_timezone(&tz).date_naive();

    for _ in 0..3 {
        if let Some(candidate) = resolve_local(tz, date.and_time(at))
            && candidate > now
        {
            return candidate;
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    now + chrono::Duration::days(1)
}

fn resolve_local(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(t) => Some(t.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => tz
            .from_local_datetime(&(local + chrono::Duration::hours(1)))
            .earliest()
            .map(|t| t.with_timezone(&Utc)),
    }
}

/// Run one scheduled check and log the outcome
pub async fn run_scheduled_refresh(service: &DailyPromptService) {
    match service.scheduled_refresh().await {
        Ok(ScheduledOutcome::Skipped(record)) => {
            info!(date = %record.date, "Scheduled refresh: prompt already fresh");
        }
        Ok(ScheduledOutcome::Refreshed(outcome)) => {
            info!(
                date = %outcome.record.date,
                source = outcome.source.as_str(),
                "Scheduled refresh: prompt regenerated"
            );
        }
        Err(e) => {
            error!("Scheduled refresh failed: {e:#}");
        }
    }
}

/// Spawn the background daily refresh task.
///
/// `at` is the local fire time in the service's canonical time zone.
pub fn spawn_daily_scheduler(service: Arc<DailyPromptService>, at: NaiveTime) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let tz = service.calendar().timezone();
        loop {
            let now = service.calendar().now();
            let next = next_run_after(now, tz, at);
            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
            info!(
                next_run = %next.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z"),
                wait_secs = wait.as_secs(),
                "Daily prompt refresh scheduled"
            );

            tokio::time::sleep(wait).await;
            run_scheduled_refresh(&service).await;
        }
    })
}
