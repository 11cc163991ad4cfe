// src/service.rs
//! Freshness / cache policy shared by the HTTP endpoint and the scheduler.
//!
//! All callers on the same canonical day see the same prompt unless a refresh
//! is forced. The read-then-write sequence is not atomic: two racing misses
//! may both generate and both write, which is acceptable.

use std::sync::Arc;

use tracing::{debug, info};

use crate::calendar::Calendar;
use crate::error::ServiceError;
use crate::generator::{PromptGenerator, PromptSource};
use crate::store::{DailyPrompt, PromptStore};

/// Why the stored record cannot be served as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshReason {
    Missing,
    Stale { stored_date: String },
    Empty,
    Forced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    Fresh(DailyPrompt),
    Refresh(RefreshReason),
}

/// Cache decision for `record` on `today`
pub fn check_freshness(record: Option<DailyPrompt>, today: &str, force: bool) -> Freshness {
    if force {
        return Freshness::Refresh(RefreshReason::Forced);
    }
    match record {
        None => Freshness::Refresh(RefreshReason::Missing),
        Some(r) if r.date != today => Freshness::Refresh(RefreshReason::Stale { stored_date: r.date }),
        Some(r) if r.prompt.trim().is_empty() => Freshness::Refresh(RefreshReason::Empty),
        Some(r) => Freshness::Fresh(r),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    pub record: DailyPrompt,
    pub source: PromptSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledOutcome {
    /// Record already fresh for today, nothing written
    Skipped(DailyPrompt),
    Refreshed(PromptOutcome),
}

pub struct DailyPromptService {
    store: Arc<dyn PromptStore>,
    generator: PromptGenerator,
    calendar: Calendar,
}

impl DailyPromptService {
    pub fn new(store: Arc<dyn PromptStore>, generator: PromptGenerator, calendar: Calendar) -> Self {
        Self {
            store,
            generator,
            calendar,
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub async fn current(&self) -> Result<Option<DailyPrompt>, ServiceError> {
        self.store.get().await.map_err(ServiceError::Read)
    }

    /// On-demand entry point
    pub async fn get_prompt(&self, force: bool) -> Result<PromptOutcome, ServiceError> {
        let today = self.calendar.today();
        let today_str = today.to_string();
        let stored = self.current().await?;

        match check_freshness(stored, &today_str, force) {
            Freshness::Fresh(record) => {
                debug!(date = %today_str, "Serving cached daily prompt");
                Ok(PromptOutcome {
                    record,
                    source: PromptSource::Cached,
                })
            }
            Freshness::Refresh(reason) => self.regenerate(today.month0(), today_str, reason).await,
        }
    }

    /// Scheduled entry point: never forces, no-op when fresh
    pub async fn scheduled_refresh(&self) -> Result<ScheduledOutcome, ServiceError> {
        let today = self.calendar.today();
        let today_str = today.to_string();
        let stored = self.current().await?;

        match check_freshness(stored, &today_str, false) {
            Freshness::Fresh(record) => {
                info!(date = %today_str, "Daily prompt already fresh, skipping scheduled refresh");
                Ok(ScheduledOutcome::Skipped(record))
            }
            Freshness::Refresh(reason) => {
                let outcome = self.regenerate(today.month0(), today_str, reason).await?;
                Ok(ScheduledOutcome::Refreshed(outcome))
            }
        }
    }

    async fn regenerate(
        &self,
        month0: u32,
        today: String,
        reason: RefreshReason,
    ) -> Result<PromptOutcome, ServiceError> {
        info!(date = %today, reason = ?reason, "Regenerating daily prompt");

        let generated = self.generator.generate(month0).await;
        let record = DailyPrompt {
            prompt: generated.text,
            date: today,
        };
        self.store.set(&record).await.map_err(ServiceError::Write)?;

        info!(
            date = %record.date,
            source = generated.source.as_str(),
            "Daily prompt saved"
        );
        Ok(PromptOutcome {
            record,
            source: generated.source,
        })
    }
}
