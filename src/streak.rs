//! Consecutive-day reflection streak.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::settings;
use crate::store::KeyValueStore;

/// Counts how many calendar days in a row at least one reflection was
/// saved. The counter advances at most once per day no matter how many
/// reflections are written.
pub struct StreakTracker {
    store: Arc<dyn KeyValueStore>,
}

impl StreakTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Record reflection activity for today and return the updated streak.
    ///
    /// Yesterday's activity extends the streak by one; any longer gap (or
    /// first-ever use) restarts it at 1.
    pub async fn record_activity(&self) -> Result<u32> {
        self.record_activity_on(Local::now().date_naive()).await
    }

    async fn record_activity_on(&self, today: NaiveDate) -> Result<u32> {
        let mut settings = settings::load(self.store.as_ref()).await;
        let current = settings.reflection_streak.unwrap_or(0);

        if settings.last_reflection_date == Some(today) {
            // already counted today
            return Ok(current);
        }

        let yesterday = today.pred_opt();
        let streak = if yesterday.is_some() && settings.last_reflection_date == yesterday {
            current + 1
        } else {
            1
        };

        settings.last_reflection_date = Some(today);
        settings.reflection_streak = Some(streak);
        settings::save(self.store.as_ref(), &settings).await?;

        tracing::debug!(streak, "updated reflection streak");
        Ok(streak)
    }

    /// The last recorded streak, defaulting to 0.
    ///
    /// This is a pure read: a stale `last_reflection_date` does not decay
    /// the value here. Only the next [`Self::record_activity`] resolves
    /// staleness, so the displayed streak reflects "last known".
    pub async fn current_streak(&self) -> u32 {
        settings::load(self.store.as_ref())
            .await
            .reflection_streak
            .unwrap_or(0)
    }
}
