//! Daily reminder time preference.
//!
//! Only the stored preference lives here. Scheduling and delivering the
//! actual notification belongs to the platform shell.

use std::sync::Arc;

use crate::error::{JournalError, Result};
use crate::store::KeyValueStore;

/// Storage key for the reminder time.
pub(crate) const REMINDER_TIME_KEY: &str = "reflectionReminderTime";

/// Stored daily reminder time, as 24-hour `HH:MM`.
pub struct ReminderPreference {
    store: Arc<dyn KeyValueStore>,
}

impl ReminderPreference {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Set the reminder time. The value must be 24-hour `HH:MM`.
    pub async fn set(&self, time: &str) -> Result<()> {
        if !is_valid_time(time) {
            return Err(JournalError::InvalidReminderTime(time.to_string()));
        }
        self.store.set(REMINDER_TIME_KEY, time).await?;
        Ok(())
    }

    /// The stored reminder time, or `None` when unset or unreadable.
    pub async fn get(&self) -> Option<String> {
        match self.store.get(REMINDER_TIME_KEY).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read reminder time");
                None
            }
        }
    }

    /// Remove the stored reminder time.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(REMINDER_TIME_KEY).await?;
        Ok(())
    }
}

fn is_valid_time(time: &str) -> bool {
    let Some((hours, minutes)) = time.split_once(':') else {
        return false;
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return false;
    }
    matches!(hours.parse::<u8>(), Ok(h) if h < 24) && matches!(minutes.parse::<u8>(), Ok(m) if m < 60)
}
