//! The persisted settings object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::store::KeyValueStore;

/// Storage key for the settings object.
pub(crate) const SETTINGS_KEY: &str = "app_settings";

/// Settings persisted as a single JSON object.
///
/// Streak bookkeeping shares this object with any other app settings, so
/// unknown keys land in `extra` and are written back untouched on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Last calendar date on which a reflection was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reflection_date: Option<NaiveDate>,
    /// Current consecutive-day reflection count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection_streak: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Load settings, treating a missing or malformed value as defaults.
pub async fn load(store: &dyn KeyValueStore) -> AppSettings {
    let raw = match store.get(SETTINGS_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppSettings::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read settings, using defaults");
            return AppSettings::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored settings unreadable, using defaults");
        AppSettings::default()
    })
}

/// Persist the settings object, replacing the stored value.
pub async fn save(store: &dyn KeyValueStore, settings: &AppSettings) -> Result<()> {
    let raw = serde_json::to_string(settings)?;
    store.set(SETTINGS_KEY, &raw).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn load_defaults_when_nothing_stored() {
        let store = MemoryStore::new();
        let settings = load(&store).await;
        assert!(settings.last_reflection_date.is_none());
        assert!(settings.reflection_streak.is_none());
    }

    #[tokio::test]
    async fn load_defaults_when_stored_value_is_malformed() {
        let store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{not json").await.unwrap();
        assert_eq!(load(&store).await, AppSettings::default());
    }

    #[tokio::test]
    async fn save_uses_camel_case_keys() {
        let store = MemoryStore::new();
        let settings = AppSettings {
            last_reflection_date: Some("2024-01-15".parse().unwrap()),
            reflection_streak: Some(2),
            extra: Map::new(),
        };
        save(&store, &settings).await.unwrap();

        let raw = store.get(SETTINGS_KEY).await.unwrap().unwrap();
        let json: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["lastReflectionDate"], "2024-01-15");
        assert_eq!(json["reflectionStreak"], 2);
    }

    #[tokio::test]
    async fn unrelated_settings_keys_survive_a_round_trip() {
        let store = MemoryStore::new();
        store
            .set(SETTINGS_KEY, r#"{"theme":"cosmic","reflectionStreak":4}"#)
            .await
            .unwrap();

        let mut settings = load(&store).await;
        assert_eq!(settings.reflection_streak, Some(4));
        assert_eq!(settings.extra["theme"], "cosmic");

        settings.reflection_streak = Some(5);
        save(&store, &settings).await.unwrap();

        let raw = store.get(SETTINGS_KEY).await.unwrap().unwrap();
        let json: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["theme"], "cosmic");
        assert_eq!(json["reflectionStreak"], 5);
    }
}
