//! Durable CRUD over the reflection list.

use std::sync::Arc;

use crate::error::{JournalError, Result};
use crate::reflection::Reflection;
use crate::store::KeyValueStore;

/// Storage key for the reflection list.
pub(crate) const REFLECTIONS_KEY: &str = "reflections";

/// CRUD over the reflection list, serialized as one JSON array under a
/// single storage key, newest first.
///
/// Every mutation is a full read-modify-rewrite of that key with
/// last-writer-wins semantics; there is no revision token. The journal is
/// single-user and single-process, so each operation holds the only live
/// handle on the store.
pub struct ReflectionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ReflectionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist a reflection, replacing any existing record with the same id
    /// and placing the new record first.
    ///
    /// Content must be non-empty; the stored list stays untouched when
    /// validation fails.
    pub async fn save(&self, reflection: &Reflection) -> Result<()> {
        if reflection.content.trim().is_empty() {
            return Err(JournalError::EmptyContent);
        }

        let mut reflections = self.get_all().await;
        reflections.retain(|r| r.id != reflection.id);
        reflections.insert(0, reflection.clone());
        self.write(&reflections).await?;

        tracing::debug!(id = %reflection.id, "saved reflection");
        Ok(())
    }

    /// The full stored list. A missing key or an unreadable value yields an
    /// empty list rather than an error.
    pub async fn get_all(&self) -> Vec<Reflection> {
        let raw = match self.store.get(REFLECTIONS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read reflections");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored reflections unreadable, treating as empty");
            Vec::new()
        })
    }

    /// Remove the reflection with the given id. Unknown ids are a no-op.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut reflections = self.get_all().await;
        reflections.retain(|r| r.id != id);
        self.write(&reflections).await?;

        tracing::debug!(id, "deleted reflection");
        Ok(())
    }

    async fn write(&self, reflections: &[Reflection]) -> Result<()> {
        let raw = serde_json::to_string(reflections)?;
        self.store.set(REFLECTIONS_KEY, &raw).await?;
        Ok(())
    }
}
