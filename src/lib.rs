//! # zen_journal
//!
//! Local-first reflection journal: journal entries with optional mood and
//! tags, persisted as JSON under named keys in a pluggable key-value store,
//! with a consecutive-day streak counter and text/date-range filtered
//! retrieval.

pub mod error;
pub mod filter;
pub mod prompts;
pub mod reflection;
pub mod reminder;
pub mod repository;
pub mod settings;
pub mod store;
pub mod streak;

pub use error::{JournalError, Result};
pub use filter::{filter_reflections, RangeFilter};
pub use reflection::Reflection;
pub use reminder::ReminderPreference;
pub use repository::ReflectionRepository;
pub use settings::AppSettings;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use streak::StreakTracker;
