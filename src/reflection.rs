use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single journal entry.
///
/// Serialized with camelCase keys. Records written by earlier app revisions
/// may omit `time`, `mood` and `tags`, so all three deserialize from absent
/// fields and are skipped when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Mood on a 1 (difficult) to 5 (great) scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: i64,
}

impl Reflection {
    /// Create a reflection stamped with the current local date and time.
    /// The id is the creation timestamp in epoch milliseconds.
    pub fn new(content: String, mood: Option<u8>, tags: Vec<String>) -> Self {
        let now = Local::now();
        Reflection {
            id: now.timestamp_millis().to_string(),
            date: now.date_naive(),
            content: content.trim().to_string(),
            time: Some(now.format("%I:%M %p").to_string()),
            mood,
            tags: if tags.is_empty() { None } else { Some(tags) },
            created_at: now.timestamp_millis(),
        }
    }

    /// Display label for the mood scale.
    pub fn mood_label(&self) -> Option<&'static str> {
        match self.mood? {
            5 => Some("Great"),
            4 => Some("Good"),
            3 => Some("Okay"),
            2 => Some("Low"),
            1 => Some("Difficult"),
            _ => None,
        }
    }

    /// Date relative to `today`: "Today", "Yesterday", or the long form.
    pub fn display_date(&self, today: NaiveDate) -> String {
        if self.date == today {
            "Today".to_string()
        } else if Some(self.date) == today.pred_opt() {
            "Yesterday".to_string()
        } else {
            self.date.format("%A, %B %-d, %Y").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(date: &str) -> Reflection {
        Reflection {
            id: "1705305600000".to_string(),
            date: date.parse().unwrap(),
            content: "Morning meditation insights".to_string(),
            time: Some("08:30 AM".to_string()),
            mood: Some(4),
            tags: Some(vec!["meditation".to_string()]),
            created_at: 1_705_305_600_000,
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample("2024-01-15")).unwrap();
        assert_eq!(json["id"], "1705305600000");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["createdAt"], 1_705_305_600_000_i64);
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let mut reflection = sample("2024-01-15");
        reflection.time = None;
        reflection.mood = None;
        reflection.tags = None;

        let json = serde_json::to_value(&reflection).unwrap();
        assert!(json.get("time").is_none());
        assert!(json.get("mood").is_none());
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn deserializes_legacy_record_without_optional_fields() {
        let raw = r#"{"id":"1","date":"2024-01-10","content":"gratitude","createdAt":1704844800000}"#;
        let reflection: Reflection = serde_json::from_str(raw).unwrap();
        assert_eq!(reflection.id, "1");
        assert_eq!(reflection.content, "gratitude");
        assert!(reflection.time.is_none());
        assert!(reflection.mood.is_none());
        assert!(reflection.tags.is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let reflection = sample("2024-01-15");
        let raw = serde_json::to_string(&reflection).unwrap();
        let back: Reflection = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, reflection);
    }

    #[test]
    fn new_trims_content_and_drops_empty_tags() {
        let reflection = Reflection::new("  a calm day  ".to_string(), None, Vec::new());
        assert_eq!(reflection.content, "a calm day");
        assert!(reflection.tags.is_none());
        assert_eq!(reflection.id, reflection.created_at.to_string());
    }

    #[test]
    fn mood_labels_cover_the_scale() {
        let mut reflection = sample("2024-01-15");
        let expected = [
            (1, "Difficult"),
            (2, "Low"),
            (3, "Okay"),
            (4, "Good"),
            (5, "Great"),
        ];
        for (value, label) in expected {
            reflection.mood = Some(value);
            assert_eq!(reflection.mood_label(), Some(label));
        }
        reflection.mood = None;
        assert!(reflection.mood_label().is_none());
    }

    #[test]
    fn display_date_is_relative_to_today() {
        let today: NaiveDate = "2024-01-15".parse().unwrap();

        assert_eq!(sample("2024-01-15").display_date(today), "Today");
        assert_eq!(sample("2024-01-14").display_date(today), "Yesterday");
        assert_eq!(
            sample("2024-01-10").display_date(today),
            "Wednesday, January 10, 2024"
        );
    }
}
