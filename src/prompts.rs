//! Reflection writing prompts.

use chrono::{Datelike, NaiveDate};

/// Prompt catalogue shown above the writing area.
pub const REFLECTION_PROMPTS: [&str; 8] = [
    "What am I most grateful for today?",
    "What challenged me today and how did I grow from it?",
    "What moment brought me the most joy today?",
    "How did I show kindness to myself or others today?",
    "What would I like to improve about tomorrow?",
    "What emotions did I experience today?",
    "What lesson did I learn today?",
    "How did I practice mindfulness today?",
];

/// The prompt for a given date.
///
/// Rotates through the catalogue one prompt per day, so repeated calls on
/// the same day agree with each other.
pub fn daily_prompt(date: NaiveDate) -> &'static str {
    let index = date
        .num_days_from_ce()
        .rem_euclid(REFLECTION_PROMPTS.len() as i32);
    REFLECTION_PROMPTS[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn prompt_is_stable_within_a_day() {
        assert_eq!(daily_prompt(day("2024-01-15")), daily_prompt(day("2024-01-15")));
    }

    #[test]
    fn prompt_changes_on_consecutive_days() {
        assert_ne!(daily_prompt(day("2024-01-15")), daily_prompt(day("2024-01-16")));
    }

    #[test]
    fn rotation_covers_the_whole_catalogue() {
        let start = day("2024-01-01");
        let mut seen: Vec<&str> = (0..REFLECTION_PROMPTS.len())
            .map(|offset| daily_prompt(start + chrono::Days::new(offset as u64)))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), REFLECTION_PROMPTS.len());
    }
}
