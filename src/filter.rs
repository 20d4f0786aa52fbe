//! Display-side filtering of the reflection list. Nothing here touches
//! storage or reorders the input.

use chrono::{Days, Local, Months, NaiveDate};

use crate::reflection::Reflection;

/// Date-range presets offered by the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeFilter {
    #[default]
    All,
    Today,
    /// The last 7 calendar days, inclusive.
    Week,
    /// Back to the same day of the previous month. End-of-month overflow is
    /// clamped (Mar 31 minus one month is Feb 28 or 29).
    Month,
}

impl std::str::FromStr for RangeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(format!("unknown range filter: {other}")),
        }
    }
}

/// Filter for display: a case-insensitive text match (content, tags, ISO
/// date) AND the range predicate, evaluated against the current local date.
pub fn filter_reflections(
    reflections: &[Reflection],
    search: &str,
    range: RangeFilter,
) -> Vec<Reflection> {
    filter_as_of(reflections, search, range, Local::now().date_naive())
}

/// Same as [`filter_reflections`] with an explicit "today".
pub fn filter_as_of(
    reflections: &[Reflection],
    search: &str,
    range: RangeFilter,
    today: NaiveDate,
) -> Vec<Reflection> {
    let term = search.trim().to_lowercase();
    reflections
        .iter()
        .filter(|r| matches_text(r, &term) && in_range(r.date, range, today))
        .cloned()
        .collect()
}

fn matches_text(reflection: &Reflection, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    reflection.content.to_lowercase().contains(term)
        || reflection.date.to_string().contains(term)
        || reflection
            .tags
            .iter()
            .flatten()
            .any(|tag| tag.to_lowercase().contains(term))
}

fn in_range(date: NaiveDate, range: RangeFilter, today: NaiveDate) -> bool {
    match range {
        RangeFilter::All => true,
        RangeFilter::Today => date == today,
        RangeFilter::Week => today
            .checked_sub_days(Days::new(7))
            .map_or(true, |boundary| date >= boundary),
        RangeFilter::Month => today
            .checked_sub_months(Months::new(1))
            .map_or(true, |boundary| date >= boundary),
    }
}
