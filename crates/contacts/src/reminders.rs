//! Recurring reminders anchored to a contact's special dates.
//!
//! A reminder recurs on the `(month, day)` of its owning [`FuzzyDate`],
//! stepped by a number of years, whether or not the year is known. Feb 29
//! anchors roll forward to Mar 1 in non-leap candidate years; see
//! [`next_occurrence`].

use serde::{Deserialize, Serialize};
use time::util::is_leap_year;
use time::{Date, Month};

use crate::dates::FuzzyDate;
use crate::models::{ReminderId, SpecialDateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderFrequency {
    /// Fires at the next occurrence of the anchor date, then never again.
    Once,
    /// Fires every `recurrence_step` years.
    Yearly,
}

/// A notification bound to one special date. At most one reminder is active
/// per special date; it is destroyed with the date (cascade), never on its
/// own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub special_date_id: SpecialDateId,
    pub frequency: ReminderFrequency,
    /// Years between occurrences when yearly; always at least 1.
    pub recurrence_step: u32,
    pub title: String,
}

/// Computes the smallest occurrence date on or after `today`.
///
/// Candidate years start at the anchor's known year, or at `today`'s year
/// when the anchor year is unknown, and advance by `recurrence_step` (1 for
/// [`ReminderFrequency::Once`]).
///
/// Feb 29 policy: in a non-leap candidate year the occurrence rolls forward
/// to Mar 1 of that same year. This keeps the computation total and
/// deterministic instead of searching for the next leap year.
pub fn next_occurrence(
    anchor: &FuzzyDate,
    frequency: ReminderFrequency,
    recurrence_step: u32,
    today: Date,
) -> Date {
    let step = match frequency {
        ReminderFrequency::Once => 1,
        ReminderFrequency::Yearly => recurrence_step.max(1) as i32,
    };

    let anchor_year = anchor.year().unwrap_or_else(|| today.year());

    // Jump to the first stepped year that is not strictly in the past.
    let mut year = if anchor_year >= today.year() {
        anchor_year
    } else {
        let behind = today.year() - anchor_year;
        anchor_year + (behind + step - 1) / step * step
    };

    loop {
        let candidate = resolve_in_year(anchor.month(), anchor.day(), year);
        if candidate >= today {
            return candidate;
        }
        year += step;
    }
}

/// Materializes `(month, day)` in a concrete year, applying the Feb 29
/// rollover.
fn resolve_in_year(month: u8, day: u8, year: i32) -> Date {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return Date::from_calendar_date(year, Month::March, 1)
            .expect("Mar 1 exists in every year");
    }
    let month = Month::try_from(month).expect("fuzzy dates carry a validated month");
    Date::from_calendar_date(year, month, day).expect("fuzzy dates carry a validated day")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
    }

    #[test]
    fn test_unknown_year_anchors_at_today() {
        let anchor = FuzzyDate::new(None, 6, 15).unwrap();
        let next = next_occurrence(&anchor, ReminderFrequency::Yearly, 1, d(2023, 1, 1));
        assert_eq!(next, d(2023, 6, 15));

        // Already passed this year: next year.
        let next = next_occurrence(&anchor, ReminderFrequency::Yearly, 1, d(2023, 7, 1));
        assert_eq!(next, d(2024, 6, 15));
    }

    #[test]
    fn test_known_year_steps_from_that_year() {
        // Every 5 years from 2001: 2001, 2006, 2011, ..., 2026.
        let anchor = FuzzyDate::new(Some(2001), 9, 9).unwrap();
        let next = next_occurrence(&anchor, ReminderFrequency::Yearly, 5, d(2023, 1, 1));
        assert_eq!(next, d(2026, 9, 9));
    }

    #[test]
    fn test_occurrence_today_counts() {
        let anchor = FuzzyDate::new(Some(1990), 3, 3).unwrap();
        let next = next_occurrence(&anchor, ReminderFrequency::Yearly, 1, d(2023, 3, 3));
        assert_eq!(next, d(2023, 3, 3));
    }

    #[test]
    fn test_periodicity() {
        // Asking one day past an occurrence advances by exactly the step,
        // same month and day.
        let anchor = FuzzyDate::new(Some(1988), 11, 20).unwrap();
        let first = next_occurrence(&anchor, ReminderFrequency::Yearly, 2, d(2023, 1, 1));
        let second = next_occurrence(
            &anchor,
            ReminderFrequency::Yearly,
            2,
            first.next_day().unwrap(),
        );
        assert_eq!(second.year(), first.year() + 2);
        assert_eq!(second.month(), first.month());
        assert_eq!(second.day(), first.day());
    }

    #[test]
    fn test_feb_29_rolls_to_mar_1_in_non_leap_years() {
        // The documented policy: unknown-year Feb 29 asked from 2023-01-01
        // resolves to 2023-03-01, since 2023 is not a leap year.
        let anchor = FuzzyDate::new(None, 2, 29).unwrap();
        let next = next_occurrence(&anchor, ReminderFrequency::Yearly, 1, d(2023, 1, 1));
        assert_eq!(next, d(2023, 3, 1));
    }

    #[test]
    fn test_feb_29_stays_put_in_leap_years() {
        let anchor = FuzzyDate::new(None, 2, 29).unwrap();
        let next = next_occurrence(&anchor, ReminderFrequency::Yearly, 1, d(2024, 1, 1));
        assert_eq!(next, d(2024, 2, 29));
    }

    #[test]
    fn test_once_is_the_next_occurrence() {
        let anchor = FuzzyDate::new(Some(2001), 9, 9).unwrap();
        let next = next_occurrence(&anchor, ReminderFrequency::Once, 7, d(2023, 1, 1));
        // Step is ignored for one-shot reminders.
        assert_eq!(next, d(2023, 9, 9));
    }

    #[test]
    fn test_zero_step_is_treated_as_one() {
        let anchor = FuzzyDate::new(None, 1, 2).unwrap();
        let next = next_occurrence(&anchor, ReminderFrequency::Yearly, 0, d(2023, 6, 1));
        assert_eq!(next, d(2024, 1, 2));
    }
}
