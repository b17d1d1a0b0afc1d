//! Fuzzy calendar dates: a month and day with an optionally-unknown year.
//!
//! Contacts often come with partial information ("her birthday is March 3rd,
//! no idea what year"). A [`FuzzyDate`] keeps the month/day pair usable for
//! recurring reminders while refusing to answer questions that need the year
//! (age, elapsed time).

use serde::{Deserialize, Serialize};
use time::util::days_in_year_month;
use time::{Date, Month};

use crate::errors::Error;
use crate::models::{ContactId, SpecialDateId};

/// Day counts per month when no year is known. February permits 29 days:
/// without a year there is no calendar to check leap-ness against.
const FUZZY_DAYS_IN_MONTH: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date whose year may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyDate {
    year: Option<i32>,
    month: u8,
    day: u8,
}

impl FuzzyDate {
    /// Validates and builds a fuzzy date.
    ///
    /// With a known year the day is checked against that exact year's
    /// calendar (leap-aware). With an unknown year, Feb 29 is accepted.
    pub fn new(year: Option<i32>, month: u8, day: u8) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate {
                year,
                month,
                day,
                reason: "month out of range",
            });
        }

        let max_day = match year {
            Some(y) => {
                let m = Month::try_from(month).map_err(|_| Error::InvalidDate {
                    year,
                    month,
                    day,
                    reason: "month out of range",
                })?;
                days_in_year_month(y, m)
            }
            None => FUZZY_DAYS_IN_MONTH[(month - 1) as usize],
        };

        if day < 1 || day > max_day {
            return Err(Error::InvalidDate {
                year,
                month,
                day,
                reason: "day out of range for month",
            });
        }

        Ok(Self { year, month, day })
    }

    /// Builds a fuzzy date from an exact calendar date, keeping the year.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: Some(date.year()),
            month: u8::from(date.month()),
            day: date.day(),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// True when only the month/day recur; no absolute point in time exists.
    pub fn is_recurring_only(&self) -> bool {
        self.year.is_none()
    }

    /// The exact calendar date, when the year is known.
    pub fn exact(&self) -> Option<Date> {
        let year = self.year?;
        let month = Month::try_from(self.month).ok()?;
        Date::from_calendar_date(year, month, self.day).ok()
    }

    /// Age in whole years as of `today`. `None` when the year is unknown or
    /// the date lies in the future.
    pub fn age_on(&self, today: Date) -> Option<u32> {
        let year = self.year?;
        let mut age = today.year() - year;
        if (u8::from(today.month()), today.day()) < (self.month, self.day) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}

impl std::fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{year:04}-{:02}-{:02}", self.month, self.day),
            None => write!(f, "????-{:02}-{:02}", self.month, self.day),
        }
    }
}

/// The role a special date plays for a contact. At most one special date
/// exists per `(contact, role)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDateRole {
    Birthdate,
    DeceasedDate,
    FirstMet,
}

impl std::fmt::Display for SpecialDateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpecialDateRole::Birthdate => "birthdate",
            SpecialDateRole::DeceasedDate => "deceased_date",
            SpecialDateRole::FirstMet => "first_met",
        };
        f.write_str(name)
    }
}

/// A dated fact about a contact (birthdate, date of death, first meeting).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialDate {
    pub id: SpecialDateId,
    pub contact_id: ContactId,
    pub role: SpecialDateRole,
    pub date: FuzzyDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
    }

    #[test]
    fn test_unknown_year_round_trips() {
        let date = FuzzyDate::new(None, 3, 14).unwrap();
        assert_eq!(date.year(), None);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 14);
        assert!(date.is_recurring_only());
        assert_eq!(date.exact(), None);
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert!(FuzzyDate::new(None, 0, 1).is_err());
        assert!(FuzzyDate::new(None, 13, 1).is_err());
        assert!(FuzzyDate::new(None, 4, 31).is_err());
        assert!(FuzzyDate::new(None, 1, 0).is_err());
        assert!(FuzzyDate::new(Some(2020), 2, 30).is_err());
    }

    #[test]
    fn test_feb_29_without_year_is_allowed() {
        let date = FuzzyDate::new(None, 2, 29).unwrap();
        assert_eq!((date.month(), date.day()), (2, 29));
    }

    #[test]
    fn test_feb_29_with_known_year_is_leap_checked() {
        assert!(FuzzyDate::new(Some(2024), 2, 29).is_ok());
        assert!(FuzzyDate::new(Some(2023), 2, 29).is_err());
    }

    #[test]
    fn test_age_requires_a_year() {
        let unknown = FuzzyDate::new(None, 6, 1).unwrap();
        assert_eq!(unknown.age_on(d(2023, 1, 1)), None);

        let known = FuzzyDate::new(Some(1990), 6, 1).unwrap();
        assert_eq!(known.age_on(d(2023, 5, 31)), Some(32));
        assert_eq!(known.age_on(d(2023, 6, 1)), Some(33));
    }

    #[test]
    fn test_age_in_the_future_is_none() {
        let future = FuzzyDate::new(Some(2050), 1, 1).unwrap();
        assert_eq!(future.age_on(d(2023, 1, 1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FuzzyDate::new(Some(1990), 6, 1).unwrap().to_string(), "1990-06-01");
        assert_eq!(FuzzyDate::new(None, 2, 29).unwrap().to_string(), "????-02-29");
    }
}
