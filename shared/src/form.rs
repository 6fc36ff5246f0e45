//! Landing screen birthday form: selector ranges and submit validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::days_in_month;
use crate::clock::{is_birthday_today, Clock};
use crate::pipeline::{BirthDate, CanonicalDate};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Year assumed before the user has typed one
pub const DEFAULT_YEAR: i32 = 1990;

/// Year used to size the day selector while the year field is unusable.
/// A leap year, so February 29 stays selectable.
const PLACEHOLDER_RANGE_YEAR: i32 = 2000;

/// Specific validation errors for the birthday form.
///
/// The `Display` text is what the form shows inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum BirthdayFormError {
    #[error("Please enter a valid year (1900–2100)")]
    InvalidYear,
    #[error("Invalid day for that month")]
    InvalidDay,
}

/// Raw values from the month/day selectors and the year text box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayFormInput {
    pub month: u32,
    pub day: u32,
    pub year: String,
}

impl BirthdayFormInput {
    /// Starting state: today's month and day, with the default year
    pub fn starting_on(month: u32, day: u32) -> Self {
        Self {
            month,
            day,
            year: DEFAULT_YEAR.to_string(),
        }
    }

    /// The year as a number if the text box holds one
    pub fn year_value(&self) -> Option<i32> {
        parse_year(&self.year)
    }

    /// How many entries the day selector should offer
    pub fn day_count(&self) -> u32 {
        selectable_days(self.month, self.year_value())
    }

    /// Select a month, pulling the day back into range
    pub fn set_month(&mut self, month: u32) {
        self.month = month;
        self.day = clamp_day(self.day, self.month, self.year_value());
    }

    /// Update the year text, pulling the day back into range
    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
        self.day = clamp_day(self.day, self.month, self.year_value());
    }

    pub fn set_day(&mut self, day: u32) {
        self.day = day;
    }

    /// Validate for submission and build the canonical date
    pub fn validate(&self) -> Result<CanonicalDate, BirthdayFormError> {
        validate_birthday(self.month, self.day, &self.year)
    }

    /// Press submit. Each submit replaces whatever error the form showed
    /// before, so at most one message is ever displayed.
    pub fn submit(&self, clock: &dyn Clock) -> SubmitOutcome {
        match self.validate() {
            Ok(date) => SubmitOutcome::Explore {
                date,
                celebrate: is_birthday_today(self.month, self.day, clock),
            },
            Err(error) => SubmitOutcome::Rejected(error),
        }
    }
}

/// What the landing screen does after a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Go to the dashboard, celebrating first if the birthday is today
    Explore { date: CanonicalDate, celebrate: bool },
    Rejected(BirthdayFormError),
}

impl SubmitOutcome {
    /// The message to show under the form, if any
    pub fn error(&self) -> Option<BirthdayFormError> {
        match self {
            Self::Rejected(error) => Some(*error),
            Self::Explore { .. } => None,
        }
    }
}

/// Parse the year text box. Empty or non-numeric input has no value.
pub fn parse_year(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok()
}

/// Day selector range for a month, sized against a placeholder leap year
/// while no year is known
pub fn selectable_days(month: u32, year: Option<i32>) -> u32 {
    days_in_month(month, year.unwrap_or(PLACEHOLDER_RANGE_YEAR))
}

/// Keep a selected day inside the selector range
pub fn clamp_day(day: u32, month: u32, year: Option<i32>) -> u32 {
    day.clamp(1, selectable_days(month, year).max(1))
}

/// Check the submitted values in order: year first, then the day for that month.
pub fn validate_birthday(
    month: u32,
    day: u32,
    year: &str,
) -> Result<CanonicalDate, BirthdayFormError> {
    let year = parse_year(year)
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
        .ok_or(BirthdayFormError::InvalidYear)?;

    let date = BirthDate::new(year, month, day).map_err(|_| BirthdayFormError::InvalidDay)?;
    Ok(date.canonical())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock_on(month: u32, day: u32) -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, month, day).unwrap())
    }

    fn submit(month: u32, day: u32, year: &str) -> Result<String, BirthdayFormError> {
        validate_birthday(month, day, year).map(CanonicalDate::into_string)
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(submit(1, 5, "1990"), Ok("1990.01.05".to_string()));
        assert_eq!(submit(12, 31, "2100"), Ok("2100.12.31".to_string()));
        assert_eq!(submit(2, 29, "2000"), Ok("2000.02.29".to_string()));
        assert_eq!(submit(7, 4, " 1900 "), Ok("1900.07.04".to_string()));
    }

    #[test]
    fn test_invalid_year() {
        assert_eq!(submit(1, 1, "1899"), Err(BirthdayFormError::InvalidYear));
        assert_eq!(submit(1, 1, "2101"), Err(BirthdayFormError::InvalidYear));
        assert_eq!(submit(1, 1, ""), Err(BirthdayFormError::InvalidYear));
        assert_eq!(submit(1, 1, "19x0"), Err(BirthdayFormError::InvalidYear));
    }

    #[test]
    fn test_invalid_day() {
        assert_eq!(submit(2, 30, "2000"), Err(BirthdayFormError::InvalidDay));
        assert_eq!(submit(2, 29, "1900"), Err(BirthdayFormError::InvalidDay));
        assert_eq!(submit(4, 31, "2024"), Err(BirthdayFormError::InvalidDay));
    }

    #[test]
    fn test_year_checked_before_day() {
        assert_eq!(submit(2, 30, "1800"), Err(BirthdayFormError::InvalidYear));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BirthdayFormError::InvalidYear.to_string(),
            "Please enter a valid year (1900–2100)"
        );
        assert_eq!(BirthdayFormError::InvalidDay.to_string(), "Invalid day for that month");
    }

    #[test]
    fn test_selectable_days() {
        assert_eq!(selectable_days(2, Some(2023)), 28);
        assert_eq!(selectable_days(2, Some(2024)), 29);
        assert_eq!(selectable_days(2, None), 29);
        assert_eq!(selectable_days(3, None), 31);
    }

    #[test]
    fn test_switching_month_clamps_day() {
        let mut input = BirthdayFormInput::starting_on(3, 31);
        input.set_year("2023");
        assert_eq!(input.day, 31);

        input.set_month(2);
        assert_eq!(input.day, 28);
        assert_eq!(input.validate().unwrap().as_str(), "2023.02.28");
    }

    #[test]
    fn test_switching_year_clamps_day() {
        let mut input = BirthdayFormInput::starting_on(2, 29);
        input.set_year("2024");
        assert_eq!(input.day, 29);

        input.set_year("2023");
        assert_eq!(input.day, 28);
    }

    #[test]
    fn test_clearing_year_keeps_leap_day() {
        let mut input = BirthdayFormInput::starting_on(2, 29);
        input.set_year("");
        assert_eq!(input.day, 29);
        assert_eq!(input.day_count(), 29);
        assert_eq!(input.validate(), Err(BirthdayFormError::InvalidYear));
    }

    #[test]
    fn test_starting_state() {
        let input = BirthdayFormInput::starting_on(10, 16);
        assert_eq!(input.year, "1990");
        assert_eq!(input.year_value(), Some(1990));
        assert_eq!(input.day_count(), 31);
    }

    #[test]
    fn test_submit_shows_one_error_at_a_time() {
        let clock = clock_on(10, 16);
        let mut input = BirthdayFormInput::starting_on(2, 29);
        input.year = "1800".to_string();

        let first = input.submit(&clock);
        assert_eq!(first.error(), Some(BirthdayFormError::InvalidYear));

        // Fixing the year surfaces the day problem in place of the year one
        input.year = "2023".to_string();
        let second = input.submit(&clock);
        assert_eq!(second.error(), Some(BirthdayFormError::InvalidDay));

        input.set_day(28);
        let third = input.submit(&clock);
        assert_eq!(third.error(), None);
        assert_eq!(
            third,
            SubmitOutcome::Explore {
                date: validate_birthday(2, 28, "2023").unwrap(),
                celebrate: false,
            }
        );
    }

    #[test]
    fn test_submit_celebrates_on_matching_day() {
        let input = BirthdayFormInput::starting_on(10, 16);
        match input.submit(&clock_on(10, 16)) {
            SubmitOutcome::Explore { date, celebrate } => {
                assert!(celebrate);
                assert_eq!(date.as_str(), "1990.10.16");
            }
            other => panic!("expected to explore, got {:?}", other),
        }

        let rejected = BirthdayFormInput {
            month: 10,
            day: 16,
            year: "abc".to_string(),
        };
        assert_eq!(
            rejected.submit(&clock_on(10, 16)),
            SubmitOutcome::Rejected(BirthdayFormError::InvalidYear)
        );
    }
}
