//! Birthday parameter pipeline.
//!
//! Turns whatever arrived in the dashboard URL into display-ready values:
//! `normalize_date_string` cleans the text, `parse_date` checks it against the
//! calendar and `derive_display_fields` produces what the dashboard shows.
//! Nothing here fails loudly; bad input degrades to the fallback display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{is_valid_date, month_name};

/// Shown wherever a date-derived value is unavailable
pub const FALLBACK_TOKEN: &str = "—";

/// Number of digits in a `YYYYMMDD` run
const DATE_DIGITS: usize = 8;

/// Largest year that still fits the four-digit canonical form
const MAX_CANONICAL_YEAR: i32 = 9999;

/// Why an incoming date string could not become a `BirthDate`.
///
/// Never shown to users; the dashboard falls back to placeholder values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date string is empty")]
    Empty,
    #[error("expected year.month.day, found {0} components")]
    WrongComponentCount(usize),
    #[error("date component {0:?} is not a number")]
    MalformedComponent(String),
    #[error("year {0} cannot be written as four digits")]
    YearOutOfRange(i32),
    #[error("{year:04}.{month:02}.{day:02} is not a calendar date")]
    NotACalendarDate { year: i32, month: u32, day: u32 },
}

/// A validated calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Create a date, rejecting anything the calendar would have to roll over
    /// (month 13, day 32, February 30, February 29 outside leap years).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateParseError> {
        if !(0..=MAX_CANONICAL_YEAR).contains(&year) {
            return Err(DateParseError::YearOutOfRange(year));
        }
        if !is_valid_date(year, month, day) {
            return Err(DateParseError::NotACalendarDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Long en-US form, e.g. "January 5, 1990"
    pub fn long_date(&self) -> String {
        // month is validated on construction
        let name = month_name(self.month).unwrap_or_default();
        format!("{} {}, {}", name, self.day, self.year)
    }

    pub fn canonical(&self) -> CanonicalDate {
        CanonicalDate::from(*self)
    }
}

impl FromStr for BirthDate {
    type Err = DateParseError;

    /// Parse a dotted `year.month.day` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DateParseError::Empty);
        }

        let parts: Vec<&str> = s.split('.').collect();
        let [year, month, day]: [&str; 3] = parts
            .as_slice()
            .try_into()
            .map_err(|_| DateParseError::WrongComponentCount(parts.len()))?;

        let year = parse_component::<i32>(year)?;
        let month = parse_component::<u32>(month)?;
        let day = parse_component::<u32>(day)?;

        Self::new(year, month, day)
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, DateParseError> {
    s.parse::<T>()
        .map_err(|_| DateParseError::MalformedComponent(s.to_owned()))
}

/// The `YYYY.MM.DD` transport form carried between the two screens.
///
/// Only constructible from a `BirthDate`, so the text is always ten
/// characters with zero-padded month and day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalDate(String);

impl CanonicalDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<BirthDate> for CanonicalDate {
    fn from(date: BirthDate) -> Self {
        Self(format!("{:04}.{:02}.{:02}", date.year, date.month, date.day))
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Values the dashboard substitutes into its templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub display_year: Option<i32>,
    pub long_date: String,
}

impl DisplayFields {
    /// Display year as text, or the fallback token
    pub fn year_text(&self) -> String {
        self.display_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| FALLBACK_TOKEN.to_string())
    }
}

impl Default for DisplayFields {
    fn default() -> Self {
        derive_display_fields(None)
    }
}

/// Strip everything but digits and reshape an eight-digit run into `YYYY.MM.DD`.
///
/// Returns an empty string for absent input or any other digit count. No
/// calendar check happens here.
pub fn normalize_date_string(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != DATE_DIGITS {
        return String::new();
    }

    format!("{}.{}.{}", &digits[0..4], &digits[4..6], &digits[6..8])
}

/// Parse a normalized date, yielding `None` for anything that is not a real day
pub fn parse_date(normalized: &str) -> Option<BirthDate> {
    normalized.parse().ok()
}

pub fn derive_display_fields(parsed: Option<&BirthDate>) -> DisplayFields {
    match parsed {
        Some(date) => DisplayFields {
            display_year: Some(date.year),
            long_date: date.long_date(),
        },
        None => DisplayFields {
            display_year: None,
            long_date: FALLBACK_TOKEN.to_string(),
        },
    }
}

/// Output of the whole pipeline for one incoming parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBirthday {
    /// `YYYY.MM.DD` or empty when the input was unusable
    pub normalized: String,
    pub date: Option<BirthDate>,
    pub display: DisplayFields,
}

pub fn resolve_birthday(raw: Option<&str>) -> ResolvedBirthday {
    let normalized = normalize_date_string(raw);
    let date = parse_date(&normalized);
    let display = derive_display_fields(date.as_ref());
    ResolvedBirthday {
        normalized,
        date,
        display,
    }
}

/// Dashboard query parameters. `date` is current, `birthday` is the legacy key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayQuery {
    pub date: Option<String>,
    pub birthday: Option<String>,
}

impl BirthdayQuery {
    pub fn new(date: Option<String>, birthday: Option<String>) -> Self {
        Self { date, birthday }
    }

    /// Build from decoded query pairs. A repeated key keeps its first value,
    /// the way `URLSearchParams.get` does; unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "date" => &mut query.date,
                "birthday" => &mut query.birthday,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Raw parameter value; `date` wins unless it is missing or empty
    pub fn raw(&self) -> Option<&str> {
        self.date
            .as_deref()
            .filter(|value| !value.is_empty())
            .or(self.birthday.as_deref())
    }

    pub fn resolve(&self) -> ResolvedBirthday {
        resolve_birthday(self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date_string() {
        assert_eq!(normalize_date_string(Some("1990-01-05")), "1990.01.05");
        assert_eq!(normalize_date_string(Some("19900105")), "1990.01.05");
        assert_eq!(normalize_date_string(Some("1990.01.05")), "1990.01.05");
        assert_eq!(normalize_date_string(Some("1990%2E01%2E05")), "");
        assert_eq!(normalize_date_string(Some(" 1990 / 01 / 05 ")), "1990.01.05");
        assert_eq!(normalize_date_string(Some("abc")), "");
        assert_eq!(normalize_date_string(Some("")), "");
        assert_eq!(normalize_date_string(None), "");
    }

    #[test]
    fn test_normalize_wrong_digit_count() {
        assert_eq!(normalize_date_string(Some("1990-1-5")), "");
        assert_eq!(normalize_date_string(Some("199001055")), "");
        // Non-ASCII digits are stripped like any other character
        assert_eq!(normalize_date_string(Some("١٩٩٠٠١٠٥")), "");
    }

    #[test]
    fn test_normalize_is_syntactic_only() {
        assert_eq!(normalize_date_string(Some("19901399")), "1990.13.99");
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("1990.01.05"),
            Some(BirthDate { year: 1990, month: 1, day: 5 })
        );
        assert_eq!(
            parse_date("2000.02.29"),
            Some(BirthDate { year: 2000, month: 2, day: 29 })
        );
    }

    #[test]
    fn test_parse_date_rejects_rollover() {
        assert_eq!(parse_date("1990.02.30"), None);
        assert_eq!(parse_date("1900.02.29"), None);
        assert_eq!(parse_date("1990.13.01"), None);
        assert_eq!(parse_date("1990.01.32"), None);
        assert_eq!(parse_date("1990.00.10"), None);
        assert_eq!(parse_date("1990.04.00"), None);
    }

    #[test]
    fn test_parse_date_malformed() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("1990.01"), None);
        assert_eq!(parse_date("1990.01.05.07"), None);
        assert_eq!(parse_date("1990.ab.05"), None);
    }

    #[test]
    fn test_birth_date_errors() {
        assert_eq!("".parse::<BirthDate>(), Err(DateParseError::Empty));
        assert_eq!(
            "1990.01".parse::<BirthDate>(),
            Err(DateParseError::WrongComponentCount(2))
        );
        assert_eq!(
            "1990.x.05".parse::<BirthDate>(),
            Err(DateParseError::MalformedComponent("x".to_string()))
        );
        assert_eq!(
            "1990.02.30".parse::<BirthDate>(),
            Err(DateParseError::NotACalendarDate { year: 1990, month: 2, day: 30 })
        );
        assert_eq!(BirthDate::new(10000, 1, 1), Err(DateParseError::YearOutOfRange(10000)));
    }

    #[test]
    fn test_derive_display_fields() {
        assert_eq!(
            derive_display_fields(None),
            DisplayFields { display_year: None, long_date: "—".to_string() }
        );

        let date = BirthDate::new(1990, 1, 5).unwrap();
        assert_eq!(
            derive_display_fields(Some(&date)),
            DisplayFields { display_year: Some(1990), long_date: "January 5, 1990".to_string() }
        );
    }

    #[test]
    fn test_year_text() {
        let date = BirthDate::new(1985, 12, 25).unwrap();
        assert_eq!(derive_display_fields(Some(&date)).year_text(), "1985");
        assert_eq!(DisplayFields::default().year_text(), "—");
    }

    #[test]
    fn test_canonical_date() {
        let date = BirthDate::new(1990, 1, 5).unwrap();
        let canonical = date.canonical();
        assert_eq!(canonical.as_str(), "1990.01.05");
        assert_eq!(canonical.as_str().len(), 10);
        assert_eq!(canonical.to_string(), "1990.01.05");
        assert_eq!(serde_json::to_string(&canonical).unwrap(), "\"1990.01.05\"");
    }

    #[test]
    fn test_round_trip_all_supported_dates() {
        for year in 1900..=2100 {
            for month in 1..=12u32 {
                for day in 1..=crate::calendar::days_in_month(month, year) {
                    let digits = format!("{:08}", year as u32 * 10000 + month * 100 + day);
                    let normalized = normalize_date_string(Some(&digits));
                    assert_eq!(
                        parse_date(&normalized),
                        Some(BirthDate { year, month, day }),
                        "round trip failed for {}",
                        digits
                    );
                }
            }
        }
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let first = resolve_birthday(Some("1990.01.05"));
        let second = resolve_birthday(Some("1990.01.05"));
        assert_eq!(first, second);
        assert_eq!(first.display.long_date, "January 5, 1990");
    }

    #[test]
    fn test_query_from_pairs_keeps_first_value() {
        let query = BirthdayQuery::from_pairs([
            ("date", "1990.01.05"),
            ("utm", "x"),
            ("date", "abc"),
            ("birthday", "1985.03.02"),
            ("birthday", ""),
        ]);
        assert_eq!(query.date.as_deref(), Some("1990.01.05"));
        assert_eq!(query.birthday.as_deref(), Some("1985.03.02"));
        assert_eq!(query.resolve().display.display_year, Some(1990));

        let empty = BirthdayQuery::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(empty, BirthdayQuery::default());
    }

    #[test]
    fn test_query_prefers_date() {
        let query = BirthdayQuery::new(Some("2001.09.11".into()), Some("1990.01.05".into()));
        assert_eq!(query.raw(), Some("2001.09.11"));
        assert_eq!(query.resolve().display.display_year, Some(2001));
    }

    #[test]
    fn test_query_falls_back_to_birthday() {
        let query = BirthdayQuery::new(None, Some("1990-01-05".into()));
        assert_eq!(query.raw(), Some("1990-01-05"));
        assert_eq!(query.resolve().normalized, "1990.01.05");

        let empty_date = BirthdayQuery::new(Some(String::new()), Some("19900105".into()));
        assert_eq!(empty_date.raw(), Some("19900105"));
    }

    #[test]
    fn test_query_malformed_falls_back_to_placeholder() {
        for raw in [None, Some("abc"), Some("1990"), Some("1990.02.30")] {
            let query = BirthdayQuery::new(raw.map(str::to_string), None);
            let resolved = query.resolve();
            assert_eq!(resolved.date, None);
            assert_eq!(resolved.display, DisplayFields::default());
        }
    }
}
