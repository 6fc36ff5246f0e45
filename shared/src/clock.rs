//! Source of "today" for the landing screen.
//!
//! The form defaults and the birthday celebration both depend on the current
//! date, so they take a `Clock` instead of reading the system time directly.

use chrono::{Datelike, Local, NaiveDate};

/// Number of confetti pieces in one celebration
pub const CONFETTI_COUNT: usize = 18;

/// How long the celebration stays on screen
pub const CELEBRATION_DURATION_MS: u32 = 1500;

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whether a submitted month/day falls on today. The year is ignored.
pub fn is_birthday_today(month: u32, day: u32, clock: &dyn Clock) -> bool {
    let today = clock.today();
    today.month() == month && today.day() == day
}
