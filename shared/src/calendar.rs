//! Gregorian calendar rules shared by the birthday form and the date pipeline.
//!
//! Both the day selector on the landing screen and the parser behind the
//! dashboard ask this module whether a date exists, so the two can never
//! disagree about February.

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Get days in a month (accounting for leap years). Unknown months have no days.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) { 29 } else { 28 }
        }
        _ => 0,
    }
}

/// Whether `year-month-day` names a real day on the Gregorian calendar
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    day >= 1 && day <= days_in_month(month, year)
}

/// English month name for display, `None` outside 1..=12
pub fn month_name(month: u32) -> Option<&'static str> {
    let name = match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => return None,
    };
    Some(name)
}
