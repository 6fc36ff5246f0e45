use chrono::NaiveDate;
use shared::{Clock, SystemClock};

/// Today's date as the browser sees it (local time zone)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> NaiveDate {
        use js_sys::Date;
        let now = Date::new_0();
        let year = now.get_full_year() as i32;
        let month = now.get_month() + 1; // JavaScript months are 0-indexed
        let day = now.get_date();

        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| SystemClock.today())
    }
}
