/// Utilities for dates in the browser
use chrono::{Local, NaiveDate};

/// Today in the browser's time zone
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
