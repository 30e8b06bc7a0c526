use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ScheduleError;

/// Display layout for air dates: `Mon, 02 Jan 2006`
pub const AIRDATE_FORMAT: &str = "%a, %d %b %Y";

// Weekday is checked for shape only; listings near new year carry weekdays of
// the following year while the year itself is implied.
static AIRDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun), ",
        r"(\d{2}) ",
        r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ",
        r"(\d{4})$",
    ))
    .expect("Invalid AIRDATE_RE regex")
});

/// Resolve a year-less listing date such as "Mon, 02 Jan" against `year`
pub fn resolve(date_text: &str, year: i32) -> Result<NaiveDate, ScheduleError> {
    parse_airdate(&format!("{date_text} {year}"))
}

/// Parse a full air date in the fixed `Mon, 02 Jan 2006` layout
pub fn parse_airdate(text: &str) -> Result<NaiveDate, ScheduleError> {
    let caps = AIRDATE_RE
        .captures(text)
        .ok_or_else(|| ScheduleError::malformed(text, "expected layout 'Mon, 02 Jan 2006'"))?;

    NaiveDate::parse_from_str(&format!("{} {} {}", &caps[1], &caps[2], &caps[3]), "%d %b %Y")
        .map_err(|e| ScheduleError::malformed(text, e.to_string()))
}

pub fn format_airdate(date: NaiveDate) -> String {
    date.format(AIRDATE_FORMAT).to_string()
}
