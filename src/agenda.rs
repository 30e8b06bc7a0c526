use chrono::{Local, NaiveDate, TimeZone};
use chrono_tz::Tz;
use tracing::debug;

use crate::normalize::canonical_show;
use crate::types::{DayEntry, ReleaseMap};

/// Fold day entries into the next future air date per show
///
/// Days and their shows are visited in the given order and the first date
/// strictly after `today` wins; later sightings of a show are ignored.
pub fn build_release_map(days: &[DayEntry], today: NaiveDate) -> ReleaseMap {
    let mut releases = ReleaseMap::new();

    for day in days {
        if day.date <= today {
            continue;
        }
        for label in &day.shows {
            let show = canonical_show(label);
            if !releases.contains_key(&show) {
                debug!(show = %show.name, date = %day.date, "next air date");
                releases.insert(show, day.date);
            }
        }
    }

    releases
}

/// Date that counts as "today" for the aggregation
pub fn reference_date(date: Option<NaiveDate>, tz: Option<Tz>) -> NaiveDate {
    match (date, tz) {
        (Some(date), _) => date,
        (None, Some(tz)) => tz.from_utc_datetime(&chrono::Utc::now().naive_utc()).date_naive(),
        (None, None) => Local::now().date_naive(),
    }
}
