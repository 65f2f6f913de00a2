//! Builders shared by the data-layer test modules.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::loader::START_TIME_FORMAT;
use super::model::{TripRecord, TripTable};

/// A trip starting at `start` ("%Y-%m-%d %H:%M:%S"), with derived fields
/// filled in the same way the loader fills them.
pub fn trip(start: &str, duration: f64, from: &str, to: &str, user: &str) -> TripRecord {
    let start_time = NaiveDateTime::parse_from_str(start, START_TIME_FORMAT)
        .expect("fixture timestamp must parse");
    TripRecord {
        month: start_time.month(),
        weekday: start_time.weekday(),
        hour: start_time.hour(),
        start_time,
        duration_secs: duration,
        start_station: from.to_string(),
        end_station: to.to_string(),
        user_type: user.to_string(),
        gender: None,
        birth_year: None,
    }
}

/// A trip with demographic fields set, for user-stats fixtures.
pub fn trip_with_demographics(
    start: &str,
    user: &str,
    gender: Option<&str>,
    birth_year: Option<i32>,
) -> TripRecord {
    let mut record = trip(start, 100.0, "A", "B", user);
    record.gender = gender.map(str::to_string);
    record.birth_year = birth_year;
    record
}

/// A table over `records` with no optional columns.
pub fn table_of(records: Vec<TripRecord>) -> TripTable {
    TripTable {
        records,
        has_gender: false,
        has_birth_year: false,
    }
}
