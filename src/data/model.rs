use std::fmt;

use chrono::{NaiveDateTime, Weekday};

// ---------------------------------------------------------------------------
// Calendar name tables
// ---------------------------------------------------------------------------

/// Ordered calendar month names. A month filter given by name resolves to
/// its 1-based index in this list.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display name for a 1-based calendar month.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

/// Resolve a month name against [`MONTH_NAMES`], case-insensitively, to its
/// 1-based month number.
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u32 + 1)
}

/// Full weekday name in the capitalization the day filters use.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// TripRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single trip (one row of the source CSV) with its derived time fields.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Trip length in seconds. Some source datasets carry fractional values.
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    /// Present only when the dataset has a Gender column.
    pub gender: Option<String>,
    /// Present only when the dataset has a Birth Year column.
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time` (1-12), derived once at load.
    pub month: u32,
    /// Day of week of `start_time`, derived once at load.
    pub weekday: Weekday,
    /// Hour of day of `start_time` (0-23), derived once at load.
    pub hour: u32,
}

impl fmt::Display for TripRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>8.0}s  {} -> {}  {}",
            self.start_time,
            self.duration_secs,
            self.start_station,
            self.end_station,
            self.user_type
        )?;
        if let Some(gender) = &self.gender {
            write!(f, "  {gender}")?;
        }
        if let Some(year) = self.birth_year {
            write!(f, "  {year}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TripTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// A loaded city dataset: the ordered trip records plus which optional
/// demographic columns the source file carried.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub records: Vec<TripRecord>,
    /// Whether the source CSV had a Gender column.
    pub has_gender: bool,
    /// Whether the source CSV had a Birth Year column.
    pub has_birth_year: bool,
}

impl TripTable {
    /// Number of trips.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no trips.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_resolve_case_insensitively() {
        assert_eq!(month_from_name("january"), Some(1));
        assert_eq!(month_from_name("June"), Some(6));
        assert_eq!(month_from_name("DECEMBER"), Some(12));
        assert_eq!(month_from_name("smarch"), None);
    }

    #[test]
    fn month_name_round_trips() {
        for (i, name) in MONTH_NAMES.iter().enumerate() {
            assert_eq!(month_name(i as u32 + 1), *name);
        }
        assert_eq!(month_name(0), "?");
        assert_eq!(month_name(13), "?");
    }

    #[test]
    fn weekday_names_are_capitalized() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
