use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use thiserror::Error;

use super::model::{TripRecord, TripTable};

/// Timestamp layout used by the source datasets.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Why a dataset failed to load. Any row-level failure aborts the whole
/// load; a partial table is never returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: bad start time '{value}': {source}")]
    Timestamp {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },

    #[error("row {row}: bad {column} value '{value}'")]
    Number {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a city's trip CSV into a [`TripTable`].
///
/// Required columns: Start Time, Trip Duration, Start Station, End Station,
/// User Type. Gender and Birth Year are picked up when present and recorded
/// in the table's presence flags. Month, weekday, and hour are derived from
/// Start Time here, once, and never recomputed downstream.
pub fn load_table(path: &Path) -> Result<TripTable, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let col = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let start_time_idx = col("Start Time")?;
    let duration_idx = col("Trip Duration")?;
    let start_station_idx = col("Start Station")?;
    let end_station_idx = col("End Station")?;
    let user_type_idx = col("User Type")?;
    let gender_idx = headers.iter().position(|h| h == "Gender");
    let birth_year_idx = headers.iter().position(|h| h == "Birth Year");

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let raw_start = field(start_time_idx);
        let start_time = NaiveDateTime::parse_from_str(raw_start, START_TIME_FORMAT)
            .map_err(|source| LoadError::Timestamp {
                row,
                value: raw_start.to_string(),
                source,
            })?;

        let raw_duration = field(duration_idx).trim();
        let duration_secs: f64 = raw_duration.parse().map_err(|_| LoadError::Number {
            row,
            column: "Trip Duration",
            value: raw_duration.to_string(),
        })?;
        if duration_secs < 0.0 {
            return Err(LoadError::Number {
                row,
                column: "Trip Duration",
                value: raw_duration.to_string(),
            });
        }

        // Stored as a float in the source files ("1992.0"); empty cells mean
        // the rider left it blank, not that the column is absent.
        let birth_year = match birth_year_idx.map(|idx| field(idx).trim()) {
            None | Some("") => None,
            Some(raw) => {
                let year: f64 = raw.parse().map_err(|_| LoadError::Number {
                    row,
                    column: "Birth Year",
                    value: raw.to_string(),
                })?;
                Some(year as i32)
            }
        };

        let gender = gender_idx
            .map(|idx| field(idx).trim())
            .filter(|g| !g.is_empty())
            .map(str::to_string);

        records.push(TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            duration_secs,
            start_station: field(start_station_idx).to_string(),
            end_station: field(end_station_idx).to_string(),
            user_type: field(user_type_idx).to_string(),
            gender,
            birth_year,
        });
    }

    Ok(TripTable {
        records,
        has_gender: gender_idx.is_some(),
        has_birth_year: birth_year_idx.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::Weekday;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{content}").unwrap();
        tmp
    }

    const FULL_HEADER: &str =
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n";

    #[test]
    fn loads_rows_and_derives_time_fields() {
        let tmp = write_csv(&format!(
            "{FULL_HEADER}\
             2017-01-02 09:15:00,2017-01-02 09:20:00,300,Canal St,State St,Subscriber,Male,1992.0\n\
             2017-06-18 23:05:30,2017-06-18 23:30:30,1500.5,State St,Canal St,Customer,,\n"
        ));

        let table = load_table(tmp.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.has_gender);
        assert!(table.has_birth_year);

        let first = &table.records[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.weekday, Weekday::Mon);
        assert_eq!(first.hour, 9);
        assert_eq!(first.duration_secs, 300.0);
        assert_eq!(first.birth_year, Some(1992));
        assert_eq!(first.gender.as_deref(), Some("Male"));

        let second = &table.records[1];
        assert_eq!(second.month, 6);
        assert_eq!(second.weekday, Weekday::Sun);
        assert_eq!(second.hour, 23);
        assert_eq!(second.birth_year, None);
        assert_eq!(second.gender, None);
    }

    #[test]
    fn absent_demographic_columns_clear_the_presence_flags() {
        let tmp = write_csv(
            "Start Time,Trip Duration,Start Station,End Station,User Type\n\
             2017-03-15 12:00:00,600,A,B,Subscriber\n",
        );

        let table = load_table(tmp.path()).unwrap();
        assert!(!table.has_gender);
        assert!(!table.has_birth_year);
        assert_eq!(table.records[0].gender, None);
        assert_eq!(table.records[0].birth_year, None);
    }

    #[test]
    fn one_malformed_timestamp_fails_the_whole_load() {
        let tmp = write_csv(&format!(
            "{FULL_HEADER}\
             2017-01-02 09:15:00,,300,A,B,Subscriber,Male,1990.0\n\
             not-a-timestamp,,300,A,B,Subscriber,Male,1990.0\n\
             2017-01-03 10:00:00,,300,A,B,Subscriber,Male,1990.0\n"
        ));

        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Timestamp { row: 1, .. }));
    }

    #[test]
    fn missing_required_column_is_a_load_error() {
        let tmp = write_csv(
            "Start Time,Trip Duration,Start Station,End Station\n\
             2017-01-02 09:15:00,300,A,B\n",
        );

        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("User Type")));
    }

    #[test]
    fn unparseable_duration_is_a_load_error() {
        let tmp = write_csv(
            "Start Time,Trip Duration,Start Station,End Station,User Type\n\
             2017-01-02 09:15:00,a while,A,B,Subscriber\n",
        );

        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Number {
                row: 0,
                column: "Trip Duration",
                ..
            }
        ));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let tmp = write_csv(
            "Start Time,Trip Duration,Start Station,End Station,User Type\n\
             2017-01-02 09:15:00,-5,A,B,Subscriber\n",
        );

        assert!(load_table(tmp.path()).is_err());
    }
}
