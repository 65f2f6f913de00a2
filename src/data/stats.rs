use std::collections::BTreeMap;

use thiserror::Error;

use super::filter::TripView;
use super::model::weekday_name;

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Why a report could not be computed for a view. Each report returns its
/// own `Result`, so one failing never blocks the others.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("no trips match the selected filters")]
    EmptyView,
}

// ---------------------------------------------------------------------------
// Frequency helpers
// ---------------------------------------------------------------------------

/// A value together with how many trips carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<T> {
    pub value: T,
    pub count: usize,
}

/// Most frequent value of an iterator of keys, or `None` when it is empty.
///
/// Counts are accumulated in a `BTreeMap` and the maximum is taken with a
/// strictly-greater comparison during in-order iteration, so a tie between
/// equally frequent values always resolves to the smallest key.
fn mode_of<T, I>(items: I) -> Option<Mode<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut best: Option<Mode<T>> = None;
    for (value, count) in counts {
        match &best {
            Some(current) if count <= current.count => {}
            _ => best = Some(Mode { value, count }),
        }
    }
    best
}

/// Count per distinct value, sorted descending by count (ties by name).
fn counts_desc<I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

// ---------------------------------------------------------------------------
// Travel times
// ---------------------------------------------------------------------------

/// Most frequent month, weekday, and start hour over a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTimesReport {
    /// 1-based calendar month.
    pub month: Mode<u32>,
    /// Full weekday name ("Monday"). A tie resolves to the earliest day in
    /// Monday-first calendar order.
    pub weekday: Mode<&'static str>,
    /// Hour of day, 0-23.
    pub hour: Mode<u32>,
}

pub fn travel_times(view: &TripView<'_>) -> Result<TravelTimesReport, StatsError> {
    let month = mode_of(view.iter().map(|r| r.month)).ok_or(StatsError::EmptyView)?;
    let weekday = mode_of(
        view.iter()
            .map(|r| (r.weekday.num_days_from_monday(), weekday_name(r.weekday))),
    )
    .map(|m| Mode {
        value: m.value.1,
        count: m.count,
    })
    .ok_or(StatsError::EmptyView)?;
    let hour = mode_of(view.iter().map(|r| r.hour)).ok_or(StatsError::EmptyView)?;

    Ok(TravelTimesReport {
        month,
        weekday,
        hour,
    })
}

// ---------------------------------------------------------------------------
// Popular stations
// ---------------------------------------------------------------------------

/// Most frequent start station, end station, and ordered station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationsReport {
    pub start: Mode<String>,
    pub end: Mode<String>,
    /// Most frequent ordered (start, end) pair.
    pub trip: Mode<(String, String)>,
}

pub fn popular_stations(view: &TripView<'_>) -> Result<StationsReport, StatsError> {
    let start =
        mode_of(view.iter().map(|r| r.start_station.clone())).ok_or(StatsError::EmptyView)?;
    let end = mode_of(view.iter().map(|r| r.end_station.clone())).ok_or(StatsError::EmptyView)?;
    let trip = mode_of(
        view.iter()
            .map(|r| (r.start_station.clone(), r.end_station.clone())),
    )
    .ok_or(StatsError::EmptyView)?;

    Ok(StationsReport { start, end, trip })
}

// ---------------------------------------------------------------------------
// Trip durations
// ---------------------------------------------------------------------------

/// Total and mean trip length over a view, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationReport {
    pub total_secs: f64,
    pub mean_secs: f64,
    pub trips: usize,
}

pub fn trip_durations(view: &TripView<'_>) -> Result<DurationReport, StatsError> {
    let trips = view.len();
    if trips == 0 {
        return Err(StatsError::EmptyView);
    }
    let total_secs: f64 = view.iter().map(|r| r.duration_secs).sum();
    Ok(DurationReport {
        total_secs,
        mean_secs: total_secs / trips as f64,
        trips,
    })
}

// ---------------------------------------------------------------------------
// User demographics
// ---------------------------------------------------------------------------

/// Earliest, latest, and most common rider birth year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: Mode<i32>,
}

/// Rider demographics over a view. Gender and birth-year sections are `None`
/// when the dataset does not carry those columns, which is different from a
/// zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicsReport {
    /// Count per user type, descending by count.
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn user_demographics(view: &TripView<'_>) -> Result<DemographicsReport, StatsError> {
    if view.is_empty() {
        return Err(StatsError::EmptyView);
    }
    let table = view.table();

    let user_types = counts_desc(view.iter().map(|r| r.user_type.clone()));

    let genders = table
        .has_gender
        .then(|| counts_desc(view.iter().filter_map(|r| r.gender.clone())));

    // The column can exist while every cell in the view is blank; there is
    // no year to report then.
    let birth_years = if table.has_birth_year {
        let years: Vec<i32> = view.iter().filter_map(|r| r.birth_year).collect();
        match (
            years.iter().copied().min(),
            years.iter().copied().max(),
            mode_of(years.iter().copied()),
        ) {
            (Some(earliest), Some(latest), Some(most_common)) => Some(BirthYearStats {
                earliest,
                latest,
                most_common,
            }),
            _ => None,
        }
    } else {
        None
    };

    Ok(DemographicsReport {
        user_types,
        genders,
        birth_years,
    })
}
