use std::fmt;

use chrono::Weekday;

use super::model::{month_from_name, month_name, weekday_name, TripRecord, TripTable};

// ---------------------------------------------------------------------------
// Filter values
// ---------------------------------------------------------------------------

/// Month restriction for one query: everything, or a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based calendar month.
    Month(u32),
}

impl MonthFilter {
    /// Resolve a month name against the ordered calendar list,
    /// case-insensitively. Any of the twelve names is accepted here even
    /// though the menu only offers January through June.
    pub fn from_name(name: &str) -> Option<Self> {
        month_from_name(name).map(Self::Month)
    }

    fn matches(self, record: &TripRecord) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => record.month == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Month(month) => write!(f, "{}", month_name(*month)),
        }
    }
}

/// Day-of-week restriction for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Parse a weekday name ("monday", "Monday", "mon"), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse::<Weekday>().ok().map(Self::Day)
    }

    fn matches(self, record: &TripRecord) -> bool {
        match self {
            Self::All => true,
            Self::Day(day) => record.weekday == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Day(day) => write!(f, "{}", weekday_name(*day)),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The records of one table passing a month/day restriction.
///
/// A fresh view is computed per query; the table itself is never mutated, so
/// several differently filtered views can be taken from one load.
#[derive(Debug)]
pub struct TripView<'a> {
    table: &'a TripTable,
    indices: Vec<usize>,
}

impl<'a> TripView<'a> {
    /// Number of trips in the view.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the filters left nothing.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The table this view was taken from.
    pub fn table(&self) -> &'a TripTable {
        self.table
    }

    /// The `n`-th trip of the view, in table order.
    pub fn get(&self, n: usize) -> Option<&'a TripRecord> {
        self.indices
            .get(n)
            .and_then(|&i| self.table.records.get(i))
    }

    /// Iterate the view's trips in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.indices
            .iter()
            .filter_map(|&i| self.table.records.get(i))
    }
}

/// Return the view of `table` matching both filters.
///
/// The filters compose with AND, so the result is the same whichever is
/// thought of as applied first. With both filters [`MonthFilter::All`] and
/// [`DayFilter::All`] the view covers the whole table.
pub fn filtered_view<'a>(table: &'a TripTable, month: MonthFilter, day: DayFilter) -> TripView<'a> {
    let indices = table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| month.matches(record) && day.matches(record))
        .map(|(i, _)| i)
        .collect();
    TripView { table, indices }
}
