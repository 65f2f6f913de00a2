/// Data layer: core types, loading, filtering, statistics, and pagination.
///
/// Architecture:
/// ```text
///    city .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → TripTable (derived month/weekday/hour)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month/day predicates → TripView (fresh indices)
///   └──────────┘
///        │
///        ├──────────►  stats   (five independent reports)
///        │
///        └──────────►  pager   (five records per page)
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod pager;
pub mod stats;

#[cfg(test)]
pub(crate) mod testutil;
