use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// City → dataset mapping
// ---------------------------------------------------------------------------

/// Maps each selectable city identifier to its trip dataset on disk.
///
/// The built-in mapping covers the three bundled cities. A JSON file of the
/// same shape can replace it, so other datasets (or test fixtures) can be
/// explored without rebuilding:
///
/// ```json
/// { "datasets": { "chicago": "chicago.csv" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityConfig {
    datasets: BTreeMap<String, PathBuf>,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self::new([
            ("chicago", "chicago.csv"),
            ("new_york_city", "new_york_city.csv"),
            ("washington", "washington.csv"),
        ])
    }
}

impl CityConfig {
    /// Build a mapping from explicit (city, path) pairs.
    pub fn new<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<PathBuf>,
    {
        CityConfig {
            datasets: entries
                .into_iter()
                .map(|(city, path)| (city.into(), path.into()))
                .collect(),
        }
    }

    /// Read a mapping from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading dataset config {}", path.display()))?;
        let config: CityConfig = serde_json::from_str(&text).context("parsing dataset config")?;
        anyhow::ensure!(!config.datasets.is_empty(), "dataset config lists no cities");
        Ok(config)
    }

    /// Selectable city identifiers, in menu order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    /// Dataset path for a configured city.
    pub fn path_for(&self, city: &str) -> Option<&Path> {
        self.datasets.get(city).map(PathBuf::as_path)
    }
}

/// Human label for a city identifier ("new_york_city" → "New York City").
pub fn city_label(city: &str) -> String {
    city.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
