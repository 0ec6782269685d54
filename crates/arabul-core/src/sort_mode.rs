use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// User-selected supplier ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Ascending by distance; unknown distances last.
    #[default]
    Nearest,
    /// Descending by favorite count.
    MostPopular,
    /// Descending by average rating.
    ByRanking,
}

impl SortMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Nearest => "nearest",
            SortMode::MostPopular => "mostPopular",
            SortMode::ByRanking => "byRanking",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CoreError;

    /// Accepts the app's camelCase names as well as kebab-case CLI spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nearest" => Ok(SortMode::Nearest),
            "mostPopular" | "most-popular" => Ok(SortMode::MostPopular),
            "byRanking" | "by-ranking" => Ok(SortMode::ByRanking),
            other => Err(CoreError::InvalidSortMode(other.to_string())),
        }
    }
}
