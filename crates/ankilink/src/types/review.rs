//! Review history types.

use serde::Deserialize;

/// Reviews performed on a single day, as returned by `getNumCardsReviewedByDay`.
///
/// The wire format is a heterogeneous `["YYYY-MM-DD", count]` pair; entries
/// arrive in the order AnkiConnect produces them (chronological) and are not
/// re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, i64)")]
pub struct ReviewDay {
    /// Date in `YYYY-MM-DD` format.
    pub date: String,
    /// Number of cards reviewed that day.
    pub count: i64,
}

impl From<(String, i64)> for ReviewDay {
    fn from((date, count): (String, i64)) -> Self {
        Self { date, count }
    }
}
