//! The get-review-stats tool.

use std::str::FromStr;

use ankilink::AnkiClient;
use chrono::{Days, Local, NaiveDate};
use tracing::debug;

use crate::aggregate;
use crate::format;

/// Symbolic time ranges accepted by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeRange {
    /// The valid spellings, in the order they are reported to callers.
    pub const VALID_OPTIONS: &'static str = "day, week, month, year, all";

    /// Number of days to look back, or `None` for no filtering.
    fn lookback_days(self) -> Option<u64> {
        match self {
            TimeRange::Day => Some(0),
            TimeRange::Week => Some(7),
            TimeRange::Month => Some(30),
            TimeRange::Year => Some(365),
            TimeRange::All => None,
        }
    }

    /// Earliest date (inclusive) that survives filtering, relative to `today`.
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        self.lookback_days()
            .map(|days| today.checked_sub_days(Days::new(days)).unwrap_or(today))
    }
}

impl FromStr for TimeRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            "all" => Ok(TimeRange::All),
            _ => Err(()),
        }
    }
}

/// Report cards reviewed per day within a symbolic time range.
///
/// An unrecognized `time_range` is rejected before any remote call. The
/// series keeps the remote-provided (chronological) order; only the date
/// filter is applied locally.
pub async fn review_stats(client: &AnkiClient, time_range: &str) -> Vec<String> {
    let Ok(range) = TimeRange::from_str(time_range) else {
        return vec![format!(
            "Invalid time_range '{}'. Valid options: {}",
            time_range,
            TimeRange::VALID_OPTIONS
        )];
    };

    let days = match client.statistics().cards_reviewed_by_day().await {
        Ok(days) => days,
        Err(e) => return vec![format!("Failed to retrieve review statistics: {e}")],
    };

    let cutoff = range.cutoff(Local::now().date_naive());
    let filtered = aggregate::filter_since(days, cutoff);
    debug!(?range, entries = filtered.len(), "Review stats filtered");

    vec![format::review_series_block(&filtered)]
}
