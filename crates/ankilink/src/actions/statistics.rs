//! Statistics-related AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::ReviewDay;

/// Provides access to review-statistics operations.
///
/// Obtained via [`AnkiClient::statistics()`].
#[derive(Debug)]
pub struct StatisticsActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> StatisticsActions<'a> {
    /// Get card review counts by day, oldest entries as AnkiConnect orders
    /// them (chronological).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankilink::AnkiClient;
    /// # async fn example() -> ankilink::Result<()> {
    /// let client = AnkiClient::new();
    /// let by_day = client.statistics().cards_reviewed_by_day().await?;
    /// for day in by_day {
    ///     println!("{}: {} reviews", day.date, day.count);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn cards_reviewed_by_day(&self) -> Result<Vec<ReviewDay>> {
        self.client
            .invoke_without_params("getNumCardsReviewedByDay")
            .await
    }
}
