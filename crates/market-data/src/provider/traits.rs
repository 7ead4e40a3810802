//! Provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{HistoricalPrices, Instrument, ProviderId};

/// Trait for upstream stock data providers.
///
/// Implementations make exactly one outbound request per call and never
/// cache, retry or reshape what the provider returns.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockproxy_market_data::{HistoricalPrices, Instrument, MarketDataError, StockDataProvider};
///
/// struct FixedProvider(Vec<Instrument>);
///
/// #[async_trait]
/// impl StockDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn list_instruments(&self) -> Result<Vec<Instrument>, MarketDataError> {
///         Ok(self.0.clone())
///     }
///
///     async fn historical_prices(&self, _symbol: &str) -> Result<HistoricalPrices, MarketDataError> {
///         Ok(serde_json::json!({}))
///     }
/// }
/// ```
#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in errors and logs.
    fn id(&self) -> ProviderId;

    /// Fetch the provider's full instrument universe.
    async fn list_instruments(&self) -> Result<Vec<Instrument>, MarketDataError>;

    /// Fetch the daily price history for `symbol`, unmodified.
    ///
    /// The symbol is opaque: no normalization and no existence check.
    async fn historical_prices(&self, symbol: &str) -> Result<HistoricalPrices, MarketDataError>;
}
