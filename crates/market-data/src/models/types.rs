//! Type aliases used across the market data crate.

/// Provider identifier (e.g., "FMP").
pub type ProviderId = &'static str;

/// Historical price payload exactly as the provider returned it.
///
/// Usually `{"symbol": ..., "historical": [{"date", "open", "high", "low", "close", "volume", ...}]}`,
/// but unknown symbols yield `{}` or an error object. The shape is not checked.
pub type HistoricalPrices = serde_json::Value;
