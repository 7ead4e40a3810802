//! Financial Modeling Prep provider implementation.
//!
//! # API Endpoints
//!
//! - Instrument universe: `{base}/stock/list?apikey={key}`
//! - Daily history: `{base}/historical-price-full/{symbol}?apikey={key}`
//!
//! The API key travels as a query parameter, so request URLs are never logged
//! and transport errors are stripped of their URL before they leave this module.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{HistoricalPrices, Instrument, ProviderId};
use crate::provider::StockDataProvider;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
const PROVIDER_ID: ProviderId = "FMP";

/// Longest body excerpt carried in a `ProviderError`.
const ERROR_BODY_LIMIT: usize = 200;

/// Financial Modeling Prep client.
///
/// Uses reqwest's default client settings: no explicit timeout, no retries.
#[derive(Clone)]
pub struct FmpProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FmpProvider {
    /// Create a provider against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a provider against another API root (mirrors, local test servers).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the instrument universe endpoint.
    pub fn stock_list_url(&self) -> String {
        format!(
            "{}/stock/list?apikey={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        )
    }

    /// URL of the daily history endpoint for `symbol`.
    ///
    /// The symbol is percent-encoded as a single path segment and otherwise
    /// left exactly as given.
    pub fn historical_price_url(&self, symbol: &str) -> String {
        format!(
            "{}/historical-price-full/{}?apikey={}",
            self.base_url,
            urlencoding::encode(symbol),
            urlencoding::encode(&self.api_key)
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, MarketDataError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))
    }

    async fn read_body(response: reqwest::Response) -> Result<String, MarketDataError> {
        response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, MarketDataError> {
        serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait]
impl StockDataProvider for FmpProvider {
    fn id(&self) -> ProviderId {
        PROVIDER_ID
    }

    async fn list_instruments(&self) -> Result<Vec<Instrument>, MarketDataError> {
        let response = self.get(&self.stock_list_url()).await?;
        let status = response.status();
        let body = Self::read_body(response).await?;

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, excerpt(&body)),
            });
        }

        let instruments: Vec<Instrument> = Self::decode(&body)?;
        debug!("FMP stock/list returned {} instruments", instruments.len());
        Ok(instruments)
    }

    async fn historical_prices(&self, symbol: &str) -> Result<HistoricalPrices, MarketDataError> {
        let response = self.get(&self.historical_price_url(symbol)).await?;
        let status = response.status();
        let body = Self::read_body(response).await?;

        // Status is not inspected: whatever JSON the provider sends is forwarded.
        let prices: HistoricalPrices = Self::decode(&body)?;
        debug!(
            "FMP historical-price-full/{} returned HTTP {} with {} points",
            symbol,
            status,
            prices
                .get("historical")
                .and_then(|h| h.as_array())
                .map_or(0, |h| h.len())
        );
        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = FmpProvider::new("test-key");
        assert_eq!(provider.id(), "FMP");
    }

    #[test]
    fn test_default_base_url() {
        let provider = FmpProvider::new("test-key");
        assert_eq!(provider.base_url(), "https://financialmodelingprep.com/api/v3");
    }

    #[test]
    fn test_stock_list_url_injects_api_key() {
        let provider = FmpProvider::new("demo");
        assert_eq!(
            provider.stock_list_url(),
            "https://financialmodelingprep.com/api/v3/stock/list?apikey=demo"
        );
    }

    #[test]
    fn test_historical_price_url_substitutes_symbol_and_key() {
        let provider = FmpProvider::new("demo");
        assert_eq!(
            provider.historical_price_url("AAPL"),
            "https://financialmodelingprep.com/api/v3/historical-price-full/AAPL?apikey=demo"
        );
    }

    #[test]
    fn test_symbol_is_not_normalized() {
        let provider = FmpProvider::new("demo");
        assert_eq!(
            provider.historical_price_url("brk-b"),
            "https://financialmodelingprep.com/api/v3/historical-price-full/brk-b?apikey=demo"
        );
    }

    #[test]
    fn test_symbol_cannot_inject_query_parameters() {
        let provider = FmpProvider::new("demo");
        assert_eq!(
            provider.historical_price_url("X?apikey=other&a=/b"),
            "https://financialmodelingprep.com/api/v3/historical-price-full/X%3Fapikey%3Dother%26a%3D%2Fb?apikey=demo"
        );
    }

    #[test]
    fn test_custom_base_url_trailing_slash_is_trimmed() {
        let provider = FmpProvider::with_base_url("k", "http://127.0.0.1:9000/api/v3/");
        assert_eq!(
            provider.stock_list_url(),
            "http://127.0.0.1:9000/api/v3/stock/list?apikey=k"
        );
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(excerpt(&body).len(), ERROR_BODY_LIMIT);
        assert_eq!(excerpt("short"), "short");
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error_without_key() {
        // Port 1 on loopback is never listening.
        let provider = FmpProvider::with_base_url("secret-key", "http://127.0.0.1:1");

        let err = provider.list_instruments().await.unwrap_err();

        assert!(matches!(err, MarketDataError::Network(_)), "got {err:?}");
        assert!(!err.to_string().contains("secret-key"));
    }
}
