use std::sync::Arc;

use stockproxy_market_data::{ExchangeSet, FmpProvider, StockDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Read-only state shared by every request.
pub struct AppState {
    pub provider: Arc<dyn StockDataProvider>,
    pub exchanges: ExchangeSet,
}

impl AppState {
    pub fn new(provider: Arc<dyn StockDataProvider>, exchanges: ExchangeSet) -> Self {
        Self {
            provider,
            exchanges,
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    if config.api_key.is_empty() {
        tracing::warn!("API_KEY is not set; upstream requests will be rejected");
    }
    let provider = FmpProvider::with_base_url(&config.api_key, &config.upstream_base_url);
    tracing::info!("Upstream provider: {}", provider.base_url());
    Arc::new(AppState::new(
        Arc::new(provider),
        config.exchanges.clone(),
    ))
}
