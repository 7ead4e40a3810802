//! Stockproxy Market Data Crate
//!
//! Upstream stock data access for the stockproxy gateway.
//!
//! # Overview
//!
//! - Fetch the provider's instrument universe and daily price history
//! - Select common stocks listed on US exchanges out of that universe
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   HTTP handler   | --> | StockDataProvider|  (FmpProvider)
//! +------------------+     +------------------+
//!          |                        |
//!          v                        v
//! +------------------+     +------------------+
//! |      filter      | <-- |   Instrument     |
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Instrument`] - One record of the provider's instrument universe
//! - [`HistoricalPrices`] - Provider history payload, passed through untouched
//! - [`ExchangeSet`] - Recognized exchange short codes
//! - [`StockDataProvider`] - Upstream provider seam
//! - [`MarketDataError`] - Every upstream failure mode

pub mod errors;
pub mod filter;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use filter::{
    filter_common_stocks, filter_us_common_stocks, is_common_stock_on, ExchangeSet, STOCK_TYPE,
    US_EXCHANGES,
};
pub use models::{HistoricalPrices, Instrument, ProviderId};
pub use provider::fmp::FmpProvider;
pub use provider::StockDataProvider;
