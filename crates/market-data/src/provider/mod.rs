//! Upstream data provider abstractions and implementations.
//!
//! This module contains:
//! - The `StockDataProvider` trait the HTTP layer depends on
//! - The Financial Modeling Prep implementation (`FmpProvider`)

mod traits;

pub mod fmp;

pub use traits::StockDataProvider;
