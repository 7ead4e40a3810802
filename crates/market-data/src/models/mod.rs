//! Market data models
//!
//! - `instrument` - One entry of the provider's instrument universe (Instrument)
//! - `types` - Aliases for provider payloads passed through untouched

mod instrument;
mod types;

pub use instrument::Instrument;
pub use types::{HistoricalPrices, ProviderId};
