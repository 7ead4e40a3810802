//! Instrument records from the provider's stock list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One tradable security from the provider's instrument universe.
///
/// Only the fields the filter reads are typed. Everything else the provider
/// sends (price, full exchange name, ...) is kept in `extra` so that
/// re-serializing a record yields the same JSON object that was received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Ticker (e.g., "AAPL", "BRK-B")
    pub symbol: String,

    /// Display name. `Some(None)` is an explicit `null` from the provider.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub name: Option<Option<String>>,

    /// Exchange short code (e.g., "NASDAQ", "NYSE", "CRYPTO")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_short_name: Option<String>,

    /// Instrument type (e.g., "stock", "etf", "fund", "trust")
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none"
    )]
    pub instrument_type: Option<String>,

    /// Remaining provider fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instrument {
    /// Create an instrument with the fields the filter looks at.
    pub fn new(
        symbol: impl Into<String>,
        exchange_short_name: impl Into<String>,
        instrument_type: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            exchange_short_name: Some(exchange_short_name.into()),
            instrument_type: Some(instrument_type.into()),
            extra: Map::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    /// Display name, if the provider sent a non-null one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.as_deref())
    }
}
