//! Recognized exchange codes.
//!
//! Exchange codes are the provider's `exchangeShortName` values, compared
//! exactly (case-sensitive).

use std::borrow::Cow;
use std::collections::HashSet;

/// Exchange short codes treated as US markets.
pub const US_EXCHANGES: [&str; 7] = ["NYSE", "NASDAQ", "CBOE", "CME", "CBOT", "CHX", "OTC"];

/// Immutable set of exchange short codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeSet {
    codes: HashSet<Cow<'static, str>>,
}

impl Default for ExchangeSet {
    fn default() -> Self {
        Self::us()
    }
}

impl ExchangeSet {
    /// The fixed set of US exchanges.
    pub fn us() -> Self {
        Self {
            codes: US_EXCHANGES.iter().map(|c| Cow::Borrowed(*c)).collect(),
        }
    }

    /// Build a set from arbitrary codes.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(|c| Cow::Owned(c.into())).collect(),
        }
    }

    /// Whether `code` is one of the recognized exchanges.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
