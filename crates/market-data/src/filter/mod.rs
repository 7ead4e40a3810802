//! Instrument universe filtering.
//!
//! Selects common stocks listed on a recognized exchange out of the provider's
//! full instrument list. Pure functions, no I/O.

mod exchanges;

pub use exchanges::{ExchangeSet, US_EXCHANGES};

use crate::models::Instrument;

/// The provider's `type` value for common stock.
pub const STOCK_TYPE: &str = "stock";

/// Whether `instrument` is a common stock traded on one of `exchanges`.
///
/// Records missing either field never match.
pub fn is_common_stock_on(instrument: &Instrument, exchanges: &ExchangeSet) -> bool {
    let on_exchange = instrument
        .exchange_short_name
        .as_deref()
        .is_some_and(|code| exchanges.contains(code));
    let is_stock = instrument.instrument_type.as_deref() == Some(STOCK_TYPE);
    on_exchange && is_stock
}

/// Keep the common stocks listed on `exchanges`, in their original order.
pub fn filter_common_stocks(
    instruments: Vec<Instrument>,
    exchanges: &ExchangeSet,
) -> Vec<Instrument> {
    instruments
        .into_iter()
        .filter(|instrument| is_common_stock_on(instrument, exchanges))
        .collect()
}

/// [`filter_common_stocks`] against the fixed US exchange set.
pub fn filter_us_common_stocks(instruments: Vec<Instrument>) -> Vec<Instrument> {
    filter_common_stocks(instruments, &ExchangeSet::us())
}
