use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stockproxy_market_data::{filter_common_stocks, HistoricalPrices, Instrument};

use crate::{error::ApiResult, main_lib::AppState};

/// US-listed common stocks, in upstream order.
async fn list_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Instrument>>> {
    let instruments = state.provider.list_instruments().await?;
    let total = instruments.len();
    let stocks = filter_common_stocks(instruments, &state.exchanges);
    tracing::debug!("Kept {} of {} instruments", stocks.len(), total);
    Ok(Json(stocks))
}

/// Upstream price history for one symbol, forwarded unchanged.
async fn get_historical_prices(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<HistoricalPrices>> {
    let prices = state.provider.historical_prices(&symbol).await?;
    Ok(Json(prices))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(list_stocks))
        .route("/historical-prices/{symbol}", get(get_historical_prices))
}
