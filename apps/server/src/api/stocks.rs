use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    api::shared::{method_not_allowed, preflight},
    error::ApiResult,
    main_lib::AppState,
    models::{HolidayStocksResponse, StocksResponse},
};

#[utoipa::path(
    get,
    path = "/api/stocks",
    responses(
        (status = 200, description = "Quotes for every tracked company; failed entries carry price null"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Configuration or unexpected error")
    )
)]
pub async fn get_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<StocksResponse>> {
    let snapshot = state
        .market_service
        .stock_snapshot()
        .await?;
    Ok(Json(snapshot.into()))
}

#[utoipa::path(
    get,
    path = "/api/stocks/holidays",
    responses(
        (status = 200, description = "Quotes merged with market holiday analysis"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Configuration or unexpected error")
    )
)]
pub async fn get_holiday_stocks(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HolidayStocksResponse>> {
    let snapshot = state
        .market_service
        .holiday_stock_snapshot()
        .await?;
    Ok(Json(snapshot.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/stocks",
            get(get_stocks)
                .options(preflight)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/stocks/holidays",
            get(get_holiday_stocks)
                .options(preflight)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
