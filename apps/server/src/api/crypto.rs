use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    api::shared::{method_not_allowed, preflight},
    error::ApiResult,
    main_lib::AppState,
    models::CryptoResponse,
};

#[utoipa::path(
    get,
    path = "/api/crypto",
    responses(
        (status = 200, description = "Prices for the tracked crypto symbols"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Configuration or unexpected error")
    )
)]
pub async fn get_crypto(State(state): State<Arc<AppState>>) -> ApiResult<Json<CryptoResponse>> {
    let snapshot = state
        .market_service
        .crypto_snapshot()
        .await?;
    Ok(Json(snapshot.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/crypto",
        get(get_crypto)
            .options(preflight)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
