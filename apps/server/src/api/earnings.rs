use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use marketpulse_core::market::TranscriptQuery;

use crate::{
    api::shared::{method_not_allowed, preflight},
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::EarningsResponse,
};

#[utoipa::path(
    get,
    path = "/api/earnings",
    params(
        ("ticker" = Option<String>, Query, description = "Stock ticker symbol"),
        ("year" = Option<i32>, Query, description = "Fiscal year, defaults to most recent"),
        ("quarter" = Option<u8>, Query, description = "Quarter 1-4, defaults to most recent")
    ),
    responses(
        (status = 200, description = "Transcript, or the tracked companies and suggested period when no ticker is given"),
        (status = 400, description = "Malformed query, invalid year or quarter"),
        (status = 404, description = "No transcript for the requested period"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Configuration or unexpected error")
    )
)]
pub async fn get_earnings(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TranscriptQuery>, QueryRejection>,
) -> ApiResult<Json<EarningsResponse>> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let lookup = state.market_service.lookup_transcript(query).await?;
    Ok(Json(lookup.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/earnings",
        get(get_earnings)
            .options(preflight)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
