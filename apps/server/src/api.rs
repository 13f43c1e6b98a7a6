mod crypto;
mod earnings;
mod health;
mod shared;
mod stocks;

use std::sync::Arc;

use crate::{
    error::{ApiError, GENERIC_FAILURE_MESSAGE},
    main_lib::AppState,
};
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderName, Method,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        stocks::get_stocks,
        stocks::get_holiday_stocks,
        earnings::get_earnings,
        crypto::get_crypto
    ),
    tags((name = "marketpulse"))
)]
pub struct ApiDoc;

/// Last-resort boundary: a panicking handler still answers with the JSON error shape.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiError::Internal(GENERIC_FAILURE_MESSAGE.to_string()).into_response()
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
        ]);

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(health::healthz))
        .merge(stocks::router())
        .merge(earnings::router())
        .merge(crypto::router());

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
