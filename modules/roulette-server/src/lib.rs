use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Request},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use roulette_core::{BusinessSearcher, RandomSampler};

pub mod sms;
pub mod twiml;

pub struct AppState {
    pub sampler: RandomSampler<Arc<dyn BusinessSearcher>>,
    /// Pool bound applied to every inbound search.
    pub max_sample_size: usize,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        .route("/help", get(sms::help))
        // Twilio webhook
        .route("/sms", post(sms::sms_webhook))
        .with_state(state)
        // Replies are per-message; never cache them
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
