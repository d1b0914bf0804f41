// src/presentation/http/routes.rs
use crate::presentation::http::{controllers::greeting, state::HttpState};
use axum::{Extension, Router, routing::any};
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", any(greeting::greet))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
