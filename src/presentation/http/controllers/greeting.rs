// src/presentation/http/controllers/greeting.rs
use crate::presentation::http::state::HttpState;
use axum::Extension;

/// Handler for `/`: greeting plus the current time, any method accepted.
/// Returning `String` lets axum set a plain-text content type.
pub async fn greet(Extension(state): Extension<HttpState>) -> String {
    state.greeter.greeting()
}
