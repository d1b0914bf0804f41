// tests/support/mod.rs
// The mocks module is test-only support code shared by the integration test
// binaries. Some symbols are unused in individual test crates, which causes
// dead_code warnings. Allow those at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use axum::Router;
use basic_webserver::application::{greeting::GreetingService, ports::time::Clock};
use basic_webserver::infrastructure::time::SystemClock;
use basic_webserver::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

/// Router wired with the real system clock, matching what `main` builds.
pub fn make_router() -> Router {
    make_router_with_clock(Arc::new(SystemClock::default()))
}

pub fn make_router_with_clock(clock: Arc<dyn Clock>) -> Router {
    let state = HttpState {
        greeter: Arc::new(GreetingService::new(clock)),
    };
    build_router(state)
}
