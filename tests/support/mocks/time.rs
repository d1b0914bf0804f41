// tests/support/mocks/time.rs
use basic_webserver::application::ports::time::Clock;
use chrono::{DateTime, Local, TimeZone};
use once_cell::sync::Lazy;

/// Deterministic timestamp for exact body assertions.
static FIXED_NOW: Lazy<DateTime<Local>> = Lazy::new(|| {
    Local
        .with_ymd_and_hms(2024, 1, 5, 7, 8, 9)
        .single()
        .expect("invalid fixed time in tests/support/mocks/time.rs")
});

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *FIXED_NOW
    }
}
