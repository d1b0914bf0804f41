// src/application/greeting.rs
use crate::application::ports::time::Clock;
use chrono::{Datelike, Timelike};
use std::sync::Arc;

/// Identifier of the template this service was ported from, baked into every
/// response body.
pub const TEMPLATE_NAME: &str = "golang-basic-webserver";

/// Produces the greeting body served on `/`. Stateless apart from the clock,
/// so a single instance is shared across all requests.
pub struct GreetingService {
    clock: Arc<dyn Clock>,
}

impl GreetingService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Read the clock and render the full response body. The timestamp is
    /// taken fresh on every call, never cached.
    pub fn greeting(&self) -> String {
        format!(
            "Hello world ! Template: {TEMPLATE_NAME}. {}",
            self.clock_line()
        )
    }

    /// Format the current local time as `Time: HH:MM:SS Date: DD/MM/YYYY`.
    /// All fields except the year are zero-padded to two digits; the day of
    /// month is printed as-is, without calendar validation.
    fn clock_line(&self) -> String {
        let now = self.clock.now();
        format!(
            "Time: {:02}:{:02}:{:02} Date: {:02}/{:02}/{}",
            now.hour(),
            now.minute(),
            now.second(),
            now.day(),
            now.month(),
            now.year()
        )
    }
}
