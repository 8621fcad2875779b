//! Monotonic time for the radio driver.

use embassy_time::Instant;
use rc_core::Clock;

/// [`Clock`] backed by the embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
