//! Host wall clock.

use std::time::{SystemTime, UNIX_EPOCH};

use clockish::{ClockTime, WallClock};

/// Reads the time of day (UTC) from the host clock.
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&mut self) -> Option<ClockTime> {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
        let seconds_of_day = (since_epoch.as_secs() % 86_400) as u32;
        Some(ClockTime::from_seconds_of_day(seconds_of_day))
    }
}
