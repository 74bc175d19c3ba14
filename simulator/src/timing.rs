//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` library does not have, so they live
//! here rather than in `clockish::config`.

use std::time::Duration;

use clockish::config::POLL_INTERVAL_MS;

/// Time between clock polls. Matches the firmware so ticks land at the same point in
/// each second.
pub const POLL_TIME: Duration = Duration::from_millis(POLL_INTERVAL_MS);
