//! Wall clock backed by the RP2040 real-time clock.
//!
//! The RTC starts from [`BOOT_TIME`] on power-up unless it is already running (e.g. after a
//! soft reset). Decoded WWVB time is not written back: the face shows RTC time and the
//! receiver's per-second symbols side by side.

use clockish::{ClockTime, WallClock};
use defmt::warn;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};

/// Time the RTC is started at when it is not already running.
pub const BOOT_TIME: DateTime = DateTime {
    year: 2023,
    month: 4,
    day: 10,
    day_of_week: DayOfWeek::Monday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// [`WallClock`] over the on-chip RTC.
pub struct RtcClock<'d> {
    rtc: Rtc<'d, RTC>,
}

impl<'d> RtcClock<'d> {
    /// Take the RTC, starting it at [`BOOT_TIME`] if needed.
    pub fn new(mut rtc: Rtc<'d, RTC>) -> Self {
        if !rtc.is_running() && rtc.set_datetime(BOOT_TIME).is_err() {
            warn!("RTC start failed, clock will wait until it runs");
        }
        Self { rtc }
    }
}

impl WallClock for RtcClock<'_> {
    fn now(&mut self) -> Option<ClockTime> {
        let now = self.rtc.now().ok()?;
        Some(ClockTime::new(now.hour, now.minute, now.second))
    }
}
