//! Clockish firmware for the Waveshare RP2040-LCD-1.28.
//!
//! Draws the symbol stream of a SymRFT60 WWVB receiver (output on GPIO26) as a ring on the
//! round GC9A01 display. One 6° slice per second; the slice radius follows the decoded
//! symbol (outer ring = 0, then 1, then 2, errors innermost).
//!
//! # Architecture
//!
//! Everything runs in the main task, strictly in sequence:
//! - Poll the RTC every 10 ms until the second changes
//! - Sample the receiver for one second (blocking; nothing else runs meanwhile)
//! - Draw the time, the symbol digit and the ring slice
//!
//! # Features
//!
//! - `playback`: replay the bundled recorded minutes instead of sampling GPIO26

#![no_std]
#![no_main]

mod display;
mod wall_clock;

use clockish::colors::BLACK;
use clockish::config::POLL_INTERVAL_MS;
#[cfg(feature = "playback")]
use clockish::Playback;
#[cfg(not(feature = "playback"))]
use clockish::SymbolBinner;
use clockish::{ClockLoop, Tick};
use defmt::{info, warn};
use embassy_executor::Spawner;
#[cfg(not(feature = "playback"))]
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use embedded_graphics::prelude::*;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{INTERFACE_BUFFER_SIZE, display_spi_config, init_display};
use crate::wall_clock::RtcClock;

/// Staging buffer for the display interface.
static DISPLAY_BUFFER: StaticCell<[u8; INTERFACE_BUFFER_SIZE]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Clockish - WWVB clock face starting...");

    let p = embassy_rp::init(Default::default());

    // Initialize display pins
    // RP2040-LCD-1.28 pinout: DC=8, CS=9, CLK=10, MOSI=11, RST=12, Backlight=25
    let dc = Output::new(p.PIN_8, Level::Low);
    let cs = Output::new(p.PIN_9, Level::High);
    let reset = Output::new(p.PIN_12, Level::High);
    let mut _backlight = Output::new(p.PIN_25, Level::High); // Turn on backlight

    // Initialize SPI (TX-only, display doesn't need MISO)
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, display_spi_config());

    let buffer = DISPLAY_BUFFER.init([0; INTERFACE_BUFFER_SIZE]);
    let mut display = init_display(spi, cs, dc, reset, buffer);
    display.clear(BLACK).ok();

    info!("Display initialized!");

    let mut clock = RtcClock::new(Rtc::new(p.RTC));

    // Symbol source is fixed for the lifetime of the firmware
    #[cfg(not(feature = "playback"))]
    let mut source = {
        info!("Sampling SymRFT60 on GPIO26");
        SymbolBinner::new(Input::new(p.PIN_26, Pull::None), embassy_time::Delay)
    };
    #[cfg(feature = "playback")]
    let mut source = {
        info!("Replaying recorded minutes");
        Playback::recorded()
    };

    let mut clock_loop = ClockLoop::new();

    info!("Starting clock loop...");

    loop {
        match clock_loop.poll(&mut clock, &mut source, &mut display) {
            Ok(Tick::Waiting) => {}
            Ok(Tick::Drawn { time, symbol, rollover }) => {
                if rollover {
                    info!("face cleared for new minute");
                }
                info!("{} symbol={}", time, symbol);
            }
            Err(_) => warn!("display write failed, slice skipped"),
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
