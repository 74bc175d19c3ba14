//! Clockish desktop simulator.
//!
//! Runs the clock loop against a 240x240 `embedded-graphics-simulator` window, using the
//! host clock as the wall clock. By default symbols come straight from the recorded
//! minutes; `--live` samples a synthetic receiver through the symbol binner instead.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod args;
mod receiver;
mod system_clock;
mod timing;

use std::thread;

use clap::Parser;
use clockish::colors::BLACK;
use clockish::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use clockish::playback::RECORDED_MINUTES;
use clockish::{ClockLoop, Playback, SymbolBinner, SymbolSource, Tick, WallClock};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::args::Options;
use crate::receiver::{StdDelay, SyntheticReceiver};
use crate::system_clock::SystemClock;
use crate::timing::POLL_TIME;

fn main() {
    let options = Options::parse();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(options.scale).build();
    let mut window = Window::new("Clockish WWVB", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut clock = SystemClock;

    // Line the recording up with the wall clock so second N replays recorded second N
    let start_second = clock.now().map_or(0, |time| time.second);
    let mut source: Box<dyn SymbolSource> = if options.live {
        println!("Sampling synthetic receiver (window freezes ~1 s per tick)");
        let pin = SyntheticReceiver::new(&RECORDED_MINUTES, start_second);
        Box::new(SymbolBinner::new(pin, StdDelay))
    } else {
        println!("Replaying recorded minutes");
        let mut playback = Playback::recorded();
        playback.seek(start_second);
        Box::new(playback)
    };

    let mut clock_loop = ClockLoop::new();

    loop {
        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                return;
            }
        }

        match clock_loop.poll(&mut clock, source.as_mut(), &mut display) {
            Ok(Tick::Waiting) => {}
            Ok(Tick::Drawn { time, symbol, rollover }) => {
                if rollover {
                    println!("-- new minute --");
                }
                println!("{} symbol={}", time.to_hms(), symbol.digit());
                window.update(&display);
            }
            Err(e) => eprintln!("display write failed: {e:?}"),
        }

        thread::sleep(POLL_TIME);
    }
}
