//! Synthetic SymRFT60 output for live-mode simulation.
//!
//! [`SyntheticReceiver`] is an `InputPin` that replays a recorded minute as a pulse train:
//! each second the line is held low (asserted) for the first N of 1000 reads, where N sits
//! in the band of the recorded symbol. Feeding it through [`SymbolBinner`] exercises the
//! same sampling path the firmware runs against GPIO26.
//!
//! [`SymbolBinner`]: clockish::SymbolBinner

use std::convert::Infallible;
use std::thread;
use std::time::Duration;

use clockish::Symbol;
use clockish::config::SAMPLES_PER_SYMBOL;
use clockish::playback::RecordedMinute;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};

/// Asserted reads per second for an undecodable second (below every band).
const ERROR_ASSERTED: u32 = 50;

/// Reads per second the line is held low for `symbol`.
const fn asserted_reads(symbol: Symbol) -> u32 {
    match symbol {
        Symbol::Low => 200,
        Symbol::Mid => 500,
        Symbol::High => 800,
        Symbol::Error => ERROR_ASSERTED,
    }
}

/// Input pin replaying recorded minutes as receiver pulses.
pub struct SyntheticReceiver {
    minutes: &'static [RecordedMinute],
    /// Absolute second index into `minutes`.
    second: usize,
    /// Reads taken within the current second.
    reads: u32,
}

impl SyntheticReceiver {
    /// Start replaying `minutes` at `second` of the first minute.
    pub fn new(
        minutes: &'static [RecordedMinute],
        second: u8,
    ) -> Self {
        Self {
            minutes,
            second: usize::from(second) % 60,
            reads: 0,
        }
    }

    fn current_symbol(&self) -> Symbol {
        let total = self.minutes.len() * 60;
        if total == 0 {
            return Symbol::Error;
        }
        let index = self.second % total;
        Symbol::from_raw(self.minutes[index / 60][index % 60])
    }
}

impl ErrorType for SyntheticReceiver {
    type Error = Infallible;
}

impl InputPin for SyntheticReceiver {
    fn is_high(&mut self) -> Result<bool, Self::Error> { self.is_low().map(|low| !low) }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let low = self.reads < asserted_reads(self.current_symbol());
        self.reads += 1;
        if self.reads == SAMPLES_PER_SYMBOL {
            self.reads = 0;
            self.second += 1;
        }
        Ok(low)
    }
}

/// Blocking delay backed by `thread::sleep`.
///
/// Sleeps overshoot by tens of microseconds, so a 1000-read window runs a little over a
/// second. The clock loop tolerates that by skipping the odd second.
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

#[cfg(test)]
mod tests {
    use clockish::config::BinConfig;
    use clockish::playback::RECORDED_MINUTES;

    use super::*;

    fn asserted_in_second(receiver: &mut SyntheticReceiver) -> u32 {
        (0..SAMPLES_PER_SYMBOL)
            .map(|_| u32::from(receiver.is_low().unwrap_or(false)))
            .sum()
    }

    #[test]
    fn test_pulse_widths_classify_back_to_symbol() {
        for symbol in [Symbol::Low, Symbol::Mid, Symbol::High, Symbol::Error] {
            let total = asserted_reads(symbol) as f32;
            assert_eq!(BinConfig::DEFAULT.classify(total), symbol);
        }
    }

    #[test]
    fn test_replays_recorded_minute() {
        let mut receiver = SyntheticReceiver::new(&RECORDED_MINUTES, 0);
        for &raw in &RECORDED_MINUTES[0][..5] {
            let expected = asserted_reads(Symbol::from_raw(raw));
            assert_eq!(asserted_in_second(&mut receiver), expected);
        }
    }

    #[test]
    fn test_starts_at_requested_second() {
        let mut receiver = SyntheticReceiver::new(&RECORDED_MINUTES, 44);
        assert_eq!(asserted_in_second(&mut receiver), ERROR_ASSERTED);
    }

    #[test]
    fn test_empty_table_reads_as_error() {
        let mut receiver = SyntheticReceiver::new(&[], 0);
        assert_eq!(asserted_in_second(&mut receiver), ERROR_ASSERTED);
    }
}
