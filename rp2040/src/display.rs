//! Display driver for the Waveshare RP2040-LCD-1.28 (GC9A01, 240x240 round).
//!
//! Pin mapping:
//! - DC: GPIO8
//! - CS: GPIO9
//! - CLK: GPIO10 (SPI1 CLK)
//! - MOSI: GPIO11 (SPI1 TX)
//! - Reset: GPIO12
//! - Backlight: GPIO25

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::interface::SpiInterface;
use mipidsi::models::GC9A01;
use mipidsi::options::ColorInversion;

/// Size of the command/pixel staging buffer handed to the SPI interface.
pub const INTERFACE_BUFFER_SIZE: usize = 512;

/// Display type alias for the GC9A01 on the RP2040-LCD-1.28.
pub type RoundDisplay<'d> = mipidsi::Display<
    SpiInterface<'d, ExclusiveDevice<Spi<'d, SPI1, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    GC9A01,
    Output<'d>,
>;

/// Initialize the round display.
///
/// Resets the controller through its reset pin and returns it ready for drawing. The
/// backlight pin is driven separately by the caller.
pub fn init_display<'d>(
    spi: Spi<'d, SPI1, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    reset: Output<'d>,
    buffer: &'d mut [u8],
) -> RoundDisplay<'d> {
    // Create SPI device with chip select
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    // Create display interface
    let di = SpiInterface::new(spi_device, dc, buffer);

    // GC9A01 panels need color inversion for correct Rgb565 output. No rotation.
    Builder::new(GC9A01, di)
        .display_size(240, 240)
        .reset_pin(reset)
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .unwrap()
}

/// SPI configuration for the GC9A01.
///
/// 6 MHz is plenty: each second only redraws two short lines and two text runs. Full-screen
/// clears happen once a minute.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 6_000_000;
    config
}
