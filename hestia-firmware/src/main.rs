//! Hestia - Solid-Fuel Stove & Buffer Tank Monitor
//!
//! Main firmware binary for RP2040-based units. One cooperative control
//! cycle: sample the four thermistors, run the circulator hysteresis,
//! fold the statistics, repaint the stale screen regions. No background
//! tasks, no interrupts beyond the time driver - the settle delays inside
//! acquisition set the cycle cadence.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Instant};
use {defmt_rtt as _, panic_probe as _};

use hestia_core::config::UnitConfig;
use hestia_core::state::{Monitor, Temperatures};
use hestia_core::traits::{RelayOutput, TemperatureSource};
use hestia_drivers::relay::GpioRelay;
use hestia_drivers::sensor::NtcProbe;
use hestia_display::{PanelLayout, StatusScreen};

mod canvas;
mod io;
mod st7789;

use crate::canvas::EgCanvas;
use crate::io::{RelayPin, SharedAdc};
use crate::st7789::St7789;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Hestia firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = UnitConfig::default();

    // Circulator relay, released before the first reading exists
    let resting = if config.relay.inverted {
        Level::High
    } else {
        Level::Low
    };
    let relay_pin = RelayPin(Output::new(p.PIN_2, resting));
    let mut relay = GpioRelay::from_config(relay_pin, &config.relay);

    // Four thermistor dividers on the ADC bank
    let adc = SharedAdc::new(Adc::new_blocking(p.ADC, AdcConfig::default()));
    let mut stove = NtcProbe::new(
        adc.input(Channel::new_pin(p.PIN_26, Pull::None)),
        Delay,
        config.thermistor,
    );
    let mut tank_bottom = NtcProbe::new(
        adc.input(Channel::new_pin(p.PIN_27, Pull::None)),
        Delay,
        config.thermistor,
    );
    let mut tank_middle = NtcProbe::new(
        adc.input(Channel::new_pin(p.PIN_28, Pull::None)),
        Delay,
        config.thermistor,
    );
    let mut tank_top = NtcProbe::new(
        adc.input(Channel::new_pin(p.PIN_29, Pull::None)),
        Delay,
        config.thermistor,
    );

    // SPI TFT panel
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = 32_000_000;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);
    let dc = Output::new(p.PIN_8, Level::Low);
    let cs = Output::new(p.PIN_9, Level::High);
    let rst = Output::new(p.PIN_12, Level::Low);

    let mut display = St7789::new(spi, dc, cs, rst);
    if let Err(e) = display.init(&mut Delay) {
        error!("panel init failed: {}", e);
    }
    let mut canvas = EgCanvas::new(display);

    let mut screen = StatusScreen::new(PanelLayout::default(), config.scale);
    if let Err(e) = screen.draw_static(&mut canvas) {
        warn!("static chrome: {}", e);
    }

    let mut monitor = Monitor::new(config.control);
    info!(
        "entering control cycle (start {}, band {})",
        config.control.start_c, config.control.band_c
    );

    loop {
        // Acquisition paces the whole cycle through its settle delays
        let temperatures = Temperatures {
            stove_c: stove.sample(),
            tank_top_c: tank_top.sample(),
            tank_middle_c: tank_middle.sample(),
            tank_bottom_c: tank_bottom.sample(),
        };

        let now_ms = Instant::now().as_millis();
        let snapshot = monitor.tick(temperatures, now_ms);

        // Rewrite the pin every cycle so a glitched level self-heals
        relay.set_on(snapshot.circulator_on);

        if let Err(e) = screen.render(&mut canvas, &snapshot) {
            warn!("display write failed: {}", e);
        }
    }
}
