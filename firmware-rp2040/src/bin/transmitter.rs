#![no_std]
#![no_main]

use defmt::{debug, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Duration, Ticker};
use rc_vehicle_rp2040::{
    configure_transmitter, pwm_config, EmbassyClock, Joystick, Nrf24, PwmStatusLeds,
    SpiTransport, TransmitterSession, SPI_FREQUENCY, TRANSMITTER_CONFIG,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RC transmitter starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Radio ---
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = SPI_FREQUENCY;

    let spi = Spi::new_blocking(
        p.SPI0,
        p.PIN_18, // SCK
        p.PIN_19, // MOSI
        p.PIN_16, // MISO
        spi_config,
    );
    let csn = Output::new(p.PIN_17, Level::High);
    let ce = Output::new(p.PIN_20, Level::Low);

    let transport = SpiTransport::new(spi, ce, csn, Delay);
    let mut radio = Nrf24::new(transport, Delay, EmbassyClock);
    configure_transmitter(&mut radio);

    // --- Joystick ---
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let x = Channel::new_pin(p.PIN_27, Pull::None);
    let y = Channel::new_pin(p.PIN_26, Pull::None);
    let sw = Input::new(p.PIN_14, Pull::Up);
    let trigger = Input::new(p.PIN_15, Pull::Up);
    let mut joystick = Joystick::new(adc, x, y, sw, trigger);

    // --- Status LEDs ---
    let link = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, pwm_config());
    let throttle = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, pwm_config());
    let mut leds = PwmStatusLeds::new(link, throttle);

    let mut session = TransmitterSession::new(TRANSMITTER_CONFIG);
    let mut ticker = Ticker::every(Duration::from_millis(TRANSMITTER_CONFIG.period_ms));

    info!(
        "RC transmitter initialized, deadzone {}, period {} ms",
        TRANSMITTER_CONFIG.deadzone, TRANSMITTER_CONFIG.period_ms
    );

    loop {
        match session.cycle(&mut joystick, &mut radio, &mut leds) {
            Ok(packet) => debug!("sent {:?}", packet),
            Err(e) => debug!("send failed: {:?}", e),
        }
        ticker.next().await;
    }
}
