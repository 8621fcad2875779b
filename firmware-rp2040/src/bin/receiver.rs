#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::Delay;
use rc_vehicle_rp2040::{
    configure_receiver, pwm_config, Clock, EmbassyClock, HBridgeMotor, Nrf24, Receiver,
    SpiTransport, VehicleActuators, VehicleSensors, RECEIVER_CONFIG, SPI_FREQUENCY,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RC receiver starting...");

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
    configure_receiver(&mut radio);

    // --- Sensors ---
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let light = Channel::new_pin(p.PIN_26, Pull::None);
    let button = Input::new(p.PIN_13, Pull::Up);
    let sensors = VehicleSensors::new(adc, light, button);

    // --- Motors ---
    let left = HBridgeMotor::new(
        Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, pwm_config()), // ENA
        Output::new(p.PIN_7, Level::Low),                       // IN1
        Output::new(p.PIN_8, Level::Low),                       // IN2
    );
    let right = HBridgeMotor::new(
        Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config()), // ENB
        Output::new(p.PIN_11, Level::Low),                       // IN3
        Output::new(p.PIN_12, Level::Low),                       // IN4
    );

    // --- Laser and indicators ---
    let actuators = VehicleActuators::new(
        left,
        right,
        Output::new(p.PIN_21, Level::Low), // laser
        Output::new(p.PIN_25, Level::Low), // on-board LED: signal
        [
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
        ],
        Output::new(p.PIN_22, Level::Low), // armed
    );

    let mut receiver = Receiver::new(radio, sensors, actuators, RECEIVER_CONFIG);

    info!(
        "RC receiver initialized, link loss policy {:?}",
        RECEIVER_CONFIG.link_loss
    );

    let clock = EmbassyClock;
    loop {
        receiver.process_one(clock.now_ms());
        // Let the time driver and RTT run between polls
        yield_now().await;
    }
}
