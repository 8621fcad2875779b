//! nRF24L01 RC vehicle firmware for RP2040.
//!
//! This crate binds the platform-agnostic [`rc_core`] control cycles to the
//! RP2040 peripherals of the two nodes: the handheld transmitter and the
//! vehicle receiver.
//!
//! # Overview
//!
//! Both boards carry an nRF24L01 on SPI0. The handheld samples a two-axis
//! joystick every 20 ms and sends a 4-byte packet; the vehicle polls for
//! packets continuously, drives two H-bridge motors and runs the laser game.
//!
//! # Hardware Configuration
//!
//! Shared radio wiring:
//!
//! | Function  | GPIO | Description |
//! |-----------|------|-------------|
//! | SPI0 MISO | 16   | nRF24L01 MISO |
//! | CSN       | 17   | nRF24L01 chip select (active low) |
//! | SPI0 SCK  | 18   | nRF24L01 SCK |
//! | SPI0 MOSI | 19   | nRF24L01 MOSI |
//! | CE        | 20   | nRF24L01 chip enable |
//!
//! Handheld ([`handheld`]):
//!
//! | Function     | GPIO | Description |
//! |--------------|------|-------------|
//! | Link LED     | 2    | PWM, lit while sends are acknowledged |
//! | Throttle LED | 4    | PWM, brightness follows y deflection |
//! | Stick button | 14   | Active low, pull-up |
//! | Trigger      | 15   | Active low, pull-up |
//! | Y axis       | 26   | ADC0 |
//! | X axis       | 27   | ADC1 |
//!
//! Vehicle ([`vehicle`]):
//!
//! | Function      | GPIO    | Description |
//! |---------------|---------|-------------|
//! | Life LEDs     | 3, 4, 5 | Life pattern bits 1..=3 |
//! | Left motor    | 6, 7, 8 | ENA (PWM), IN1, IN2 |
//! | Right motor   | 10, 11, 12 | ENB (PWM), IN3, IN4 |
//! | Arm button    | 13      | Active low, pull-up |
//! | Laser         | 21      | Laser module enable |
//! | Armed LED     | 22      | Lit while armed |
//! | Signal LED    | 25      | On-board LED, lit when a packet arrived |
//! | Light sensor  | 26      | ADC0, LDR divider |
//!
//! # Modules
//!
//! - [`analog`]: ADC scaling and the 8-bit PWM config shared by both nodes
//! - [`clock`]: [`EmbassyClock`], the radio's monotonic clock
//! - [`config`]: feature-selected node configuration
//! - [`handheld`]: joystick and status LEDs ([`Joystick`], [`PwmStatusLeds`])
//! - [`vehicle`]: motors, sensors and indicators ([`HBridgeMotor`], [`VehicleSensors`], [`VehicleActuators`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`wide-deadzone`**: Deadzone of 75 instead of 60 on the transmitter
//! - **`hold-last-packet`**: The receiver keeps acting on the last packet while the link is down
//!
//! # Re-exports
//!
//! This crate re-exports the core types used by the binaries, so they only
//! need to depend on this crate.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they both install a panic handler");

pub use rc_core::{
    configure_receiver, configure_transmitter, Clock, ControlPacket, Nrf24, Receiver,
    ReceiverConfig, SpiTransport, TransmitterConfig, TransmitterSession,
};

pub mod analog;
pub mod clock;
pub mod config;
pub mod handheld;
pub mod vehicle;

pub use analog::pwm_config;
pub use clock::EmbassyClock;
pub use config::{RECEIVER_CONFIG, SPI_FREQUENCY, TRANSMITTER_CONFIG};
pub use handheld::{Joystick, PwmStatusLeds};
pub use vehicle::{HBridgeMotor, VehicleActuators, VehicleSensors};
