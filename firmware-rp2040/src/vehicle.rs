//! Vehicle receiver hardware.
//!
//! # Pins
//!
//! - GPIO 6 (PWM3 A), 7, 8: left motor ENA, IN1, IN2
//! - GPIO 10 (PWM5 A), 11, 12: right motor ENB, IN3, IN4
//! - GPIO 13: arm button, active low
//! - GPIO 26 (ADC0): light sensor
//! - GPIO 21: laser
//! - GPIO 25: signal LED
//! - GPIO 3, 4, 5: life LEDs
//! - GPIO 22: armed LED

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Level, Output};
use embassy_rp::pwm::Pwm;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use rc_core::drive::{Direction, DriveCommand, MotorCommand};
use rc_core::receiver::{VehicleInputs, VehicleOutputs};

use crate::analog::read_10bit;

/// Number of life LEDs. They show bits 1..=3 of the life pattern.
pub const LIFE_LEDS: usize = 3;

/// One motor on an L298-style H-bridge: a PWM enable plus two direction
/// inputs.
pub struct HBridgeMotor<P, O> {
    enable: P,
    in1: O,
    in2: O,
}

impl<P: SetDutyCycle, O: OutputPin> HBridgeMotor<P, O> {
    /// `enable` should run with an 8-bit top (see [`pwm_config`](crate::analog::pwm_config)).
    pub fn new(enable: P, in1: O, in2: O) -> Self {
        let mut motor = Self { enable, in1, in2 };
        motor.apply(&MotorCommand::STOP);
        motor
    }

    pub fn apply(&mut self, command: &MotorCommand) {
        let forward = command.direction == Direction::Forward;
        self.in1.set_state(forward.into()).ok();
        self.in2.set_state((!forward).into()).ok();
        self.enable
            .set_duty_cycle_fraction(u16::from(command.duty), u16::from(u8::MAX))
            .ok();
    }
}

/// Arm button and light sensor.
pub struct VehicleSensors<'d> {
    adc: Adc<'d, Blocking>,
    light: Channel<'d>,
    button: Input<'d>,
}

impl<'d> VehicleSensors<'d> {
    /// `button` must be configured with a pull-up.
    #[must_use]
    pub fn new(adc: Adc<'d, Blocking>, light: Channel<'d>, button: Input<'d>) -> Self {
        Self { adc, light, button }
    }
}

impl VehicleInputs for VehicleSensors<'_> {
    fn button_pressed(&mut self) -> bool {
        self.button.is_low()
    }

    fn light_level(&mut self) -> u16 {
        // A failed conversion reads as dark so it never counts as a hit
        read_10bit(&mut self.adc, &mut self.light, 0)
    }
}

/// Motors, laser and indicator LEDs.
pub struct VehicleActuators<'d> {
    left: HBridgeMotor<Pwm<'d>, Output<'d>>,
    right: HBridgeMotor<Pwm<'d>, Output<'d>>,
    laser: Output<'d>,
    signal: Output<'d>,
    life: [Output<'d>; LIFE_LEDS],
    armed: Output<'d>,
}

impl<'d> VehicleActuators<'d> {
    #[must_use]
    pub fn new(
        left: HBridgeMotor<Pwm<'d>, Output<'d>>,
        right: HBridgeMotor<Pwm<'d>, Output<'d>>,
        laser: Output<'d>,
        signal: Output<'d>,
        life: [Output<'d>; LIFE_LEDS],
        armed: Output<'d>,
    ) -> Self {
        Self {
            left,
            right,
            laser,
            signal,
            life,
            armed,
        }
    }
}

impl VehicleOutputs for VehicleActuators<'_> {
    fn drive(&mut self, command: &DriveCommand) {
        self.left.apply(&command.left);
        self.right.apply(&command.right);
    }

    fn set_laser(&mut self, on: bool) {
        self.laser.set_level(Level::from(on));
    }

    fn set_signal_led(&mut self, on: bool) {
        self.signal.set_level(Level::from(on));
    }

    fn set_life_leds(&mut self, pattern: u8) {
        for (bit, led) in (1..).zip(self.life.iter_mut()) {
            led.set_level(Level::from(pattern & (1 << bit) != 0));
        }
    }

    fn set_armed_led(&mut self, on: bool) {
        self.armed.set_level(Level::from(on));
    }
}
