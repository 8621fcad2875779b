//! Handheld transmitter hardware: the joystick and two PWM status LEDs.
//!
//! # Pins
//!
//! - GPIO 26 (ADC0): Y axis
//! - GPIO 27 (ADC1): X axis
//! - GPIO 14: stick button, active low
//! - GPIO 15: trigger, active low
//! - GPIO 2 (PWM1 A): link LED
//! - GPIO 4 (PWM2 A): throttle LED

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Input;
use embassy_rp::pwm::{Pwm, SetDutyCycle};
use rc_core::transmitter::{ControlInputs, StatusLeds};
use rc_proto::ADC_MAX;

use crate::analog::read_10bit;

/// Reading reported when a conversion fails. Maps to a centered axis.
const ADC_FALLBACK: u16 = ADC_MAX / 2;

/// Two-axis analog joystick with a push button and a separate trigger.
pub struct Joystick<'d> {
    adc: Adc<'d, Blocking>,
    x: Channel<'d>,
    y: Channel<'d>,
    sw: Input<'d>,
    trigger: Input<'d>,
}

impl<'d> Joystick<'d> {
    /// Both buttons must be configured with pull-ups.
    #[must_use]
    pub fn new(
        adc: Adc<'d, Blocking>,
        x: Channel<'d>,
        y: Channel<'d>,
        sw: Input<'d>,
        trigger: Input<'d>,
    ) -> Self {
        Self {
            adc,
            x,
            y,
            sw,
            trigger,
        }
    }
}

impl ControlInputs for Joystick<'_> {
    fn read_x(&mut self) -> u16 {
        read_10bit(&mut self.adc, &mut self.x, ADC_FALLBACK)
    }

    fn read_y(&mut self) -> u16 {
        read_10bit(&mut self.adc, &mut self.y, ADC_FALLBACK)
    }

    fn sw_level(&mut self) -> bool {
        self.sw.is_high()
    }

    fn trigger_level(&mut self) -> bool {
        self.trigger.is_high()
    }
}

/// Link and throttle LEDs, each on its own PWM slice configured with
/// [`pwm_config`](crate::analog::pwm_config).
pub struct PwmStatusLeds<'d> {
    link: Pwm<'d>,
    throttle: Pwm<'d>,
}

impl<'d> PwmStatusLeds<'d> {
    #[must_use]
    pub fn new(link: Pwm<'d>, throttle: Pwm<'d>) -> Self {
        Self { link, throttle }
    }
}

impl StatusLeds for PwmStatusLeds<'_> {
    fn set_link(&mut self, duty: u8) {
        self.link
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .ok();
    }

    fn set_throttle(&mut self, duty: u8) {
        self.throttle
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .ok();
    }
}
