//! ADC and PWM helpers shared by both nodes.

use defmt::warn;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::pwm::Config as PwmConfig;

/// Sample one channel and scale the RP2040's 12-bit result to the 10-bit
/// range the control mapping expects. A failed conversion reads as `fallback`.
pub fn read_10bit(adc: &mut Adc<'_, Blocking>, channel: &mut Channel<'_>, fallback: u16) -> u16 {
    match adc.blocking_read(channel) {
        Ok(raw) => raw >> 2,
        Err(e) => {
            warn!("ADC read failed: {:?}", e);
            fallback
        }
    }
}

/// PWM config for an 8-bit LED or motor duty: `top = 255`.
#[must_use]
pub fn pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = u16::from(u8::MAX);
    config
}
