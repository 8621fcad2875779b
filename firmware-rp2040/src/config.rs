//! Node configuration selected at compile time.

use rc_core::{ReceiverConfig, TransmitterConfig};

/// nRF24L01 SPI clock. The chip accepts up to 10 MHz.
pub const SPI_FREQUENCY: u32 = 4_000_000;

#[cfg(not(feature = "wide-deadzone"))]
pub const TRANSMITTER_CONFIG: TransmitterConfig = TransmitterConfig::DEFAULT;

#[cfg(feature = "wide-deadzone")]
pub const TRANSMITTER_CONFIG: TransmitterConfig = TransmitterConfig::WIDE_DEADZONE;

#[cfg(not(feature = "hold-last-packet"))]
pub const RECEIVER_CONFIG: ReceiverConfig = ReceiverConfig::DEFAULT;

#[cfg(feature = "hold-last-packet")]
pub const RECEIVER_CONFIG: ReceiverConfig = ReceiverConfig::HOLD_LAST;
