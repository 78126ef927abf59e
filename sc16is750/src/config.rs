//! Device configuration and UART parameter encoding

use sc16is750_hal::{DataBits, Parity, StopBits, UartConfig};

use crate::reg::lcr;

/// Crystal fitted to most SC16IS750 breakout boards
pub const DEFAULT_CRYSTAL_HZ: u32 = 14_745_600;

/// Bound on how long `write` waits for transmit FIFO space
///
/// Expressed as a number of TXLVL polls. Each poll is one bus transaction,
/// so the wall-clock bound scales with the I2C clock rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxTimeout {
    /// Maximum number of level polls before giving up (at least one poll
    /// is always made)
    pub max_polls: u32,
}

impl TxTimeout {
    pub const fn polls(max_polls: u32) -> Self {
        Self { max_polls }
    }

    /// Poll count actually used; zero still checks once
    pub(crate) const fn budget(&self) -> u32 {
        if self.max_polls == 0 {
            1
        } else {
            self.max_polls
        }
    }
}

impl Default for TxTimeout {
    fn default() -> Self {
        Self { max_polls: 1000 }
    }
}

/// Per-chip configuration supplied at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Crystal (or external clock) frequency in Hz
    pub crystal_hz: u32,
    /// Poll budget for blocking transfers
    pub tx_timeout: TxTimeout,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            crystal_hz: DEFAULT_CRYSTAL_HZ,
            tx_timeout: TxTimeout::default(),
        }
    }
}

/// Compute the baud-rate divisor: `round(crystal_hz / (baud * 16))`
///
/// Returns `None` if the result does not fit the 16-bit DLL/DLM pair or
/// rounds to zero.
pub fn divisor(crystal_hz: u32, baudrate: u32) -> Option<u16> {
    if baudrate == 0 {
        return None;
    }
    let den = baudrate as u64 * 16;
    let div = (crystal_hz as u64 + den / 2) / den;
    match div {
        1..=0xFFFF => Some(div as u16),
        _ => None,
    }
}

/// Encode the frame format into an LCR value (bit 7 clear)
pub fn line_control(config: &UartConfig) -> u8 {
    let word = match config.data_bits {
        DataBits::Five => lcr::WORD_LENGTH_5,
        DataBits::Six => lcr::WORD_LENGTH_6,
        DataBits::Seven => lcr::WORD_LENGTH_7,
        DataBits::Eight => lcr::WORD_LENGTH_8,
    };
    let stop = match config.stop_bits {
        StopBits::One => 0,
        StopBits::Two => lcr::STOP_BITS_2,
    };
    let parity = match config.parity {
        Parity::None => 0,
        Parity::Odd => lcr::PARITY_ODD,
        Parity::Even => lcr::PARITY_EVEN,
        Parity::Mark => lcr::PARITY_MARK,
        Parity::Space => lcr::PARITY_SPACE,
    };
    word | stop | parity
}
