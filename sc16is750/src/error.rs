//! Driver error types

use core::fmt;

/// Step of a multi-register configuration sequence
///
/// Reported by [`Error::ConfigurationIncomplete`] so the caller can tell how
/// far the sequence got before the bus failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigStep {
    /// LCR <- divisor latch enable
    DivisorLatch,
    /// DLL <- divisor low byte
    DivisorLow,
    /// DLM <- divisor high byte
    DivisorHigh,
    /// LCR <- enhanced register access
    EnhancedAccess,
    /// EFR <- enhanced functions enable
    EnhancedFeatures,
    /// LCR <- frame format
    LineControl,
    /// IER <- all sources disabled
    InterruptEnable,
    /// FCR <- FIFO enable and reset
    FifoControl,
    /// IODIR <- direction mask
    IoDirection,
    /// IOCONTROL <- default
    IoControl,
    /// IOINTENA <- no input-change interrupts
    IoInterrupt,
}

/// Direction a GPIO pin is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Input,
    Output,
}

/// SC16IS750 driver errors
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction not acknowledged or read phase produced no data
    Transport(E),
    /// Pin operation against a pin configured for the other direction
    InvalidPinDirection {
        /// Pin index (0-7)
        pin: u8,
        /// Direction the pin is actually configured for
        direction: PinDirection,
    },
    /// Pin index outside 0-7
    InvalidPin(u8),
    /// Pin operation before `configure_pins`
    PinsNotConfigured,
    /// Scratch register did not read back the sentinel
    DeviceNotPresent,
    /// UART or GPIO configuration aborted partway; the chip must be
    /// reconfigured from scratch
    ConfigurationIncomplete {
        /// Step whose transaction failed
        step: ConfigStep,
        /// Underlying bus error
        source: E,
    },
    /// Baud rate not reachable with a 16-bit divisor for this crystal
    InvalidBaudRate,
    /// Transmit FIFO never reported free space within the poll budget
    Timeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Transport(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "bus error: {:?}", e),
            Error::InvalidPinDirection { pin, direction } => {
                write!(f, "pin {} is configured as {:?}", pin, direction)
            }
            Error::InvalidPin(pin) => write!(f, "no such pin: {}", pin),
            Error::PinsNotConfigured => f.write_str("GPIO direction not configured"),
            Error::DeviceNotPresent => f.write_str("device did not answer the scratch test"),
            Error::ConfigurationIncomplete { step, source } => {
                write!(f, "configuration failed at {:?}: {:?}", step, source)
            }
            Error::InvalidBaudRate => f.write_str("baud rate not reachable with this crystal"),
            Error::Timeout => f.write_str("timed out waiting for transmit FIFO space"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

impl<E: fmt::Debug> embedded_io::Error for Error<E> {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Error::Timeout => embedded_io::ErrorKind::TimedOut,
            Error::DeviceNotPresent => embedded_io::ErrorKind::NotConnected,
            Error::InvalidBaudRate | Error::InvalidPin(_) => embedded_io::ErrorKind::InvalidInput,
            _ => embedded_io::ErrorKind::Other,
        }
    }
}
