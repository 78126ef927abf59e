//! SC16IS750 I2C-to-UART/GPIO bridge driver
//!
//! Polling, register-level driver for the single-channel SC16IS750:
//!
//! - Register transport (sub-address encoding, single-register transactions)
//! - UART channel (divisor programming, frame format, FIFO-level flow control)
//! - GPIO bank (direction control, shadowed write-only output state)
//! - Connectivity self-test via the scratch-pad register
//!
//! # Usage
//!
//! ```ignore
//! let mut dev = Device::new(i2c, 0x4D);
//! dev.ensure_present()?;
//! dev.configure_uart(&UartConfig::BAUD_9600_8N1)?;
//! dev.configure_pins(0b0000_0001)?;
//!
//! dev.write_pin(0, true)?;
//! while dev.available()? > 0 {
//!     let byte = dev.read()?;
//!     dev.write(byte)?;
//! }
//! ```
//!
//! Any `embedded_hal::i2c::I2c` master works as the bus. The driver never
//! enables chip interrupts.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod device;
pub mod error;
pub mod gpio;
pub mod probe;
pub mod reg;
pub mod serial;
pub mod transport;
pub mod uart;

#[cfg(test)]
mod mock;

pub use config::{DeviceConfig, TxTimeout, DEFAULT_CRYSTAL_HZ};
pub use device::Device;
pub use error::{ConfigStep, Error, PinDirection};
pub use gpio::PIN_COUNT;
pub use probe::PROBE_SENTINEL;
pub use reg::{Register, FIFO_DEPTH};
pub use serial::SerialPort;
pub use sc16is750_hal::{DataBits, I2cBus, Parity, StopBits, UartConfig};
pub use uart::LineStatus;
