//! Stream adapters for the UART channel
//!
//! [`SerialPort`] borrows a [`Device`] and exposes its UART through
//! `embedded_io` and the blocking [`UartTx`]/[`UartRx`] traits, so generic
//! serial consumers can sit on top of the bridge. All waits are bounded by
//! the device's [`TxTimeout`](crate::TxTimeout).

use sc16is750_hal::{I2cBus, UartRx, UartTx};

use crate::device::Device;
use crate::error::Error;
use crate::reg::Register;

/// Borrowed UART view of a [`Device`]
pub struct SerialPort<'a, B: I2cBus> {
    device: &'a mut Device<B>,
}

impl<B: I2cBus> Device<B> {
    /// Borrow the UART as a byte stream
    pub fn serial(&mut self) -> SerialPort<'_, B> {
        SerialPort { device: self }
    }
}

impl<B> embedded_io::ErrorType for SerialPort<'_, B>
where
    B: I2cBus,
    B::Error: core::fmt::Debug,
{
    type Error = Error<B::Error>;
}

impl<B> embedded_io::Read for SerialPort<'_, B>
where
    B: I2cBus,
    B::Error: core::fmt::Debug,
{
    /// Blocks until at least one byte is available, then reads as many as
    /// the RX FIFO holds (up to `buf.len()`).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        let level = self.device.wait_for_rx_data()?;
        let n = buf.len().min(level as usize);
        for slot in &mut buf[..n] {
            *slot = self.device.read()?;
        }
        Ok(n)
    }
}

impl<B> embedded_io::ReadReady for SerialPort<'_, B>
where
    B: I2cBus,
    B::Error: core::fmt::Debug,
{
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(self.device.available()? > 0)
    }
}

impl<B> embedded_io::Write for SerialPort<'_, B>
where
    B: I2cBus,
    B::Error: core::fmt::Debug,
{
    /// Blocks until the TX FIFO has room, then fills as much of it as
    /// `buf` allows.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        let space = self.device.wait_for_tx_space()?;
        let n = buf.len().min(space as usize);
        for &byte in &buf[..n] {
            self.device
                .transport
                .write_register(Register::RhrThr, byte)?;
        }
        Ok(n)
    }

    /// Wait until the transmitter has shifted out every queued byte
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.device.wait_for_tx_empty()
    }
}

impl<B> embedded_io::WriteReady for SerialPort<'_, B>
where
    B: I2cBus,
    B::Error: core::fmt::Debug,
{
    fn write_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(self.device.transmit_space()? > 0)
    }
}

impl<B: I2cBus> UartTx for SerialPort<'_, B> {
    type Error = Error<B::Error>;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.device.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.device.wait_for_tx_empty()
    }
}

impl<B: I2cBus> UartRx for SerialPort<'_, B> {
    type Error = Error<B::Error>;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        for slot in buf.iter_mut() {
            self.device.wait_for_rx_data()?;
            *slot = self.device.read()?;
        }
        Ok(buf.len())
    }
}
