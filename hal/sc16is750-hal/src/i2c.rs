//! I2C bus abstractions
//!
//! The bridge chip is reached through a shared two-wire bus. The bus itself
//! (clocking, arbitration, electrical signaling) belongs to the host HAL;
//! this module only describes the transactions the driver needs.

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. A failed transaction (no acknowledge, arbitration
/// loss, empty read phase) must be reported as `Err`, never as a default
/// value.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// Every embedded-hal 1.0 blocking I2C master is usable as an [`I2cBus`].
impl<T> I2cBus for T
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write_read(self, address, write_data, read_buf)
    }
}
