//! Single-register bus transactions
//!
//! Every register access is one framed I2C exchange:
//!
//! - write: `[sub-address, data]`
//! - read: `[sub-address]` followed by a one-byte read phase (repeated start)
//!
//! Failures are surfaced as-is; retry policy belongs to callers.

use sc16is750_hal::I2cBus;

use crate::reg::{encode_address, Register};

/// Register-level access to one chip on the bus
pub struct RegisterTransport<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> RegisterTransport<B> {
    /// Bind to the chip at 7-bit `address`
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            bus,
            address: address & 0x7F,
        }
    }

    /// 7-bit bus address of the chip
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Read one register
    pub fn read_register(&mut self, reg: Register) -> Result<u8, B::Error> {
        self.read_index(reg.index())
    }

    /// Write one register
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), B::Error> {
        self.write_index(reg.index(), value)
    }

    /// Read by raw logical index (0-15)
    pub fn read_index(&mut self, index: u8) -> Result<u8, B::Error> {
        let mut buf = [0u8; 1];
        self.bus
            .write_read(self.address, &[encode_address(index)], &mut buf)?;
        Ok(buf[0])
    }

    /// Write by raw logical index (0-15)
    pub fn write_index(&mut self, index: u8, value: u8) -> Result<(), B::Error> {
        self.bus
            .write(self.address, &[encode_address(index), value])
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    #[cfg(test)]
    pub(crate) fn bus(&self) -> &B {
        &self.bus
    }

    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBus, MockError};

    #[test]
    fn test_write_frames_address_and_data() {
        let mut t = RegisterTransport::new(MockBus::new(), 0x4D);
        t.write_register(Register::Spr, 0x48).unwrap();

        let bus = t.bus();
        assert_eq!(bus.writes.len(), 1);
        assert_eq!(bus.writes[0].device, 0x4D);
        assert_eq!(bus.writes[0].address, 0x38);
        assert_eq!(bus.writes[0].value, 0x48);
    }

    #[test]
    fn test_read_sends_encoded_address() {
        let mut bus = MockBus::new();
        bus.regs[Register::Lsr.index() as usize] = 0x60;
        let mut t = RegisterTransport::new(bus, 0x4D);

        assert_eq!(t.read_register(Register::Lsr).unwrap(), 0x60);
        assert_eq!(t.bus().reads, [0x28]);
    }

    #[test]
    fn test_every_index_encodes_shifted() {
        let mut t = RegisterTransport::new(MockBus::new(), 0x4D);
        for index in 0..16u8 {
            t.write_index(index, index).unwrap();
            t.read_index(index).unwrap();
        }
        for (i, w) in t.bus().writes.iter().enumerate() {
            assert_eq!(w.address, (i as u8) << 3);
        }
        for (i, r) in t.bus().reads.iter().enumerate() {
            assert_eq!(*r, (i as u8) << 3);
        }
    }

    #[test]
    fn test_nack_is_reported() {
        let mut bus = MockBus::new();
        bus.fail_at = Some(0);
        let mut t = RegisterTransport::new(bus, 0x4D);
        assert_eq!(t.read_register(Register::Spr), Err(MockError::Nack));

        t.bus_mut().fail_at = Some(1);
        assert_eq!(
            t.write_register(Register::Spr, 0x00),
            Err(MockError::Nack)
        );
    }

    #[test]
    fn test_wrong_address_is_not_acknowledged() {
        let mut t = RegisterTransport::new(MockBus::new(), 0x48);
        assert_eq!(t.read_register(Register::Spr), Err(MockError::Nack));
    }

    #[test]
    fn test_address_masked_to_7_bits() {
        let t = RegisterTransport::new(MockBus::new(), 0xCD);
        assert_eq!(t.address(), 0x4D);
    }
}
