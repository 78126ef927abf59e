//! Connectivity self-test
//!
//! The scratch-pad register has no functional effect, so writing a
//! sentinel and reading it back is a safe way to confirm the chip answers
//! before anything is programmed.

use sc16is750_hal::I2cBus;

use crate::device::Device;
use crate::error::Error;
use crate::reg::Register;

/// Value round-tripped through SPR
pub const PROBE_SENTINEL: u8 = b'H';

impl<B: I2cBus> Device<B> {
    /// Check that the chip answers on the bus
    ///
    /// Overwrites the scratch-pad register. Bus failures are returned as
    /// errors; a readback mismatch is `Ok(false)`.
    pub fn probe(&mut self) -> Result<bool, Error<B::Error>> {
        self.probe_with(PROBE_SENTINEL)
    }

    /// Round-trip an arbitrary `sentinel` through the scratch-pad register
    pub fn probe_with(&mut self, sentinel: u8) -> Result<bool, Error<B::Error>> {
        self.transport.write_register(Register::Spr, sentinel)?;
        let echoed = self.transport.read_register(Register::Spr)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "sc16is750@{=u8:#x}: scratch wrote {=u8:#x}, read {=u8:#x}",
            self.bus_address(),
            sentinel,
            echoed
        );

        Ok(echoed == sentinel)
    }

    /// Like [`probe`](Self::probe), but a mismatch is `DeviceNotPresent`
    pub fn ensure_present(&mut self) -> Result<(), Error<B::Error>> {
        if self.probe()? {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("sc16is750@{=u8:#x}: not present", self.bus_address());
            Err(Error::DeviceNotPresent)
        }
    }
}
