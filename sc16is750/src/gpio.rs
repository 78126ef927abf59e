//! GPIO bank
//!
//! IOSTATE is asymmetric: a write drives the output latches, a read samples
//! the level of every pin. The driven value can never be read back, so the
//! driver keeps it in an in-memory shadow and always writes the whole byte.
//!
//! Bits of the output shadow that belong to input pins are held at zero
//! and never toggled by pin writes.

use sc16is750_hal::I2cBus;

use crate::device::Device;
use crate::error::{ConfigStep, Error, PinDirection};
use crate::reg::Register;

/// Number of GPIO pins on the bank
pub const PIN_COUNT: u8 = 8;

/// IOCONTROL default: no latching, GPIO function on all pins
const IOCONTROL_DEFAULT: u8 = 0x00;
/// IOINTENA: no pin raises an input-change interrupt
const IOINTENA_NONE: u8 = 0x00;

/// Shadow copies of the GPIO registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinShadow {
    /// Direction mask (1 = output); `None` until configured
    direction: Option<u8>,
    /// Last intended state of the output pins
    output: u8,
    /// Last sampled state of all pins
    input: u8,
}

impl PinShadow {
    pub(crate) const fn new() -> Self {
        Self {
            direction: None,
            output: 0,
            input: 0,
        }
    }

    fn check<E>(&self, pin: u8, want: PinDirection) -> Result<(), Error<E>> {
        if pin >= PIN_COUNT {
            return Err(Error::InvalidPin(pin));
        }
        let direction = self.direction.ok_or(Error::PinsNotConfigured)?;
        let actual = if (direction >> pin) & 0x01 == 1 {
            PinDirection::Output
        } else {
            PinDirection::Input
        };
        if actual != want {
            return Err(Error::InvalidPinDirection {
                pin,
                direction: actual,
            });
        }
        Ok(())
    }
}

impl<B: I2cBus> Device<B> {
    /// Configure pin directions (bit set = output)
    ///
    /// Also resets IOCONTROL and disables every input-change interrupt.
    /// Output shadow bits of pins that are now inputs are cleared; the output
    /// pins keep their shadow state but it is not written until the next
    /// `write_pin`.
    ///
    /// A bus failure after the first write leaves the bank partially
    /// programmed and is reported as `ConfigurationIncomplete`; the previous
    /// direction mask is kept and the sequence must be run again.
    pub fn configure_pins(&mut self, direction_mask: u8) -> Result<(), Error<B::Error>> {
        let sequence = [
            (ConfigStep::IoDirection, Register::IoDir, direction_mask),
            (ConfigStep::IoControl, Register::IoControl, IOCONTROL_DEFAULT),
            (ConfigStep::IoInterrupt, Register::IoIntEna, IOINTENA_NONE),
        ];

        for (step, reg, value) in sequence {
            if let Err(source) = self.transport.write_register(reg, value) {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "sc16is750@{=u8:#x}: GPIO configuration aborted at {}",
                    self.bus_address(),
                    step
                );
                return Err(Error::ConfigurationIncomplete { step, source });
            }
        }

        self.pins.direction = Some(direction_mask);
        self.pins.output &= direction_mask;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "sc16is750@{=u8:#x}: IODIR = {=u8:#b}",
            self.bus_address(),
            direction_mask
        );

        Ok(())
    }

    /// Drive an output pin
    ///
    /// The whole output shadow is written to IOSTATE. Input pins are
    /// rejected before any bus traffic. If the write fails the shadow still
    /// holds the intended value, so the next successful write applies it.
    pub fn write_pin(&mut self, pin: u8, high: bool) -> Result<(), Error<B::Error>> {
        self.pins.check::<B::Error>(pin, PinDirection::Output)?;

        if high {
            self.pins.output |= 1 << pin;
        } else {
            self.pins.output &= !(1 << pin);
        }

        self.transport
            .write_register(Register::IoState, self.pins.output)?;
        Ok(())
    }

    /// Sample an input pin
    ///
    /// Reads all of IOSTATE into the input shadow and returns bit `pin`.
    /// The direction test isolates bit `pin` of the direction mask; an
    /// unmasked shift would also reject inputs below any output pin.
    pub fn read_pin(&mut self, pin: u8) -> Result<bool, Error<B::Error>> {
        self.pins.check::<B::Error>(pin, PinDirection::Input)?;
        let state = self.read_pins()?;
        Ok((state >> pin) & 0x01 == 1)
    }

    /// Sample every pin at once, regardless of direction
    pub fn read_pins(&mut self) -> Result<u8, Error<B::Error>> {
        let state = self.transport.read_register(Register::IoState)?;
        self.pins.input = state;
        Ok(state)
    }

    /// Direction mask, or `None` before `configure_pins`
    pub fn pin_direction(&self) -> Option<u8> {
        self.pins.direction
    }

    /// Last intended output state
    pub fn output_shadow(&self) -> u8 {
        self.pins.output
    }

    /// Last sampled pin state
    pub fn input_shadow(&self) -> u8 {
        self.pins.input
    }
}
