//! UART channel
//!
//! Polling-only: every interrupt source is disabled at configuration and
//! flow control is done by reading the FIFO level registers.
//!
//! # Configuration sequence
//!
//! ```text
//! LCR  <- 0x80          divisor latch enable
//! DLL  <- divisor[7:0]
//! DLM  <- divisor[15:8]
//! LCR  <- 0xBF          enhanced register access
//! EFR  <- 0x10          enhanced functions enable
//! LCR  <- frame format  (also leaves divisor latch mode)
//! IER  <- 0x00          no interrupts
//! FCR  <- 0x07          FIFO enable + RX/TX FIFO reset
//! ```
//!
//! A bus failure anywhere in the sequence leaves the chip partially
//! programmed. There is no rollback; configure again from the start.

use heapless::Vec;
use sc16is750_hal::{I2cBus, UartConfig};

use crate::config::{divisor, line_control};
use crate::device::Device;
use crate::error::{ConfigStep, Error};
use crate::reg::{efr, fcr, lcr, lsr, Register, FIFO_DEPTH};

/// Decoded line status register
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineStatus {
    /// At least one byte in the RX FIFO
    pub data_ready: bool,
    /// RX FIFO overrun
    pub overrun: bool,
    /// Parity error on the byte at the top of the RX FIFO
    pub parity_error: bool,
    /// Framing error on the byte at the top of the RX FIFO
    pub framing_error: bool,
    /// Break condition received
    pub break_interrupt: bool,
    /// THR (and TX FIFO) empty
    pub thr_empty: bool,
    /// THR and transmit shift register both empty
    pub tx_empty: bool,
    /// At least one error in the RX FIFO
    pub fifo_error: bool,
}

impl LineStatus {
    /// Parse from raw LSR value
    pub fn from_register(value: u8) -> Self {
        Self {
            data_ready: value & lsr::DATA_READY != 0,
            overrun: value & lsr::OVERRUN != 0,
            parity_error: value & lsr::PARITY_ERROR != 0,
            framing_error: value & lsr::FRAMING_ERROR != 0,
            break_interrupt: value & lsr::BREAK != 0,
            thr_empty: value & lsr::THR_EMPTY != 0,
            tx_empty: value & lsr::TX_EMPTY != 0,
            fifo_error: value & lsr::FIFO_ERROR != 0,
        }
    }

    /// Check if any receive error is flagged
    pub fn has_error(&self) -> bool {
        self.overrun || self.parity_error || self.framing_error || self.fifo_error
    }
}

impl<B: I2cBus> Device<B> {
    /// Program baud rate, frame format and FIFOs
    ///
    /// Uses the crystal frequency from [`DeviceConfig`](crate::DeviceConfig).
    /// Returns the divisor written to DLL/DLM.
    pub fn configure_uart(&mut self, config: &UartConfig) -> Result<u16, Error<B::Error>> {
        let divisor =
            divisor(self.config.crystal_hz, config.baudrate).ok_or(Error::InvalidBaudRate)?;
        let [div_low, div_high] = divisor.to_le_bytes();

        let sequence = [
            (ConfigStep::DivisorLatch, Register::Lcr, lcr::DIVISOR_LATCH),
            (ConfigStep::DivisorLow, Register::DLL, div_low),
            (ConfigStep::DivisorHigh, Register::DLM, div_high),
            (ConfigStep::EnhancedAccess, Register::Lcr, lcr::ENHANCED_ACCESS),
            (
                ConfigStep::EnhancedFeatures,
                Register::EFR,
                efr::ENHANCED_FUNCTIONS,
            ),
            (ConfigStep::LineControl, Register::Lcr, line_control(config)),
            (ConfigStep::InterruptEnable, Register::Ier, 0x00),
            (
                ConfigStep::FifoControl,
                Register::FcrIir,
                fcr::FIFO_ENABLE | fcr::RX_FIFO_RESET | fcr::TX_FIFO_RESET,
            ),
        ];

        for (step, reg, value) in sequence {
            if let Err(source) = self.transport.write_register(reg, value) {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "sc16is750@{=u8:#x}: UART configuration aborted at {}",
                    self.bus_address(),
                    step
                );
                return Err(Error::ConfigurationIncomplete { step, source });
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "sc16is750@{=u8:#x}: UART {} baud, divisor {}",
            self.bus_address(),
            config.baudrate,
            divisor
        );

        Ok(divisor)
    }

    /// Bytes waiting in the RX FIFO (0-64)
    pub fn available(&mut self) -> Result<u8, Error<B::Error>> {
        let level = self.transport.read_register(Register::RxLvl)?;
        Ok(level.min(FIFO_DEPTH))
    }

    /// Free space in the TX FIFO (0-64)
    pub fn transmit_space(&mut self) -> Result<u8, Error<B::Error>> {
        let level = self.transport.read_register(Register::TxLvl)?;
        Ok(level.min(FIFO_DEPTH))
    }

    /// Read and decode LSR
    pub fn line_status(&mut self) -> Result<LineStatus, Error<B::Error>> {
        let value = self.transport.read_register(Register::Lsr)?;
        Ok(LineStatus::from_register(value))
    }

    /// Queue one byte for transmission
    ///
    /// Polls TXLVL until there is room, up to the configured
    /// [`TxTimeout`](crate::TxTimeout). On `Timeout` nothing was written.
    pub fn write(&mut self, byte: u8) -> Result<(), Error<B::Error>> {
        self.wait_for_tx_space()?;
        self.transport.write_register(Register::RhrThr, byte)?;
        Ok(())
    }

    /// Queue a byte slice, one flow-controlled byte at a time
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), Error<B::Error>> {
        for &byte in data {
            self.write(byte)?;
        }
        Ok(())
    }

    /// Read one byte from RHR
    ///
    /// Does not check the FIFO level: with nothing received the byte is
    /// stale. Confirm `available() > 0` first.
    pub fn read(&mut self) -> Result<u8, Error<B::Error>> {
        let byte = self.transport.read_register(Register::RhrThr)?;
        Ok(byte)
    }

    /// Drain everything currently in the RX FIFO
    pub fn read_available(&mut self) -> Result<Vec<u8, 64>, Error<B::Error>> {
        let mut buf = Vec::new();
        let count = self.available()?;
        for _ in 0..count {
            let byte = self.read()?;
            // count <= FIFO_DEPTH == capacity
            let _ = buf.push(byte);
        }
        Ok(buf)
    }

    /// Poll TXLVL until non-zero; returns the free space seen
    pub(crate) fn wait_for_tx_space(&mut self) -> Result<u8, Error<B::Error>> {
        for _ in 0..self.config.tx_timeout.budget() {
            let space = self.transmit_space()?;
            if space > 0 {
                return Ok(space);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "sc16is750@{=u8:#x}: TX FIFO full after {} polls",
            self.bus_address(),
            self.config.tx_timeout.budget()
        );

        Err(Error::Timeout)
    }

    /// Poll RXLVL until non-zero; returns the level seen
    pub(crate) fn wait_for_rx_data(&mut self) -> Result<u8, Error<B::Error>> {
        for _ in 0..self.config.tx_timeout.budget() {
            let level = self.available()?;
            if level > 0 {
                return Ok(level);
            }
        }
        Err(Error::Timeout)
    }

    /// Poll LSR until the transmitter is completely idle
    pub(crate) fn wait_for_tx_empty(&mut self) -> Result<(), Error<B::Error>> {
        for _ in 0..self.config.tx_timeout.budget() {
            if self.line_status()?.tx_empty {
                return Ok(());
            }
        }
        Err(Error::Timeout)
    }
}
