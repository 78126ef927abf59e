//! Mock I2C bus emulating the SC16IS750 register file (tests only)

use std::collections::VecDeque;
use std::vec::Vec;

use sc16is750_hal::I2cBus;

use crate::reg::Register;

/// Address the mock chip answers on
pub(crate) const MOCK_ADDRESS: u8 = 0x4D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MockError {
    /// No acknowledge from the addressed device
    Nack,
}

/// One recorded register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Write {
    pub device: u8,
    pub address: u8,
    pub value: u8,
}

pub(crate) struct MockBus {
    /// Only this 7-bit address acknowledges
    pub present: u8,
    /// Backing store: writes land here, reads come from here
    pub regs: [u8; 16],
    pub writes: Vec<Write>,
    /// Sub-addresses of every register read, in order
    pub reads: Vec<u8>,
    /// Scripted TXLVL values; `regs` is used once exhausted
    pub tx_levels: VecDeque<u8>,
    /// When set, RXLVL reports its length and RHR pops from it
    pub rx_fifo: Option<VecDeque<u8>>,
    /// Value sampled from the pins on an IOSTATE read
    pub pin_inputs: u8,
    /// Scratch register that ignores writes
    pub stuck_scratch: Option<u8>,
    /// Fail the transaction with this 0-based sequence number
    pub fail_at: Option<usize>,
    transactions: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            present: MOCK_ADDRESS,
            regs: [0; 16],
            writes: Vec::new(),
            reads: Vec::new(),
            tx_levels: VecDeque::new(),
            rx_fifo: None,
            pin_inputs: 0,
            stuck_scratch: None,
            fail_at: None,
            transactions: 0,
        }
    }

    /// Bytes written to THR, in order
    pub fn transmitted(&self) -> Vec<u8> {
        self.writes_to(Register::RhrThr)
    }

    /// Values written to one register, in order
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|w| w.address == reg.address())
            .map(|w| w.value)
            .collect()
    }

    fn begin(&mut self, address: u8) -> Result<(), MockError> {
        let seq = self.transactions;
        self.transactions += 1;
        if address != self.present || self.fail_at == Some(seq) {
            return Err(MockError::Nack);
        }
        Ok(())
    }

    fn index(sub_address: u8) -> Result<usize, MockError> {
        // Channel bits must stay clear on a single-channel part
        if sub_address & 0x87 != 0 {
            return Err(MockError::Nack);
        }
        Ok((sub_address >> 3) as usize)
    }

    fn load(&mut self, index: usize) -> u8 {
        match index {
            0 => match self.rx_fifo.as_mut() {
                Some(fifo) => fifo.pop_front().unwrap_or(self.regs[0]),
                None => self.regs[0],
            },
            7 => self.stuck_scratch.unwrap_or(self.regs[7]),
            8 => self.tx_levels.pop_front().unwrap_or(self.regs[8]),
            9 => match self.rx_fifo.as_ref() {
                Some(fifo) => fifo.len().min(64) as u8,
                None => self.regs[9],
            },
            11 => self.pin_inputs,
            _ => self.regs[index],
        }
    }
}

impl I2cBus for MockBus {
    type Error = MockError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.begin(address)?;
        let [sub, value] = data else {
            return Err(MockError::Nack);
        };
        let index = Self::index(*sub)?;
        self.regs[index] = *value;
        self.writes.push(Write {
            device: address,
            address: *sub,
            value: *value,
        });
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.begin(address)?;
        buf.fill(0);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.begin(address)?;
        let [sub] = write_data else {
            return Err(MockError::Nack);
        };
        if read_buf.is_empty() {
            return Err(MockError::Nack);
        }
        let index = Self::index(*sub)?;
        self.reads.push(*sub);
        let value = self.load(index);
        read_buf[0] = value;
        Ok(())
    }
}
