//! SC16IS750 register map
//!
//! The chip exposes 16 logical 8-bit registers. On the wire the register
//! index occupies bits 6:3 of the sub-address byte; bits 2:1 select the
//! UART channel and are always zero on this single-channel part.

/// Depth of both the transmit and receive FIFOs
pub const FIFO_DEPTH: u8 = 64;

/// Logical register index
///
/// Several indices are shared between registers; which one is reached
/// depends on the direction of access or on the current LCR mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Receive holding (read) / transmit holding (write)
    RhrThr = 0x00,
    /// Interrupt enable
    Ier = 0x01,
    /// FIFO control (write) / interrupt identification (read)
    FcrIir = 0x02,
    /// Line control
    Lcr = 0x03,
    /// Modem control
    Mcr = 0x04,
    /// Line status
    Lsr = 0x05,
    /// Modem status
    Msr = 0x06,
    /// Scratch pad
    Spr = 0x07,
    /// Transmit FIFO free space
    TxLvl = 0x08,
    /// Receive FIFO fill level
    RxLvl = 0x09,
    /// GPIO direction, 1 = output
    IoDir = 0x0A,
    /// GPIO state: write drives outputs, read samples every pin
    IoState = 0x0B,
    /// GPIO input-change interrupt enable, 1 = enabled
    IoIntEna = 0x0C,
    /// GPIO control
    IoControl = 0x0E,
    /// Extra features control
    Efcr = 0x0F,
}

impl Register {
    /// Divisor latch low byte (LCR\[7\] = 1)
    pub const DLL: Self = Self::RhrThr;
    /// Divisor latch high byte (LCR\[7\] = 1)
    pub const DLM: Self = Self::Ier;
    /// Enhanced features register (LCR = 0xBF)
    pub const EFR: Self = Self::FcrIir;

    /// Every addressable register, in index order
    pub const ALL: [Self; 15] = [
        Self::RhrThr,
        Self::Ier,
        Self::FcrIir,
        Self::Lcr,
        Self::Mcr,
        Self::Lsr,
        Self::Msr,
        Self::Spr,
        Self::TxLvl,
        Self::RxLvl,
        Self::IoDir,
        Self::IoState,
        Self::IoIntEna,
        Self::IoControl,
        Self::Efcr,
    ];

    /// Logical index (0-15)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sub-address byte sent on the bus
    pub const fn address(self) -> u8 {
        encode_address(self as u8)
    }
}

/// Encode a logical register index into the sub-address byte
///
/// Only the low four bits of `index` are used; channel bits stay zero.
pub const fn encode_address(index: u8) -> u8 {
    (index & 0x0F) << 3
}

/// Line control register values
pub mod lcr {
    /// Divisor latch enable (DLL/DLM visible at indices 0/1)
    pub const DIVISOR_LATCH: u8 = 0x80;
    /// Magic value that exposes the enhanced register set (EFR)
    pub const ENHANCED_ACCESS: u8 = 0xBF;

    /// Word length field, bits 1:0
    pub const WORD_LENGTH_5: u8 = 0x00;
    pub const WORD_LENGTH_6: u8 = 0x01;
    pub const WORD_LENGTH_7: u8 = 0x02;
    pub const WORD_LENGTH_8: u8 = 0x03;
    /// Two stop bits (1.5 for 5-bit words)
    pub const STOP_BITS_2: u8 = 0x04;
    /// Parity field, bits 5:3
    pub const PARITY_ODD: u8 = 0x08;
    pub const PARITY_EVEN: u8 = 0x18;
    pub const PARITY_MARK: u8 = 0x28;
    pub const PARITY_SPACE: u8 = 0x38;
}

/// Enhanced features register values
pub mod efr {
    /// Enables IER\[7:4\], FCR\[5:4\] and MCR\[7:5\]
    pub const ENHANCED_FUNCTIONS: u8 = 0x10;
}

/// FIFO control register values
pub mod fcr {
    pub const FIFO_ENABLE: u8 = 0x01;
    pub const RX_FIFO_RESET: u8 = 0x02;
    pub const TX_FIFO_RESET: u8 = 0x04;
}

/// Line status register bits
pub mod lsr {
    pub const DATA_READY: u8 = 0x01;
    pub const OVERRUN: u8 = 0x02;
    pub const PARITY_ERROR: u8 = 0x04;
    pub const FRAMING_ERROR: u8 = 0x08;
    pub const BREAK: u8 = 0x10;
    pub const THR_EMPTY: u8 = 0x20;
    pub const TX_EMPTY: u8 = 0x40;
    pub const FIFO_ERROR: u8 = 0x80;
}
