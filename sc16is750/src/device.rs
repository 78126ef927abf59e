//! Device handle
//!
//! One [`Device`] per physical chip. It owns the bus handle and the GPIO
//! shadow registers, so every read-modify-write goes through a single
//! `&mut self` owner. Sharing a chip between execution contexts needs an
//! external lock held across whole operation sequences, not just single
//! register accesses.

use sc16is750_hal::I2cBus;

use crate::config::DeviceConfig;
use crate::gpio::PinShadow;
use crate::transport::RegisterTransport;

/// SC16IS750 bridge (single UART channel + 8-bit GPIO bank)
///
/// Nothing is assumed about chip state at construction: the chip resets to
/// defaults on power loss, so callers probe and configure on every cold
/// start.
pub struct Device<B> {
    pub(crate) transport: RegisterTransport<B>,
    pub(crate) pins: PinShadow,
    pub(crate) config: DeviceConfig,
}

impl<B: I2cBus> Device<B> {
    /// Bind to the chip at 7-bit bus `address` with default configuration
    pub fn new(bus: B, address: u8) -> Self {
        Self::with_config(bus, address, DeviceConfig::default())
    }

    /// Bind to the chip at 7-bit bus `address`
    pub fn with_config(bus: B, address: u8, config: DeviceConfig) -> Self {
        Self {
            transport: RegisterTransport::new(bus, address),
            pins: PinShadow::new(),
            config,
        }
    }

    /// 7-bit bus address
    pub fn bus_address(&self) -> u8 {
        self.transport.address()
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Direct register access, for registers the driver does not wrap
    pub fn transport(&mut self) -> &mut RegisterTransport<B> {
        &mut self.transport
    }

    /// Destroy the driver and return the bus
    pub fn release(self) -> B {
        self.transport.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TxTimeout, DEFAULT_CRYSTAL_HZ};
    use crate::mock::{MockBus, MOCK_ADDRESS};

    #[test]
    fn test_new_device_state() {
        let dev = Device::new(MockBus::new(), MOCK_ADDRESS);
        assert_eq!(dev.bus_address(), 0x4D);
        assert_eq!(dev.pin_direction(), None);
        assert_eq!(dev.output_shadow(), 0);
        assert_eq!(dev.input_shadow(), 0);
        assert_eq!(dev.config().crystal_hz, DEFAULT_CRYSTAL_HZ);
    }

    #[test]
    fn test_construction_issues_no_bus_traffic() {
        let dev = Device::with_config(
            MockBus::new(),
            MOCK_ADDRESS,
            DeviceConfig {
                crystal_hz: 12_288_000,
                tx_timeout: TxTimeout::polls(3),
            },
        );
        let bus = dev.release();
        assert!(bus.writes.is_empty());
        assert!(bus.reads.is_empty());
    }

    #[test]
    fn test_bring_up_scenario() {
        use crate::error::{Error, PinDirection};
        use crate::reg::Register;

        let mut dev = Device::new(MockBus::new(), 0x4D);

        // Scratch echoes 'H'
        assert_eq!(dev.probe(), Ok(true));
        dev.configure_pins(0b0000_0001).unwrap();

        dev.write_pin(0, true).unwrap();
        dev.write_pin(0, false).unwrap();

        dev.transport.bus_mut().pin_inputs = 0b0000_0010;
        assert_eq!(dev.read_pin(1), Ok(true));
        dev.transport.bus_mut().pin_inputs = 0b1111_1101;
        assert_eq!(dev.read_pin(1), Ok(false));

        assert_eq!(
            dev.write_pin(1, true),
            Err(Error::InvalidPinDirection {
                pin: 1,
                direction: PinDirection::Input
            })
        );

        let bus = dev.release();
        assert!(bus.writes.iter().all(|w| w.device == 0x4D));
        assert_eq!(bus.writes_to(Register::Spr), [b'H']);
        assert_eq!(bus.writes_to(Register::IoState), [0x01, 0x00]);
        assert_eq!(
            bus.reads
                .iter()
                .filter(|&&r| r == Register::IoState.address())
                .count(),
            2
        );
    }

    #[test]
    fn test_uart_and_gpio_together() {
        use sc16is750_hal::UartConfig;

        let mut dev = Device::with_config(
            MockBus::new(),
            MOCK_ADDRESS,
            DeviceConfig {
                crystal_hz: 12_288_000,
                tx_timeout: TxTimeout::polls(8),
            },
        );
        dev.ensure_present().unwrap();
        assert_eq!(dev.configure_uart(&UartConfig::BAUD_9600_8N1), Ok(80));
        dev.configure_pins(0xF0).unwrap();

        // DLL shares THR's address; drop the configuration writes
        dev.transport.bus_mut().writes.clear();
        dev.transport.bus_mut().regs[8] = 64;
        dev.write_all(b"ping").unwrap();
        dev.write_pin(7, true).unwrap();
        assert_eq!(dev.output_shadow(), 0x80);

        let bus = dev.release();
        assert_eq!(bus.transmitted(), b"ping");
    }
}
