//! SC16IS750 bus abstraction layer
//!
//! This crate defines the traits and configuration types the bridge driver
//! is written against, so the same driver runs on any host MCU HAL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Host application                       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sc16is750 (register-level driver)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sc16is750-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 I2C master        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations (blanket-implemented for
//!   every `embedded_hal::i2c::I2c`)
//! - [`uart::UartTx`], [`uart::UartRx`] - Blocking serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use i2c::I2cBus;
pub use uart::{DataBits, Parity, StopBits, UartConfig, UartRx, UartTx};
