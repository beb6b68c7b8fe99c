//! # GPIO Driver Interface
//!
//! This module defines the Arduino-style driver trait and the typed pin mode and
//! logic level values, and provides the platform implementations:
//!
//! - [`mock::MockGpio`] - in-memory driver for tests and dry runs
//! - [`sysfs::SysfsGpio`] - Linux `/sys/class/gpio` + `/sys/class/pwm`
//! - `raspberry_pi::RppalGpio` - Raspberry Pi via `rppal` (feature `raspberry-pi`)
//!
//! ## Usage
//!
//! ```rust
//! use itead_gpio::board::{raspberry_rv2::*, Board};
//! use itead_gpio::gpio::{mock::MockGpio, Bus8, GpioDriver, Level, PinMode};
//!
//! let mut gpio = MockGpio::new(Board::RaspberryRv2);
//! gpio.pin_mode(GPIO17, PinMode::Output)?;
//! gpio.digital_write(GPIO17, Level::High)?;
//!
//! let mut bus = Bus8::default();
//! gpio.set_8bits_bus(
//!     &mut bus,
//!     [GPIO2, GPIO3, GPIO4, GPIO14, GPIO15, GPIO18, GPIO27, GPIO22],
//!     PinMode::Output,
//! )?;
//! gpio.digital_write8(&bus, 0xA5)?;
//! assert_eq!(gpio.level(GPIO2), Some(Level::High));
//! # Ok::<(), itead_gpio::GpioError>(())
//! ```

pub mod bus;
pub mod mock;
pub mod sysfs;

#[cfg(feature = "raspberry-pi")]
pub mod raspberry_pi;

use crate::constants::{PinId, HIGH, INPUT, LOW, OUTPUT};
use crate::error::GpioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use bus::{Bus, Bus16, Bus8};

/// Direction of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PinMode {
    Input = INPUT,
    Output = OUTPUT,
}

impl PinMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PinMode::Input => "input",
            PinMode::Output => "output",
        }
    }
}

impl TryFrom<u8> for PinMode {
    type Error = GpioError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            INPUT => Ok(PinMode::Input),
            OUTPUT => Ok(PinMode::Output),
            other => Err(GpioError::InvalidMode(other)),
        }
    }
}

impl FromStr for PinMode {
    type Err = GpioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" | "in" | "0" => Ok(PinMode::Input),
            "output" | "out" | "1" => Ok(PinMode::Output),
            other => Err(GpioError::Config(format!("unknown pin mode: {other}"))),
        }
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logic level of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Low = LOW,
    High = HIGH,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Level of bit `index` in `value`; bits past the word are `Low`.
    pub fn from_bit(value: u32, index: usize) -> Self {
        let bit = u32::try_from(index)
            .ok()
            .and_then(|index| value.checked_shr(index))
            .map_or(0, |shifted| shifted & 1);
        Level::from(bit == 1)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = GpioError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            LOW => Ok(Level::Low),
            HIGH => Ok(Level::High),
            other => Err(GpioError::InvalidLevel(other)),
        }
    }
}

impl FromStr for Level {
    type Err = GpioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "1" | "on" => Ok(Level::High),
            "low" | "0" | "off" => Ok(Level::Low),
            other => Err(GpioError::Config(format!("unknown logic level: {other}"))),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "low",
            Level::High => "high",
        })
    }
}

/// Arduino-style GPIO driver.
///
/// A platform implements the four scalar operations; the bus operations are
/// provided on top of them. Pin identifiers are those of the driver's board
/// table. Preconditions on pin mode (write after OUTPUT, read after INPUT) are a
/// caller contract; drivers may, but need not, enforce them.
pub trait GpioDriver {
    /// Configure a pin as input or output.
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), GpioError>;

    /// Drive an output pin high or low.
    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), GpioError>;

    /// Sample the level of an input pin.
    fn digital_read(&mut self, pin: PinId) -> Result<Level, GpioError>;

    /// Drive a duty-cycle output, `0` = always low, `255` = always high.
    fn analog_write(&mut self, pin: PinId, duty: u8) -> Result<(), GpioError>;

    /// Assign `DB0..DB7` to the bus lines `D0..D7` and set all of them to `mode`.
    fn set_8bits_bus(
        &mut self,
        bus: &mut Bus8,
        lines: [PinId; 8],
        mode: PinMode,
    ) -> Result<(), GpioError>
    where
        Self: Sized,
    {
        bus.configure(self, lines, mode)
    }

    /// Assign `DB0..DB15` to the bus lines `D0..D15` and set all of them to `mode`.
    fn set_16bits_bus(
        &mut self,
        bus: &mut Bus16,
        lines: [PinId; 16],
        mode: PinMode,
    ) -> Result<(), GpioError>
    where
        Self: Sized,
    {
        bus.configure(self, lines, mode)
    }

    /// Write bit `n` of `value` to line `Dn`.
    fn digital_write8(&mut self, bus: &Bus8, value: u8) -> Result<(), GpioError>
    where
        Self: Sized,
    {
        bus.write_word(self, u32::from(value))
    }

    /// Write bit `n` of `value` to line `Dn`.
    fn digital_write16(&mut self, bus: &Bus16, value: u16) -> Result<(), GpioError>
    where
        Self: Sized,
    {
        bus.write_word(self, u32::from(value))
    }

    /// Read line `Dn` into bit `n`.
    fn digital_read8(&mut self, bus: &Bus8) -> Result<u8, GpioError>
    where
        Self: Sized,
    {
        // Eight lines never set a bit above 7.
        bus.read_word(self).map(|word| word as u8)
    }

    /// Read line `Dn` into bit `n`.
    fn digital_read16(&mut self, bus: &Bus16) -> Result<u16, GpioError>
    where
        Self: Sized,
    {
        bus.read_word(self).map(|word| word as u16)
    }
}

impl<D: GpioDriver + ?Sized> GpioDriver for Box<D> {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), GpioError> {
        (**self).pin_mode(pin, mode)
    }

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), GpioError> {
        (**self).digital_write(pin, level)
    }

    fn digital_read(&mut self, pin: PinId) -> Result<Level, GpioError> {
        (**self).digital_read(pin)
    }

    fn analog_write(&mut self, pin: PinId, duty: u8) -> Result<(), GpioError> {
        (**self).analog_write(pin, duty)
    }
}
