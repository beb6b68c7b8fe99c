//! # itead-gpio - Arduino-style GPIO for Iteaduino Plus and Raspberry Pi Rv2
//!
//! The itead-gpio crate provides the Arduino GPIO API (`pinMode`, `digitalWrite`,
//! `digitalRead`, `analogWrite` and the 8/16-bit bus helpers) together with the
//! symbolic pin tables of two boards.
//!
//! ## Features
//!
//! - Pin name constants for the active board, selected with a Cargo feature
//!   (`board-iteaduino-plus` by default, or `board-raspberry-rv2`)
//! - A [`GpioDriver`] trait that every platform driver implements
//! - 8-line and 16-line buses read and written as a single value
//! - Linux sysfs driver, Raspberry Pi `rppal` driver (feature `raspberry-pi`)
//!   and an in-memory mock driver
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! itead-gpio = { version = "1.0", default-features = false, features = ["board-raspberry-rv2"] }
//! ```
//!
//! ```rust,no_run
//! use itead_gpio::{board::Board, GpioDriver, Level, PinMode, SysfsGpio};
//!
//! let mut gpio = SysfsGpio::new(Board::ACTIVE);
//! let led = Board::ACTIVE.pins()[0].id;
//! gpio.pin_mode(led, PinMode::Output)?;
//! gpio.digital_write(led, Level::High)?;
//! # Ok::<(), itead_gpio::GpioError>(())
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod gpio;
pub mod logging;

pub use crate::board::{Board, PinDef};
pub use crate::config::DriverConfig;
pub use crate::constants::{PinId, HIGH, INPUT, LOW, OUTPUT};
pub use crate::error::GpioError;
pub use crate::gpio::mock::MockGpio;
pub use crate::gpio::sysfs::SysfsGpio;
pub use crate::gpio::{Bus, Bus16, Bus8, GpioDriver, Level, PinMode};
pub use crate::logging::{init_logger, log_info};

#[cfg(feature = "raspberry-pi")]
pub use crate::gpio::raspberry_pi::RppalGpio;

// Pin names of the board selected at build time
#[cfg(feature = "board-iteaduino-plus")]
pub use crate::board::iteaduino_plus::*;

#[cfg(all(feature = "board-raspberry-rv2", not(feature = "board-iteaduino-plus")))]
pub use crate::board::raspberry_rv2::*;
