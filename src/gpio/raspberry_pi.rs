//! # Raspberry Pi GPIO Driver
//!
//! Memory-mapped GPIO for the Raspberry Pi Rv2 board using the `rppal` crate.
//! Board pin identifiers are header pin numbers; they are translated to BCM
//! lines through the board table before reaching `rppal`.
//!
//! ```text
//! Header pin │ BCM GPIO │ Name
//! ───────────┼──────────┼────────
//! 3          │ GPIO 2   │ GPIO2
//! 12         │ GPIO 18  │ GPIO18
//! 29 (P5)    │ GPIO 28  │ GPIO28
//! ```
//!
//! `analog_write` uses rppal software PWM on any pin, at the configured
//! frequency. `pin_mode` and `digital_write` stop a running PWM first.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use itead_gpio::board::raspberry_rv2::GPIO17;
//! use itead_gpio::config::DriverConfig;
//! use itead_gpio::gpio::{raspberry_pi::RppalGpio, GpioDriver, Level, PinMode};
//!
//! let mut gpio = RppalGpio::new(&DriverConfig::default())?;
//! gpio.pin_mode(GPIO17, PinMode::Output)?;
//! gpio.digital_write(GPIO17, Level::High)?;
//! # Ok::<(), itead_gpio::GpioError>(())
//! ```

use super::{GpioDriver, Level, PinMode};
use crate::board::Board;
use crate::config::DriverConfig;
use crate::constants::{PinId, DUTY_MAX};
use crate::error::GpioError;
use rppal::gpio::{Gpio, IoPin, Level as RpiLevel, Mode};
use std::collections::HashMap;

/// GPIO driver for the Raspberry Pi Rv2 header
pub struct RppalGpio {
    gpio: Gpio,
    pins: HashMap<PinId, IoPin>,
    pwm_frequency_hz: f64,
}

impl RppalGpio {
    /// Open the GPIO peripheral. The configured board must be `raspberry-rv2`.
    pub fn new(config: &DriverConfig) -> Result<Self, GpioError> {
        if config.board != Board::RaspberryRv2 {
            return Err(GpioError::Config(format!(
                "rppal driver needs board raspberry-rv2, configured {}",
                config.board
            )));
        }
        config.validate()?;
        let gpio = Gpio::new()?;
        log::info!(
            "Raspberry Pi GPIO initialized, software PWM at {} Hz",
            config.pwm_frequency_hz
        );
        Ok(Self {
            gpio,
            pins: HashMap::new(),
            pwm_frequency_hz: config.pwm_frequency_hz,
        })
    }

    fn bcm(pin: PinId) -> Result<u8, GpioError> {
        let line = Board::RaspberryRv2.line(pin)?;
        u8::try_from(line).map_err(|_| GpioError::UnknownPin(pin))
    }

    /// Claimed pin, switched to `mode` when it is first taken.
    fn io(&mut self, pin: PinId, mode: Mode) -> Result<&mut IoPin, GpioError> {
        if !self.pins.contains_key(&pin) {
            let bcm = Self::bcm(pin)?;
            let io = self.gpio.get(bcm)?.into_io(mode);
            log::debug!("Claimed GPIO {bcm} (header pin {pin})");
            self.pins.insert(pin, io);
        }
        self.pins.get_mut(&pin).ok_or(GpioError::UnknownPin(pin))
    }
}

impl GpioDriver for RppalGpio {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), GpioError> {
        let mode = match mode {
            PinMode::Input => Mode::Input,
            PinMode::Output => Mode::Output,
        };
        let io = self.io(pin, mode)?;
        io.clear_pwm()?;
        io.set_mode(mode);
        Ok(())
    }

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), GpioError> {
        let io = self.io(pin, Mode::Output)?;
        io.clear_pwm()?;
        io.write(match level {
            Level::Low => RpiLevel::Low,
            Level::High => RpiLevel::High,
        });
        Ok(())
    }

    fn digital_read(&mut self, pin: PinId) -> Result<Level, GpioError> {
        let io = self.io(pin, Mode::Input)?;
        Ok(Level::from(io.read() == RpiLevel::High))
    }

    fn analog_write(&mut self, pin: PinId, duty: u8) -> Result<(), GpioError> {
        let frequency = self.pwm_frequency_hz;
        let io = self.io(pin, Mode::Output)?;
        io.set_mode(Mode::Output);
        match duty {
            0 => {
                io.clear_pwm()?;
                io.write(RpiLevel::Low);
            }
            DUTY_MAX => {
                io.clear_pwm()?;
                io.write(RpiLevel::High);
            }
            _ => {
                let fraction = f64::from(duty) / f64::from(DUTY_MAX);
                io.set_pwm_frequency(frequency, fraction)?;
            }
        }
        log::trace!("Pin {pin} duty {duty}/255");
        Ok(())
    }
}
