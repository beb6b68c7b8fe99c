//! # Driver Configuration
//!
//! Settings shared by the platform drivers. A configuration is read from a JSON
//! file (every field optional) and then overridden from the environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `ITEAD_GPIO_BOARD` | `board` |
//! | `ITEAD_GPIO_SYSFS_ROOT` | `sysfs_root` |
//! | `ITEAD_GPIO_PWM_ROOT` | `pwm_root` |
//! | `ITEAD_GPIO_BASE` | `gpio_base` |
//!
//! ```json
//! { "board": "raspberry-rv2", "gpio_base": 512, "pwm_period_ns": 2000000 }
//! ```

use crate::board::Board;
use crate::constants::{
    DEFAULT_PWM_FREQUENCY_HZ, DEFAULT_PWM_PERIOD_NS, DEFAULT_SYSFS_GPIO_ROOT,
    DEFAULT_SYSFS_PWM_ROOT,
};
use crate::error::GpioError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the GPIO drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Board whose pin table is used
    pub board: Board,
    /// sysfs GPIO class directory
    pub sysfs_root: PathBuf,
    /// sysfs PWM chip directory
    pub pwm_root: PathBuf,
    /// Offset added to SoC line numbers (gpiochip base)
    pub gpio_base: u32,
    /// Hardware PWM period (sysfs driver)
    pub pwm_period_ns: u32,
    /// Software PWM frequency (rppal driver)
    pub pwm_frequency_hz: f64,
    /// Enforce pin mode preconditions in drivers that support it
    pub strict: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            board: Board::ACTIVE,
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_GPIO_ROOT),
            pwm_root: PathBuf::from(DEFAULT_SYSFS_PWM_ROOT),
            gpio_base: 0,
            pwm_period_ns: DEFAULT_PWM_PERIOD_NS,
            pwm_frequency_hz: DEFAULT_PWM_FREQUENCY_HZ,
            strict: false,
        }
    }
}

impl DriverConfig {
    /// Load a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GpioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: DriverConfig = serde_json::from_str(&text)
            .map_err(|e| GpioError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        log::debug!("Loaded driver configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `ITEAD_GPIO_*` overrides from the process environment.
    pub fn with_env(self) -> Result<Self, GpioError> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn with_vars<F>(mut self, var: F) -> Result<Self, GpioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(board) = var("ITEAD_GPIO_BOARD") {
            self.board = board.parse()?;
        }
        if let Some(root) = var("ITEAD_GPIO_SYSFS_ROOT") {
            self.sysfs_root = PathBuf::from(root);
        }
        if let Some(root) = var("ITEAD_GPIO_PWM_ROOT") {
            self.pwm_root = PathBuf::from(root);
        }
        if let Some(base) = var("ITEAD_GPIO_BASE") {
            self.gpio_base = base
                .trim()
                .parse()
                .map_err(|_| GpioError::Config(format!("ITEAD_GPIO_BASE is not a number: {base}")))?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), GpioError> {
        if self.pwm_period_ns == 0 {
            return Err(GpioError::Config("pwm_period_ns must be > 0".to_string()));
        }
        if self.pwm_frequency_hz.is_nan() || self.pwm_frequency_hz <= 0.0 {
            return Err(GpioError::Config(format!(
                "pwm_frequency_hz must be > 0, got {}",
                self.pwm_frequency_hz
            )));
        }
        let top = self.board.pins().iter().map(|pin| pin.line).max().unwrap_or(0);
        // sysfs GPIO numbers are kernel `int`s
        if self
            .gpio_base
            .checked_add(top)
            .map_or(true, |line| line > i32::MAX as u32)
        {
            return Err(GpioError::Config(format!(
                "gpio_base {} puts line {top} of {} out of range",
                self.gpio_base, self.board
            )));
        }
        Ok(())
    }
}
