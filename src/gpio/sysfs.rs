//! # Linux sysfs GPIO Driver
//!
//! Drives pins through the kernel's `/sys/class/gpio` interface and hardware PWM
//! through `/sys/class/pwm/pwmchipN`. Works on both supported boards as long as
//! the kernel exposes the legacy sysfs interface.
//!
//! ## Pin numbering
//!
//! The board pin identifier is translated to the SoC line from the board table
//! and offset by `gpio_base` (the gpiochip base, `0` on older kernels, often
//! `512` on recent ones):
//!
//! ```text
//! Board          │ Pin   │ Id  │ SoC line │ sysfs (base 0)
//! ───────────────┼───────┼─────┼──────────┼───────────────
//! Iteaduino Plus │ PD0   │ 9   │ 96       │ gpio96
//! Raspberry Rv2  │ GPIO18│ 12  │ 18       │ gpio18
//! ```
//!
//! ## PWM
//!
//! Pins with a PWM channel (see [`Board::pwm_channel`]) are driven by the
//! hardware PWM with `duty / 255` of the configured period. Other pins accept
//! only the extremes: duty `0` drives LOW and `255` drives HIGH.

use super::{GpioDriver, Level, PinMode};
use crate::board::Board;
use crate::config::DriverConfig;
use crate::constants::{PinId, DUTY_MAX};
use crate::error::GpioError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// GPIO driver on top of the Linux sysfs interface
#[derive(Debug)]
pub struct SysfsGpio {
    board: Board,
    root: PathBuf,
    pwm_root: PathBuf,
    gpio_base: u32,
    pwm_period_ns: u32,
    strict: bool,
    /// Lines this driver exported itself
    exported: HashSet<u32>,
    /// PWM channels this driver exported itself
    pwm_exported: HashSet<u32>,
    /// PWM channels this driver switched on
    pwm_enabled: HashSet<u32>,
}

impl SysfsGpio {
    /// Driver for `board` with the default kernel paths.
    pub fn new(board: Board) -> Self {
        Self::from_config(&DriverConfig {
            board,
            ..DriverConfig::default()
        })
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        log::info!(
            "sysfs GPIO driver for {}: {} (base {}), PWM {}",
            config.board,
            config.sysfs_root.display(),
            config.gpio_base,
            config.pwm_root.display()
        );
        Self {
            board: config.board,
            root: config.sysfs_root.clone(),
            pwm_root: config.pwm_root.clone(),
            gpio_base: config.gpio_base,
            pwm_period_ns: config.pwm_period_ns,
            strict: config.strict,
            exported: HashSet::new(),
            pwm_exported: HashSet::new(),
            pwm_enabled: HashSet::new(),
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Kernel GPIO number of a board pin.
    pub fn kernel_line(&self, pin: PinId) -> Result<u32, GpioError> {
        let line = self.board.line(pin)?;
        line.checked_add(self.gpio_base).ok_or_else(|| {
            GpioError::Config(format!(
                "gpio_base {} overflows kernel line of pin {pin}",
                self.gpio_base
            ))
        })
    }

    fn pin_dir(&self, line: u32) -> PathBuf {
        self.root.join(format!("gpio{line}"))
    }

    fn pwm_dir(&self, channel: u32) -> PathBuf {
        self.pwm_root.join(format!("pwm{channel}"))
    }

    /// Export `pin` to user space if it is not exported yet.
    ///
    /// Only lines exported here are handed back by [`SysfsGpio::release`];
    /// a line that was already present belongs to someone else.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn export(&mut self, pin: PinId) -> Result<PathBuf, GpioError> {
        let line = self.kernel_line(pin)?;
        let dir = self.pin_dir(line);
        if dir.is_dir() {
            return Ok(dir);
        }

        log::debug!("Exporting GPIO line {line} (pin {pin})");
        write_attr(&self.root.join("export"), &line.to_string())?;
        if !dir.is_dir() {
            return Err(GpioError::ExportFailed(line));
        }
        self.exported.insert(line);
        Ok(dir)
    }

    /// Hand every line and PWM channel exported by this driver back to the kernel.
    ///
    /// An entry is forgotten only once its `unexport` write succeeded, so a
    /// failed release can be retried.
    pub fn release(&mut self) -> Result<(), GpioError> {
        for channel in sorted(&self.pwm_exported) {
            write_attr(&self.pwm_root.join("unexport"), &channel.to_string())?;
            self.pwm_exported.remove(&channel);
            self.pwm_enabled.remove(&channel);
        }
        for line in sorted(&self.exported) {
            write_attr(&self.root.join("unexport"), &line.to_string())?;
            self.exported.remove(&line);
        }
        Ok(())
    }

    /// Switch off the hardware PWM behind `pin` if this driver started it.
    fn pwm_stop(&mut self, pin: PinId) -> Result<(), GpioError> {
        let Some(channel) = self.board.pwm_channel(pin) else {
            return Ok(());
        };
        if self.pwm_enabled.contains(&channel) {
            write_attr(&self.pwm_dir(channel).join("enable"), "0")?;
            self.pwm_enabled.remove(&channel);
            log::debug!("PWM{channel} disabled for digital use of pin {pin}");
        }
        Ok(())
    }

    fn require(&mut self, pin: PinId, mode: PinMode) -> Result<PathBuf, GpioError> {
        let dir = self.export(pin)?;
        if self.strict {
            let direction = read_attr(&dir.join("direction"))?;
            let current = if direction == "in" {
                PinMode::Input
            } else {
                // "out", "high" and "low" all denote an output
                PinMode::Output
            };
            if current != mode {
                return Err(GpioError::ModeMismatch {
                    pin,
                    expected: mode.as_str(),
                });
            }
        }
        Ok(dir)
    }

    fn pwm_write(&mut self, pin: PinId, channel: u32, duty: u8) -> Result<(), GpioError> {
        let dir = self.pwm_dir(channel);
        if !dir.is_dir() {
            log::debug!("Exporting PWM channel {channel} for pin {pin}");
            write_attr(&self.pwm_root.join("export"), &channel.to_string())?;
            if !dir.is_dir() {
                return Err(GpioError::ExportFailed(channel));
            }
            self.pwm_exported.insert(channel);
        }

        let period = u64::from(self.pwm_period_ns);
        let duty_ns = period * u64::from(duty) / u64::from(DUTY_MAX);

        // The kernel rejects a period shorter than the current duty cycle.
        write_attr(&dir.join("duty_cycle"), "0")?;
        write_attr(&dir.join("period"), &period.to_string())?;
        write_attr(&dir.join("duty_cycle"), &duty_ns.to_string())?;
        write_attr(&dir.join("enable"), "1")?;
        self.pwm_enabled.insert(channel);
        log::trace!("PWM{channel} (pin {pin}): {duty_ns}/{period} ns");
        Ok(())
    }
}

fn write_attr(path: &Path, value: &str) -> Result<(), GpioError> {
    fs::write(path, value).map_err(|e| {
        log::error!("sysfs write {} <- {value:?} failed: {e}", path.display());
        GpioError::Io(e)
    })
}

fn sorted(set: &HashSet<u32>) -> Vec<u32> {
    let mut items: Vec<u32> = set.iter().copied().collect();
    items.sort_unstable();
    items
}

fn read_attr(path: &Path) -> Result<String, GpioError> {
    Ok(fs::read_to_string(path)?.trim().to_string())
}

impl GpioDriver for SysfsGpio {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), GpioError> {
        let dir = self.export(pin)?;
        self.pwm_stop(pin)?;
        let direction = match mode {
            PinMode::Input => "in",
            PinMode::Output => "out",
        };
        write_attr(&dir.join("direction"), direction)?;
        log::debug!("Pin {pin} set to {mode}");
        Ok(())
    }

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), GpioError> {
        let dir = self.require(pin, PinMode::Output)?;
        self.pwm_stop(pin)?;
        write_attr(&dir.join("value"), &u8::from(level).to_string())
    }

    fn digital_read(&mut self, pin: PinId) -> Result<Level, GpioError> {
        let dir = self.require(pin, PinMode::Input)?;
        let value = read_attr(&dir.join("value"))?;
        match value.as_str() {
            "0" => Ok(Level::Low),
            "1" => Ok(Level::High),
            _ => Err(GpioError::InvalidValue { pin, value }),
        }
    }

    fn analog_write(&mut self, pin: PinId, duty: u8) -> Result<(), GpioError> {
        if !self.board.is_valid(pin) {
            return Err(GpioError::UnknownPin(pin));
        }
        if let Some(channel) = self.board.pwm_channel(pin) {
            return self.pwm_write(pin, channel, duty);
        }
        let level = match duty {
            0 => Level::Low,
            DUTY_MAX => Level::High,
            _ => return Err(GpioError::PwmUnsupported { pin, duty }),
        };
        self.pin_mode(pin, PinMode::Output)?;
        self.digital_write(pin, level)
    }
}
