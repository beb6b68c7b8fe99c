//! GPIO Constants
//!
//! Fixed logic levels and pin modes shared by every board, plus the
//! kernel interface defaults used by the sysfs driver.

/// Identifier of a physical pin on the active board.
pub type PinId = u16;

/// Logic level high.
pub const HIGH: u8 = 0x1;

/// Logic level low.
pub const LOW: u8 = 0x0;

/// Pin mode input.
pub const INPUT: u8 = 0x0;

/// Pin mode output.
pub const OUTPUT: u8 = 0x1;

/// Largest duty value accepted by `analog_write` (always on).
pub const DUTY_MAX: u8 = 0xFF;

// ----------------------------------------------------------------------------
// Linux kernel interface defaults
// ----------------------------------------------------------------------------

/// Default sysfs GPIO class directory
pub const DEFAULT_SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";

/// Default sysfs PWM chip directory
pub const DEFAULT_SYSFS_PWM_ROOT: &str = "/sys/class/pwm/pwmchip0";

/// Default PWM period in nanoseconds (1 kHz)
pub const DEFAULT_PWM_PERIOD_NS: u32 = 1_000_000;

/// Default software PWM frequency in Hz (rppal driver)
pub const DEFAULT_PWM_FREQUENCY_HZ: f64 = 490.0;
