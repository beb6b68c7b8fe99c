//! # GPIO Error Handling
//!
//! This module defines the GpioError enum, which represents the different error
//! types a GPIO driver can report. The C-style integer status of the Arduino API
//! is kept available through [`GpioError::code`], with `0` reserved for success.

use crate::constants::PinId;
use thiserror::Error;

/// Represents the different error types that can occur while driving pins.
#[derive(Debug, Error)]
pub enum GpioError {
    /// The pin identifier is not part of the board's pin table.
    #[error("Unknown pin: {0}")]
    UnknownPin(PinId),

    /// A pin mode value other than INPUT (0) or OUTPUT (1).
    #[error("Invalid pin mode: {0}")]
    InvalidMode(u8),

    /// A logic level value other than LOW (0) or HIGH (1).
    #[error("Invalid logic level: {0}")]
    InvalidLevel(u8),

    /// The kernel returned something that is not a logic level.
    #[error("Invalid value read from pin {pin}: {value:?}")]
    InvalidValue { pin: PinId, value: String },

    /// Operation requires a different pin mode (strict drivers only).
    #[error("Pin {pin} is not configured as {expected}")]
    ModeMismatch { pin: PinId, expected: &'static str },

    /// Pin has no PWM channel and the duty is neither 0 nor 255.
    #[error("Pin {pin} does not support PWM (duty {duty})")]
    PwmUnsupported { pin: PinId, duty: u8 },

    /// The kernel did not create the pin directory after export.
    #[error("Export of GPIO line {0} failed")]
    ExportFailed(u32),

    /// Underlying file or device I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid driver configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error reported by a platform GPIO library.
    #[error("Platform error: {0}")]
    Platform(String),
}

impl GpioError {
    /// Integer status for callers that expect the C-style return value.
    ///
    /// Codes are stable and never zero.
    pub fn code(&self) -> u32 {
        match self {
            GpioError::UnknownPin(_) => 1,
            GpioError::InvalidMode(_) => 2,
            GpioError::InvalidLevel(_) => 3,
            GpioError::InvalidValue { .. } => 4,
            GpioError::ModeMismatch { .. } => 5,
            GpioError::PwmUnsupported { .. } => 6,
            GpioError::ExportFailed(_) => 7,
            GpioError::Io(_) => 8,
            GpioError::Config(_) => 9,
            GpioError::Platform(_) => 10,
        }
    }
}

/// Collapse a driver result into the integer status (0 on success).
pub fn status<T>(result: &Result<T, GpioError>) -> u32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}

#[cfg(feature = "raspberry-pi")]
impl From<rppal::gpio::Error> for GpioError {
    fn from(e: rppal::gpio::Error) -> Self {
        GpioError::Platform(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_and_nonzero() {
        let errors = [
            GpioError::UnknownPin(1),
            GpioError::InvalidMode(2),
            GpioError::InvalidLevel(2),
            GpioError::InvalidValue {
                pin: 1,
                value: "x".to_string(),
            },
            GpioError::ModeMismatch {
                pin: 1,
                expected: "output",
            },
            GpioError::PwmUnsupported { pin: 1, duty: 7 },
            GpioError::ExportFailed(3),
            GpioError::Io(std::io::Error::other("boom")),
            GpioError::Config("bad".to_string()),
            GpioError::Platform("bad".to_string()),
        ];
        let mut codes: Vec<u32> = errors.iter().map(GpioError::code).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_status_of_ok_is_zero() {
        let ok: Result<(), GpioError> = Ok(());
        assert_eq!(status(&ok), 0);
        let err: Result<(), GpioError> = Err(GpioError::UnknownPin(4));
        assert_eq!(status(&err), 1);
    }
}
