//! # Parallel Pin Buses
//!
//! A bus is an ordered group of pins read or written as one multi-bit value.
//! Line `Dn` carries bit `n` of the value, so `D0` is the least significant bit.
//! Every line must be usable in the same mode; the bus itself does not check
//! this, [`Bus::configure`] simply applies one mode to all lines.

use super::{GpioDriver, Level, PinMode};
use crate::constants::PinId;
use crate::error::GpioError;

/// Fixed-width group of pin identifiers, `D0..D(N-1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bus<const N: usize> {
    lines: [PinId; N],
}

/// Eight-line bus (`D0..D7`)
pub type Bus8 = Bus<8>;

/// Sixteen-line bus (`D0..D15`)
pub type Bus16 = Bus<16>;

impl<const N: usize> Default for Bus<N> {
    fn default() -> Self {
        Self { lines: [0; N] }
    }
}

impl<const N: usize> Bus<N> {
    /// Number of lines.
    pub const WIDTH: usize = N;

    /// Bus over `lines` without touching the hardware.
    pub fn from_lines(lines: [PinId; N]) -> Self {
        Self { lines }
    }

    /// Pin identifier of line `Dn`.
    pub fn d(&self, n: usize) -> Option<PinId> {
        self.lines.get(n).copied()
    }

    pub fn lines(&self) -> &[PinId; N] {
        &self.lines
    }

    /// Store `lines` in order, then set every line to `mode`.
    ///
    /// Lines are configured `D0` first; the first failure stops the sequence
    /// and is returned. The stored lines are kept even on failure.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, driver)))]
    pub fn configure<D: GpioDriver + ?Sized>(
        &mut self,
        driver: &mut D,
        lines: [PinId; N],
        mode: PinMode,
    ) -> Result<(), GpioError> {
        self.lines = lines;
        for &pin in &self.lines {
            driver.pin_mode(pin, mode)?;
        }
        log::debug!("{}-bit bus configured as {mode}: {:?}", N, self.lines);
        Ok(())
    }

    /// Write bit `n` of `value` to line `Dn`. Bits at or above `N` are ignored;
    /// lines past `D31` are driven LOW.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, driver)))]
    pub fn write_word<D: GpioDriver + ?Sized>(
        &self,
        driver: &mut D,
        value: u32,
    ) -> Result<(), GpioError> {
        for (n, &pin) in self.lines.iter().enumerate() {
            driver.digital_write(pin, Level::from_bit(value, n))?;
        }
        log::trace!("{}-bit bus write 0x{value:04X}", N);
        Ok(())
    }

    /// Read line `Dn` into bit `n`. Lines past `D31` are still read but do
    /// not fit the word.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, driver)))]
    pub fn read_word<D: GpioDriver + ?Sized>(&self, driver: &mut D) -> Result<u32, GpioError> {
        let mut value = 0u32;
        for (n, &pin) in self.lines.iter().enumerate() {
            if driver.digital_read(pin)?.is_high() {
                value |= u32::try_from(n)
                    .ok()
                    .and_then(|n| 1u32.checked_shl(n))
                    .unwrap_or(0);
            }
        }
        log::trace!("{}-bit bus read 0x{value:04X}", N);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::gpio::mock::MockGpio;

    const LINES: [PinId; 8] = [3, 5, 7, 8, 10, 11, 12, 13];

    #[test]
    fn test_default_bus_is_zeroed() {
        let bus = Bus16::default();
        assert!(bus.lines().iter().all(|&pin| pin == 0));
        assert_eq!(Bus16::WIDTH, 16);
    }

    #[test]
    fn test_d_accessor() {
        let bus = Bus8::from_lines(LINES);
        assert_eq!(bus.d(0), Some(3));
        assert_eq!(bus.d(7), Some(13));
        assert_eq!(bus.d(8), None);
    }

    #[test]
    fn test_write_word_lsb_first() {
        let mut gpio = MockGpio::new(Board::RaspberryRv2);
        let mut bus = Bus8::default();
        bus.configure(&mut gpio, LINES, PinMode::Output).unwrap();
        bus.write_word(&mut gpio, 0b0000_0011).unwrap();

        assert_eq!(gpio.level(3), Some(Level::High));
        assert_eq!(gpio.level(5), Some(Level::High));
        assert_eq!(gpio.level(7), Some(Level::Low));
        assert_eq!(gpio.level(13), Some(Level::Low));
    }

    #[test]
    fn test_read_word_assembles_bits() {
        let mut gpio = MockGpio::new(Board::RaspberryRv2);
        let mut bus = Bus8::default();
        bus.configure(&mut gpio, LINES, PinMode::Input).unwrap();
        gpio.set_input(13, Level::High);
        gpio.set_input(5, Level::High);

        assert_eq!(bus.read_word(&mut gpio).unwrap(), 0b1000_0010);
    }

    #[test]
    fn test_wide_bus_does_not_overflow_word() {
        let board = Board::IteaduinoPlus;
        let mut gpio = MockGpio::new(board);
        let mut lines = [0; 40];
        for (line, pin) in lines.iter_mut().zip(board.pins()) {
            *line = pin.id;
        }
        let mut bus = Bus::<40>::default();
        bus.configure(&mut gpio, lines, PinMode::Output).unwrap();

        bus.write_word(&mut gpio, u32::MAX).unwrap();
        assert_eq!(gpio.level(lines[31]), Some(Level::High));
        assert_eq!(gpio.level(lines[32]), Some(Level::Low));
        assert_eq!(gpio.level(lines[39]), Some(Level::Low));

        for &pin in &lines {
            gpio.set_input(pin, Level::High);
        }
        bus.configure(&mut gpio, lines, PinMode::Input).unwrap();
        assert_eq!(bus.read_word(&mut gpio).unwrap(), u32::MAX);
    }

    #[test]
    fn test_configure_stops_at_first_bad_line() {
        let mut gpio = MockGpio::new(Board::RaspberryRv2);
        let mut bus = Bus8::default();
        let lines = [3, 5, 99, 8, 10, 11, 12, 13];

        let err = bus.configure(&mut gpio, lines, PinMode::Output).unwrap_err();
        assert!(matches!(err, GpioError::UnknownPin(99)));
        assert_eq!(bus.lines(), &lines);
        assert_eq!(gpio.mode(5), Some(PinMode::Output));
        assert_eq!(gpio.mode(8), None);
    }
}
