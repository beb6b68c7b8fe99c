//! Mock GPIO driver for testing
//!
//! Simulates a board in memory so callers of the GPIO API can be exercised
//! without hardware. Pins are validated against the board table, every
//! operation is appended to an operation log, and input levels can be injected.

use super::{GpioDriver, Level, PinMode};
use crate::board::Board;
use crate::constants::{PinId, DUTY_MAX};
use crate::error::GpioError;
use std::collections::HashMap;

/// One recorded driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOp {
    Mode(PinId, PinMode),
    Write(PinId, Level),
    Read(PinId),
    Pwm(PinId, u8),
}

#[derive(Debug, Clone, Copy)]
struct PinState {
    mode: Option<PinMode>,
    output: Level,
    input: Level,
    duty: Option<u8>,
}

impl Default for PinState {
    fn default() -> Self {
        Self {
            mode: None,
            output: Level::Low,
            input: Level::Low,
            duty: None,
        }
    }
}

/// In-memory driver for one board
#[derive(Debug)]
pub struct MockGpio {
    board: Board,
    pins: HashMap<PinId, PinState>,
    ops: Vec<MockOp>,
    strict: bool,
    fail_next: Option<GpioError>,
}

impl MockGpio {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            pins: HashMap::new(),
            ops: Vec::new(),
            strict: false,
            fail_next: None,
        }
    }

    /// Reject writes to pins not in OUTPUT mode and reads from pins not in INPUT mode.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Level presented to the next `digital_read` of an input pin.
    pub fn set_input(&mut self, pin: PinId, level: Level) {
        self.pins.entry(pin).or_default().input = level;
    }

    /// Fail the next driver call with `error`.
    pub fn fail_next(&mut self, error: GpioError) {
        self.fail_next = Some(error);
    }

    /// Current mode of `pin`, `None` if never configured.
    pub fn mode(&self, pin: PinId) -> Option<PinMode> {
        self.pins.get(&pin).and_then(|state| state.mode)
    }

    /// Output latch of `pin`, `None` unless the pin is in OUTPUT mode.
    ///
    /// A pin switched to OUTPUT without a write reports `Low`.
    pub fn level(&self, pin: PinId) -> Option<Level> {
        self.pins
            .get(&pin)
            .filter(|state| state.mode == Some(PinMode::Output))
            .map(|state| state.output)
    }

    /// Last duty written with `analog_write`.
    pub fn duty(&self, pin: PinId) -> Option<u8> {
        self.pins.get(&pin).and_then(|state| state.duty)
    }

    /// Every call since creation (or the last `clear_ops`), oldest first.
    pub fn ops(&self) -> &[MockOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn check(&mut self, pin: PinId) -> Result<(), GpioError> {
        if let Some(error) = self.fail_next.take() {
            return Err(error);
        }
        if !self.board.is_valid(pin) {
            return Err(GpioError::UnknownPin(pin));
        }
        Ok(())
    }

    fn require(&self, pin: PinId, mode: PinMode) -> Result<(), GpioError> {
        if self.strict && self.mode(pin) != Some(mode) {
            return Err(GpioError::ModeMismatch {
                pin,
                expected: mode.as_str(),
            });
        }
        Ok(())
    }
}

impl GpioDriver for MockGpio {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), GpioError> {
        self.check(pin)?;
        let state = self.pins.entry(pin).or_default();
        state.mode = Some(mode);
        state.duty = None;
        self.ops.push(MockOp::Mode(pin, mode));
        Ok(())
    }

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), GpioError> {
        self.check(pin)?;
        self.require(pin, PinMode::Output)?;
        let state = self.pins.entry(pin).or_default();
        state.output = level;
        state.duty = None;
        if state.mode.is_none() {
            state.mode = Some(PinMode::Output);
        }
        self.ops.push(MockOp::Write(pin, level));
        Ok(())
    }

    fn digital_read(&mut self, pin: PinId) -> Result<Level, GpioError> {
        self.check(pin)?;
        self.require(pin, PinMode::Input)?;
        let state = self.pins.entry(pin).or_default();
        let level = match state.mode {
            Some(PinMode::Output) => state.output,
            _ => state.input,
        };
        self.ops.push(MockOp::Read(pin));
        Ok(level)
    }

    fn analog_write(&mut self, pin: PinId, duty: u8) -> Result<(), GpioError> {
        self.check(pin)?;
        let state = self.pins.entry(pin).or_default();
        state.mode = Some(PinMode::Output);
        state.duty = Some(duty);
        match duty {
            0 => state.output = Level::Low,
            DUTY_MAX => state.output = Level::High,
            _ => {}
        }
        self.ops.push(MockOp::Pwm(pin, duty));
        Ok(())
    }
}
