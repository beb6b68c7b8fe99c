//! # Board Pin Directory
//!
//! Maps symbolic pin names to the numeric pin identifiers of each supported
//! board. Both tables are always compiled as data; the Cargo features
//! `board-iteaduino-plus` and `board-raspberry-rv2` pick the *active* board,
//! whose constants are re-exported at the crate root.
//!
//! ```rust
//! use itead_gpio::board::Board;
//!
//! let board = Board::RaspberryRv2;
//! assert_eq!(board.lookup("gpio18"), Some(12));
//! assert_eq!(board.names_of(12), vec!["GPIO18"]);
//! ```

pub mod iteaduino_plus;
pub mod raspberry_rv2;

use crate::constants::PinId;
use crate::error::GpioError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

#[cfg(all(feature = "board-iteaduino-plus", feature = "board-raspberry-rv2"))]
compile_error!("features `board-iteaduino-plus` and `board-raspberry-rv2` are mutually exclusive");

#[cfg(not(any(feature = "board-iteaduino-plus", feature = "board-raspberry-rv2")))]
compile_error!("enable exactly one board feature: `board-iteaduino-plus` or `board-raspberry-rv2`");

/// One named pin of a board table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinDef {
    /// Symbolic name (`PD0`, `GPIO18`, ...)
    pub name: &'static str,
    /// Board pin identifier passed to the driver API
    pub id: PinId,
    /// SoC GPIO line used by the kernel interface
    pub line: u32,
}

impl PinDef {
    pub const fn new(name: &'static str, id: PinId, line: u32) -> Self {
        Self { name, id, line }
    }
}

/// An alternative name for a pin that already appears in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinAlias {
    pub name: &'static str,
    pub id: PinId,
}

/// Supported target boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Board {
    /// Iteaduino Plus (Allwinner A10/A20)
    IteaduinoPlus,
    /// Raspberry Pi revision 2
    RaspberryRv2,
}

static ITEADUINO_INDEX: Lazy<HashMap<&'static str, PinId>> =
    Lazy::new(|| build_index(iteaduino_plus::PINS, iteaduino_plus::ALIASES));

static RASPBERRY_INDEX: Lazy<HashMap<&'static str, PinId>> =
    Lazy::new(|| build_index(raspberry_rv2::PINS, raspberry_rv2::ALIASES));

fn build_index(pins: &[PinDef], aliases: &[PinAlias]) -> HashMap<&'static str, PinId> {
    pins.iter()
        .map(|p| (p.name, p.id))
        .chain(aliases.iter().map(|a| (a.name, a.id)))
        .collect()
}

impl Board {
    /// The board selected at build time.
    #[cfg(feature = "board-iteaduino-plus")]
    pub const ACTIVE: Board = Board::IteaduinoPlus;

    /// The board selected at build time.
    #[cfg(all(feature = "board-raspberry-rv2", not(feature = "board-iteaduino-plus")))]
    pub const ACTIVE: Board = Board::RaspberryRv2;

    /// All supported boards.
    pub const ALL: [Board; 2] = [Board::IteaduinoPlus, Board::RaspberryRv2];

    /// Kebab-case board name, as used by the CLI and config files.
    pub fn name(self) -> &'static str {
        match self {
            Board::IteaduinoPlus => "iteaduino-plus",
            Board::RaspberryRv2 => "raspberry-rv2",
        }
    }

    /// Pin table in declaration order.
    pub fn pins(self) -> &'static [PinDef] {
        match self {
            Board::IteaduinoPlus => iteaduino_plus::PINS,
            Board::RaspberryRv2 => raspberry_rv2::PINS,
        }
    }

    /// Alternative names (not counted as table entries).
    pub fn aliases(self) -> &'static [PinAlias] {
        match self {
            Board::IteaduinoPlus => iteaduino_plus::ALIASES,
            Board::RaspberryRv2 => raspberry_rv2::ALIASES,
        }
    }

    fn index(self) -> &'static HashMap<&'static str, PinId> {
        match self {
            Board::IteaduinoPlus => &ITEADUINO_INDEX,
            Board::RaspberryRv2 => &RASPBERRY_INDEX,
        }
    }

    /// Resolve a symbolic pin name (case-insensitive, aliases included).
    pub fn lookup(self, name: &str) -> Option<PinId> {
        self.index().get(name.to_ascii_uppercase().as_str()).copied()
    }

    /// Resolve either a symbolic name or a decimal pin identifier.
    pub fn resolve(self, text: &str) -> Result<PinId, GpioError> {
        let text = text.trim();
        if let Ok(id) = text.parse::<PinId>() {
            return if self.is_valid(id) {
                Ok(id)
            } else {
                Err(GpioError::UnknownPin(id))
            };
        }
        self.lookup(text)
            .ok_or_else(|| GpioError::Config(format!("unknown pin name {text:?} on {self}")))
    }

    /// First table entry with this identifier.
    pub fn pin(self, id: PinId) -> Option<&'static PinDef> {
        self.pins().iter().find(|p| p.id == id)
    }

    pub fn is_valid(self, id: PinId) -> bool {
        self.pin(id).is_some()
    }

    /// Every table name that carries `id`, in declaration order.
    pub fn names_of(self, id: PinId) -> Vec<&'static str> {
        self.pins()
            .iter()
            .filter(|p| p.id == id)
            .map(|p| p.name)
            .collect()
    }

    /// SoC GPIO line for a pin identifier.
    pub fn line(self, id: PinId) -> Result<u32, GpioError> {
        self.pin(id).map(|p| p.line).ok_or(GpioError::UnknownPin(id))
    }

    /// Identifiers shared by more than one table name.
    pub fn duplicate_ids(self) -> Vec<(PinId, Vec<&'static str>)> {
        let mut by_id: BTreeMap<PinId, Vec<&'static str>> = BTreeMap::new();
        for pin in self.pins() {
            by_id.entry(pin.id).or_default().push(pin.name);
        }
        by_id.into_iter().filter(|(_, names)| names.len() > 1).collect()
    }

    /// Hardware PWM channel routed to this pin, if any.
    pub fn pwm_channel(self, id: PinId) -> Option<u32> {
        let channels = match self {
            Board::IteaduinoPlus => iteaduino_plus::PWM_CHANNELS,
            Board::RaspberryRv2 => raspberry_rv2::PWM_CHANNELS,
        };
        channels
            .iter()
            .find(|(pin, _)| *pin == id)
            .map(|(_, channel)| *channel)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::ACTIVE
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Board {
    type Err = GpioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "iteaduino-plus" | "iteaduino" => Ok(Board::IteaduinoPlus),
            "raspberry-rv2" | "raspberry" | "rpi" => Ok(Board::RaspberryRv2),
            other => Err(GpioError::Config(format!("unknown board: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(Board::IteaduinoPlus.pins().len(), 124);
        assert_eq!(Board::RaspberryRv2.pins().len(), 21);
    }

    #[test]
    fn test_names_are_unique() {
        for board in Board::ALL {
            let index = board.index();
            assert_eq!(index.len(), board.pins().len() + board.aliases().len());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Board::IteaduinoPlus.lookup("pd0"), Some(9));
        assert_eq!(Board::IteaduinoPlus.lookup("PD0"), Some(9));
        assert_eq!(Board::IteaduinoPlus.lookup("GPIO18"), None);
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(Board::IteaduinoPlus.lookup("SYSLED1"), Some(58));
        assert_eq!(Board::IteaduinoPlus.lookup("sysled2"), Some(57));
        assert_eq!(Board::IteaduinoPlus.names_of(58), vec!["PH21"]);
    }

    #[test]
    fn test_resolve_number_and_name() {
        let board = Board::RaspberryRv2;
        assert_eq!(board.resolve("12").unwrap(), 12);
        assert_eq!(board.resolve(" GPIO18 ").unwrap(), 12);
        assert!(matches!(board.resolve("1"), Err(GpioError::UnknownPin(1))));
        assert!(matches!(board.resolve("PD0"), Err(GpioError::Config(_))));
    }

    #[test]
    fn test_line_numbers() {
        assert_eq!(Board::IteaduinoPlus.line(iteaduino_plus::PD0).unwrap(), 96);
        assert_eq!(Board::IteaduinoPlus.line(iteaduino_plus::PB2).unwrap(), 34);
        assert_eq!(Board::RaspberryRv2.line(raspberry_rv2::GPIO27).unwrap(), 27);
        assert!(Board::RaspberryRv2.line(200).is_err());
    }

    #[test]
    fn test_board_parse_and_display() {
        for board in Board::ALL {
            assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
        }
        assert_eq!("raspberry_rv2".parse::<Board>().unwrap(), Board::RaspberryRv2);
        assert!("arduino-uno".parse::<Board>().is_err());
    }
}
