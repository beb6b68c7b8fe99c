//! # Raspberry Pi Rv2 Pin Table
//!
//! Pins of the Raspberry Pi revision 2 headers. The constant name is the BCM
//! GPIO line, the value is the header pin identifier (P1 pins 3..26, P5 pins
//! 29..32 for GPIO28..GPIO31).

use super::{PinAlias, PinDef};
use crate::constants::PinId;

pub const GPIO2: PinId = 3;
pub const GPIO3: PinId = 5;
pub const GPIO4: PinId = 7;
pub const GPIO14: PinId = 8;
pub const GPIO15: PinId = 10;
pub const GPIO17: PinId = 11;
pub const GPIO18: PinId = 12;
pub const GPIO27: PinId = 13;
pub const GPIO22: PinId = 15;
pub const GPIO23: PinId = 16;
pub const GPIO24: PinId = 18;
pub const GPIO10: PinId = 19;
pub const GPIO9: PinId = 21;
pub const GPIO25: PinId = 22;
pub const GPIO11: PinId = 23;
pub const GPIO8: PinId = 24;
pub const GPIO7: PinId = 26;
pub const GPIO28: PinId = 29;
pub const GPIO29: PinId = 30;
pub const GPIO30: PinId = 31;
pub const GPIO31: PinId = 32;

/// No alternative names on this board.
pub static ALIASES: &[PinAlias] = &[];

/// PWM0 is routed to GPIO18.
pub static PWM_CHANNELS: &[(PinId, u32)] = &[(GPIO18, 0)];

/// Every named pin, in header declaration order. `line` is the BCM number.
pub static PINS: &[PinDef] = &[
    PinDef::new("GPIO2", GPIO2, 2),
    PinDef::new("GPIO3", GPIO3, 3),
    PinDef::new("GPIO4", GPIO4, 4),
    PinDef::new("GPIO14", GPIO14, 14),
    PinDef::new("GPIO15", GPIO15, 15),
    PinDef::new("GPIO17", GPIO17, 17),
    PinDef::new("GPIO18", GPIO18, 18),
    PinDef::new("GPIO27", GPIO27, 27),
    PinDef::new("GPIO22", GPIO22, 22),
    PinDef::new("GPIO23", GPIO23, 23),
    PinDef::new("GPIO24", GPIO24, 24),
    PinDef::new("GPIO10", GPIO10, 10),
    PinDef::new("GPIO9", GPIO9, 9),
    PinDef::new("GPIO25", GPIO25, 25),
    PinDef::new("GPIO11", GPIO11, 11),
    PinDef::new("GPIO8", GPIO8, 8),
    PinDef::new("GPIO7", GPIO7, 7),
    PinDef::new("GPIO28", GPIO28, 28),
    PinDef::new("GPIO29", GPIO29, 29),
    PinDef::new("GPIO30", GPIO30, 30),
    PinDef::new("GPIO31", GPIO31, 31),
];
