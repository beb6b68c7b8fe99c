//! # Iteaduino Plus Pin Table
//!
//! Pin names of the Allwinner A10/A20 based Iteaduino Plus board. Names follow
//! the SoC port naming (`PD0` is port D, index 0); the numeric value is the
//! board pin identifier accepted by every driver.
//!
//! The table keeps one known irregularity: `PI6` carries the same identifier as
//! `PI4` (113), and 115 is never assigned. Whether `PI6` should be 115 cannot be
//! decided from the pin list alone, so the value is kept and reported by
//! [`Board::duplicate_ids`](super::Board::duplicate_ids).

use super::{PinAlias, PinDef};
use crate::constants::PinId;

/// System LED 1 (shares PH21)
pub const SYSLED1: PinId = 58;
/// System LED 2 (shares PH20)
pub const SYSLED2: PinId = 57;

pub const PD0: PinId = 9;
pub const PD1: PinId = 10;
pub const PD2: PinId = 11;
pub const PD3: PinId = 12;
pub const PD4: PinId = 13;
pub const PD5: PinId = 14;
pub const PD6: PinId = 15;
pub const PD7: PinId = 16;
pub const PD8: PinId = 17;
pub const PD9: PinId = 18;
pub const PD10: PinId = 19;
pub const PD11: PinId = 20;
pub const PD12: PinId = 21;
pub const PD13: PinId = 22;
pub const PD14: PinId = 23;
pub const PD15: PinId = 24;
pub const PD16: PinId = 25;
pub const PD17: PinId = 26;
pub const PD18: PinId = 27;
pub const PD19: PinId = 28;
pub const PD20: PinId = 29;
pub const PD21: PinId = 30;
pub const PD22: PinId = 31;
pub const PD23: PinId = 32;
pub const PD24: PinId = 33;
pub const PD25: PinId = 34;
pub const PD26: PinId = 35;
pub const PD27: PinId = 36;
pub const PH0: PinId = 37;
pub const PH1: PinId = 38;
pub const PH2: PinId = 39;
pub const PH3: PinId = 40;
pub const PH4: PinId = 41;
pub const PH5: PinId = 42;
pub const PH6: PinId = 43;
pub const PH7: PinId = 44;
pub const PH8: PinId = 45;
pub const PH9: PinId = 46;
pub const PH10: PinId = 47;
pub const PH11: PinId = 48;
pub const PH12: PinId = 49;
pub const PH13: PinId = 50;
pub const PH14: PinId = 51;
pub const PH15: PinId = 52;
pub const PH16: PinId = 53;
pub const PH17: PinId = 54;
pub const PH18: PinId = 55;
pub const PH19: PinId = 56;
pub const PH20: PinId = 57;
pub const PH21: PinId = 58;
pub const PH22: PinId = 59;
pub const PH23: PinId = 60;
pub const PH24: PinId = 61;
pub const PH25: PinId = 62;
pub const PH26: PinId = 63;
pub const PH27: PinId = 64;
pub const PB18: PinId = 67;
pub const PB19: PinId = 68;
pub const PB20: PinId = 69;
pub const PB21: PinId = 70;
pub const PB22: PinId = 71;
pub const PB23: PinId = 72;
pub const PI19: PinId = 75;
pub const PI18: PinId = 76;
pub const PI17: PinId = 77;
pub const PI16: PinId = 78;
pub const PG0: PinId = 79;
pub const PG1: PinId = 80;
pub const PG2: PinId = 81;
pub const PG3: PinId = 82;
pub const PG4: PinId = 83;
pub const PG5: PinId = 84;
pub const PG6: PinId = 85;
pub const PG7: PinId = 86;
pub const PG8: PinId = 87;
pub const PG9: PinId = 88;
pub const PG10: PinId = 89;
pub const PG11: PinId = 90;
pub const PE0: PinId = 91;
pub const PE1: PinId = 92;
pub const PE2: PinId = 93;
pub const PE3: PinId = 94;
pub const PE4: PinId = 95;
pub const PE5: PinId = 96;
pub const PE6: PinId = 97;
pub const PE7: PinId = 98;
pub const PE8: PinId = 99;
pub const PE9: PinId = 100;
pub const PE10: PinId = 101;
pub const PE11: PinId = 102;
pub const PI0: PinId = 103;
pub const PI1: PinId = 104;
pub const PI2: PinId = 105;
pub const PI3: PinId = 107;
pub const PB2: PinId = 108;
pub const PI10: PinId = 109;
pub const PI11: PinId = 110;
pub const PI12: PinId = 111;
pub const PI13: PinId = 112;
pub const PI4: PinId = 113;
pub const PI5: PinId = 114;
pub const PI6: PinId = 113;
pub const PI7: PinId = 116;
pub const PI8: PinId = 117;
pub const PI9: PinId = 118;
pub const PI20: PinId = 119;
pub const PI21: PinId = 120;
pub const PB3: PinId = 121;
pub const PB4: PinId = 122;
pub const PB5: PinId = 123;
pub const PB6: PinId = 124;
pub const PB7: PinId = 125;
pub const PB8: PinId = 126;
pub const PB9: PinId = 127;
pub const PB10: PinId = 128;
pub const PB11: PinId = 129;
pub const PB12: PinId = 130;
pub const PB13: PinId = 131;
pub const PB14: PinId = 133;
pub const PB15: PinId = 134;
pub const PB16: PinId = 135;
pub const PB17: PinId = 136;
pub const PI14: PinId = 137;
pub const PI15: PinId = 138;

/// Alternative names that resolve to a pin already in [`PINS`].
pub static ALIASES: &[PinAlias] = &[
    PinAlias { name: "SYSLED1", id: SYSLED1 },
    PinAlias { name: "SYSLED2", id: SYSLED2 },
];

/// PWM channels of pwmchip0 (PWM0 on PB2, PWM1 on PI3).
pub static PWM_CHANNELS: &[(PinId, u32)] = &[(PB2, 0), (PI3, 1)];

/// Every named pin, in board declaration order. `line` is `bank * 32 + index`.
pub static PINS: &[PinDef] = &[
    PinDef::new("PD0", PD0, 96),
    PinDef::new("PD1", PD1, 97),
    PinDef::new("PD2", PD2, 98),
    PinDef::new("PD3", PD3, 99),
    PinDef::new("PD4", PD4, 100),
    PinDef::new("PD5", PD5, 101),
    PinDef::new("PD6", PD6, 102),
    PinDef::new("PD7", PD7, 103),
    PinDef::new("PD8", PD8, 104),
    PinDef::new("PD9", PD9, 105),
    PinDef::new("PD10", PD10, 106),
    PinDef::new("PD11", PD11, 107),
    PinDef::new("PD12", PD12, 108),
    PinDef::new("PD13", PD13, 109),
    PinDef::new("PD14", PD14, 110),
    PinDef::new("PD15", PD15, 111),
    PinDef::new("PD16", PD16, 112),
    PinDef::new("PD17", PD17, 113),
    PinDef::new("PD18", PD18, 114),
    PinDef::new("PD19", PD19, 115),
    PinDef::new("PD20", PD20, 116),
    PinDef::new("PD21", PD21, 117),
    PinDef::new("PD22", PD22, 118),
    PinDef::new("PD23", PD23, 119),
    PinDef::new("PD24", PD24, 120),
    PinDef::new("PD25", PD25, 121),
    PinDef::new("PD26", PD26, 122),
    PinDef::new("PD27", PD27, 123),
    PinDef::new("PH0", PH0, 224),
    PinDef::new("PH1", PH1, 225),
    PinDef::new("PH2", PH2, 226),
    PinDef::new("PH3", PH3, 227),
    PinDef::new("PH4", PH4, 228),
    PinDef::new("PH5", PH5, 229),
    PinDef::new("PH6", PH6, 230),
    PinDef::new("PH7", PH7, 231),
    PinDef::new("PH8", PH8, 232),
    PinDef::new("PH9", PH9, 233),
    PinDef::new("PH10", PH10, 234),
    PinDef::new("PH11", PH11, 235),
    PinDef::new("PH12", PH12, 236),
    PinDef::new("PH13", PH13, 237),
    PinDef::new("PH14", PH14, 238),
    PinDef::new("PH15", PH15, 239),
    PinDef::new("PH16", PH16, 240),
    PinDef::new("PH17", PH17, 241),
    PinDef::new("PH18", PH18, 242),
    PinDef::new("PH19", PH19, 243),
    PinDef::new("PH20", PH20, 244),
    PinDef::new("PH21", PH21, 245),
    PinDef::new("PH22", PH22, 246),
    PinDef::new("PH23", PH23, 247),
    PinDef::new("PH24", PH24, 248),
    PinDef::new("PH25", PH25, 249),
    PinDef::new("PH26", PH26, 250),
    PinDef::new("PH27", PH27, 251),
    PinDef::new("PB18", PB18, 50),
    PinDef::new("PB19", PB19, 51),
    PinDef::new("PB20", PB20, 52),
    PinDef::new("PB21", PB21, 53),
    PinDef::new("PB22", PB22, 54),
    PinDef::new("PB23", PB23, 55),
    PinDef::new("PI19", PI19, 275),
    PinDef::new("PI18", PI18, 274),
    PinDef::new("PI17", PI17, 273),
    PinDef::new("PI16", PI16, 272),
    PinDef::new("PG0", PG0, 192),
    PinDef::new("PG1", PG1, 193),
    PinDef::new("PG2", PG2, 194),
    PinDef::new("PG3", PG3, 195),
    PinDef::new("PG4", PG4, 196),
    PinDef::new("PG5", PG5, 197),
    PinDef::new("PG6", PG6, 198),
    PinDef::new("PG7", PG7, 199),
    PinDef::new("PG8", PG8, 200),
    PinDef::new("PG9", PG9, 201),
    PinDef::new("PG10", PG10, 202),
    PinDef::new("PG11", PG11, 203),
    PinDef::new("PE0", PE0, 128),
    PinDef::new("PE1", PE1, 129),
    PinDef::new("PE2", PE2, 130),
    PinDef::new("PE3", PE3, 131),
    PinDef::new("PE4", PE4, 132),
    PinDef::new("PE5", PE5, 133),
    PinDef::new("PE6", PE6, 134),
    PinDef::new("PE7", PE7, 135),
    PinDef::new("PE8", PE8, 136),
    PinDef::new("PE9", PE9, 137),
    PinDef::new("PE10", PE10, 138),
    PinDef::new("PE11", PE11, 139),
    PinDef::new("PI0", PI0, 256),
    PinDef::new("PI1", PI1, 257),
    PinDef::new("PI2", PI2, 258),
    PinDef::new("PI3", PI3, 259),
    PinDef::new("PB2", PB2, 34),
    PinDef::new("PI10", PI10, 266),
    PinDef::new("PI11", PI11, 267),
    PinDef::new("PI12", PI12, 268),
    PinDef::new("PI13", PI13, 269),
    PinDef::new("PI4", PI4, 260),
    PinDef::new("PI5", PI5, 261),
    PinDef::new("PI6", PI6, 262),
    PinDef::new("PI7", PI7, 263),
    PinDef::new("PI8", PI8, 264),
    PinDef::new("PI9", PI9, 265),
    PinDef::new("PI20", PI20, 276),
    PinDef::new("PI21", PI21, 277),
    PinDef::new("PB3", PB3, 35),
    PinDef::new("PB4", PB4, 36),
    PinDef::new("PB5", PB5, 37),
    PinDef::new("PB6", PB6, 38),
    PinDef::new("PB7", PB7, 39),
    PinDef::new("PB8", PB8, 40),
    PinDef::new("PB9", PB9, 41),
    PinDef::new("PB10", PB10, 42),
    PinDef::new("PB11", PB11, 43),
    PinDef::new("PB12", PB12, 44),
    PinDef::new("PB13", PB13, 45),
    PinDef::new("PB14", PB14, 46),
    PinDef::new("PB15", PB15, 47),
    PinDef::new("PB16", PB16, 48),
    PinDef::new("PB17", PB17, 49),
    PinDef::new("PI14", PI14, 270),
    PinDef::new("PI15", PI15, 271),
];
