//! Integration tests for the board pin tables and board selection.

use itead_gpio::board::{iteaduino_plus, raspberry_rv2, Board};
use std::collections::HashSet;

/// Every symbolic name maps to exactly one identifier.
#[test]
fn test_names_resolve_to_their_table_value() {
    for board in Board::ALL {
        for pin in board.pins() {
            assert_eq!(board.lookup(pin.name), Some(pin.id), "{board} {}", pin.name);
        }
    }
}

/// The only shared identifier in either table is PI4/PI6 = 113.
#[test]
fn test_only_known_duplicate() {
    assert_eq!(
        Board::IteaduinoPlus.duplicate_ids(),
        vec![(113, vec!["PI4", "PI6"])]
    );
    assert!(Board::RaspberryRv2.duplicate_ids().is_empty());
    assert_eq!(iteaduino_plus::PI4, iteaduino_plus::PI6);
}

#[test]
fn test_iteaduino_spot_values() {
    assert_eq!(iteaduino_plus::PD0, 9);
    assert_eq!(iteaduino_plus::PD27, 36);
    assert_eq!(iteaduino_plus::PH0, 37);
    assert_eq!(iteaduino_plus::PB18, 67);
    assert_eq!(iteaduino_plus::PI19, 75);
    assert_eq!(iteaduino_plus::PG0, 79);
    assert_eq!(iteaduino_plus::PE11, 102);
    assert_eq!(iteaduino_plus::PI3, 107);
    assert_eq!(iteaduino_plus::PB2, 108);
    assert_eq!(iteaduino_plus::PI5, 114);
    assert_eq!(iteaduino_plus::PB13, 131);
    assert_eq!(iteaduino_plus::PB14, 133);
    assert_eq!(iteaduino_plus::PI15, 138);
}

#[test]
fn test_iteaduino_gaps_are_unassigned() {
    for id in [65, 66, 73, 74, 106, 115, 132] {
        assert!(!Board::IteaduinoPlus.is_valid(id), "id {id} should be free");
    }
}

#[test]
fn test_sysleds_alias_ph_pins() {
    assert_eq!(iteaduino_plus::SYSLED1, iteaduino_plus::PH21);
    assert_eq!(iteaduino_plus::SYSLED2, iteaduino_plus::PH20);
    assert!(Board::IteaduinoPlus
        .pins()
        .iter()
        .all(|pin| !pin.name.starts_with("SYSLED")));
}

#[test]
fn test_raspberry_header_values() {
    let expected: [(&str, u16); 21] = [
        ("GPIO2", 3),
        ("GPIO3", 5),
        ("GPIO4", 7),
        ("GPIO14", 8),
        ("GPIO15", 10),
        ("GPIO17", 11),
        ("GPIO18", 12),
        ("GPIO27", 13),
        ("GPIO22", 15),
        ("GPIO23", 16),
        ("GPIO24", 18),
        ("GPIO10", 19),
        ("GPIO9", 21),
        ("GPIO25", 22),
        ("GPIO11", 23),
        ("GPIO8", 24),
        ("GPIO7", 26),
        ("GPIO28", 29),
        ("GPIO29", 30),
        ("GPIO30", 31),
        ("GPIO31", 32),
    ];
    let actual: Vec<(&str, u16)> = raspberry_rv2::PINS.iter().map(|p| (p.name, p.id)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_raspberry_lines_match_names() {
    for pin in raspberry_rv2::PINS {
        assert_eq!(pin.name, format!("GPIO{}", pin.line));
    }
}

#[test]
fn test_iteaduino_lines_are_unique() {
    let lines: HashSet<u32> = iteaduino_plus::PINS.iter().map(|p| p.line).collect();
    assert_eq!(lines.len(), iteaduino_plus::PINS.len());
}

#[test]
fn test_identifiers_in_range() {
    for board in Board::ALL {
        assert!(board.pins().iter().all(|p| (1..=255).contains(&p.id)));
    }
}

#[test]
fn test_pwm_channels() {
    assert_eq!(Board::IteaduinoPlus.pwm_channel(iteaduino_plus::PB2), Some(0));
    assert_eq!(Board::IteaduinoPlus.pwm_channel(iteaduino_plus::PI3), Some(1));
    assert_eq!(Board::IteaduinoPlus.pwm_channel(iteaduino_plus::PD0), None);
    assert_eq!(Board::RaspberryRv2.pwm_channel(raspberry_rv2::GPIO18), Some(0));
}

#[cfg(feature = "board-iteaduino-plus")]
#[test]
fn test_active_board_reexports() {
    assert_eq!(Board::ACTIVE, Board::IteaduinoPlus);
    assert_eq!(Board::default(), Board::IteaduinoPlus);
    assert_eq!(itead_gpio::PD0, 9);
    assert_eq!(itead_gpio::SYSLED1, 58);
}

#[cfg(feature = "board-raspberry-rv2")]
#[test]
fn test_active_board_reexports() {
    assert_eq!(Board::ACTIVE, Board::RaspberryRv2);
    assert_eq!(itead_gpio::GPIO18, 12);
}

#[test]
fn test_board_serde_names() {
    let json = serde_json::to_string(&Board::RaspberryRv2).unwrap();
    assert_eq!(json, "\"raspberry-rv2\"");
    let board: Board = serde_json::from_str("\"iteaduino-plus\"").unwrap();
    assert_eq!(board, Board::IteaduinoPlus);
}
