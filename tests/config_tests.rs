//! Integration tests for loading driver configuration files.

use itead_gpio::{Board, DriverConfig, GpioError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file() {
    let file = write_config(
        r#"{
            "board": "raspberry-rv2",
            "sysfs_root": "/tmp/gpio",
            "pwm_period_ns": 2000000,
            "strict": true
        }"#,
    );
    let config = DriverConfig::from_file(file.path()).unwrap();

    assert_eq!(config.board, Board::RaspberryRv2);
    assert_eq!(config.sysfs_root, PathBuf::from("/tmp/gpio"));
    assert_eq!(config.pwm_period_ns, 2_000_000);
    assert!(config.strict);
    assert_eq!(config.gpio_base, 0);
}

#[test]
fn test_unknown_board_in_file() {
    let file = write_config(r#"{ "board": "beaglebone" }"#);
    assert!(matches!(
        DriverConfig::from_file(file.path()),
        Err(GpioError::Config(_))
    ));
}

#[test]
fn test_zero_frequency_in_file() {
    let file = write_config(r#"{ "pwm_frequency_hz": 0.0 }"#);
    assert!(DriverConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        DriverConfig::from_file("/nonexistent/itead-gpio.json"),
        Err(GpioError::Io(_))
    ));
}

#[test]
fn test_file_then_overrides() {
    let file = write_config(r#"{ "board": "iteaduino-plus", "gpio_base": 0 }"#);
    let config = DriverConfig::from_file(file.path())
        .unwrap()
        .with_vars(|key| match key {
            "ITEAD_GPIO_SYSFS_ROOT" => Some("/run/fake-gpio".to_string()),
            "ITEAD_GPIO_PWM_ROOT" => Some("/run/fake-pwm".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.board, Board::IteaduinoPlus);
    assert_eq!(config.sysfs_root, PathBuf::from("/run/fake-gpio"));
    assert_eq!(config.pwm_root, PathBuf::from("/run/fake-pwm"));
}
