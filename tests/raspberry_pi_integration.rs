//! Integration tests for the Raspberry Pi (rppal) driver
//!
//! Note: These tests require actual Raspberry Pi hardware. Run with the
//! `--ignored` flag and set `RPI_HARDWARE_TEST=1` to enable them. Wire GPIO17
//! (header pin 11) to GPIO27 (header pin 13) for the loopback test.

#[cfg(feature = "raspberry-pi")]
mod raspberry_pi_tests {
    use itead_gpio::board::{raspberry_rv2::*, Board};
    use itead_gpio::{DriverConfig, GpioDriver, GpioError, Level, PinMode, RppalGpio};
    use std::env;

    /// Check if hardware tests should be run
    fn should_run_hardware_tests() -> bool {
        env::var("RPI_HARDWARE_TEST").unwrap_or_default() == "1"
    }

    fn pi_config() -> DriverConfig {
        DriverConfig {
            board: Board::RaspberryRv2,
            ..DriverConfig::default()
        }
    }

    #[test]
    fn test_rejects_iteaduino_board() {
        let config = DriverConfig {
            board: Board::IteaduinoPlus,
            ..DriverConfig::default()
        };
        assert!(matches!(RppalGpio::new(&config), Err(GpioError::Config(_))));
    }

    #[test]
    #[ignore = "Requires Raspberry Pi hardware"]
    fn test_loopback() {
        if !should_run_hardware_tests() {
            return;
        }

        let mut gpio = match RppalGpio::new(&pi_config()) {
            Ok(gpio) => gpio,
            Err(e) => {
                println!("⚠️ GPIO initialization failed (expected on non-Pi): {}", e);
                return;
            }
        };

        gpio.pin_mode(GPIO17, PinMode::Output).unwrap();
        gpio.pin_mode(GPIO27, PinMode::Input).unwrap();

        for level in [Level::High, Level::Low] {
            gpio.digital_write(GPIO17, level).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(1));
            assert_eq!(gpio.digital_read(GPIO27).unwrap(), level);
        }
    }

    #[test]
    #[ignore = "Requires Raspberry Pi hardware"]
    fn test_software_pwm() {
        if !should_run_hardware_tests() {
            return;
        }

        if let Ok(mut gpio) = RppalGpio::new(&pi_config()) {
            gpio.analog_write(GPIO18, 128).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(50));
            gpio.analog_write(GPIO18, 0).unwrap();
        }
    }

    #[test]
    #[ignore = "Requires Raspberry Pi hardware"]
    fn test_digital_write_stops_pwm() {
        if !should_run_hardware_tests() {
            return;
        }

        let Ok(mut gpio) = RppalGpio::new(&pi_config()) else {
            return;
        };
        gpio.pin_mode(GPIO27, PinMode::Input).unwrap();
        gpio.analog_write(GPIO17, 128).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));

        gpio.digital_write(GPIO17, Level::Low).unwrap();
        for _ in 0..50 {
            std::thread::sleep(std::time::Duration::from_micros(500));
            assert_eq!(gpio.digital_read(GPIO27).unwrap(), Level::Low);
        }
    }
}
