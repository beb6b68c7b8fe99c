use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use itead_gpio::logging::{init_logger_with_level, level_for_verbosity, log_error, log_warn};
use itead_gpio::{
    Board, Bus16, Bus8, DriverConfig, GpioDriver, GpioError, Level, PinDef, PinId, PinMode,
    SysfsGpio,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "itead-gpio")]
#[command(about = "Arduino-style GPIO access for Iteaduino Plus and Raspberry Pi Rv2")]
struct Cli {
    /// Board pin table (defaults to the build's active board)
    #[arg(short, long, global = true)]
    board: Option<Board>,

    /// JSON driver configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Driver backend
    #[arg(short, long, global = true, value_enum, default_value_t = DriverKind::Sysfs)]
    driver: DriverKind,

    /// Reject writes to inputs and reads from outputs
    #[arg(long, global = true)]
    strict: bool,

    /// More output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum DriverKind {
    Sysfs,
    Rppal,
}

#[derive(Subcommand)]
enum Commands {
    /// List the pin table
    Pins {
        #[arg(long)]
        json: bool,
    },
    /// Report identifiers shared by several pin names
    Check,
    /// Configure a pin as input or output
    Mode { pin: String, mode: PinMode },
    /// Read a pin
    Read { pin: String },
    /// Drive a pin high or low
    Write { pin: String, level: Level },
    /// Drive a duty cycle (0-255)
    Pwm { pin: String, duty: u8 },
    /// Write a value to 8 or 16 comma-separated pins (D0 first)
    BusWrite { pins: String, value: String },
    /// Read a value from 8 or 16 comma-separated pins (D0 first)
    BusRead { pins: String },
}

#[derive(Serialize)]
struct PinListing<'a> {
    board: Board,
    pins: &'a [PinDef],
    aliases: &'a [itead_gpio::board::PinAlias],
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger_with_level(level_for_verbosity(cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error(&format!("{e:#}"));
            eprintln!("error: {e:#}");
            let code = e
                .downcast_ref::<GpioError>()
                .map(GpioError::code)
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<DriverConfig> {
    let config = match &cli.config {
        Some(path) => DriverConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DriverConfig::default(),
    };
    let mut config = config.with_env()?;
    if let Some(board) = cli.board {
        config.board = board;
    }
    config.strict |= cli.strict;
    Ok(config)
}

fn open_driver(kind: DriverKind, config: &DriverConfig) -> anyhow::Result<Box<dyn GpioDriver>> {
    match kind {
        DriverKind::Sysfs => Ok(Box::new(SysfsGpio::from_config(config))),
        #[cfg(feature = "raspberry-pi")]
        DriverKind::Rppal => Ok(Box::new(itead_gpio::RppalGpio::new(config)?)),
        #[cfg(not(feature = "raspberry-pi"))]
        DriverKind::Rppal => bail!("built without the `raspberry-pi` feature"),
    }
}

fn parse_value(text: &str) -> anyhow::Result<u16> {
    let text = text.trim();
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    };
    value.with_context(|| format!("invalid bus value {text:?}"))
}

fn parse_pins(board: Board, list: &str) -> anyhow::Result<Vec<PinId>> {
    list.split(',')
        .map(|pin| board.resolve(pin).map_err(anyhow::Error::from))
        .collect()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let board = config.board;

    match cli.command {
        Commands::Pins { json } => {
            if json {
                let listing = PinListing {
                    board,
                    pins: board.pins(),
                    aliases: board.aliases(),
                };
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                println!("{board}: {} pins", board.pins().len());
                for pin in board.pins() {
                    let pwm = board
                        .pwm_channel(pin.id)
                        .map(|ch| format!("  pwm{ch}"))
                        .unwrap_or_default();
                    println!("{:<8} {:>4}  line {:>3}{pwm}", pin.name, pin.id, pin.line);
                }
                for alias in board.aliases() {
                    println!("{:<8} {:>4}  alias", alias.name, alias.id);
                }
            }
        }
        Commands::Check => {
            let duplicates = board.duplicate_ids();
            if duplicates.is_empty() {
                println!("{board}: every pin identifier is unique");
            }
            for (id, names) in duplicates {
                log_warn(&format!("{board}: pin id {id} is shared by {}", names.join(", ")));
                println!("duplicate id {id}: {}", names.join(", "));
            }
        }
        Commands::Mode { pin, mode } => {
            let pin = board.resolve(&pin)?;
            open_driver(cli.driver, &config)?.pin_mode(pin, mode)?;
        }
        Commands::Read { pin } => {
            let pin = board.resolve(&pin)?;
            let level = open_driver(cli.driver, &config)?.digital_read(pin)?;
            println!("{level}");
        }
        Commands::Write { pin, level } => {
            let pin = board.resolve(&pin)?;
            open_driver(cli.driver, &config)?.digital_write(pin, level)?;
        }
        Commands::Pwm { pin, duty } => {
            let pin = board.resolve(&pin)?;
            open_driver(cli.driver, &config)?.analog_write(pin, duty)?;
        }
        Commands::BusWrite { pins, value } => {
            let pins = parse_pins(board, &pins)?;
            let value = parse_value(&value)?;
            let mut driver = open_driver(cli.driver, &config)?;
            match pins.len() {
                8 => {
                    let Ok(value) = u8::try_from(value) else {
                        bail!("value 0x{value:X} does not fit an 8-bit bus");
                    };
                    let mut bus = Bus8::default();
                    let lines = <[PinId; 8]>::try_from(pins.as_slice())?;
                    driver.set_8bits_bus(&mut bus, lines, PinMode::Output)?;
                    driver.digital_write8(&bus, value)?;
                }
                16 => {
                    let mut bus = Bus16::default();
                    let lines = <[PinId; 16]>::try_from(pins.as_slice())?;
                    driver.set_16bits_bus(&mut bus, lines, PinMode::Output)?;
                    driver.digital_write16(&bus, value)?;
                }
                n => bail!("a bus has 8 or 16 pins, got {n}"),
            }
        }
        Commands::BusRead { pins } => {
            let pins = parse_pins(board, &pins)?;
            let mut driver = open_driver(cli.driver, &config)?;
            match pins.len() {
                8 => {
                    let mut bus = Bus8::default();
                    let lines = <[PinId; 8]>::try_from(pins.as_slice())?;
                    driver.set_8bits_bus(&mut bus, lines, PinMode::Input)?;
                    println!("0x{:02X}", driver.digital_read8(&bus)?);
                }
                16 => {
                    let mut bus = Bus16::default();
                    let lines = <[PinId; 16]>::try_from(pins.as_slice())?;
                    driver.set_16bits_bus(&mut bus, lines, PinMode::Input)?;
                    println!("0x{:04X}", driver.digital_read16(&bus)?);
                }
                n => bail!("a bus has 8 or 16 pins, got {n}"),
            }
        }
    }

    Ok(())
}
