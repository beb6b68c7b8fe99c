use criterion::{black_box, criterion_group, criterion_main, Criterion};
use itead_gpio::board::{iteaduino_plus::*, Board};
use itead_gpio::{Bus16, Bus8, GpioDriver, MockGpio, PinMode};

fn benchmark_bus8(c: &mut Criterion) {
    let mut gpio = MockGpio::new(Board::IteaduinoPlus);
    let mut bus = Bus8::default();
    gpio.set_8bits_bus(
        &mut bus,
        [PD0, PD1, PD2, PD3, PD4, PD5, PD6, PD7],
        PinMode::Output,
    )
    .unwrap();

    c.bench_function("digital_write8", |b| {
        b.iter(|| {
            gpio.clear_ops();
            gpio.digital_write8(&bus, black_box(0xA5)).unwrap();
        })
    });
}

fn benchmark_bus16(c: &mut Criterion) {
    let mut gpio = MockGpio::new(Board::IteaduinoPlus);
    let mut bus = Bus16::default();
    gpio.set_16bits_bus(
        &mut bus,
        [
            PE0, PE1, PE2, PE3, PE4, PE5, PE6, PE7, PE8, PE9, PE10, PE11, PG0, PG1, PG2, PG3,
        ],
        PinMode::Input,
    )
    .unwrap();

    c.bench_function("digital_read16", |b| {
        b.iter(|| {
            gpio.clear_ops();
            black_box(gpio.digital_read16(&bus).unwrap())
        })
    });
}

criterion_group!(benches, benchmark_bus8, benchmark_bus16);
criterion_main!(benches);
