//! Save and reload a thermostat settings block the way firmware would
//!
//! Run with: cargo run --example settings_block

use eetrack::{
    validate_float, validate_int, validate_long, MemoryEeprom, TrackedStore,
};

const SETTINGS_START: usize = 0x20;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Settings {
    enabled: bool,
    hysteresis_tenths: i16,
    setpoint: f32,
    run_seconds: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            hysteresis_tenths: 5,
            setpoint: 20.0,
            run_seconds: 0,
        }
    }
}

fn save(store: &mut TrackedStore<MemoryEeprom>, settings: &Settings) -> usize {
    store.reset_cursor();
    [
        store.write_bit(settings.enabled),
        store.write_int(settings.hysteresis_tenths),
        store.write_float(settings.setpoint),
        store.write_long(settings.run_seconds),
    ]
    .iter()
    .filter(|&&written| written)
    .count()
}

fn load(store: &mut TrackedStore<MemoryEeprom>) -> Settings {
    let defaults = Settings::default();
    store.reset_cursor();

    let enabled = store.read_bit();
    let hysteresis_tenths = store.read_int();
    let setpoint = store.read_float();
    let run_seconds = store.read_long();

    // Anything out of range (including never-written cells) falls back
    Settings {
        enabled,
        hysteresis_tenths: if validate_int(1, 50, hysteresis_tenths) {
            hysteresis_tenths
        } else {
            defaults.hysteresis_tenths
        },
        setpoint: if validate_float(5.0, 35.0, setpoint) {
            setpoint
        } else {
            defaults.setpoint
        },
        run_seconds: if validate_long(0, i32::MAX, run_seconds) {
            run_seconds
        } else {
            defaults.run_seconds
        },
    }
}

fn main() {
    let mut store = TrackedStore::new(MemoryEeprom::new(1024), SETTINGS_START);

    let first_boot = load(&mut store);
    println!("First boot (erased EEPROM): {first_boot:?}");

    let mut settings = Settings {
        setpoint: 21.5,
        ..first_boot
    };
    let fields = save(&mut store, &settings);
    println!("Saved {fields} changed fields, cursor now {:#06x}", store.cursor());

    settings.run_seconds = 3600;
    let fields = save(&mut store, &settings);
    println!("Saved {fields} changed field after updating the run time");

    let reloaded = load(&mut store);
    assert_eq!(reloaded, settings);
    println!("Reloaded: {reloaded:?}");

    let eeprom = store.storage();
    println!(
        "Physical byte writes: {} total, worst cell {}",
        eeprom.total_writes(),
        eeprom.max_wear()
    );
}
