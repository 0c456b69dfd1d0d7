// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::interrupt::Priority;
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_rtos::embassy::InterruptExecutor;
use static_cell::StaticCell;

// Logging
use defmt::{Debug2Format, error, info};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_fussgaengerampel::config::{
    CAP1188_ADDRESS, CAP1188_SENSITIVITY, HALT_SLEEP_SECS, I2C_FREQUENCY_KHZ,
};
use esp_fussgaengerampel::LIGHT_IS_GREEN;
use esp_fussgaengerampel::hal::GpioLights;
use esp_fussgaengerampel::tasks::{BUZZER_STARTED, buzzer_start_task, crossing_task};

use ampel_core::boot;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

// Executor für den Summer-Alarm (Software-Interrupt 1, höhere Priorität)
static BUZZER_EXECUTOR: StaticCell<InterruptExecutor<1>> = StaticCell::new();

/// Fail-Stop: kein Retry, keine Watchdog-Resets
///
/// Lampen bleiben wie sie sind, der Summer-Task läuft weiter. Die Ampel
/// startet nie. Geschlafen wird über den Timer, damit andere Tasks nicht
/// verhungern.
async fn halt() -> ! {
    loop {
        Timer::after(Duration::from_secs(HALT_SLEEP_SECS)).await;
    }
}

/// Main Entry Point
///
/// Reihenfolge beim Booten:
/// 1. Summer initialisieren (erster Ton sofort, Rot-Takt)
/// 2. Lampen auf Low
/// 3. CAP1188 prüfen und Empfindlichkeit setzen - bei Fehler Fail-Stop
/// 4. Ampel-Task starten
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Fussgaengerampel: booting");

    // 1. Summer: eigener Executor, unterbricht die Ampel-Logik
    let buzzer_executor =
        BUZZER_EXECUTOR.init(InterruptExecutor::new(sw_interrupt.software_interrupt1));
    let buzzer_spawner = buzzer_executor.start(Priority::Priority2);
    buzzer_spawner
        .spawn(buzzer_start_task(peripherals.LEDC, peripherals.GPIO21))
        .unwrap();

    if !BUZZER_STARTED.wait().await {
        halt().await
    }

    // 2. Lampen (starten dunkel, geschaltet wird erst im Rot-Zyklus)
    let lights = GpioLights::new(peripherals.GPIO18, peripherals.GPIO19, peripherals.GPIO20);

    // 3. Touch-Sensor
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));
    let i2c = match I2c::new(peripherals.I2C0, i2c_config) {
        Ok(i2c) => i2c.with_sda(peripherals.GPIO6).with_scl(peripherals.GPIO7),
        Err(e) => {
            error!("I2C configuration failed: {}", Debug2Format(&e));
            halt().await
        }
    };

    let controller = match boot(
        i2c,
        CAP1188_ADDRESS,
        CAP1188_SENSITIVITY,
        lights,
        &LIGHT_IS_GREEN,
    ) {
        Ok(controller) => controller,
        Err(e) => {
            error!("CAP1188 initialization failed: {}", Debug2Format(&e));
            halt().await
        }
    };

    // 4. Ampel starten
    spawner.spawn(crossing_task(controller)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(HALT_SLEEP_SECS)).await;
    }
}
