// Buzzer Tasks - Summer-Alarm auf dem Interrupt-Executor
//
// Beide Tasks laufen auf dem InterruptExecutor mit höherer Priorität als
// die Ampel. Der Alarm unterbricht damit auch eine laufende I2C-Abfrage.
use defmt::{Debug2Format, error, info, trace};
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use esp_hal::peripherals::{GPIO21, LEDC};

use crate::hal::LedcTone;
use crate::{BuzzerScheduler, BuzzerSchedulerHw, LIGHT_IS_GREEN};

/// Ergebnis des Summer-Starts für `main()`: true = Alarm läuft
pub static BUZZER_STARTED: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Buzzer Start Task - richtet LEDC ein und feuert den Alarm einmal
///
/// Der LEDC-Kanal entsteht erst hier, auf dem Executor, der ihn später
/// besitzt. Danach übernimmt `buzzer_task`. Das Ergebnis landet in
/// `BUZZER_STARTED`.
///
/// # Parameter
/// - `ledc`: LEDC Peripheral
/// - `pin`: GPIO des Summers (siehe config.rs)
#[embassy_executor::task]
pub async fn buzzer_start_task(ledc: LEDC<'static>, pin: GPIO21<'static>) {
    let spawner = Spawner::for_current_executor().await;

    let tone = match LedcTone::new(ledc, pin) {
        Ok(tone) => tone,
        Err(e) => {
            error!("Buzzer initialization failed: {}", Debug2Format(&e));
            BUZZER_STARTED.signal(false);
            return;
        }
    };

    let mut buzzer = BuzzerScheduler::new(tone, &LIGHT_IS_GREEN);
    let origin = Instant::now();
    let first_deadline = buzzer.initialize();
    info!("Buzzer: started, first alarm at {} us", first_deadline);

    match spawner.spawn(buzzer_task(buzzer, origin)) {
        Ok(()) => BUZZER_STARTED.signal(true),
        Err(e) => {
            error!("Buzzer: spawn failed: {}", Debug2Format(&e));
            BUZZER_STARTED.signal(false);
        }
    }
}

/// Buzzer Task - Embassy Task für den Summer-Alarm
///
/// Der Task schläft jeweils bis `origin + deadline` und ruft dann den
/// Alarm-Handler auf. Gewartet wird auf den absoluten Zeitpunkt, nicht
/// "jetzt + Intervall" - so summiert sich keine Verzögerung auf.
///
/// # Parameter
/// - `buzzer`: initialisierter Scheduler (besitzt den LEDC-Kanal)
/// - `origin`: Zeitpunkt von `initialize()`, Nullpunkt aller Deadlines
#[embassy_executor::task]
pub async fn buzzer_task(mut buzzer: BuzzerSchedulerHw, origin: Instant) {
    loop {
        Timer::at(origin + Duration::from_micros(buzzer.deadline_us())).await;

        let next = buzzer.on_alarm_fired();
        trace!("Buzzer: {} -> next alarm at {} us", buzzer.state(), next);
    }
}
