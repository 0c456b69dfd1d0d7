// Ton-Ausgang für den passiven Summer über das LEDC-Peripheral
//
// Der LEDC-Timer läuft fest mit BUZZER_FREQ_HZ. "Ton an" heißt 50 %
// Tastverhältnis, "Ton aus" 0 %.

use ampel_core::ToneOutput;
use defmt::{Debug2Format, warn};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use static_cell::StaticCell;

use crate::config::{BUZZER_DUTY_PCT, BUZZER_FREQ_HZ};

/// Fehler beim Einrichten des LEDC
#[derive(Debug)]
pub enum ToneError {
    Timer(timer::Error),
    Channel(channel::Error),
}

// Der Kanal hält eine Referenz auf den Timer - beide müssen 'static sein
static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
static BUZZER_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

/// Real Hardware Tone Output
pub struct LedcTone {
    channel: channel::Channel<'static, LowSpeed>,
}

impl LedcTone {
    /// Richtet LEDC Timer0 + Channel0 auf dem Summer-Pin ein
    ///
    /// Darf nur einmal aufgerufen werden (StaticCell).
    ///
    /// # Parameter
    /// - `ledc_peripheral`: LEDC Peripheral
    /// - `pin`: GPIO des Summers (siehe config.rs)
    pub fn new(
        ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
        pin: esp_hal::peripherals::GPIO21<'static>,
    ) -> Result<Self, ToneError> {
        let ledc = LEDC.init(Ledc::new(ledc_peripheral));
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
        let ledc: &'static Ledc<'static> = ledc;

        let buzzer_timer = BUZZER_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        buzzer_timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(BUZZER_FREQ_HZ),
            })
            .map_err(ToneError::Timer)?;

        let mut channel = ledc.channel(channel::Number::Channel0, pin);
        channel
            .configure(channel::config::Config {
                timer: &*buzzer_timer,
                duty_pct: 0,
                pin_config: channel::config::PinConfig::PushPull,
            })
            .map_err(ToneError::Channel)?;

        Ok(Self { channel })
    }

    fn set_duty(&mut self, duty_pct: u8) {
        if let Err(e) = self.channel.set_duty(duty_pct) {
            warn!("Buzzer: set_duty failed: {}", Debug2Format(&e));
        }
    }
}

impl ToneOutput for LedcTone {
    fn start(&mut self, frequency_hz: u32) {
        if frequency_hz != BUZZER_FREQ_HZ {
            warn!(
                "Buzzer: {} Hz requested, timer runs at {} Hz",
                frequency_hz, BUZZER_FREQ_HZ
            );
        }
        self.set_duty(BUZZER_DUTY_PCT);
    }

    fn stop(&mut self) {
        self.set_duty(0);
    }
}
