//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `GpioLights`, `LedcTone`, `Cap1188<I2c>` (ampel-firmware)
//! - **Testing:** Mocks in ampel-tests

use crate::types::{Lamp, LampPattern, TouchMask, touched_count};

/// Trait für den kapazitiven Touch-Sensor
pub trait TouchSensor {
    type Error;

    /// Liest die Maske der berührten Flächen
    fn touched_mask(&mut self) -> Result<TouchMask, Self::Error>;

    /// Anzahl berührter Flächen - nur für Diagnose
    fn touched_count(&mut self) -> Result<u8, Self::Error> {
        self.touched_mask().map(|mask| touched_count(mask.0))
    }
}

/// Trait für die drei Signallampen
///
/// Schreiben ist nicht fehlerbehaftet, es gibt kein Rücklesen.
pub trait IndicatorLights {
    fn set(&mut self, lamp: Lamp, on: bool);

    /// Setzt alle drei Lampen auf einmal
    fn show(&mut self, pattern: LampPattern) {
        self.set(Lamp::Red, pattern.red);
        self.set(Lamp::Yellow, pattern.yellow);
        self.set(Lamp::Green, pattern.green);
    }
}

impl<L: IndicatorLights + ?Sized> IndicatorLights for &mut L {
    fn set(&mut self, lamp: Lamp, on: bool) {
        L::set(self, lamp, on)
    }

    fn show(&mut self, pattern: LampPattern) {
        L::show(self, pattern)
    }
}

/// Trait für den Ton-Ausgang des Summers
///
/// Wird ausschließlich vom `BuzzerScheduler` benutzt.
pub trait ToneOutput {
    fn start(&mut self, frequency_hz: u32);
    fn stop(&mut self);
}
