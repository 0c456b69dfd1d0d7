//! Core Types für die Fußgängerampel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::sync::atomic::{AtomicBool, Ordering};

/// Ampel-Phase
///
/// Genau eine Phase ist aktiv. Die Reihenfolge ist fest und zyklisch:
/// Grün → Gelb → Rot → Rot-Gelb → Grün.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightPhase {
    Green,
    YellowApproach,
    Red,
    RedYellowApproach,
}

impl LightPhase {
    /// Phase beim Systemstart
    pub const INITIAL: LightPhase = LightPhase::Red;

    /// Nachfolger im Zyklus
    pub fn next(self) -> LightPhase {
        match self {
            LightPhase::Green => LightPhase::YellowApproach,
            LightPhase::YellowApproach => LightPhase::Red,
            LightPhase::Red => LightPhase::RedYellowApproach,
            LightPhase::RedYellowApproach => LightPhase::Green,
        }
    }

    pub fn is_green(self) -> bool {
        matches!(self, LightPhase::Green)
    }

    /// Welche Lampen in dieser Phase leuchten
    pub fn lamps(self) -> LampPattern {
        match self {
            LightPhase::Green => LampPattern::new(false, false, true),
            LightPhase::YellowApproach => LampPattern::new(false, true, false),
            LightPhase::Red => LampPattern::new(true, false, false),
            LightPhase::RedYellowApproach => LampPattern::new(true, true, false),
        }
    }
}

/// Eine der drei Signallampen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lamp {
    Green,
    Yellow,
    Red,
}

/// Soll-Zustand aller drei Lampen
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampPattern {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
}

impl LampPattern {
    pub const fn new(red: bool, yellow: bool, green: bool) -> Self {
        Self { red, yellow, green }
    }

    /// Alle Lampen aus (Zustand nach dem Booten)
    pub const fn dark() -> Self {
        Self::new(false, false, false)
    }

    pub fn get(&self, lamp: Lamp) -> bool {
        match lamp {
            Lamp::Green => self.green,
            Lamp::Yellow => self.yellow,
            Lamp::Red => self.red,
        }
    }
}

/// Zustand des Summers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerState {
    Silent,
    Sounding,
}

impl BuzzerState {
    pub fn toggled(self) -> BuzzerState {
        match self {
            BuzzerState::Silent => BuzzerState::Sounding,
            BuzzerState::Sounding => BuzzerState::Silent,
        }
    }

    pub fn is_sounding(self) -> bool {
        matches!(self, BuzzerState::Sounding)
    }
}

/// Gemeinsames Flag "Ampel ist grün"
///
/// Einziger Zustand, der zwischen Ampel-Steuerung (schreibt) und
/// Summer-Alarm (liest) geteilt wird. Als `static` anlegbar.
///
/// Der Schreiber nutzt `Release`, der Leser `Acquire`: sobald der Alarm
/// den neuen Wert sieht, sind auch alle vorher geschriebenen Lampenzustände
/// sichtbar. Ein `AtomicBool` kann nicht halb geschrieben gelesen werden.
#[derive(Debug)]
pub struct LightFlag {
    green: AtomicBool,
}

impl LightFlag {
    pub const fn new() -> Self {
        Self {
            green: AtomicBool::new(false),
        }
    }

    /// Nur von der Ampel-Steuerung aufrufen
    pub fn set_green(&self, green: bool) {
        self.green.store(green, Ordering::Release);
    }

    pub fn is_green(&self) -> bool {
        self.green.load(Ordering::Acquire)
    }
}

impl Default for LightFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Roh-Bitmaske der berührten Sensorflächen (Bit n = Fläche n)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchMask(pub u8);

impl TouchMask {
    pub const NONE: TouchMask = TouchMask(0);

    /// Mindestens eine Fläche berührt
    pub fn any(self) -> bool {
        self.0 != 0
    }

    pub fn count(self) -> u8 {
        touched_count(self.0)
    }
}

/// Anzahl gesetzter Bits in der Maske (0..=8)
///
/// # Beispiele
///
/// ```
/// # use ampel_core::touched_count;
/// assert_eq!(touched_count(0b1010_0001), 3);
/// ```
pub fn touched_count(mask: u8) -> u8 {
    mask.count_ones() as u8
}
