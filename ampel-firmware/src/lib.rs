// Library-Root: Hardware-Anbindung und Tasks der Fußgängerampel
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ampel-core
pub use ampel_core::{BuzzerScheduler, Cap1188, CrossingController, LightFlag, LightPhase};

use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;

use crate::hal::{GpioLights, LedcTone};

// ============================================================================
// Geteilter Zustand
// ============================================================================

/// "Ampel ist grün" - geschrieben von der Ampel-Steuerung, gelesen vom
/// Summer-Alarm. Atomar, kann also nie halb geschrieben gelesen werden.
pub static LIGHT_IS_GREEN: LightFlag = LightFlag::new();

// ============================================================================
// Type-Aliase für die konkreten Hardware-Typen
// ============================================================================
//
// Embassy Tasks dürfen nicht generisch sein, daher werden die
// Core-Typen hier mit der echten Hardware festgelegt.

/// I2C-Bus zum CAP1188 (blockierend, Transfers dauern < 1 ms)
pub type TouchBus = I2c<'static, Blocking>;

/// Summer-Scheduler mit LEDC-Ausgang
pub type BuzzerSchedulerHw = BuzzerScheduler<'static, LedcTone>;

/// Ampel-Steuerung mit CAP1188 und GPIO-Lampen
pub type CrossingControllerHw = CrossingController<'static, Cap1188<TouchBus>, GpioLights<'static>>;
