// Projekt-Konfiguration: Hardware-Zuordnungen des Boards
//
// Zeiten und Sensor-Konstanten liegen in ampel_core::config.
#![allow(dead_code)]

pub use ampel_core::config::*;

// ============================================================================
// Signallampen
// ============================================================================

/// GPIO-Pin der grünen Lampe
pub const GREEN_LED_PIN: u8 = 18;

/// GPIO-Pin der gelben Lampe
pub const YELLOW_LED_PIN: u8 = 19;

/// GPIO-Pin der roten Lampe
pub const RED_LED_PIN: u8 = 20;

// ============================================================================
// Summer
// ============================================================================

/// GPIO-Pin des passiven Summers (LEDC-Ausgang)
pub const BUZZER_PIN: u8 = 21;

/// Tastverhältnis in Prozent, solange der Summer klingt
/// 50 % ergibt beim passiven Piezo den lautesten Ton
pub const BUZZER_DUTY_PCT: u8 = 50;

// ============================================================================
// I2C (CAP1188)
// ============================================================================

/// GPIO-Pin für SDA
pub const I2C_SDA_PIN: u8 = 6;

/// GPIO-Pin für SCL
pub const I2C_SCL_PIN: u8 = 7;

/// I2C Taktfrequenz in kHz
/// 100 kHz (Standard Mode) reicht für einen Status-Read alle 50 ms
pub const I2C_FREQUENCY_KHZ: u32 = 100;

// ============================================================================
// Fail-Stop
// ============================================================================

/// Schlaf-Intervall der Endlosschleife nach einem fatalen Init-Fehler
pub const HALT_SLEEP_SECS: u64 = 3600;
