// Zeit- und Gerätekonstanten der Fußgängerampel
//
// Alle Werte sind fest einkompiliert - es gibt keine Laufzeit-Konfiguration.

// ============================================================================
// Ampel-Phasen
// ============================================================================

/// Dauer der Rot-Phase in Millisekunden
pub const RED_HOLD_MS: u32 = 10_000;

/// Dauer der Rot-Gelb-Phase in Millisekunden
pub const RED_YELLOW_HOLD_MS: u32 = 2_000;

/// Grün bleibt nach einer Anforderung noch so lange stehen (Mindest-Grünzeit)
pub const CROSSING_BANK_MS: u32 = 5_000;

/// Dauer der Gelb-Phase in Millisekunden
pub const YELLOW_HOLD_MS: u32 = 2_000;

/// Abfrage-Intervall des Touch-Sensors während Grün
pub const TOUCH_POLL_MS: u32 = 50;

// ============================================================================
// Summer (Buzzer)
// ============================================================================

/// Hörbare Frequenz des Summers in Hz
pub const BUZZER_FREQ_HZ: u32 = 500;

/// Summer an bei Grün (Mikrosekunden)
pub const BUZZER_GREEN_ON_US: u64 = 500_000;

/// Summer aus bei Grün (Mikrosekunden)
pub const BUZZER_GREEN_OFF_US: u64 = 1_500_000;

/// Gleichmäßiges An/Aus bei Rot und in den Übergängen (Mikrosekunden)
pub const BUZZER_RED_US: u64 = 250_000;

// ============================================================================
// CAP1188 Touch-Sensor
// ============================================================================

/// I2C-Adresse des CAP1188 (AD-Pin offen)
pub const CAP1188_ADDRESS: u8 = 0x28;

/// Empfindlichkeit 0 (höchste) bis 7 (niedrigste)
pub const CAP1188_SENSITIVITY: u8 = 5;
