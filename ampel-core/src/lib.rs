//! Ampel Core - Plattform-unabhängige Logik und Traits
//!
//! Diese Crate enthält KEINE ESP32-Dependencies.
//! Sie definiert Traits, die beiden Zustandsmaschinen (Ampel + Summer)
//! und den CAP1188-Treiber auf Basis von `embedded-hal`.

#![no_std]

// Muss vor allen anderen Modulen stehen (Logging-Makros, textueller Scope)
#[macro_use]
mod fmt;

pub mod boot;
pub mod buzzer;
pub mod cap1188;
pub mod config;
pub mod controller;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use boot::boot;
pub use buzzer::{BuzzerScheduler, next_interval_us};
pub use cap1188::{Cap1188, Cap1188Error, init_touch_sensor};
pub use controller::CrossingController;
pub use traits::{IndicatorLights, ToneOutput, TouchSensor};
pub use types::{BuzzerState, Lamp, LampPattern, LightFlag, LightPhase, TouchMask, touched_count};
