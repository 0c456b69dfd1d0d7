// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus ampel-core für die echte
// ESP32-C6 Hardware. Der Touch-Sensor braucht hier nichts: der CAP1188-Treiber
// in ampel-core läuft direkt auf dem esp-hal I2C.

pub mod lights;
pub mod tone;

pub use lights::GpioLights;
pub use tone::{LedcTone, ToneError};
