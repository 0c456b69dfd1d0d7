//! Bring-up der Ampel beim Booten
//!
//! Erst wird der Touch-Sensor geprüft und konfiguriert, erst danach gehen
//! die Lampen an die Steuerung. Schlägt der Sensor fehl, wird keine Lampe
//! geschaltet und es entsteht keine Steuerung. Der Aufrufer bleibt dann
//! stehen (Fail-Stop, kein Retry).

use embedded_hal::i2c::I2c;

use crate::cap1188::{Cap1188, Cap1188Error, init_touch_sensor};
use crate::controller::CrossingController;
use crate::traits::IndicatorLights;
use crate::types::LightFlag;

/// Sensor hochfahren und die Ampel-Steuerung zusammensetzen
///
/// # Parameter
/// - `i2c`: Bus zum CAP1188
/// - `address`: I2C-Adresse des CAP1188
/// - `sensitivity`: Empfindlichkeit 0..=7
/// - `lights`: Lampen (werden erst vom ersten Rot-Zyklus geschaltet)
/// - `light_green`: Flag für den Summer
///
/// # Fehler
/// Jeder Fehler aus `begin()` oder `set_sensitivity()`. Die Lampen werden in
/// dem Fall nicht angefasst.
pub fn boot<'a, I2C: I2c, L: IndicatorLights>(
    i2c: I2C,
    address: u8,
    sensitivity: u8,
    lights: L,
    light_green: &'a LightFlag,
) -> Result<CrossingController<'a, Cap1188<I2C>, L>, Cap1188Error<I2C::Error>> {
    let sensor = init_touch_sensor(i2c, address, sensitivity)
        .inspect_err(|_| warn!("Boot: touch sensor bring-up failed"))?;

    info!("Boot: crossing controller ready");
    Ok(CrossingController::new(sensor, lights, light_green))
}
