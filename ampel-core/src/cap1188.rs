//! CAP1188 Treiber (8-Kanal kapazitiver Touch-Sensor, I2C)
//!
//! Generisch über `embedded_hal::i2c::I2c` - läuft mit dem ESP32-I2C
//! genauso wie mit einem Mock-Bus in den Host-Tests.

use embedded_hal::i2c::I2c;

use crate::traits::TouchSensor;
use crate::types::TouchMask;

// Register-Adressen (Datenblatt CAP1188, Kapitel 5)
pub const REG_MAIN_CONTROL: u8 = 0x00;
pub const REG_SENSOR_INPUT_STATUS: u8 = 0x03;
pub const REG_SENSITIVITY_CONTROL: u8 = 0x1F;
pub const REG_MULTIPLE_TOUCH_CONFIG: u8 = 0x2A;
pub const REG_STANDBY_CONFIG: u8 = 0x41;
pub const REG_LED_LINKING: u8 = 0x72;
pub const REG_PRODUCT_ID: u8 = 0xFD;
pub const REG_MANUFACTURER_ID: u8 = 0xFE;
pub const REG_REVISION: u8 = 0xFF;

/// INT-Bit im Main Control Register
pub const MAIN_CONTROL_INT: u8 = 0x01;

pub const PRODUCT_ID: u8 = 0x50;
pub const MANUFACTURER_ID: u8 = 0x5D;
pub const REVISION: u8 = 0x83;

/// Größte gültige Empfindlichkeit (3 Bit)
pub const MAX_SENSITIVITY: u8 = 0b111;

/// Fehler-Typ für CAP1188-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cap1188Error<E> {
    /// I2C-Transfer fehlgeschlagen
    Bus(E),
    /// Unter der Adresse antwortet kein CAP1188
    WrongDevice {
        product_id: u8,
        manufacturer_id: u8,
        revision: u8,
    },
    /// Empfindlichkeit außerhalb 0..=7
    SensitivityOutOfRange(u8),
}

/// Kodiert die Empfindlichkeit für Register 0x1F
///
/// Die 3 Bit landen in B6..B4, B7 und B3..B0 bleiben 0.
///
/// ```
/// # use ampel_core::cap1188::sensitivity_register_value;
/// assert_eq!(sensitivity_register_value(5), Some(0b0101_0000));
/// assert_eq!(sensitivity_register_value(8), None);
/// ```
pub fn sensitivity_register_value(level: u8) -> Option<u8> {
    if level > MAX_SENSITIVITY {
        return None;
    }
    Some(level << 4)
}

pub struct Cap1188<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Cap1188<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Prüft die Geräte-IDs und setzt die Grundkonfiguration
    pub fn begin(&mut self) -> Result<(), Cap1188Error<I2C::Error>> {
        let product_id = self.read_register(REG_PRODUCT_ID)?;
        let manufacturer_id = self.read_register(REG_MANUFACTURER_ID)?;
        let revision = self.read_register(REG_REVISION)?;
        debug!(
            "CAP1188: product {=u8:#x}, manufacturer {=u8:#x}, revision {=u8:#x}",
            product_id,
            manufacturer_id,
            revision
        );

        if product_id != PRODUCT_ID || manufacturer_id != MANUFACTURER_ID || revision != REVISION {
            return Err(Cap1188Error::WrongDevice {
                product_id,
                manufacturer_id,
                revision,
            });
        }

        // Mehrfach-Berührungen erlauben
        self.write_register(REG_MULTIPLE_TOUCH_CONFIG, 0x00)?;
        // LEDs des Breakouts folgen den Touch-Eingängen
        self.write_register(REG_LED_LINKING, 0xFF)?;
        // Standby: Mittelung über Summe, 8 Samples
        self.write_register(REG_STANDBY_CONFIG, 0x30)?;
        Ok(())
    }

    /// Setzt die Empfindlichkeit (0 = am empfindlichsten, 7 = am wenigsten)
    ///
    /// Werte außerhalb 0..=7 werden ohne Bus-Zugriff abgelehnt.
    pub fn set_sensitivity(&mut self, level: u8) -> Result<(), Cap1188Error<I2C::Error>> {
        let Some(value) = sensitivity_register_value(level) else {
            warn!("CAP1188: sensitivity {=u8} out of range", level);
            return Err(Cap1188Error::SensitivityOutOfRange(level));
        };
        self.write_register(REG_SENSITIVITY_CONTROL, value)?;
        Ok(())
    }

    /// Liest den Touch-Status und quittiert ihn
    ///
    /// Der CAP1188 hält gesetzte Bits, bis das INT-Bit gelöscht wird.
    pub fn touched(&mut self) -> Result<TouchMask, Cap1188Error<I2C::Error>> {
        let status = self.read_register(REG_SENSOR_INPUT_STATUS)?;
        if status != 0 {
            let main = self.read_register(REG_MAIN_CONTROL)?;
            self.write_register(REG_MAIN_CONTROL, main & !MAIN_CONTROL_INT)?;
        }
        Ok(TouchMask(status))
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Cap1188Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(Cap1188Error::Bus)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Cap1188Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(Cap1188Error::Bus)
    }
}

impl<I2C: I2c> TouchSensor for Cap1188<I2C> {
    type Error = Cap1188Error<I2C::Error>;

    fn touched_mask(&mut self) -> Result<TouchMask, Self::Error> {
        self.touched()
    }
}

/// Bring-up beim Booten: Gerät prüfen, dann Empfindlichkeit setzen
///
/// Jeder Fehler ist fatal - der Aufrufer soll danach nicht weitermachen.
pub fn init_touch_sensor<I2C: I2c>(
    i2c: I2C,
    address: u8,
    sensitivity: u8,
) -> Result<Cap1188<I2C>, Cap1188Error<I2C::Error>> {
    let mut sensor = Cap1188::new(i2c, address);
    sensor.begin()?;
    sensor.set_sensitivity(sensitivity)?;
    info!("CAP1188: ready, sensitivity {=u8}", sensitivity);
    Ok(sensor)
}
