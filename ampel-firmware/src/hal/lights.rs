// Signallampen über drei GPIO-Ausgänge
//
// Die Lampen hängen active-high an den Pins, daher reicht ein einfaches
// Level-Mapping. Es gibt kein Rücklesen der Ausgänge.

use ampel_core::{IndicatorLights, Lamp};
use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

/// Real Hardware Lights
///
/// Alle drei Lampen starten dunkel (Level::Low).
pub struct GpioLights<'a> {
    green: Output<'a>,
    yellow: Output<'a>,
    red: Output<'a>,
}

impl<'a> GpioLights<'a> {
    /// Erstellt die drei Ausgänge
    ///
    /// # Parameter
    /// - `green`, `yellow`, `red`: GPIO-Pins der Lampen (siehe config.rs)
    pub fn new(
        green: impl OutputPin + 'a,
        yellow: impl OutputPin + 'a,
        red: impl OutputPin + 'a,
    ) -> Self {
        let config = OutputConfig::default();
        Self {
            green: Output::new(green, Level::Low, config),
            yellow: Output::new(yellow, Level::Low, config),
            red: Output::new(red, Level::Low, config),
        }
    }
}

impl<'a> IndicatorLights for GpioLights<'a> {
    fn set(&mut self, lamp: Lamp, on: bool) {
        let output = match lamp {
            Lamp::Green => &mut self.green,
            Lamp::Yellow => &mut self.yellow,
            Lamp::Red => &mut self.red,
        };
        output.set_level(if on { Level::High } else { Level::Low });
    }
}
