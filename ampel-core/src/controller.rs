//! Ampel-Steuerung (Zustandsmaschine der Phasen)
//!
//! Jeder Schritt ist "Zustand ändern, dann feste Zeit warten". Die Steuerung
//! ist bewusst single-threaded; gewartet wird über `DelayNs`, damit im
//! Firmware-Build `embassy_time::Delay` und im Test eine virtuelle Uhr
//! eingesetzt werden kann.
//!
//! Zyklus:
//! Rot (10 s) → Rot-Gelb (2 s) → Grün (bis Berührung + 5 s) → Gelb (2 s) → Rot ...

use embedded_hal_async::delay::DelayNs;

use crate::config::{
    CROSSING_BANK_MS, RED_HOLD_MS, RED_YELLOW_HOLD_MS, TOUCH_POLL_MS, YELLOW_HOLD_MS,
};
use crate::traits::{IndicatorLights, TouchSensor};
use crate::types::{LightFlag, LightPhase, TouchMask};

pub struct CrossingController<'a, S, L> {
    sensor: S,
    lights: L,
    light_green: &'a LightFlag,
    phase: LightPhase,
}

impl<'a, S: TouchSensor, L: IndicatorLights> CrossingController<'a, S, L> {
    /// Übernimmt Sensor und Lampen
    ///
    /// Setzt noch keine Lampe - das passiert erst mit dem ersten Rot-Zyklus.
    pub fn new(sensor: S, lights: L, light_green: &'a LightFlag) -> Self {
        Self {
            sensor,
            lights,
            light_green,
            phase: LightPhase::INITIAL,
        }
    }

    pub fn phase(&self) -> LightPhase {
        self.phase
    }

    pub fn lights(&self) -> &L {
        &self.lights
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Rot → Rot-Gelb → Grün, danach einen veralteten Touch-Wert verwerfen
    ///
    /// Berührungen während Rot/Rot-Gelb lösen dadurch bei Grün nicht sofort
    /// eine neue Anforderung aus.
    pub async fn run_initial_red_cycle<D: DelayNs>(&mut self, delay: &mut D) {
        self.enter(LightPhase::Red);
        delay.delay_ms(RED_HOLD_MS).await;

        self.enter(LightPhase::RedYellowApproach);
        delay.delay_ms(RED_YELLOW_HOLD_MS).await;

        self.enter(LightPhase::Green);

        // Drain: genau ein Lesevorgang, Ergebnis wird verworfen
        match self.sensor.touched_mask() {
            Ok(stale) if stale.any() => debug!("Crossing: drained stale touch {=u8:#x}", stale.0),
            Ok(_) => {}
            Err(_) => warn!("Crossing: touch read failed during drain"),
        }
    }

    /// Blockiert, bis mindestens eine Fläche berührt wird
    ///
    /// Abfrage alle 50 ms; gibt die erkannte Maske zurück.
    pub async fn wait_for_touch<D: DelayNs>(&mut self, delay: &mut D) -> TouchMask {
        loop {
            let mask = self.poll_touch();
            if mask.any() {
                return mask;
            }
            delay.delay_ms(TOUCH_POLL_MS).await;
        }
    }

    /// Anforderung bearbeiten: Grün noch 5 s halten, dann Gelb für 2 s
    ///
    /// Endet in Gelb; der nächste Rot-Zyklus schließt sich an.
    pub async fn serve_crossing_request<D: DelayNs>(&mut self, delay: &mut D) {
        delay.delay_ms(CROSSING_BANK_MS).await;

        self.enter(LightPhase::YellowApproach);
        delay.delay_ms(YELLOW_HOLD_MS).await;
    }

    /// Endlosschleife der Ampel
    pub async fn run<D: DelayNs>(&mut self, delay: &mut D) -> ! {
        self.run_initial_red_cycle(delay).await;
        loop {
            let mask = self.wait_for_touch(delay).await;
            info!("Crossing: touched! ({=u8} pads)", mask.count());

            self.serve_crossing_request(delay).await;
            self.run_initial_red_cycle(delay).await;
        }
    }

    fn poll_touch(&mut self) -> TouchMask {
        // Lesefehler zur Laufzeit gelten als "keine Berührung"
        self.sensor.touched_mask().unwrap_or_else(|_| {
            warn!("Crossing: touch read failed");
            TouchMask::NONE
        })
    }

    /// Phase setzen: Lampen schalten, dann das Grün-Flag für den Summer
    fn enter(&mut self, phase: LightPhase) {
        self.phase = phase;
        self.lights.show(phase.lamps());
        self.light_green.set_green(phase.is_green());
        info!("Crossing: phase {}", phase);
    }
}
