// Crossing Task - Ampel-Zustandsmaschine
use defmt::info;
use embassy_time::Delay;

use crate::CrossingControllerHw;

/// Crossing Task - läuft für immer
///
/// Alle Wartezeiten laufen über `embassy_time::Delay`, dadurch bekommt der
/// Buzzer-Task während Rot, Gelb und der Touch-Abfrage weiter Rechenzeit.
#[embassy_executor::task]
pub async fn crossing_task(mut controller: CrossingControllerHw) {
    info!("Crossing: starting red cycle");
    let mut delay = Delay;
    controller.run(&mut delay).await
}
