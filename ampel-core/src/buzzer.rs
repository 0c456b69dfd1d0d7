//! Summer-Taktgeber
//!
//! Ein einziger, sich selbst neu planender Alarm schaltet den Ton um.
//! Bei Grün entsteht ein seltenes "Piep ... lange Pause ... Piep",
//! bei Rot und in den Übergängen ein schnelles, gleichmäßiges An/Aus.
//!
//! Der Scheduler kennt keine Uhr. Er rechnet Deadlines in Mikrosekunden
//! relativ zum Start des Alarms; wer ihn antreibt (Embassy-Task, Test-Uhr),
//! wartet bis zur jeweils zurückgegebenen Deadline und ruft dann
//! [`BuzzerScheduler::on_alarm_fired`] auf.

use crate::config::{BUZZER_FREQ_HZ, BUZZER_GREEN_OFF_US, BUZZER_GREEN_ON_US, BUZZER_RED_US};
use crate::traits::ToneOutput;
use crate::types::{BuzzerState, LightFlag};

/// Wartezeit bis zum nächsten Umschalten
///
/// `state` ist der Zustand NACH dem Umschalten.
pub fn next_interval_us(light_green: bool, state: BuzzerState) -> u64 {
    match (light_green, state) {
        (true, BuzzerState::Sounding) => BUZZER_GREEN_ON_US,
        (true, BuzzerState::Silent) => BUZZER_GREEN_OFF_US,
        (false, _) => BUZZER_RED_US,
    }
}

pub struct BuzzerScheduler<'a, T: ToneOutput> {
    tone: T,
    state: BuzzerState,
    deadline_us: u64,
    light_green: &'a LightFlag,
}

impl<'a, T: ToneOutput> BuzzerScheduler<'a, T> {
    pub fn new(tone: T, light_green: &'a LightFlag) -> Self {
        Self {
            tone,
            state: BuzzerState::Silent,
            deadline_us: 0,
            light_green,
        }
    }

    /// Startet den Alarm und feuert sofort einmal
    ///
    /// Danach klingt der Summer bereits. Gibt die erste Deadline zurück.
    /// Darf genau einmal aufgerufen werden, ein zweiter Aufruf würde den
    /// Takt neu beginnen.
    pub fn initialize(&mut self) -> u64 {
        debug_assert_eq!(self.deadline_us, 0, "buzzer alarm already armed");
        self.state = BuzzerState::Silent;
        self.on_alarm_fired()
    }

    /// Alarm-Handler: Ton umschalten und nächste Deadline berechnen
    ///
    /// Die neue Deadline ist alte Deadline + Intervall, nie "jetzt" +
    /// Intervall. Latenz des Handlers summiert sich dadurch nicht auf;
    /// kommt ein Alarm zu spät, holt der nächste die verlorene Zeit ein.
    pub fn on_alarm_fired(&mut self) -> u64 {
        self.state = self.state.toggled();
        match self.state {
            BuzzerState::Sounding => self.tone.start(BUZZER_FREQ_HZ),
            BuzzerState::Silent => self.tone.stop(),
        }

        let interval = next_interval_us(self.light_green.is_green(), self.state);
        self.deadline_us += interval;

        trace!("Buzzer: next alarm at {=u64} us", self.deadline_us);
        self.deadline_us
    }

    pub fn deadline_us(&self) -> u64 {
        self.deadline_us
    }

    pub fn state(&self) -> BuzzerState {
        self.state
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }
}
