//! Gemeinsame Mocks für die Integration Tests
//!
//! Alle Mocks teilen sich eine virtuelle Uhr (`Rc<Cell<u64>>`, Mikrosekunden),
//! damit Lampen, Sensor und Summer Zeitstempel protokollieren können.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use ampel_core::{
    BuzzerScheduler, BuzzerState, IndicatorLights, Lamp, LampPattern, LightFlag, ToneOutput,
    TouchMask, TouchSensor,
};
use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation};
use embedded_hal_async::delay::DelayNs;

pub type Now = Rc<Cell<u64>>;

pub fn new_clock() -> Now {
    Rc::new(Cell::new(0))
}

pub const fn secs(s: u64) -> u64 {
    s * 1_000_000
}

pub const fn millis(ms: u64) -> u64 {
    ms * 1_000
}

// ============================================================================
// Mock Lights
// ============================================================================

pub struct MockLights {
    now: Now,
    pub current: LampPattern,
    /// (Zeitpunkt, Muster) pro `show()`
    pub history: Vec<(u64, LampPattern)>,
    pub set_count: usize,
}

impl MockLights {
    pub fn new(now: Now) -> Self {
        Self {
            now,
            current: LampPattern::dark(),
            history: Vec::new(),
            set_count: 0,
        }
    }
}

impl IndicatorLights for MockLights {
    fn set(&mut self, lamp: Lamp, on: bool) {
        self.set_count += 1;
        match lamp {
            Lamp::Green => self.current.green = on,
            Lamp::Yellow => self.current.yellow = on,
            Lamp::Red => self.current.red = on,
        }
    }

    fn show(&mut self, pattern: LampPattern) {
        self.set(Lamp::Red, pattern.red);
        self.set(Lamp::Yellow, pattern.yellow);
        self.set(Lamp::Green, pattern.green);
        self.history.push((self.now.get(), self.current));
    }
}

// ============================================================================
// Mock Tone
// ============================================================================

pub struct MockTone {
    now: Now,
    pub sounding: bool,
    pub frequency_hz: Option<u32>,
    /// (Zeitpunkt, klingt danach)
    pub toggles: Vec<(u64, bool)>,
}

impl MockTone {
    pub fn new(now: Now) -> Self {
        Self {
            now,
            sounding: false,
            frequency_hz: None,
            toggles: Vec::new(),
        }
    }
}

impl ToneOutput for MockTone {
    fn start(&mut self, frequency_hz: u32) {
        self.sounding = true;
        self.frequency_hz = Some(frequency_hz);
        self.toggles.push((self.now.get(), true));
    }

    fn stop(&mut self) {
        self.sounding = false;
        self.toggles.push((self.now.get(), false));
    }
}

// ============================================================================
// Touch Sensoren
// ============================================================================

/// Liefert der Reihe nach vorgegebene Masken, danach immer 0
pub struct ScriptedTouchSensor {
    pub script: VecDeque<u8>,
    pub reads: usize,
}

impl ScriptedTouchSensor {
    pub fn new(script: &[u8]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            reads: 0,
        }
    }
}

impl TouchSensor for ScriptedTouchSensor {
    type Error = ();

    fn touched_mask(&mut self) -> Result<TouchMask, ()> {
        self.reads += 1;
        Ok(TouchMask(self.script.pop_front().unwrap_or(0)))
    }
}

/// Berührungen zu festen Zeitpunkten, gelatcht bis zum nächsten Lesen
///
/// Verhält sich wie der CAP1188: ein Lesen liefert alle bis dahin
/// aufgelaufenen Berührungen und quittiert sie.
pub struct TimedTouchSensor {
    now: Now,
    pending: Vec<(u64, u8)>,
    /// (Zeitpunkt, gelesene Maske)
    pub reads: Vec<(u64, u8)>,
    pub fail_reads: bool,
}

impl TimedTouchSensor {
    pub fn new(now: Now, touches: &[(u64, u8)]) -> Self {
        Self {
            now,
            pending: touches.to_vec(),
            reads: Vec::new(),
            fail_reads: false,
        }
    }

    pub fn touch_at(&mut self, at_us: u64, mask: u8) {
        self.pending.push((at_us, mask));
    }
}

impl TouchSensor for TimedTouchSensor {
    type Error = ();

    fn touched_mask(&mut self) -> Result<TouchMask, ()> {
        let now = self.now.get();
        if self.fail_reads {
            return Err(());
        }
        let mut mask = 0u8;
        self.pending.retain(|&(at, m)| {
            if at <= now {
                mask |= m;
                false
            } else {
                true
            }
        });
        self.reads.push((now, mask));
        Ok(TouchMask(mask))
    }
}

// ============================================================================
// Virtuelle Uhr mit Summer-Alarm
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmRecord {
    pub at_us: u64,
    pub state: BuzzerState,
    pub green: bool,
    pub next_us: u64,
}

impl AlarmRecord {
    pub fn interval_us(&self) -> u64 {
        self.next_us - self.at_us
    }
}

/// `DelayNs` auf virtueller Zeit
///
/// Während die Steuerung "schläft", feuert die Uhr alle fälligen
/// Summer-Alarme - wie ein Timer-Interrupt, der den Hauptablauf unterbricht.
/// Ab `limit_us` bleibt jedes Warten für immer hängen (`Pending`).
pub struct SimClock<'a> {
    now: Now,
    flag: &'a LightFlag,
    buzzer: Option<BuzzerScheduler<'a, MockTone>>,
    origin_us: u64,
    next_alarm_us: u64,
    pub holds_ms: Vec<u32>,
    pub alarms: Vec<AlarmRecord>,
    pub limit_us: Option<u64>,
}

impl<'a> SimClock<'a> {
    pub fn new(now: Now, flag: &'a LightFlag) -> Self {
        Self {
            now,
            flag,
            buzzer: None,
            origin_us: 0,
            next_alarm_us: 0,
            holds_ms: Vec::new(),
            alarms: Vec::new(),
            limit_us: None,
        }
    }

    /// Summer anhängen und sofort initialisieren (erste Auslösung bei t = jetzt)
    pub fn with_buzzer(mut self, tone: MockTone) -> Self {
        let origin = self.now.get();
        let mut buzzer = BuzzerScheduler::new(tone, self.flag);
        let first = buzzer.initialize();
        self.alarms.push(AlarmRecord {
            at_us: origin,
            state: buzzer.state(),
            green: self.flag.is_green(),
            next_us: origin + first,
        });
        self.origin_us = origin;
        self.next_alarm_us = origin + first;
        self.buzzer = Some(buzzer);
        self
    }

    pub fn now_us(&self) -> u64 {
        self.now.get()
    }

    pub fn buzzer(&self) -> Option<&BuzzerScheduler<'a, MockTone>> {
        self.buzzer.as_ref()
    }

    pub async fn advance(&mut self, us: u64) {
        let target = self.now.get() + us;
        if let Some(limit) = self.limit_us {
            if target > limit {
                core::future::pending::<()>().await;
            }
        }

        if let Some(buzzer) = self.buzzer.as_mut() {
            while self.next_alarm_us <= target {
                let at = self.next_alarm_us;
                self.now.set(at);
                let green = self.flag.is_green();
                let next = self.origin_us + buzzer.on_alarm_fired();
                self.alarms.push(AlarmRecord {
                    at_us: at,
                    state: buzzer.state(),
                    green,
                    next_us: next,
                });
                self.next_alarm_us = next;
            }
        }
        self.now.set(target);
    }
}

impl DelayNs for SimClock<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.advance(u64::from(ns) / 1_000).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.holds_ms.push(ms);
        self.advance(u64::from(ms) * 1_000).await;
    }
}

// ============================================================================
// Mock I2C Bus (CAP1188)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockI2cError;

impl i2c::Error for MockI2cError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Register-Abbild eines CAP1188
pub struct MockI2c {
    pub address: u8,
    pub registers: HashMap<u8, u8>,
    /// Alle Schreibzugriffe (Register, Wert)
    pub writes: Vec<(u8, u8)>,
    pub reads: Vec<u8>,
    pub fail_all: bool,
    /// Touch-Status (0x03), der nach dem nächsten Quittieren zurückgesetzt wird
    pub latched_touch: u8,
}

impl MockI2c {
    /// Ein gültiger CAP1188 unter Adresse `address`
    pub fn cap1188(address: u8) -> Self {
        let mut registers = HashMap::new();
        registers.insert(0xFD, 0x50);
        registers.insert(0xFE, 0x5D);
        registers.insert(0xFF, 0x83);
        registers.insert(0x00, 0x01);
        Self {
            address,
            registers,
            writes: Vec::new(),
            reads: Vec::new(),
            fail_all: false,
            latched_touch: 0,
        }
    }

    pub fn touch(&mut self, mask: u8) {
        self.latched_touch |= mask;
        // INT-Bit setzt der Chip selbst
        let main = self.registers.get(&0x00).copied().unwrap_or(0);
        self.registers.insert(0x00, main | 0x01);
    }

    pub fn writes_to(&self, register: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(reg, _)| *reg == register)
            .map(|(_, value)| *value)
            .collect()
    }

    fn read_reg(&mut self, register: u8) -> u8 {
        self.reads.push(register);
        if register == 0x03 {
            return self.latched_touch;
        }
        self.registers.get(&register).copied().unwrap_or(0)
    }

    fn write_reg(&mut self, register: u8, value: u8) {
        self.writes.push((register, value));
        if register == 0x00 && value & 0x01 == 0 {
            self.latched_touch = 0;
        }
        self.registers.insert(register, value);
    }
}

impl ErrorType for MockI2c {
    type Error = MockI2cError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail_all || address != self.address {
            return Err(MockI2cError);
        }

        let mut pointer: Option<u8> = None;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let Some((&register, values)) = bytes.split_first() else {
                        continue;
                    };
                    pointer = Some(register);
                    for &value in values {
                        self.write_reg(register, value);
                    }
                }
                Operation::Read(buffer) => {
                    let register = pointer.ok_or(MockI2cError)?;
                    for byte in buffer.iter_mut() {
                        *byte = self.read_reg(register);
                    }
                }
            }
        }
        Ok(())
    }
}
