//! Recording hardware mock shared by the unit tests

use heapless::{String, Vec};
use quittime_hal::{Chime, Indicator, RealTimeClock, SegmentDisplay, TickAnimation, VoltageSensor};

use crate::config::Settings;
use crate::datetime::DateTime;
use crate::face::format::FRAME_WIDTH;
use crate::face::{Event, Movement};

const MAX_OPS: usize = 64;

/// One call made by the face into the hardware
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Text { column: u8, text: String<FRAME_WIDTH> },
    Char { column: u8, character: char },
    Set(Indicator),
    Clear(Indicator),
    Colon,
    StartTick(u32),
    StopTick,
    AdcEnable,
    AdcRead,
    AdcDisable,
    Signal,
    Default(Event),
}

/// Watch whose calls land in an operation log and a ten-cell screen
pub struct MockWatch {
    pub register: u32,
    pub millivolts: u16,
    pub cells: [char; FRAME_WIDTH],
    pub indicators: [bool; 5],
    pub tick_running: bool,
    pub default_result: bool,
    pub ops: Vec<Op, MAX_OPS>,
}

impl MockWatch {
    pub fn new(now: DateTime) -> Self {
        Self {
            register: now.to_register(),
            millivolts: 3000,
            cells: [' '; FRAME_WIDTH],
            indicators: [false; 5],
            tick_running: false,
            default_result: true,
            ops: Vec::new(),
        }
    }

    pub fn set_time(&mut self, now: DateTime) {
        self.register = now.to_register();
    }

    pub fn screen(&self) -> String<FRAME_WIDTH> {
        self.cells.iter().copied().collect()
    }

    pub fn indicator(&self, indicator: Indicator) -> bool {
        self.indicators[indicator as usize]
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn count(&self, matches: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| matches(op)).count()
    }

    pub fn text_ops(&self) -> usize {
        self.count(|op| matches!(op, Op::Text { .. }))
    }

    pub fn char_ops(&self) -> usize {
        self.count(|op| matches!(op, Op::Char { .. }))
    }

    fn record(&mut self, op: Op) {
        if self.ops.push(op).is_err() {
            panic!("mock operation log full; call clear_ops between steps");
        }
    }
}

impl RealTimeClock for MockWatch {
    fn read_register(&mut self) -> u32 {
        self.register
    }
}

impl SegmentDisplay for MockWatch {
    fn display_string(&mut self, text: &str, column: u8) {
        for (offset, character) in text.chars().enumerate() {
            if let Some(cell) = self.cells.get_mut(usize::from(column) + offset) {
                *cell = character;
            }
        }
        let mut recorded = String::new();
        recorded.push_str(text).unwrap();
        self.record(Op::Text { column, text: recorded });
    }

    fn display_character(&mut self, character: char, column: u8) {
        if let Some(cell) = self.cells.get_mut(usize::from(column)) {
            *cell = character;
        }
        self.record(Op::Char { column, character });
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.indicators[indicator as usize] = true;
        self.record(Op::Set(indicator));
    }

    fn clear_indicator(&mut self, indicator: Indicator) {
        self.indicators[indicator as usize] = false;
        self.record(Op::Clear(indicator));
    }

    fn set_colon(&mut self) {
        self.record(Op::Colon);
    }
}

impl TickAnimation for MockWatch {
    fn start_tick_animation(&mut self, interval_ms: u32) {
        self.tick_running = true;
        self.record(Op::StartTick(interval_ms));
    }

    fn stop_tick_animation(&mut self) {
        self.tick_running = false;
        self.record(Op::StopTick);
    }

    fn is_tick_animation_running(&self) -> bool {
        self.tick_running
    }
}

impl VoltageSensor for MockWatch {
    fn enable(&mut self) {
        self.record(Op::AdcEnable);
    }

    fn disable(&mut self) {
        self.record(Op::AdcDisable);
    }

    fn read_millivolts(&mut self) -> u16 {
        self.record(Op::AdcRead);
        self.millivolts
    }
}

impl Chime for MockWatch {
    fn play_signal(&mut self) {
        self.record(Op::Signal);
    }
}

impl Movement for MockWatch {
    fn default_loop_handler(&mut self, event: Event, _settings: &Settings) -> bool {
        self.record(Op::Default(event));
        self.default_result
    }
}
