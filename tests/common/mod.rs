//! Shared test infrastructure for sequence-recall integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::rc::Rc;

use sequence_recall::{
    ButtonReader, DelayProvider, GlyphPattern, IndicatorDriver, SegmentDisplay, Symbol,
    TimeDuration,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

// ============================================================================
// Mock Peripherals
// ============================================================================
//
// The engine takes its peripherals by value, so each mock keeps its record
// behind a shared handle; a clone kept by the test observes everything the
// engine does.

/// Mock delay provider that records every requested wait
#[derive(Clone, Default)]
pub struct MockDelay {
    waits: Rc<RefCell<Vec<TestDuration>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<TestDuration> {
        self.waits.borrow().clone()
    }
}

impl DelayProvider<TestDuration> for MockDelay {
    fn delay(&mut self, duration: TestDuration) {
        self.waits.borrow_mut().push(duration);
    }
}

/// Mock indicator driver recording every on/off transition
#[derive(Clone, Default)]
pub struct MockIndicators {
    events: Rc<RefCell<Vec<(Symbol, bool)>>>,
}

impl MockIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Symbol, bool)> {
        self.events.borrow().clone()
    }

    /// Current state of one indicator (last transition wins, off initially).
    pub fn is_lit(&self, indicator: Symbol) -> bool {
        self.events
            .borrow()
            .iter()
            .rev()
            .find(|(symbol, _)| *symbol == indicator)
            .is_some_and(|&(_, on)| on)
    }
}

impl IndicatorDriver for MockIndicators {
    fn set(&mut self, indicator: Symbol, on: bool) {
        self.events.borrow_mut().push((indicator, on));
    }
}

/// Mock display recording every written pattern
#[derive(Clone, Default)]
pub struct MockDisplay {
    written: Rc<RefCell<Vec<GlyphPattern>>>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<GlyphPattern> {
        self.written.borrow().last().copied()
    }

    pub fn writes(&self) -> Vec<GlyphPattern> {
        self.written.borrow().clone()
    }
}

impl SegmentDisplay for MockDisplay {
    fn write(&mut self, pattern: GlyphPattern) {
        self.written.borrow_mut().push(pattern);
    }
}

// ============================================================================
// Scripted Buttons
// ============================================================================

/// Button reader that delivers a scripted series of press-and-release cycles.
///
/// Both buttons read released for `idle_queries` samples first (this is what
/// seed harvesting counts). After that, each scripted press is recognized on
/// the first sample of its button, holds for `hold_polls` further samples,
/// then releases and the script advances. Samples of the other button always
/// read released.
pub struct ScriptedButtons {
    script: Vec<Symbol>,
    index: usize,
    idle_queries: u32,
    hold_polls: u32,
    remaining_hold: Option<u32>,
}

impl ScriptedButtons {
    pub fn new(script: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            script: script.into_iter().collect(),
            index: 0,
            idle_queries: 0,
            hold_polls: 2,
            remaining_hold: None,
        }
    }

    /// Answers "released" for the first `queries` samples of either button.
    pub fn with_idle_queries(mut self, queries: u32) -> Self {
        self.idle_queries = queries;
        self
    }

    /// How many scripted presses have completed their release.
    pub fn presses_consumed(&self) -> usize {
        self.index
    }
}

impl ButtonReader for ScriptedButtons {
    fn is_pressed(&mut self, button: Symbol) -> bool {
        if self.idle_queries > 0 {
            self.idle_queries -= 1;
            return false;
        }

        let Some(&current) = self.script.get(self.index) else {
            return false;
        };
        if button != current {
            return false;
        }

        match self.remaining_hold {
            // Press recognized.
            None => {
                self.remaining_hold = Some(self.hold_polls);
                true
            }
            // Released; next scripted press becomes current.
            Some(0) => {
                self.remaining_hold = None;
                self.index += 1;
                false
            }
            // Still held.
            Some(polls) => {
                self.remaining_hold = Some(polls - 1);
                true
            }
        }
    }
}
