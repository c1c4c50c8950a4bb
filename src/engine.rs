//! Memory-game round engine with state management and timing control.
//!
//! Provides [`RoundEngine`] which owns the four peripheral capabilities and
//! all game state, driving a game through seeding, playback, capture and
//! verification. Every wait is either a blocking delay or a busy-poll of the
//! buttons; the engine is single-threaded and fully cooperative.

use crate::combination::{COMBINATION_LEN, Combination};
use crate::display::{GlyphPattern, Readout, SegmentDisplay, encode};
use crate::input::{self, ButtonReader, IndicatorDriver};
use crate::time::{DelayProvider, TimeDuration};
use crate::types::{GameResult, Seed, Symbol};
use heapless::Vec;

/// The current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// Waiting for the starting press that fixes the seed.
    Seeding,
    /// Playing back the combination prefix for the current round.
    Playing,
    /// Collecting the player's answer for the current round.
    Capturing,
    /// Ready to compare the answer against the combination.
    Verifying,
    /// The player mismatched. Terminal; only a reset exits.
    Lost,
    /// All 16 rounds reproduced. Terminal.
    Won,
}

/// Gameplay pacing configuration.
///
/// Durations are data rather than spin-loop counts, so the pacing survives a
/// change of clock speed or delay implementation.
#[derive(Debug, Clone, Copy)]
pub struct Timing<D: TimeDuration> {
    /// How long each played-back symbol's indicator stays lit.
    pub playback_on: D,

    /// Dark gap between played-back symbols.
    pub playback_gap: D,

    /// Pause after a successful verification before the next round.
    pub round_pause: D,
}

impl<D: TimeDuration> Default for Timing<D> {
    /// 750 ms symbol blink, 250 ms gap, 1 s between rounds.
    fn default() -> Self {
        Self {
            playback_on: D::from_millis(750),
            playback_gap: D::from_millis(250),
            round_pause: D::from_millis(1000),
        }
    }
}

/// Errors that can occur during engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Operation called from an invalid phase.
    ///
    /// The `expected` field describes which phase is valid for this operation.
    InvalidPhase {
        /// Human-readable description of the expected phase, e.g. "Playing"
        expected: &'static str,
        /// The actual current phase
        actual: GamePhase,
    },

    /// No combination has been generated.
    MissingCombination,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidPhase { expected, actual } => {
                write!(
                    f,
                    "invalid phase: expected {}, but engine is in {:?}",
                    expected, actual
                )
            }
            EngineError::MissingCombination => {
                write!(f, "no combination generated")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// Drives one game of the two-button memory sequence.
///
/// The engine owns the peripherals and all game state: the immutable
/// combination, the per-round input buffer, the round counter and the phase.
/// Lifecycle methods validate the phase and return [`EngineError`] on misuse,
/// so a scrambled call order surfaces as an error instead of corrupt state.
///
/// # Type Parameters
/// * `D` - Duration type
/// * `P` - Delay provider implementation type
/// * `I` - Indicator driver implementation type
/// * `S` - Segment display implementation type
/// * `B` - Button reader implementation type
pub struct RoundEngine<D, P, I, S, B>
where
    D: TimeDuration,
    P: DelayProvider<D>,
    I: IndicatorDriver,
    S: SegmentDisplay,
    B: ButtonReader,
{
    delay: P,
    indicators: I,
    display: S,
    buttons: B,
    timing: Timing<D>,
    phase: GamePhase,
    round: u8,
    combination: Option<Combination>,
    input: Vec<Symbol, COMBINATION_LEN>,
}

impl<D, P, I, S, B> RoundEngine<D, P, I, S, B>
where
    D: TimeDuration,
    P: DelayProvider<D>,
    I: IndicatorDriver,
    S: SegmentDisplay,
    B: ButtonReader,
{
    /// Creates a new engine in the `Seeding` phase with indicators off and a
    /// blank display.
    pub fn new(delay: P, mut indicators: I, mut display: S, buttons: B, timing: Timing<D>) -> Self {
        indicators.set(Symbol::Left, false);
        indicators.set(Symbol::Right, false);
        display.write(GlyphPattern::BLANK);

        Self {
            delay,
            indicators,
            display,
            buttons,
            timing,
            phase: GamePhase::Seeding,
            round: 1,
            combination: None,
            input: Vec::new(),
        }
    }

    /// Blocks until a button is pressed, harvesting the seed.
    ///
    /// Counts polling iterations (wrapping) while both buttons read released;
    /// the first observed press fixes the count as the seed and doubles as the
    /// start-game trigger. The press is not waited out here - round 1 playback
    /// provides the release gap.
    ///
    /// Must be called from `Seeding`. The phase only advances in [`begin`],
    /// so a deterministic caller may skip this and supply its own seed.
    ///
    /// [`begin`]: RoundEngine::begin
    pub fn await_start(&mut self) -> Result<Seed, EngineError> {
        if self.phase != GamePhase::Seeding {
            return Err(EngineError::InvalidPhase {
                expected: "Seeding",
                actual: self.phase,
            });
        }

        let mut seed: Seed = 0;
        while !self.buttons.is_pressed(Symbol::Right) && !self.buttons.is_pressed(Symbol::Left) {
            seed = seed.wrapping_add(1);
        }

        Ok(seed)
    }

    /// Generates the combination for `seed` and starts round 1.
    ///
    /// Must be called from `Seeding`. The combination is generated exactly
    /// once per game and is immutable afterwards.
    pub fn begin(&mut self, seed: Seed) -> Result<(), EngineError> {
        if self.phase != GamePhase::Seeding {
            return Err(EngineError::InvalidPhase {
                expected: "Seeding",
                actual: self.phase,
            });
        }

        let combination = Combination::generate(seed);

        #[cfg(feature = "defmt")]
        defmt::debug!("seed {=u64} -> combination {}", seed, combination);

        self.combination = Some(combination);
        self.round = 1;
        self.input.clear();
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Shows the round number and plays back the combination prefix.
    ///
    /// Each of the first `round` symbols lights its indicator for
    /// `playback_on`, goes dark, then waits `playback_gap` before the next -
    /// strictly sequential. Advances to `Capturing` with a cleared input
    /// buffer.
    ///
    /// Must be called from `Playing`.
    pub fn play_round(&mut self) -> Result<(), EngineError> {
        if self.phase != GamePhase::Playing {
            return Err(EngineError::InvalidPhase {
                expected: "Playing",
                actual: self.phase,
            });
        }

        let combination = self.combination.ok_or(EngineError::MissingCombination)?;

        self.display.write(encode(Readout::Round(self.round)));

        for &symbol in &combination.symbols()[..usize::from(self.round)] {
            self.indicators.set(symbol, true);
            self.delay.delay(self.timing.playback_on);
            self.indicators.set(symbol, false);
            self.delay.delay(self.timing.playback_gap);
        }

        self.input.clear();
        self.phase = GamePhase::Capturing;
        Ok(())
    }

    /// Collects one symbol per combination index for the current round.
    ///
    /// Blocks in [`input::capture_one`] for each symbol; with no player input
    /// this never returns. Advances to `Verifying` once `round` symbols are
    /// buffered.
    ///
    /// Must be called from `Capturing`.
    pub fn capture_round(&mut self) -> Result<(), EngineError> {
        if self.phase != GamePhase::Capturing {
            return Err(EngineError::InvalidPhase {
                expected: "Capturing",
                actual: self.phase,
            });
        }

        while self.input.len() < usize::from(self.round) {
            let symbol = input::capture_one(&mut self.buttons, &mut self.indicators);
            // Capacity is COMBINATION_LEN and round never exceeds it.
            let _ = self.input.push(symbol);
        }

        self.phase = GamePhase::Verifying;
        Ok(())
    }

    /// Compares the captured answer against the combination prefix.
    ///
    /// Any mismatch writes the loss glyph and enters the terminal `Lost`
    /// phase. A full match pauses `round_pause` and advances to the next
    /// round, or enters `Won` after round 16 with both indicators lit.
    ///
    /// Must be called from `Verifying`.
    pub fn verify_round(&mut self) -> Result<GameResult, EngineError> {
        if self.phase != GamePhase::Verifying {
            return Err(EngineError::InvalidPhase {
                expected: "Verifying",
                actual: self.phase,
            });
        }

        let combination = self.combination.ok_or(EngineError::MissingCombination)?;
        let expected = &combination.symbols()[..usize::from(self.round)];

        if self.input.as_slice() != expected {
            self.display.write(encode(Readout::Loss));
            self.phase = GamePhase::Lost;
            return Ok(GameResult::Lost);
        }

        if usize::from(self.round) < COMBINATION_LEN {
            self.delay.delay(self.timing.round_pause);
            self.round += 1;
            self.phase = GamePhase::Playing;
            Ok(GameResult::InProgress)
        } else {
            self.indicators.set(Symbol::Left, true);
            self.indicators.set(Symbol::Right, true);
            self.phase = GamePhase::Won;
            Ok(GameResult::Won)
        }
    }

    /// Runs a complete game: seed harvest, then rounds until a terminal phase.
    ///
    /// Returns `Ok(GameResult::Won)` after all 16 rounds verify correct; the
    /// round-16 glyph stays on the display and both indicators are lit. On a
    /// mismatch this method never returns - the loss glyph is rewritten
    /// indefinitely and only a hardware reset exits.
    pub fn run(&mut self) -> Result<GameResult, EngineError> {
        let seed = self.await_start()?;
        self.begin(seed)?;

        loop {
            self.play_round()?;
            self.capture_round()?;
            match self.verify_round()? {
                GameResult::InProgress => {}
                GameResult::Won => return Ok(GameResult::Won),
                GameResult::Lost => self.halt_lost(),
            }
        }
    }

    /// Permanent-halt failure state: repaint the loss glyph forever.
    fn halt_lost(&mut self) -> ! {
        loop {
            self.display.write(encode(Readout::Loss));
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the current round, `1..=16`. Meaningful once a game has begun.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Returns the game outcome as of the last verification.
    pub fn result(&self) -> GameResult {
        match self.phase {
            GamePhase::Lost => GameResult::Lost,
            GamePhase::Won => GameResult::Won,
            _ => GameResult::InProgress,
        }
    }

    /// Returns the combination for this game, if one has been generated.
    pub fn combination(&self) -> Option<&Combination> {
        self.combination.as_ref()
    }
}
