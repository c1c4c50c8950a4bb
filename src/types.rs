//! Core types shared across the game engine.

/// One binary choice in a combination, naming one button/indicator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// The left button and its indicator.
    Left,

    /// The right button and its indicator.
    Right,
}

impl Symbol {
    /// Returns the opposite symbol.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Symbol::Left => Symbol::Right,
            Symbol::Right => Symbol::Left,
        }
    }
}

/// Seed value harvested before combination generation.
///
/// Any value is valid; equal seeds produce equal combinations.
pub type Seed = u64;

/// Outcome of a game as observed after a verification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameResult {
    /// The round verified correct and the game continues.
    InProgress,

    /// The player reproduced all 16 rounds. Terminal.
    Won,

    /// The player mismatched the combination. Terminal, no recovery path.
    Lost,
}
