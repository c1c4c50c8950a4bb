//! Button sampling and press-and-release input capture.

use crate::types::Symbol;

/// Trait for abstracting the two game buttons.
///
/// Implement this for your input hardware (GPIO reads, matrix scan,
/// simulator). Each call samples the instantaneous state of one button;
/// debouncing is handled by the capture loop, not the implementation.
pub trait ButtonReader {
    /// Returns true while the given button is held down.
    fn is_pressed(&mut self, button: Symbol) -> bool;
}

/// Trait for abstracting the two binary indicators.
///
/// Implement this for your indicator hardware (GPIO-driven LEDs, simulator).
/// Handle any hardware errors internally - this method cannot fail.
pub trait IndicatorDriver {
    /// Switches one indicator on or off.
    fn set(&mut self, indicator: Symbol, on: bool);
}

/// Captures one symbol, blocking until a full press-and-release cycle.
///
/// Polls both buttons; the first one observed pressed selects the symbol,
/// with `Right` checked before `Left` so a simultaneous press resolves to
/// `Right`. While the button is held its indicator stays lit and the poll
/// spins until release, which debounces the press. The indicator is
/// extinguished before the symbol is returned.
///
/// There is no timeout: with no press this call blocks forever.
pub fn capture_one<B, I>(buttons: &mut B, indicators: &mut I) -> Symbol
where
    B: ButtonReader,
    I: IndicatorDriver,
{
    let symbol = loop {
        if buttons.is_pressed(Symbol::Right) {
            break Symbol::Right;
        }
        if buttons.is_pressed(Symbol::Left) {
            break Symbol::Left;
        }
    };

    indicators.set(symbol, true);
    while buttons.is_pressed(symbol) {}
    indicators.set(symbol, false);

    symbol
}
