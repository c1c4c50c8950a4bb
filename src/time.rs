//! Time abstraction traits for platform-agnostic timing.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait for abstracting blocking delay sources.
///
/// Implement this for your platform's wait primitive (hardware timer, busy
/// spin, RTOS sleep). Accuracy only needs to be approximate; the game's
/// timings are perceptual, not real-time deadlines.
pub trait DelayProvider<D: TimeDuration> {
    /// Blocks for approximately the given duration.
    fn delay(&mut self, duration: D);
}
