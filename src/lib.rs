#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Combination`**: the fixed secret sequence of 16 symbols for one game
//! - **`Symbol`**: one binary choice (`Left`/`Right`), naming a button/indicator pair
//! - **`GlyphPattern`**: raw segment-enable values for one display frame
//! - **`Readout`**: what the display should show (a round number or the loss indicator)
//! - **`RoundEngine`**: drives one game through seeding, playback, capture and verification
//! - **`DelayProvider`** / **`TimeDuration`**: traits to implement for your timing system
//! - **`IndicatorDriver`**, **`SegmentDisplay`**, **`ButtonReader`**: traits to implement
//!   for your indicator, display and button hardware
//!
//! The crate contains no hardware bring-up: clock trees, pin muxing and
//! display-controller registers stay behind the peripheral traits, so the
//! game core runs unchanged on real hardware, in a simulator, or under test.

pub mod combination;
pub mod display;
pub mod engine;
pub mod input;
pub mod time;
pub mod types;

pub use combination::{COMBINATION_LEN, Combination, SplitMix64};
pub use display::{GlyphPattern, Readout, SEGMENT_GROUPS, SegmentDisplay, encode};
pub use engine::{EngineError, GamePhase, RoundEngine, Timing};
pub use input::{ButtonReader, IndicatorDriver, capture_one};
pub use time::{DelayProvider, TimeDuration};
pub use types::{GameResult, Seed, Symbol};
