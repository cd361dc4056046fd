//! Platform abstraction layer
//!
//! Handles the terminal side of the game loop:
//! - Keyboard events to per-tick intents
//! - Frame pacing

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Key, KeyTracker};
