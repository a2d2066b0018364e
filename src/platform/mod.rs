//! Platform abstraction layer
//!
//! Translates window events into simulation input and tracks frame timing.

pub mod input;
pub mod time;

pub use input::{Action, InputState};
pub use time::FrameClock;
