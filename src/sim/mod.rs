//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - `state`: the Model (owned game state, reset rules)
//! - `tick`: the Controller (one call per frame)
//! - `collision`: box overlap and wall reflection helpers

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, reflect_off_walls};
pub use state::{Ball, GameEvent, GameState, Paddle, Side, slider_to_speed};
pub use tick::{TickInput, slider_grab_rect, tick};
