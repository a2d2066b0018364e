//! MVC Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Model (game state) and Controller (per-frame update rules)
//! - `renderer`: View (draw list) and the wgpu back end that draws it
//! - `platform`: Window input translated into per-frame input snapshots
//! - `settings`: JSON configuration
//! - `error`: Error types for startup and configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::PongError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in game pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Menu bar across the top; the playable band starts below it
    pub const MENU_HEIGHT: f32 = 40.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal gap between a paddle and its screen edge
    pub const PADDLE_MARGIN: f32 = 50.0;

    /// Ball is a square of this side length
    pub const BALL_SIZE: f32 = 20.0;

    /// Ball speed range covered by the speed slider (pixels/s)
    pub const BALL_SPEED_MIN: f32 = 200.0;
    pub const BALL_SPEED_MAX: f32 = 1000.0;
    /// Slider position at startup (=> 400 px/s)
    pub const DEFAULT_SPEED_SLIDER: f32 = 0.25;

    /// Speed boost when ball hits a paddle (multiplicative, ball and paddles)
    pub const PADDLE_HIT_BOOST: f32 = 1.05;

    /// AI paddle moves at this fraction of the player's speed
    pub const AI_SPEED_FACTOR: f32 = 0.85;
    /// AI ignores ball offsets smaller than this (pixels)
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Speed slider hit box in the menu bar
    pub const SLIDER_X: f32 = 580.0;
    pub const SLIDER_Y: f32 = 13.0;
    pub const SLIDER_WIDTH: f32 = 180.0;
    pub const SLIDER_HEIGHT: f32 = 14.0;
    /// Extra vertical grab margin around the slider
    pub const SLIDER_GRAB_PADDING: f32 = 10.0;

    /// Largest frame delta fed to the simulation, prevents tunneling after stalls
    pub const MAX_FRAME_DT: f32 = 0.1;
}
