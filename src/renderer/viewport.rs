//! Mapping between game pixels and the window
//!
//! The court keeps its aspect ratio; spare window space becomes letterbox bars.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window size in physical pixels
    pub window: Vec2,
    /// Physical pixels per game pixel
    pub scale: f32,
    /// Top-left of the court in physical pixels
    pub offset: Vec2,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let window = Vec2::new(width.max(1) as f32, height.max(1) as f32);
        let scale = (window.x / SCREEN_WIDTH).min(window.y / SCREEN_HEIGHT);
        let offset = (window - Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) * scale) / 2.0;
        Self {
            window,
            scale,
            offset,
        }
    }

    /// Game coordinates to physical window pixels
    #[inline]
    pub fn game_to_window(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    /// Game coordinates (y down) to normalized device coordinates (y up)
    pub fn game_to_ndc(&self, p: Vec2) -> Vec2 {
        let px = self.game_to_window(p);
        Vec2::new(px.x / self.window.x * 2.0 - 1.0, 1.0 - px.y / self.window.y * 2.0)
    }

    /// Physical window position (e.g. the cursor) to game coordinates
    pub fn window_to_game(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }
}
