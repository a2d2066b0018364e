//! Frame timing

use std::time::Instant;

/// How often the FPS counter reports (seconds)
const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Measures the time between frames and counts frames per second
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    frame_count: u32,
    fps_timer: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_frame: now,
            frame_count: 0,
            fps_timer: 0.0,
        }
    }

    /// Seconds since the previous call (or since creation)
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta
    }

    /// Count a frame; returns the new FPS figure whenever it is refreshed
    pub fn record_frame(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.fps_timer += delta;

        if self.fps_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_timer;
            self.frame_count = 0;
            self.fps_timer = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
