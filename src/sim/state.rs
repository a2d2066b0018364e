//! Game state and core simulation types
//!
//! The Model: plain data plus the reset rules. Nothing here reads input or draws.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// Which side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, keyboard controlled
    Player,
    /// Right paddle, AI controlled
    Computer,
}

/// Something notable that happened during a tick (for logging/audio hooks)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PauseToggled { paused: bool },
    QuitRequested,
    GameReset,
    SpeedChanged { slider: f32 },
    WallBounce,
    PaddleHit { side: Side },
    Scored { side: Side },
}

/// A paddle; `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
}

impl Paddle {
    /// Paddle starting spot for a side, vertically centred on the screen
    pub fn spawn(side: Side) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Computer => SCREEN_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        let y = (SCREEN_HEIGHT - PADDLE_HEIGHT) / 2.0;
        Self { pos: Vec2::new(x, y) }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }

    /// Vertical centre of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + PADDLE_HEIGHT / 2.0
    }

    /// Keep the paddle inside the playable band
    pub fn clamp_to_court(&mut self) {
        self.pos.y = self.pos.y.clamp(MENU_HEIGHT, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }
}

/// The ball; `pos` is the top-left corner of its square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Centre of the screen
    pub fn centered() -> Self {
        Self {
            pos: Vec2::new((SCREEN_WIDTH - BALL_SIZE) / 2.0, (SCREEN_HEIGHT - BALL_SIZE) / 2.0),
            vel: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(BALL_SIZE))
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + BALL_SIZE / 2.0
    }
}

/// Ball speed for a slider position
#[inline]
pub fn slider_to_speed(slider: f32) -> f32 {
    BALL_SPEED_MIN + slider.clamp(0.0, 1.0) * (BALL_SPEED_MAX - BALL_SPEED_MIN)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created with (logged for reproducibility)
    pub seed: u64,
    rng: Pcg32,
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub computer_score: u32,
    pub paused: bool,
    pub exit_requested: bool,
    /// Speed slider value, always in [0, 1]
    speed_slider: f32,
    /// Mouse drag currently owned by the slider
    pub slider_dragging: bool,
    /// Current paddle speed in pixels/s (grows with each paddle hit)
    pub paddle_speed: f32,
}

impl GameState {
    /// Create a new game with the given seed and initial slider position
    pub fn new(seed: u64, speed_slider: f32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Paddle::spawn(Side::Player),
            computer: Paddle::spawn(Side::Computer),
            ball: Ball::centered(),
            player_score: 0,
            computer_score: 0,
            paused: false,
            exit_requested: false,
            speed_slider: speed_slider.clamp(0.0, 1.0),
            slider_dragging: false,
            paddle_speed: 0.0,
        };
        state.reset_game();
        state
    }

    #[inline]
    pub fn speed_slider(&self) -> f32 {
        self.speed_slider
    }

    /// Set the slider (clamped) and resync ball and paddle speed to it
    pub fn set_speed_slider(&mut self, value: f32) {
        self.speed_slider = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

        let speed = self.base_ball_speed();
        if self.ball.vel != Vec2::ZERO {
            self.ball.vel = self.ball.vel.normalize() * speed;
        }
        self.paddle_speed = speed;
    }

    /// Ball speed selected by the slider
    #[inline]
    pub fn base_ball_speed(&self) -> f32 {
        slider_to_speed(self.speed_slider)
    }

    /// Zero both scores and start a fresh round
    pub fn reset_game(&mut self) {
        self.player_score = 0;
        self.computer_score = 0;
        self.reset_round();
    }

    /// Put paddles and ball back to their starting spots with a new serve direction
    pub fn reset_round(&mut self) {
        self.player = Paddle::spawn(Side::Player);
        self.computer = Paddle::spawn(Side::Computer);
        self.ball = Ball::centered();

        let dir_x = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dir_y = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed = self.base_ball_speed();

        self.ball.vel = Vec2::new(dir_x, dir_y).normalize() * speed;
        self.paddle_speed = speed;
    }

    /// Credit a point and start the next round
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player_score += 1,
            Side::Computer => self.computer_score += 1,
        }
        self.reset_round();
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(7, DEFAULT_SPEED_SLIDER);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.computer_score, 0);
        assert!(!state.paused);
        assert!(!state.exit_requested);

        assert_eq!(state.player.pos.x, PADDLE_MARGIN);
        assert_eq!(state.computer.pos.x, SCREEN_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH);
        assert_eq!(state.player.pos.y, state.computer.pos.y);

        let speed = state.ball.vel.length();
        assert!((speed - 400.0).abs() < 0.01);
        assert!((state.ball.vel.x.abs() - state.ball.vel.y.abs()).abs() < 0.01);
        assert_eq!(state.paddle_speed, state.base_ball_speed());
    }

    #[test]
    fn test_round_starts_centred_on_screen() {
        let state = GameState::new(7, DEFAULT_SPEED_SLIDER);
        assert_eq!(state.player.pos.y, 190.0);
        assert_eq!(state.computer.pos.y, 190.0);
        assert_eq!(state.ball.pos, Vec2::new(390.0, 230.0));
        // Centring on the full screen still leaves room under the menu
        assert!(state.player.pos.y >= MENU_HEIGHT);
    }

    #[test]
    fn test_reset_round_keeps_scores() {
        let mut state = GameState::new(1, 0.5);
        state.player_score = 3;
        state.computer_score = 2;
        state.ball.pos = Vec2::new(-100.0, 300.0);
        state.player.pos.y = MENU_HEIGHT;

        state.reset_round();
        assert_eq!(state.player_score, 3);
        assert_eq!(state.computer_score, 2);
        assert_eq!(state.ball.pos, Ball::centered().pos);
        assert_eq!(state.player, Paddle::spawn(Side::Player));
    }

    #[test]
    fn test_reset_game_clears_scores_keeps_slider() {
        let mut state = GameState::new(1, 0.8);
        state.player_score = 5;
        state.computer_score = 9;
        state.reset_game();
        assert_eq!(state.player_score, 0);
        assert_eq!(state.computer_score, 0);
        assert_eq!(state.speed_slider(), 0.8);
    }

    #[test]
    fn test_serve_direction_varies() {
        let mut state = GameState::new(42, 0.5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            state.reset_round();
            seen.insert((state.ball.vel.x > 0.0, state.ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_set_speed_slider_clamps_and_rescales() {
        let mut state = GameState::new(3, 0.0);
        let dir = state.ball.vel.normalize();

        state.set_speed_slider(2.5);
        assert_eq!(state.speed_slider(), 1.0);
        assert!((state.ball.vel.length() - BALL_SPEED_MAX).abs() < 0.01);
        assert!((state.ball.vel.normalize() - dir).length() < 1e-5);
        assert_eq!(state.paddle_speed, BALL_SPEED_MAX);

        state.set_speed_slider(-1.0);
        assert_eq!(state.speed_slider(), 0.0);

        state.set_speed_slider(f32::NAN);
        assert_eq!(state.speed_slider(), 0.0);
    }

    #[test]
    fn test_slider_leaves_stopped_ball_stopped() {
        let mut state = GameState::new(3, 0.5);
        state.ball.vel = Vec2::ZERO;
        state.set_speed_slider(0.9);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.paddle_speed, slider_to_speed(0.9));
    }

    #[test]
    fn test_award_point() {
        let mut state = GameState::new(5, 0.5);
        state.award_point(Side::Computer);
        state.award_point(Side::Computer);
        state.award_point(Side::Player);
        assert_eq!(state.player_score, 1);
        assert_eq!(state.computer_score, 2);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(99999, 0.5);
        let b = GameState::new(99999, 0.5);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.seed, 99999);
    }
}
