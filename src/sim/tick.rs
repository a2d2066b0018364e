//! Per-frame simulation tick
//!
//! The Controller: applies input, AI, ball physics and scoring to the game state.

use glam::Vec2;

use super::collision::{Rect, reflect_off_walls};
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pause toggle (pressed this frame)
    pub pause: bool,
    /// Quit (pressed this frame)
    pub quit: bool,
    /// Restart with zeroed scores (pressed this frame)
    pub restart: bool,
    /// Move player paddle up (held)
    pub up: bool,
    /// Move player paddle down (held)
    pub down: bool,
    /// Cursor in game coordinates
    pub mouse_pos: Vec2,
    /// Left mouse button held
    pub mouse_down: bool,
}

/// Hit box of the speed slider, including the vertical grab padding
pub fn slider_grab_rect() -> Rect {
    Rect::new(
        Vec2::new(SLIDER_X, SLIDER_Y),
        Vec2::new(SLIDER_WIDTH, SLIDER_HEIGHT),
    )
    .padded(Vec2::new(0.0, SLIDER_GRAB_PADDING))
}

/// Advance the game state by one frame of `dt` seconds
///
/// Returns the events that happened, in order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        state.paused = !state.paused;
        events.push(GameEvent::PauseToggled {
            paused: state.paused,
        });
    }

    if input.quit {
        state.exit_requested = true;
        events.push(GameEvent::QuitRequested);
    }

    if input.restart {
        state.reset_game();
        events.push(GameEvent::GameReset);
    }

    // Slider works while paused too
    update_slider(state, input, &mut events);

    if state.paused {
        return events;
    }

    let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };

    move_player(state, input, dt);
    move_computer(state, dt);

    // Ball physics
    state.ball.pos += state.ball.vel * dt;
    if reflect_off_walls(
        &mut state.ball.pos,
        &mut state.ball.vel,
        BALL_SIZE,
        MENU_HEIGHT,
        SCREEN_HEIGHT,
    ) {
        events.push(GameEvent::WallBounce);
    }

    for side in [Side::Player, Side::Computer] {
        if paddle_collision(state, side) {
            events.push(GameEvent::PaddleHit { side });
        }
    }

    // Scoring
    if state.ball.pos.x < -BALL_SIZE {
        state.award_point(Side::Computer);
        events.push(GameEvent::Scored {
            side: Side::Computer,
        });
    } else if state.ball.pos.x > SCREEN_WIDTH {
        state.award_point(Side::Player);
        events.push(GameEvent::Scored { side: Side::Player });
    }

    events
}

fn update_slider(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if !input.mouse_down {
        state.slider_dragging = false;
        return;
    }

    if !state.slider_dragging && slider_grab_rect().contains(input.mouse_pos) {
        state.slider_dragging = true;
    }

    if state.slider_dragging {
        let value = (input.mouse_pos.x - SLIDER_X) / SLIDER_WIDTH;
        let before = state.speed_slider();
        state.set_speed_slider(value);
        if state.speed_slider() != before {
            events.push(GameEvent::SpeedChanged {
                slider: state.speed_slider(),
            });
        }
    }
}

fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = state.paddle_speed * dt;
    if input.up {
        state.player.pos.y -= step;
    }
    if input.down {
        state.player.pos.y += step;
    }
    state.player.clamp_to_court();
}

/// Simple AI: chase the ball's vertical centre, a little slower than the player
fn move_computer(state: &mut GameState, dt: f32) {
    let paddle_center = state.computer.center_y();
    let ball_center = state.ball.center_y();
    let step = state.paddle_speed * AI_SPEED_FACTOR * dt;

    if paddle_center < ball_center - AI_DEAD_ZONE {
        state.computer.pos.y += step;
    } else if paddle_center > ball_center + AI_DEAD_ZONE {
        state.computer.pos.y -= step;
    }
    state.computer.clamp_to_court();
}

/// Bounce the ball off a paddle if they overlap; speeds everything up on a hit
fn paddle_collision(state: &mut GameState, side: Side) -> bool {
    let paddle = *state.paddle(side);
    if !state.ball.rect().overlaps(&paddle.rect()) {
        return false;
    }

    state.ball.vel.x = -state.ball.vel.x;
    // Push out of the paddle
    state.ball.pos.x = match side {
        Side::Player => paddle.pos.x + PADDLE_WIDTH + 1.0,
        Side::Computer => paddle.pos.x - BALL_SIZE - 1.0,
    };

    state.ball.vel *= PADDLE_HIT_BOOST;
    state.paddle_speed *= PADDLE_HIT_BOOST;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn state() -> GameState {
        GameState::new(12345, DEFAULT_SPEED_SLIDER)
    }

    /// Ball parked mid-court moving straight right, far from everything
    fn quiet_ball(state: &mut GameState) {
        state.ball.pos = Vec2::new(390.0, 250.0);
        state.ball.vel = Vec2::new(100.0, 0.0);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = state();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        let events = tick(&mut state, &pause, DT);
        assert!(state.paused);
        assert_eq!(events, vec![GameEvent::PauseToggled { paused: true }]);

        let frozen = (state.player, state.computer, state.ball);
        let held = TickInput {
            up: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &held, DT);
        }
        assert_eq!((state.player, state.computer, state.ball), frozen);

        // Unpause
        tick(&mut state, &pause, DT);
        assert!(!state.paused);
        assert_ne!(state.ball.pos, frozen.2.pos);
    }

    #[test]
    fn test_quit_sets_exit_flag() {
        let mut state = state();
        let events = tick(
            &mut state,
            &TickInput {
                quit: true,
                ..Default::default()
            },
            DT,
        );
        assert!(state.exit_requested);
        assert!(events.contains(&GameEvent::QuitRequested));
    }

    #[test]
    fn test_restart_zeroes_scores() {
        let mut state = state();
        state.player_score = 4;
        state.computer_score = 6;
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(state.player_score, 0);
        assert_eq!(state.computer_score, 0);
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let mut state = state();
        quiet_ball(&mut state);
        let start = state.player.pos.y;
        let up = TickInput {
            up: true,
            ..Default::default()
        };

        tick(&mut state, &up, DT);
        assert!(state.player.pos.y < start);

        for _ in 0..200 {
            quiet_ball(&mut state);
            tick(&mut state, &up, DT);
        }
        assert_eq!(state.player.pos.y, MENU_HEIGHT);

        let down = TickInput {
            down: true,
            ..Default::default()
        };
        for _ in 0..200 {
            quiet_ball(&mut state);
            tick(&mut state, &down, DT);
        }
        assert_eq!(state.player.pos.y, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_ai_tracks_ball() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 440.0);
        state.ball.vel = Vec2::ZERO;
        let start = state.computer.pos.y;
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.computer.pos.y > start);

        state.ball.pos = Vec2::new(400.0, 45.0);
        let start = state.computer.pos.y;
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.computer.pos.y < start);
    }

    #[test]
    fn test_ai_dead_zone() {
        let mut state = state();
        state.ball.vel = Vec2::ZERO;
        state.ball.pos.x = 400.0;
        state.ball.pos.y = state.computer.center_y() - BALL_SIZE / 2.0 + AI_DEAD_ZONE * 0.5;
        let start = state.computer.pos.y;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.computer.pos.y, start);
    }

    #[test]
    fn test_ai_is_slower_than_player() {
        let mut state = state();
        state.ball.vel = Vec2::ZERO;
        state.ball.pos = Vec2::new(400.0, 440.0);
        let player_start = state.player.pos.y;
        let computer_start = state.computer.pos.y;
        tick(
            &mut state,
            &TickInput {
                down: true,
                ..Default::default()
            },
            DT,
        );
        let player_step = state.player.pos.y - player_start;
        let computer_step = state.computer.pos.y - computer_start;
        assert!((computer_step - player_step * AI_SPEED_FACTOR).abs() < 1e-3);
    }

    #[test]
    fn test_ball_reflects_off_top_wall() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, MENU_HEIGHT + 1.0);
        state.ball.vel = Vec2::new(100.0, -300.0);

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball.pos.y, MENU_HEIGHT);
        assert!(state.ball.vel.y > 0.0);
        assert!(events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_ball_reflects_off_bottom_wall() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, SCREEN_HEIGHT - BALL_SIZE - 1.0);
        state.ball.vel = Vec2::new(100.0, 300.0);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball.pos.y, SCREEN_HEIGHT - BALL_SIZE);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_player_paddle_hit() {
        let mut state = state();
        let paddle = state.player;
        state.ball.pos = Vec2::new(paddle.pos.x + PADDLE_WIDTH + 2.0, paddle.center_y());
        state.ball.vel = Vec2::new(-300.0, 0.0);
        let speed = state.paddle_speed;

        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::PaddleHit { side: Side::Player }));
        assert!(state.ball.vel.x > 0.0);
        assert!((state.ball.vel.x - 300.0 * PADDLE_HIT_BOOST).abs() < 1e-3);
        assert_eq!(state.ball.pos.x, paddle.pos.x + PADDLE_WIDTH + 1.0);
        assert!((state.paddle_speed - speed * PADDLE_HIT_BOOST).abs() < 1e-3);
        assert!(!state.ball.rect().overlaps(&state.player.rect()));
    }

    #[test]
    fn test_computer_paddle_hit() {
        let mut state = state();
        let paddle = state.computer;
        state.ball.pos = Vec2::new(paddle.pos.x - BALL_SIZE - 2.0, paddle.center_y() - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(300.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::PaddleHit {
            side: Side::Computer
        }));
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.pos.x, state.computer.pos.x - BALL_SIZE - 1.0);
        assert!(!state.ball.rect().overlaps(&state.computer.rect()));
    }

    #[test]
    fn test_computer_scores_on_left_exit() {
        let mut state = state();
        state.ball.pos = Vec2::new(-BALL_SIZE - 1.0, 50.0 + MENU_HEIGHT);
        state.ball.vel = Vec2::new(-300.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.computer_score, 1);
        assert_eq!(state.player_score, 0);
        assert!(events.contains(&GameEvent::Scored {
            side: Side::Computer
        }));
        assert_eq!(state.ball.pos, Ball::centered().pos);
        assert!((state.ball.vel.length() - state.base_ball_speed()).abs() < 0.01);
    }

    #[test]
    fn test_player_scores_on_right_exit() {
        let mut state = state();
        state.player_score = 2;
        state.computer_score = 5;
        state.ball.pos = Vec2::new(SCREEN_WIDTH - 1.0, 50.0 + MENU_HEIGHT);
        state.ball.vel = Vec2::new(600.0, 0.0);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.player_score, 3);
        assert_eq!(state.computer_score, 5);
        assert_eq!(state.ball.pos, Ball::centered().pos);
    }

    #[test]
    fn test_slider_drag_sets_speed() {
        let mut state = state();
        let input = TickInput {
            mouse_down: true,
            mouse_pos: Vec2::new(SLIDER_X + SLIDER_WIDTH * 0.75, SLIDER_Y + 5.0),
            ..Default::default()
        };

        let events = tick(&mut state, &input, DT);
        assert!((state.speed_slider() - 0.75).abs() < 1e-5);
        assert!(state.slider_dragging);
        assert!(matches!(events[0], GameEvent::SpeedChanged { .. }));
        assert!((state.ball.vel.length() - state.base_ball_speed()).abs() < 0.05);
    }

    #[test]
    fn test_slider_ignores_clicks_elsewhere() {
        let mut state = state();
        let input = TickInput {
            mouse_down: true,
            mouse_pos: Vec2::new(300.0, 300.0),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.speed_slider(), DEFAULT_SPEED_SLIDER);
        assert!(!state.slider_dragging);
    }

    #[test]
    fn test_slider_drag_continues_outside_and_clamps() {
        let mut state = state();
        let grab = TickInput {
            mouse_down: true,
            mouse_pos: Vec2::new(SLIDER_X + 10.0, SLIDER_Y),
            ..Default::default()
        };
        tick(&mut state, &grab, DT);

        let drag = TickInput {
            mouse_pos: Vec2::new(SCREEN_WIDTH + 500.0, 300.0),
            ..grab
        };
        tick(&mut state, &drag, DT);
        assert_eq!(state.speed_slider(), 1.0);

        let release = TickInput::default();
        tick(&mut state, &release, DT);
        assert!(!state.slider_dragging);
    }

    #[test]
    fn test_slider_works_while_paused() {
        let mut state = state();
        state.paused = true;
        let input = TickInput {
            mouse_down: true,
            mouse_pos: Vec2::new(SLIDER_X, SLIDER_Y),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.speed_slider(), 0.0);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut state = state();
        quiet_ball(&mut state);
        tick(&mut state, &TickInput::default(), 5.0);
        assert!((state.ball.pos.x - (390.0 + 100.0 * MAX_FRAME_DT)).abs() < 1e-3);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, 0.4);
        let mut state2 = GameState::new(99999, 0.4);

        let inputs = [
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..500 {
            for input in &inputs {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.computer, state2.computer);
        assert_eq!(state1.player_score, state2.player_score);
        assert_eq!(state1.computer_score, state2.computer_score);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            -2000.0f32..2000.0,
            -2000.0f32..2000.0,
            any::<bool>(),
        )
            .prop_map(|(restart, up, down, mx, my, mouse_down)| TickInput {
                pause: false,
                quit: false,
                restart,
                up,
                down,
                mouse_pos: Vec2::new(mx, my),
                mouse_down,
            })
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_court(
            seed in any::<u64>(),
            frames in prop::collection::vec((arb_input(), 0.0f32..0.5), 1..200),
        ) {
            let mut state = GameState::new(seed, 0.5);
            for (input, dt) in &frames {
                tick(&mut state, input, *dt);
                for paddle in [state.player, state.computer] {
                    prop_assert!(paddle.pos.y >= MENU_HEIGHT);
                    prop_assert!(paddle.pos.y <= SCREEN_HEIGHT - PADDLE_HEIGHT);
                }
            }
        }

        #[test]
        fn prop_slider_stays_in_unit_range(
            frames in prop::collection::vec(arb_input(), 1..100),
        ) {
            let mut state = GameState::new(1, DEFAULT_SPEED_SLIDER);
            for input in &frames {
                tick(&mut state, input, DT);
                prop_assert!((0.0..=1.0).contains(&state.speed_slider()));
            }
        }

        #[test]
        fn prop_pause_freezes_everything(
            seed in any::<u64>(),
            frames in prop::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..1.0), 1..50),
        ) {
            let mut state = GameState::new(seed, 0.5);
            state.paused = true;
            let frozen = (state.player, state.computer, state.ball);
            for (up, down, dt) in &frames {
                let input = TickInput { up: *up, down: *down, ..Default::default() };
                tick(&mut state, &input, *dt);
            }
            prop_assert_eq!((state.player, state.computer, state.ball), frozen);
        }
    }
}
