//! The View: turns game state into an ordered list of draw commands
//!
//! Pure read of the state. No logic, no GPU access.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::*;
use crate::sim::GameState;

/// A primitive draw call, in game pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: [f32; 4],
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        thickness: f32,
        color: [f32; 4],
    },
    /// `pos` is the top of the line; `align` says which point of the line `pos.x` is
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: [f32; 4],
        align: TextAlign,
    },
}

/// Horizontal anchor of a text command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// One frame of drawing: a background color then commands in painter's order
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub clear: [f32; 4],
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: [f32; 4]) {
        self.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Left,
        });
    }

    fn centered_text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: [f32; 4]) {
        self.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Center,
        });
    }

    fn rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        self.push(DrawCmd::Rect { min, size, color });
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub const SCORE_FONT_SIZE: f32 = 40.0;
pub const MENU_FONT_SIZE: f32 = 16.0;
pub const PAUSED_FONT_SIZE: f32 = 50.0;
pub const HINT_FONT_SIZE: f32 = 20.0;
pub const KNOB_RADIUS: f32 = 8.0;
/// Left edge of the speed label in the menu bar
pub const SPEED_LABEL_X: f32 = 450.0;

pub const CONTROLS_TEXT: &str = "CONTROLS: P-PAUSE  R-RESTART  Q-QUIT";
pub const SPEED_LABEL: &str = "BALL SPEED:";
pub const PAUSED_TEXT: &str = "PAUSED";
pub const RESUME_HINT: &str = "PRESS P TO RESUME";

/// Build the draw list for the current state
pub fn draw(state: &GameState) -> DrawList {
    let mut list = DrawList {
        clear: colors::BACKGROUND,
        commands: Vec::with_capacity(16),
    };

    // Net, starting below the menu
    list.push(DrawCmd::Line {
        from: Vec2::new(SCREEN_WIDTH / 2.0, MENU_HEIGHT),
        to: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT),
        thickness: 2.0,
        color: colors::NET,
    });

    // Scores
    let score_y = MENU_HEIGHT + 20.0;
    list.text(
        state.player_score.to_string(),
        Vec2::new(SCREEN_WIDTH / 4.0, score_y),
        SCORE_FONT_SIZE,
        colors::SCORE,
    );
    list.text(
        state.computer_score.to_string(),
        Vec2::new(3.0 * SCREEN_WIDTH / 4.0, score_y),
        SCORE_FONT_SIZE,
        colors::SCORE,
    );

    draw_menu_bar(&mut list, state.speed_slider());

    if state.paused {
        draw_pause_overlay(&mut list);
    }

    list.rect(
        state.player.pos,
        Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        colors::PLAYER_PADDLE,
    );
    list.rect(
        state.computer.pos,
        Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        colors::COMPUTER_PADDLE,
    );

    // Square ball for the retro look
    list.rect(state.ball.pos, Vec2::splat(BALL_SIZE), colors::BALL);

    list
}

fn draw_menu_bar(list: &mut DrawList, slider: f32) {
    list.rect(
        Vec2::ZERO,
        Vec2::new(SCREEN_WIDTH, MENU_HEIGHT),
        colors::MENU_BAR,
    );

    let text_y = (MENU_HEIGHT - MENU_FONT_SIZE) / 2.0;
    list.text(CONTROLS_TEXT, Vec2::new(20.0, text_y), MENU_FONT_SIZE, colors::MENU_TEXT);
    list.text(
        SPEED_LABEL,
        Vec2::new(SPEED_LABEL_X, text_y),
        MENU_FONT_SIZE,
        colors::SLIDER_LABEL,
    );

    // Track
    list.rect(
        Vec2::new(SLIDER_X, SLIDER_Y + 5.0),
        Vec2::new(SLIDER_WIDTH, 4.0),
        colors::SLIDER_TRACK,
    );

    // Knob
    let knob = Vec2::new(SLIDER_X + slider * SLIDER_WIDTH, SLIDER_Y + 7.0);
    list.push(DrawCmd::Circle {
        center: knob,
        radius: KNOB_RADIUS,
        color: colors::SLIDER_KNOB,
    });
    list.push(DrawCmd::CircleOutline {
        center: knob,
        radius: KNOB_RADIUS,
        thickness: 1.5,
        color: colors::SLIDER_KNOB_OUTLINE,
    });
}

fn draw_pause_overlay(list: &mut DrawList) {
    let center_y = MENU_HEIGHT + (SCREEN_HEIGHT - MENU_HEIGHT) / 2.0;

    list.centered_text(
        PAUSED_TEXT,
        Vec2::new(SCREEN_WIDTH / 2.0, center_y - PAUSED_FONT_SIZE - 10.0),
        PAUSED_FONT_SIZE,
        colors::PAUSED,
    );
    list.centered_text(
        RESUME_HINT,
        Vec2::new(SCREEN_WIDTH / 2.0, center_y + 20.0),
        HINT_FONT_SIZE,
        colors::PAUSED_HINT,
    );
}
