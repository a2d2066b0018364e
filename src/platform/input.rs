//! Keyboard and mouse state gathered from window events
//!
//! Events arrive between frames; `take_frame_input` turns them into one
//! `TickInput` per frame. Key presses are edge-triggered and consumed by the
//! snapshot, held keys and the mouse button are level-triggered.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::renderer::Viewport;
use crate::sim::TickInput;

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Pause,
    Quit,
    Restart,
}

impl Action {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Action::Up),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Action::Down),
            KeyCode::KeyP => Some(Action::Pause),
            KeyCode::KeyQ | KeyCode::Escape => Some(Action::Quit),
            KeyCode::KeyR => Some(Action::Restart),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Movement keys currently down; two keys share each direction
    held_keys: HashSet<KeyCode>,
    pause_pressed: bool,
    quit_pressed: bool,
    restart_pressed: bool,
    /// Cursor in physical window pixels
    cursor: Vec2,
    left_button: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keyboard event; returns true if the key is bound
    pub fn key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> bool {
        let Some(action) = Action::from_key(code) else {
            return false;
        };
        let pressed = state.is_pressed();

        match action {
            Action::Up | Action::Down => {
                if pressed {
                    self.held_keys.insert(code);
                } else {
                    self.held_keys.remove(&code);
                }
            }
            // Toggles fire once per physical press
            Action::Pause => self.pause_pressed |= pressed && !repeat,
            Action::Quit => self.quit_pressed |= pressed && !repeat,
            Action::Restart => self.restart_pressed |= pressed && !repeat,
        }
        true
    }

    pub fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.left_button = state.is_pressed();
        }
    }

    /// True while any key bound to `action` is held
    fn is_held(&self, action: Action) -> bool {
        self.held_keys
            .iter()
            .any(|&code| Action::from_key(code) == Some(action))
    }

    /// Drop held keys and buttons (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.left_button = false;
    }

    /// Snapshot for this frame; clears the edge-triggered presses
    pub fn take_frame_input(&mut self, viewport: &Viewport) -> TickInput {
        let input = TickInput {
            pause: self.pause_pressed,
            quit: self.quit_pressed,
            restart: self.restart_pressed,
            up: self.is_held(Action::Up),
            down: self.is_held(Action::Down),
            mouse_pos: viewport.window_to_game(self.cursor),
            mouse_down: self.left_button,
        };
        self.pause_pressed = false;
        self.quit_pressed = false;
        self.restart_pressed = false;
        input
    }
}
