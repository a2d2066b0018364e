//! MVC Pong entry point
//!
//! Opens the window, then runs update (Controller) and draw (View) once per frame.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use mvc_pong::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use mvc_pong::platform::{FrameClock, InputState};
use mvc_pong::renderer::{RenderState, draw};
use mvc_pong::sim::{GameEvent, GameState, tick};
use mvc_pong::{PongError, Settings};

/// Game instance holding all state
struct Game {
    settings: Settings,
    state: GameState,
    input: InputState,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Fatal error raised inside the event loop, reported after it exits
    error: Option<PongError>,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let state = GameState::new(settings.seed.unwrap_or_else(clock_seed), settings.speed_slider);
        log::info!("Game initialized with seed: {}", state.seed);

        Self {
            state,
            settings,
            input: InputState::new(),
            clock: FrameClock::new(),
            window: None,
            render_state: None,
            error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PongError> {
        let scale = self.settings.window_scale as f64;
        let attributes = Window::default_attributes()
            .with_title("Pong - MVC")
            .with_inner_size(winit::dpi::LogicalSize::new(
                SCREEN_WIDTH as f64 * scale,
                SCREEN_HEIGHT as f64 * scale,
            ));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let render_state = pollster::block_on(RenderState::new(window.clone(), self.settings.vsync))?;
        log::info!("Using adapter: {}", render_state.adapter_name);

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.clock = FrameClock::new();
        Ok(())
    }

    /// One frame: Controller update, then View draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let dt = self.clock.tick();
        if let Some(fps) = self.clock.record_frame(dt) {
            if self.settings.show_fps {
                log::info!("FPS: {:.1}", fps);
            }
        }

        let input = self.input.take_frame_input(&render_state.viewport);
        for event in tick(&mut self.state, &input, dt) {
            log_event(&self.state, event);
        }

        if self.state.exit_requested {
            event_loop.exit();
            return;
        }

        match render_state.render(&draw(&self.state)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Failed to start: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                self.input.key(code, state, repeat);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.mouse_button(button, state);
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn log_event(state: &GameState, event: GameEvent) {
    match event {
        GameEvent::Scored { side } => log::info!(
            "{:?} scores ({} - {})",
            side,
            state.player_score,
            state.computer_score
        ),
        GameEvent::PauseToggled { paused } => {
            log::info!("{}", if paused { "Paused" } else { "Resumed" })
        }
        GameEvent::GameReset => log::info!("Game restarted"),
        GameEvent::QuitRequested => log::info!("Quit requested"),
        GameEvent::SpeedChanged { slider } => log::debug!(
            "Ball speed slider {:.2} ({:.0} px/s)",
            slider,
            state.base_ball_speed()
        ),
        GameEvent::PaddleHit { side } => log::debug!("{:?} paddle hit", side),
        GameEvent::WallBounce => log::debug!("Wall bounce"),
    }
}

/// Seed from the wall clock when the settings don't pin one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<(), PongError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("MVC Pong starting...");

    let settings = Settings::load();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(settings);
    event_loop.run_app(&mut game)?;

    if let Some(e) = game.error.take() {
        return Err(e);
    }
    log::info!(
        "Final score: {} - {}",
        game.state.player_score,
        game.state.computer_score
    );

    // Remember the ball speed for next time
    if game.state.speed_slider() != game.settings.speed_slider {
        game.settings.speed_slider = game.state.speed_slider();
        if let Err(e) = game.settings.save_to(&Settings::path()) {
            log::warn!("{e}");
        }
    }
    Ok(())
}
