use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{error, info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::content::{ContentDatabase, ContentError};
use crate::{resolve_app_paths, StartupError};

use super::audio::AudioMixer;
use super::game::{Game, UpdateFlow};
use super::geometry::Vec2;
use super::input::InputSnapshot;
use super::metrics::MetricsAccumulator;
use super::rendering::Renderer;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    pub max_ticks_per_frame: u32,
    pub metrics_log_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Flappy".to_string(),
            window_width: 1000,
            window_height: 800,
            target_tps: 60,
            max_frame_delta: Duration::from_millis(250),
            max_ticks_per_frame: 5,
            metrics_log_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("failed to load content: {0}")]
    Content(#[from] ContentError),
    #[error("game boot failed: {0}")]
    Boot(#[source] E),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub fn run_app<G: Game>(config: LoopConfig, mut game: G) -> Result<(), AppError<G::Error>> {
    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        assets_dir = %app_paths.assets_dir.display(),
        "startup"
    );

    let content = ContentDatabase::load(&app_paths.assets_dir)?;
    info!(
        textures = content.texture_count(),
        sounds = content.sound_count(),
        "content_loaded"
    );

    let mut audio = AudioMixer::new();
    let sound_keys: Vec<String> = content.sound_keys().map(ToString::to_string).collect();
    for key in &sound_keys {
        audio.load_clip(key, content.read_sound_bytes(key)?);
    }

    game.boot(&content, &mut audio).map_err(AppError::Boot)?;

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let mut renderer = Renderer::new(Arc::clone(&window), content.texture_paths())
        .map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let target_tps = config.target_tps.max(1);
    let max_frame_delta =
        normalize_non_zero_duration(config.max_frame_delta, Duration::from_millis(250));
    let max_ticks_per_frame = config.max_ticks_per_frame.max(1);
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let fixed_dt = Duration::from_secs_f64(1.0 / target_tps as f64);
    let fixed_dt_seconds = fixed_dt.as_secs_f32();
    let mut input_collector = InputCollector::new(config.window_width, config.window_height);

    info!(
        target_tps,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        max_ticks_per_frame,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        "loop_config"
    );

    let mut accumulator = Duration::ZERO;
    let mut last_frame_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    info!(reason = "window_close", "shutdown_requested");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    input_collector.set_window_size(new_size.width, new_size.height);
                    if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    input_collector.set_window_size(size.width, size.height);
                    if let Err(error) = renderer.resize(size.width, size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input_collector.set_cursor_position_px(position.x as f32, position.y as f32);
                }
                WindowEvent::CursorLeft { .. } => {
                    input_collector.clear_cursor_position();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input_collector.handle_mouse_input(button, state);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input_collector.handle_keyboard_input(&event);
                    if input_collector.quit_requested {
                        info!(reason = "escape_key", "shutdown_requested");
                        window_target.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
                    last_frame_instant = now;

                    let clamped_frame_dt = clamp_frame_delta(raw_frame_dt, max_frame_delta);
                    accumulator = accumulator.saturating_add(clamped_frame_dt);

                    let step_plan = plan_sim_steps(accumulator, fixed_dt, max_ticks_per_frame);
                    for _ in 0..step_plan.ticks_to_run {
                        let input_snapshot = input_collector.snapshot_for_tick();
                        match game.update(fixed_dt_seconds, &input_snapshot, &mut audio) {
                            Ok(UpdateFlow::Continue) => {}
                            Ok(UpdateFlow::Exit) => {
                                info!(reason = "game_exit", "shutdown_requested");
                                window_target.exit();
                            }
                            Err(game_error) => {
                                error!(error = %game_error, "game_update_failed");
                                window_target.exit();
                            }
                        }
                        metrics_accumulator.record_tick();
                    }
                    accumulator = step_plan.remaining_accumulator;

                    if step_plan.dropped_backlog > Duration::ZERO {
                        warn!(
                            dropped_backlog_ms = step_plan.dropped_backlog.as_millis() as u64,
                            max_ticks_per_frame, "sim_clamp_triggered"
                        );
                    }

                    let game_ref = &mut game;
                    if let Err(error) = renderer.render_frame(|canvas| game_ref.render(canvas)) {
                        warn!(error = %error, "renderer_draw_failed");
                        window_target.exit();
                    }
                    metrics_accumulator.record_frame(raw_frame_dt);

                    if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                        info!(
                            fps = snapshot.fps,
                            tps = snapshot.tps,
                            frame_time_ms = snapshot.frame_time_ms,
                            "loop_metrics"
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    jump_is_down: bool,
    jump_pressed_edge: bool,
    left_mouse_is_down: bool,
    left_click_pressed_edge: bool,
    cursor_position_px: Option<Vec2>,
    window_width: u32,
    window_height: u32,
}

impl InputCollector {
    fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            ..Self::default()
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &winit::event::KeyEvent) {
        if is_jump_key(key_event) {
            self.handle_jump_key_state(key_event.state);
        }
        if is_quit_key(key_event) && key_event.state == ElementState::Pressed {
            self.quit_requested = true;
        }
    }

    fn handle_jump_key_state(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.jump_is_down {
                    self.jump_pressed_edge = true;
                }
                self.jump_is_down = true;
            }
            ElementState::Released => self.jump_is_down = false,
        }
    }

    fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.left_mouse_is_down {
                    self.left_click_pressed_edge = true;
                }
                self.left_mouse_is_down = true;
            }
            ElementState::Released => self.left_mouse_is_down = false,
        }
    }

    fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    fn set_cursor_position_px(&mut self, x: f32, y: f32) {
        self.cursor_position_px = Some(Vec2::new(x, y));
    }

    fn clear_cursor_position(&mut self) {
        self.cursor_position_px = None;
    }

    fn snapshot_for_tick(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot::new(
            self.quit_requested,
            self.jump_pressed_edge,
            self.left_click_pressed_edge,
            self.left_mouse_is_down,
            self.cursor_position_px,
            self.window_width,
            self.window_height,
        );
        self.jump_pressed_edge = false;
        self.left_click_pressed_edge = false;
        snapshot
    }
}

fn is_jump_key(key_event: &winit::event::KeyEvent) -> bool {
    matches!(key_event.physical_key, PhysicalKey::Code(KeyCode::Space))
}

fn is_quit_key(key_event: &winit::event::KeyEvent) -> bool {
    matches!(key_event.physical_key, PhysicalKey::Code(KeyCode::Escape))
}

#[derive(Debug, Clone, Copy)]
struct StepPlan {
    ticks_to_run: u32,
    remaining_accumulator: Duration,
    dropped_backlog: Duration,
}

fn plan_sim_steps(
    mut accumulator: Duration,
    fixed_dt: Duration,
    max_ticks_per_frame: u32,
) -> StepPlan {
    let mut ticks_to_run = 0u32;

    while accumulator >= fixed_dt && ticks_to_run < max_ticks_per_frame {
        accumulator = accumulator.saturating_sub(fixed_dt);
        ticks_to_run = ticks_to_run.saturating_add(1);
    }

    if accumulator >= fixed_dt {
        StepPlan {
            ticks_to_run,
            remaining_accumulator: Duration::ZERO,
            dropped_backlog: accumulator,
        }
    } else {
        StepPlan {
            ticks_to_run,
            remaining_accumulator: accumulator,
            dropped_backlog: Duration::ZERO,
        }
    }
}

fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_frame_delta_caps_large_frame() {
        let max_frame_delta = Duration::from_millis(250);
        let raw_frame_dt = Duration::from_millis(600);

        assert_eq!(
            clamp_frame_delta(raw_frame_dt, max_frame_delta),
            max_frame_delta
        );
    }

    #[test]
    fn plan_sim_steps_runs_expected_ticks_without_drop() {
        let fixed_dt = Duration::from_millis(16);
        let result = plan_sim_steps(Duration::from_millis(48), fixed_dt, 5);

        assert_eq!(result.ticks_to_run, 3);
        assert_eq!(result.remaining_accumulator, Duration::ZERO);
        assert_eq!(result.dropped_backlog, Duration::ZERO);
    }

    #[test]
    fn plan_sim_steps_drops_backlog_when_tick_cap_hit() {
        let fixed_dt = Duration::from_millis(16);
        let result = plan_sim_steps(Duration::from_millis(120), fixed_dt, 3);

        assert_eq!(result.ticks_to_run, 3);
        assert_eq!(result.remaining_accumulator, Duration::ZERO);
        assert_eq!(result.dropped_backlog, Duration::from_millis(72));
    }

    #[test]
    fn plan_sim_steps_keeps_partial_accumulator() {
        let fixed_dt = Duration::from_millis(16);
        let result = plan_sim_steps(Duration::from_millis(40), fixed_dt, 5);

        assert_eq!(result.ticks_to_run, 2);
        assert_eq!(result.remaining_accumulator, Duration::from_millis(8));
        assert_eq!(result.dropped_backlog, Duration::ZERO);
    }

    #[test]
    fn jump_press_is_edge_triggered_for_single_tick() {
        let mut input = InputCollector::new(1000, 800);
        input.handle_jump_key_state(ElementState::Pressed);

        let first = input.snapshot_for_tick();
        let second = input.snapshot_for_tick();

        assert!(first.jump_pressed());
        assert!(!second.jump_pressed());
    }

    #[test]
    fn held_jump_key_does_not_spam_press_edges() {
        let mut input = InputCollector::new(1000, 800);

        input.handle_jump_key_state(ElementState::Pressed);
        let first = input.snapshot_for_tick();

        input.handle_jump_key_state(ElementState::Pressed);
        let second = input.snapshot_for_tick();

        input.handle_jump_key_state(ElementState::Released);
        input.handle_jump_key_state(ElementState::Pressed);
        let third = input.snapshot_for_tick();

        assert!(first.jump_pressed());
        assert!(!second.jump_pressed());
        assert!(third.jump_pressed());
    }

    #[test]
    fn left_click_is_edge_triggered_and_held_state_persists() {
        let mut input = InputCollector::new(1000, 800);
        input.handle_mouse_input(MouseButton::Left, ElementState::Pressed);

        let first = input.snapshot_for_tick();
        let second = input.snapshot_for_tick();

        assert!(first.left_click_pressed());
        assert!(first.left_mouse_down());
        assert!(!second.left_click_pressed());
        assert!(second.left_mouse_down());

        input.handle_mouse_input(MouseButton::Left, ElementState::Released);
        assert!(!input.snapshot_for_tick().left_mouse_down());
    }

    #[test]
    fn non_left_buttons_are_ignored() {
        let mut input = InputCollector::new(1000, 800);
        input.handle_mouse_input(MouseButton::Right, ElementState::Pressed);
        let snapshot = input.snapshot_for_tick();
        assert!(!snapshot.left_click_pressed());
        assert!(!snapshot.left_mouse_down());
    }

    #[test]
    fn snapshot_carries_cursor_and_window_size() {
        let mut input = InputCollector::new(1000, 800);
        input.set_cursor_position_px(100.0, 200.0);
        let snapshot = input.snapshot_for_tick();

        assert_eq!(snapshot.window_size(), (1000, 800));
        let cursor = snapshot.cursor_position_px().expect("cursor");
        assert!((cursor.x - 100.0).abs() < 0.0001);
        assert!((cursor.y - 200.0).abs() < 0.0001);
    }

    #[test]
    fn normalize_non_zero_duration_falls_back_on_zero() {
        let fallback = Duration::from_secs(1);
        assert_eq!(normalize_non_zero_duration(Duration::ZERO, fallback), fallback);
        assert_eq!(
            normalize_non_zero_duration(Duration::from_millis(5), fallback),
            Duration::from_millis(5)
        );
    }
}
