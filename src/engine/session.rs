//! GPU-free core of the viewer: view state, input translation, and the
//! animation ticker, wired together the way the event loop drives them.

use web_time::Instant;

use super::command::ViewCommand;
use super::state::ViewState;
use crate::animation::{AnimationStatus, AnimationTicker};
use crate::camera::core::Camera;
use crate::demo::DemoKind;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;

/// What the host should do after feeding the session an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Nothing visible changed.
    Idle,
    /// Request a redraw. Repeated requests before the next frame coalesce.
    Redraw,
    /// Exit the event loop.
    Quit,
}

/// Owns all numeric viewer state for one viewport.
///
/// Input handlers and the animation ticker are the only writers, and both
/// run on the event-loop thread, so no synchronization is involved.
pub struct ViewSession {
    state: ViewState,
    input: InputProcessor,
    ticker: AnimationTicker,
    options: Options,
    demo: DemoKind,
    viewport: (u32, u32),
}

impl ViewSession {
    /// Create a session for `demo` with the given options and initial
    /// viewport size.
    #[must_use]
    pub fn new(demo: DemoKind, options: Options, viewport: (u32, u32)) -> Self {
        let ticker = AnimationTicker::new(
            options.animation.degrees_per_tick,
            options.animation.tick_interval(),
        );
        Self {
            state: ViewState::new(&options),
            input: InputProcessor::new(demo, &options),
            ticker,
            options,
            demo,
            viewport,
        }
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The running demo variant.
    #[must_use]
    pub fn demo(&self) -> DemoKind {
        self.demo
    }

    /// Animation status.
    #[must_use]
    pub fn animation_status(&self) -> AnimationStatus {
        self.ticker.status()
    }

    /// Animation angle in degrees.
    #[must_use]
    pub fn animation_angle(&self) -> f32 {
        self.ticker.angle()
    }

    /// Current viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Record a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Translate and apply one input event.
    pub fn handle_input(&mut self, event: InputEvent) -> Response {
        self.handle_input_at(event, Instant::now())
    }

    /// [`handle_input`](Self::handle_input) with an explicit clock, so
    /// animation start times are deterministic.
    pub fn handle_input_at(&mut self, event: InputEvent, now: Instant) -> Response {
        self.input
            .handle_event(event)
            .map_or(Response::Idle, |command| self.apply_at(command, now))
    }

    /// Apply a command directly.
    pub fn apply(&mut self, command: ViewCommand) -> Response {
        self.apply_at(command, Instant::now())
    }

    /// [`apply`](Self::apply) with an explicit clock.
    pub fn apply_at(&mut self, command: ViewCommand, now: Instant) -> Response {
        match command {
            ViewCommand::Quit => {
                log::info!("quit requested");
                Response::Quit
            }
            ViewCommand::StartAnimation => redraw_if(self.ticker.start(now)),
            ViewCommand::PauseAnimation => redraw_if(self.ticker.pause()),
            // A stop redraws once at the reset angle.
            ViewCommand::StopAnimation => redraw_if(self.ticker.stop()),
            ViewCommand::EndDrag => {
                self.state = self.state.apply(&command, self.viewport);
                log::debug!(
                    "drag committed: {:?}",
                    self.state.orientation.committed()
                );
                Response::Redraw
            }
            ViewCommand::BeginDrag { .. } => {
                self.state = self.state.apply(&command, self.viewport);
                Response::Idle
            }
            _ => {
                self.state = self.state.apply(&command, self.viewport);
                Response::Redraw
            }
        }
    }

    /// Run the ticker. Returns `true` when a new frame is due.
    pub fn update(&mut self, now: Instant) -> bool {
        self.ticker.tick(now)
    }

    /// When the event loop must wake up next for the ticker, if at all.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    /// Projection camera for the current viewport.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.state.camera.camera(self.viewport, &self.options.camera)
    }

    /// Model matrix including the animation rotation.
    #[must_use]
    pub fn model_matrix(&self) -> glam::Mat4 {
        self.state.model_matrix(self.ticker.angle())
    }

    /// Transform for the axis overlay: the key-driven viewpoint only.
    #[must_use]
    pub fn axes_matrix(&self) -> glam::Mat4 {
        self.state.viewpoint_matrix()
    }
}

fn redraw_if(changed: bool) -> Response {
    if changed {
        Response::Redraw
    } else {
        Response::Idle
    }
}
