//! Standalone window backed by winit.
//!
//! ```no_run
//! # use cubeview::{DemoKind, Viewer};
//! Viewer::builder()
//!     .with_demo(DemoKind::Mouse)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::Key,
    window::{Window, WindowId},
};

use crate::{
    camera::controller::WHEEL_UNITS_PER_LINE,
    demo::DemoKind,
    engine::{session::Response, CubeEngine},
    error::CubeviewError,
    input::{InputEvent, MouseButton},
    options::Options,
};

/// Initial window size in logical pixels.
const INITIAL_SIZE: (u32, u32) = (800, 600);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    demo: DemoKind,
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            demo: DemoKind::default(),
            options: None,
            title: None,
        }
    }

    /// Choose the demo variant.
    #[must_use]
    pub fn with_demo(mut self, demo: DemoKind) -> Self {
        self.demo = demo;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title. Defaults to "cubeview - <demo>".
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let title = self
            .title
            .unwrap_or_else(|| format!("cubeview - {}", self.demo));
        Viewer {
            demo: self.demo,
            options: self.options.unwrap_or_default(),
            title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing one demo variant.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    demo: DemoKind,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the quit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::Viewer`] if the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), CubeviewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| CubeviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            demo: self.demo,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| CubeviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<CubeEngine>,
    demo: DemoKind,
    options: Option<Options>,
    title: String,
}

fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// The character a key press produced, if it produced exactly one.
fn typed_char(event: &KeyEvent) -> Option<char> {
    let text = event.text.as_deref().or(match &event.logical_key {
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    })?;
    let mut chars = text.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

/// Wheel delta in notch units (120 per line).
fn wheel_units(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y * WHEEL_UNITS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    }
}

impl ViewerApp {
    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        match engine.handle_input(event) {
            Response::Idle => {}
            Response::Redraw => self.request_redraw(),
            Response::Quit => event_loop.exit(),
        }
    }

    fn redraw(&mut self) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        match engine.render() {
            Ok(true) => {}
            Ok(false) => self.request_redraw(),
            Err(e) => log::error!("frame skipped: {e:?}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                INITIAL_SIZE.0,
                INITIAL_SIZE.1,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let size = viewport_size(window.inner_size());
        let engine = match pollster::block_on(CubeEngine::new(
            window.clone(),
            size,
            options,
            self.demo,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (w, h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(w, h);
                }
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.dispatch(
                    event_loop,
                    InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed: state == ElementState::Pressed,
                    },
                );
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(
                    event_loop,
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                );
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.dispatch(
                    event_loop,
                    InputEvent::Scroll {
                        delta: wheel_units(delta),
                    },
                );
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.dispatch(
                    event_loop,
                    InputEvent::ModifiersChanged {
                        control: modifiers.state().control_key(),
                    },
                );
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let Some(ch) = typed_char(&event) {
                    self.dispatch(event_loop, InputEvent::KeyTyped { ch });
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        if engine.update(Instant::now()) {
            self.request_redraw();
        }
        let flow = self
            .engine
            .as_ref()
            .and_then(CubeEngine::next_deadline)
            .map_or(ControlFlow::Wait, ControlFlow::WaitUntil);
        event_loop.set_control_flow(flow);
    }
}
