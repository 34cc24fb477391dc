//! The viewer core and its GPU owner.
//!
//! [`session::ViewSession`] holds every piece of numeric state and decides
//! when a frame is needed; [`CubeEngine`] wraps it with the wgpu resources
//! required to draw that state.

pub mod command;
pub mod orientation;
pub mod session;
pub mod state;

use web_time::Instant;

use self::session::{Response, ViewSession};
use crate::demo::DemoKind;
use crate::error::CubeviewError;
use crate::gpu::render_context::{FrameAcquire, RenderContext};
use crate::gpu::texture::DepthTexture;
use crate::input::InputEvent;
use crate::options::Options;
use crate::renderer::geometry;
use crate::renderer::mesh::{MeshRenderer, MeshUniform};

/// Draws the cuboid (and optionally the axis overlay) for a
/// [`ViewSession`].
///
/// # Frame loop
///
/// Forward input with [`handle_input`](Self::handle_input) and redraw when
/// it answers [`Response::Redraw`]. Call [`update`](Self::update) when
/// [`next_deadline`](Self::next_deadline) passes, then
/// [`render`](Self::render) if it returns `true`. Call
/// [`resize`](Self::resize) when the window size changes.
pub struct CubeEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    depth: DepthTexture,
    cuboid: MeshRenderer,
    axes: MeshRenderer,
    session: ViewSession,
    clear_color: wgpu::Color,
}

impl CubeEngine {
    /// Create the GPU context and meshes for `demo`.
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::Gpu`] if no adapter, device or surface can
    /// be created.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
        demo: DemoKind,
    ) -> Result<Self, CubeviewError> {
        let context = RenderContext::new(window, size).await?;
        Ok(Self::from_context(context, options, demo))
    }

    /// Build the engine on an existing render context.
    #[must_use]
    pub fn from_context(
        context: RenderContext,
        options: Options,
        demo: DemoKind,
    ) -> Self {
        let (width, height) = context.size();
        let depth = DepthTexture::new(&context.device, width, height);
        let cuboid = MeshRenderer::new(
            &context,
            "Cuboid",
            &geometry::cuboid(options.display.half_extents),
            Some(wgpu::Face::Back),
        );
        let axes =
            MeshRenderer::new(&context, "Axes", &geometry::axes(), None);
        let [r, g, b] = options.display.clear_color;
        let clear_color = wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        };
        log::info!("demo '{demo}' ready at {width}x{height}");
        Self {
            context,
            depth,
            cuboid,
            axes,
            session: ViewSession::new(demo, options, (width, height)),
            clear_color,
        }
    }

    /// The GPU-free viewer state.
    #[must_use]
    pub fn session(&self) -> &ViewSession {
        &self.session
    }

    /// Feed one input event.
    pub fn handle_input(&mut self, event: InputEvent) -> Response {
        self.session.handle_input(event)
    }

    /// Advance the animation. Returns `true` when a redraw is due.
    pub fn update(&mut self, now: Instant) -> bool {
        self.session.update(now)
    }

    /// Next time [`update`](Self::update) needs to run, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.next_deadline()
    }

    /// Resize the surface, depth buffer and projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.depth = DepthTexture::new(&self.context.device, width, height);
            self.session.resize(width, height);
        }
    }

    /// Draw one frame and present it.
    ///
    /// Returns `Ok(false)` when the surface had to be reconfigured and
    /// nothing was drawn; the caller should request another redraw.
    ///
    /// # Errors
    ///
    /// Returns surface errors other than lost/outdated. The frame is
    /// skipped.
    pub fn render(&mut self) -> Result<bool, wgpu::SurfaceError> {
        let FrameAcquire::Ready(frame) = self.context.acquire_frame()? else {
            return Ok(false);
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = self.session.camera().build_matrix();
        self.cuboid.update(
            &self.context.queue,
            &MeshUniform::new(view_proj, self.session.model_matrix()),
        );
        let show_axes = self.session.state().show_axes;
        if show_axes {
            self.axes.update(
                &self.context.queue,
                &MeshUniform::new(view_proj, self.session.axes_matrix()),
            );
        }

        let mut encoder = self.context.create_encoder();
        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.cuboid.draw(&mut rp);
            if show_axes {
                self.axes.draw(&mut rp);
            }
        }
        self.context.submit(encoder);
        frame.present();
        Ok(true)
    }
}
