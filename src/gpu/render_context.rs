use std::fmt;

/// Failure while bringing up the GPU for a window.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not be turned into a surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    AdapterRequest(wgpu::RequestAdapterError),
    /// The adapter refused the requested limits.
    DeviceRequest(wgpu::RequestDeviceError),
    /// The adapter reports no usable configuration for the surface.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => write!(f, "cannot create surface: {e}"),
            Self::AdapterRequest(e) => write!(f, "no usable GPU adapter: {e}"),
            Self::DeviceRequest(e) => write!(f, "cannot open GPU device: {e}"),
            Self::UnsupportedSurface => {
                f.write_str("adapter cannot present to this surface")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// What happened when a frame was requested from the surface.
pub enum FrameAcquire {
    /// A texture is ready to draw into.
    Ready(wgpu::SurfaceTexture),
    /// The surface was lost or outdated and has been reconfigured. Try
    /// again on the next redraw.
    Reconfigured,
}

/// The window surface and the device that draws into it.
pub struct RenderContext {
    /// Logical device.
    pub device: wgpu::Device,
    /// Submission queue.
    pub queue: wgpu::Queue,
    /// Presentable window surface.
    pub surface: wgpu::Surface<'static>,
    /// Active surface configuration. Width and height are never zero.
    pub config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Open a device able to present to `window` and configure the surface
    /// at `initial_size` with vsync.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] when any step of the bring-up fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;
        let (device, queue) = open_device(&adapter).await?;

        let (width, height) = nonzero(initial_size);
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        let caps = surface.get_capabilities(&adapter);
        config.format = surface_format(&caps.formats, config.format);
        config.present_mode = wgpu::PresentMode::Fifo;
        surface.configure(&device, &config);

        let info = adapter.get_info();
        log::info!(
            "GPU: {} ({:?}), surface {:?} {width}x{height}",
            info.name,
            info.backend,
            config.format
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Surface color format, used as the pipeline color target.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Surface size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Track a new window size. Zero-sized (minimized) windows are ignored
    /// and keep the previous configuration.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size() {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
    }

    /// Apply the current configuration to the surface again.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Get the next texture to draw into.
    ///
    /// A lost or outdated surface is reconfigured in place and reported as
    /// [`FrameAcquire::Reconfigured`].
    ///
    /// # Errors
    ///
    /// Returns the other [`wgpu::SurfaceError`]s (timeout, out of memory)
    /// unchanged.
    pub fn acquire_frame(&self) -> Result<FrameAcquire, wgpu::SurfaceError> {
        match self.surface.get_current_texture() {
            Ok(frame) => Ok(FrameAcquire::Ready(frame)),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.reconfigure();
                Ok(FrameAcquire::Reconfigured)
            }
            Err(e) => Err(e),
        }
    }

    /// Start recording commands for one frame.
    #[must_use]
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Submit a finished frame's commands.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit([encoder.finish()]);
    }
}

/// Request a device with WebGL2-level limits raised to what the adapter
/// supports for textures, so large windows still fit.
async fn open_device(
    adapter: &wgpu::Adapter,
) -> Result<(wgpu::Device, wgpu::Queue), RenderContextError> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("cubeview device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                .using_resolution(adapter.limits()),
            ..Default::default()
        })
        .await
        .map_err(RenderContextError::DeviceRequest)
}

/// Vertex and clear colors are already sRGB-encoded, so prefer a format
/// that stores them unchanged. Keeps `default` when the adapter lists no
/// non-sRGB format.
fn surface_format(
    supported: &[wgpu::TextureFormat],
    default: wgpu::TextureFormat,
) -> wgpu::TextureFormat {
    supported
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .unwrap_or(default)
}

fn nonzero((width, height): (u32, u32)) -> (u32, u32) {
    (width.max(1), height.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sizes_are_clamped() {
        assert_eq!(nonzero((0, 0)), (1, 1));
        assert_eq!(nonzero((640, 0)), (640, 1));
        assert_eq!(nonzero((800, 600)), (800, 600));
    }

    #[test]
    fn unsupported_surface_has_no_source() {
        let err = RenderContextError::UnsupportedSurface;
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.to_string(), "adapter cannot present to this surface");
    }

    #[test]
    fn surface_format_skips_srgb_variants() {
        use wgpu::TextureFormat as F;
        let supported = [F::Bgra8UnormSrgb, F::Bgra8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(
            surface_format(&supported, F::Bgra8UnormSrgb),
            F::Bgra8Unorm
        );
    }

    #[test]
    fn surface_format_keeps_default_when_only_srgb_listed() {
        use wgpu::TextureFormat as F;
        let supported = [F::Rgba8UnormSrgb];
        assert_eq!(
            surface_format(&supported, F::Rgba8UnormSrgb),
            F::Rgba8UnormSrgb
        );
    }
}
