//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization and the depth attachment used
//! by the mesh renderers.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth-buffer texture.
pub mod texture;
