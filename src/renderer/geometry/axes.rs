//! World-axis indicator: one shaft with an arrowhead per axis.

use glam::{Mat4, Vec3};

use crate::renderer::mesh::{MeshData, Vertex};

/// Shaft length.
pub const SHAFT_LENGTH: f32 = 2.0;
/// Shaft radius.
pub const SHAFT_RADIUS: f32 = 0.02;
/// Arrowhead height.
pub const CONE_HEIGHT: f32 = 0.2;
/// Arrowhead base radius.
pub const CONE_RADIUS: f32 = 0.06;
/// Angular step between ring samples, in degrees.
const RING_STEP_DEGREES: usize = 10;
/// Samples per ring; the first and last coincide to close the surface.
pub const RING_SAMPLES: usize = 360 / RING_STEP_DEGREES + 1;

const X_COLOR: [f32; 3] = [0.545, 0.0, 0.0];
const Y_COLOR: [f32; 3] = [0.0, 0.392, 0.0];
const Z_COLOR: [f32; 3] = [0.0, 0.0, 0.545];

/// Append a frustum-shaped band along local +Z to `mesh`.
///
/// The band runs from radius `base_radius` at `z = 0` to `tip_radius` at
/// `z = length`; a zero tip radius gives a cone. `transform` places it in
/// world space.
fn band(
    mesh: &mut MeshData,
    transform: Mat4,
    length: f32,
    base_radius: f32,
    tip_radius: f32,
    color: [f32; 3],
) {
    let base = mesh.vertices.len() as u16;
    for sample in 0..RING_SAMPLES {
        let angle = ((sample * RING_STEP_DEGREES) as f32).to_radians();
        let (sin, cos) = angle.sin_cos();
        let top = Vec3::new(cos * tip_radius, sin * tip_radius, length);
        let bottom = Vec3::new(cos * base_radius, sin * base_radius, 0.0);
        for p in [top, bottom] {
            mesh.vertices.push(Vertex {
                position: transform.transform_point3(p).to_array(),
                color,
            });
        }
    }
    // Strip order: each new vertex closes a triangle with the two before it.
    let strip_len = (RING_SAMPLES * 2) as u16;
    for i in 0..strip_len - 2 {
        mesh.indices
            .extend_from_slice(&[base + i, base + i + 1, base + i + 2]);
    }
}

fn arrow(mesh: &mut MeshData, orient: Mat4, color: [f32; 3]) {
    band(mesh, orient, SHAFT_LENGTH, SHAFT_RADIUS, SHAFT_RADIUS, color);
    let head = orient * Mat4::from_translation(Vec3::new(0.0, 0.0, SHAFT_LENGTH));
    band(mesh, head, CONE_HEIGHT, CONE_RADIUS, 0.0, color);
}

/// Build the three axis arrows at the origin.
///
/// Arrows are modelled along +Z and rotated into place: 90° about Y for X,
/// −90° about X for Y. The surface is open and two-sided, so it must be
/// drawn without back-face culling.
#[must_use]
pub fn axes() -> MeshData {
    let per_band = RING_SAMPLES * 2;
    let mut mesh = MeshData::with_capacity(per_band * 6, (per_band - 2) * 3 * 6);
    arrow(
        &mut mesh,
        Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2),
        X_COLOR,
    );
    arrow(
        &mut mesh,
        Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        Y_COLOR,
    );
    arrow(&mut mesh, Mat4::IDENTITY, Z_COLOR);
    mesh
}
