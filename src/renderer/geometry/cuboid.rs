//! Six-faced colored box.

use crate::renderer::mesh::{MeshData, Vertex};

/// +X face color (red).
pub const POS_X: [f32; 3] = [1.0, 0.0, 0.0];
/// +Y face color (green, 50% like the usual named "green").
pub const POS_Y: [f32; 3] = [0.0, 0.502, 0.0];
/// +Z face color (blue).
pub const POS_Z: [f32; 3] = [0.0, 0.0, 1.0];
/// −X face color (dark red).
pub const NEG_X: [f32; 3] = [0.545, 0.0, 0.0];
/// −Y face color (dark green).
pub const NEG_Y: [f32; 3] = [0.0, 0.392, 0.0];
/// −Z face color (dark blue).
pub const NEG_Z: [f32; 3] = [0.0, 0.0, 0.545];

/// Build a box centred on the origin with the given half-extents.
///
/// Each face gets four vertices of its own so it can carry a flat color.
/// Quads are wound counter-clockwise as seen from outside and split into
/// two triangles `(0, 1, 2)` and `(0, 2, 3)`.
#[must_use]
pub fn cuboid(half_extents: [f32; 3]) -> MeshData {
    let [x, y, z] = half_extents;
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (POS_X, [[x, -y, -z], [x, y, -z], [x, y, z], [x, -y, z]]),
        (POS_Y, [[-x, y, -z], [-x, y, z], [x, y, z], [x, y, -z]]),
        (POS_Z, [[-x, -y, z], [x, -y, z], [x, y, z], [-x, y, z]]),
        (NEG_X, [[-x, -y, -z], [-x, -y, z], [-x, y, z], [-x, y, -z]]),
        (NEG_Y, [[-x, -y, -z], [x, -y, -z], [x, -y, z], [-x, -y, z]]),
        (NEG_Z, [[-x, -y, -z], [-x, y, -z], [x, y, -z], [x, -y, -z]]),
    ];

    let mut mesh = MeshData::with_capacity(24, 36);
    for (color, corners) in faces {
        let base = mesh.vertices.len() as u16;
        mesh.vertices
            .extend(corners.map(|position| Vertex { position, color }));
        mesh.indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn triangle_normal(mesh: &MeshData, tri: &[u16]) -> (Vec3, Vec3) {
        let p = |i: u16| Vec3::from(mesh.vertices[usize::from(i)].position);
        let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
        ((b - a).cross(c - a), (a + b + c) / 3.0)
    }

    #[test]
    fn has_six_quads() {
        let mesh = cuboid([1.0, 1.0, 1.0]);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn every_triangle_faces_outward() {
        let mesh = cuboid([1.0, 2.0, 0.5]);
        for tri in mesh.indices.chunks(3) {
            let (normal, centroid) = triangle_normal(&mesh, tri);
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {tri:?} is wound clockwise from outside"
            );
        }
    }

    #[test]
    fn face_colors_follow_direction() {
        let mesh = cuboid([1.0, 1.0, 1.0]);
        let expected = [
            (Vec3::X, POS_X),
            (Vec3::Y, POS_Y),
            (Vec3::Z, POS_Z),
            (Vec3::NEG_X, NEG_X),
            (Vec3::NEG_Y, NEG_Y),
            (Vec3::NEG_Z, NEG_Z),
        ];
        for (face, (dir, color)) in mesh.indices.chunks(6).zip(expected) {
            let (normal, _) = triangle_normal(&mesh, &face[..3]);
            assert!(normal.normalize().abs_diff_eq(dir, 1e-6));
            for &i in face {
                assert_eq!(mesh.vertices[usize::from(i)].color, color);
            }
        }
    }

    #[test]
    fn respects_half_extents() {
        let mesh = cuboid([0.5, 1.5, 2.0]);
        for v in &mesh.vertices {
            assert_eq!(v.position[0].abs(), 0.5);
            assert_eq!(v.position[1].abs(), 1.5);
            assert_eq!(v.position[2].abs(), 2.0);
        }
    }

    #[test]
    fn colors_are_named_color_bytes() {
        let byte = |c: f32| (c * 255.0).round() as u8;
        assert_eq!(byte(POS_Y[1]), 128);
        assert_eq!(byte(NEG_X[0]), 139);
        assert_eq!(byte(NEG_Y[1]), 100);
        assert_eq!(byte(NEG_Z[2]), 139);
        // Dark faces keep visible contrast against their bright pair.
        assert!(POS_X[0] - NEG_X[0] > 0.4);
        assert!(POS_Z[2] - NEG_Z[2] > 0.4);
    }
}
