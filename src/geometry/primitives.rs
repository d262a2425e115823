use glam::Vec3;

use super::Mesh;
use crate::types::Vertex;

/// Axis-aligned box centred on the origin
pub fn cuboid(width: f32, height: f32, depth: f32) -> Mesh {
    let h = Vec3::new(width, height, depth) * 0.5;

    // (normal, u axis, v axis) with u x v == normal so quads wind CCW from outside
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut mesh = Mesh {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };
    for (normal, u, v) in faces {
        let centre = normal * h;
        let du = u * h;
        let dv = v * h;
        let base = mesh.vertices.len() as u32;

        for corner in [-du - dv, du - dv, du + dv, -du + dv] {
            mesh.vertices.push(Vertex::new(centre + corner, normal));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Quad in the local XY plane facing +Z
pub fn plane(width: f32, height: f32) -> Mesh {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let vertices = vec![
        Vertex::new(Vec3::new(-hw, -hh, 0.0), Vec3::Z),
        Vertex::new(Vec3::new(hw, -hh, 0.0), Vec3::Z),
        Vertex::new(Vec3::new(hw, hh, 0.0), Vec3::Z),
        Vertex::new(Vec3::new(-hw, hh, 0.0), Vec3::Z),
    ];
    Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
