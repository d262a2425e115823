use glam::Vec3;

use super::Mesh;

/// Project every table vertex onto the sphere of `radius` and emit flat faces
fn polyhedron(vertices: &[Vec3], faces: &[[u32; 3]], radius: f32) -> Mesh {
    let projected: Vec<Vec3> = vertices.iter().map(|v| v.normalize() * radius).collect();

    let mut mesh = Mesh {
        vertices: Vec::with_capacity(faces.len() * 3),
        indices: Vec::with_capacity(faces.len() * 3),
    };
    for face in faces {
        mesh.push_flat_triangle(
            projected[face[0] as usize],
            projected[face[1] as usize],
            projected[face[2] as usize],
        );
    }
    mesh
}

pub fn octahedron(radius: f32) -> Mesh {
    let vertices = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    polyhedron(&vertices, &faces, radius)
}

pub fn icosahedron(radius: f32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let vertices = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let faces = [
        // around vertex 0
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        // adjacent band
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        // around vertex 3
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        // opposite band
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    polyhedron(&vertices, &faces, radius)
}

/// Twelve pentagons, each fanned into three triangles
pub fn dodecahedron(radius: f32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let r = 1.0 / t;
    let vertices = [
        // (±1, ±1, ±1)
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        // (0, ±1/φ, ±φ)
        Vec3::new(0.0, -r, -t),
        Vec3::new(0.0, -r, t),
        Vec3::new(0.0, r, -t),
        Vec3::new(0.0, r, t),
        // (±1/φ, ±φ, 0)
        Vec3::new(-r, -t, 0.0),
        Vec3::new(-r, t, 0.0),
        Vec3::new(r, -t, 0.0),
        Vec3::new(r, t, 0.0),
        // (±φ, 0, ±1/φ)
        Vec3::new(-t, 0.0, -r),
        Vec3::new(t, 0.0, -r),
        Vec3::new(-t, 0.0, r),
        Vec3::new(t, 0.0, r),
    ];
    let faces = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    polyhedron(&vertices, &faces, radius)
}
