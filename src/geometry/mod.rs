//! Procedural meshes for every primitive the scene uses.
//!
//! All generators produce counter-clockwise triangles seen from outside
//! with unit-length normals.

mod parametric;
mod polyhedra;
mod primitives;

pub use parametric::{sphere, torus_knot, TorusKnotParams};
pub use polyhedra::{dodecahedron, icosahedron, octahedron};
pub use primitives::{cuboid, plane};

use glam::Vec3;
use serde::Serialize;

use crate::figure::ShapeKind;
use crate::types::Vertex;

/// Sphere used for figures and as the fallback shape
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const POLYHEDRON_RADIUS: f32 = 1.0;

/// Indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                Vec3::from_array(self.vertices[tri[0] as usize].position),
                Vec3::from_array(self.vertices[tri[1] as usize].position),
                Vec3::from_array(self.vertices[tri[2] as usize].position),
            ]
        })
    }

    /// Append a flat-shaded triangle with its own three vertices
    fn push_flat_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let base = self.vertices.len() as u32;
        for p in [a, b, c] {
            self.vertices.push(Vertex::new(p, normal));
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

/// Geometry a scene node is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Geometry {
    Shape(ShapeKind),
    Box { width: f32, height: f32, depth: f32 },
    Plane { width: f32, height: f32 },
}

impl Geometry {
    pub fn build(&self) -> Mesh {
        match *self {
            Geometry::Shape(shape) => shape_mesh(shape),
            Geometry::Box { width, height, depth } => cuboid(width, height, depth),
            Geometry::Plane { width, height } => plane(width, height),
        }
    }
}

/// Mesh for a figure shape at the sizes the scene authors them with
pub fn shape_mesh(shape: ShapeKind) -> Mesh {
    match shape {
        ShapeKind::TorusKnot => torus_knot(&TorusKnotParams::default()),
        ShapeKind::Octahedron => octahedron(POLYHEDRON_RADIUS),
        ShapeKind::Dodecahedron => dodecahedron(POLYHEDRON_RADIUS),
        ShapeKind::Icosahedron => icosahedron(POLYHEDRON_RADIUS),
        ShapeKind::Sphere => sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
    }
}
