use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::Mesh;
use crate::types::Vertex;

/// UV sphere; poles get a single triangle per segment
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let row = width_segments + 1;

    let mut vertices = Vec::with_capacity((row * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = v * PI;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = u * TAU;
            let normal = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(Vertex::new(normal * radius, normal));
        }
    }

    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Mesh { vertices, indices }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusKnotParams {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
}

impl Default for TorusKnotParams {
    fn default() -> Self {
        Self {
            radius: 0.7,
            tube: 0.2,
            tubular_segments: 128,
            radial_segments: 32,
            p: 2,
            q: 3,
        }
    }
}

impl TorusKnotParams {
    /// Point on the knot's centre curve
    pub fn curve_point(&self, u: f32) -> Vec3 {
        let qu_over_p = self.q as f32 / self.p as f32 * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            self.radius * (2.0 + cs) * 0.5 * u.cos(),
            self.radius * (2.0 + cs) * 0.5 * u.sin(),
            self.radius * qu_over_p.sin() * 0.5,
        )
    }
}

/// Tube swept along a (p, q) torus knot
pub fn torus_knot(params: &TorusKnotParams) -> Mesh {
    let tubular = params.tubular_segments.max(3);
    let radial = params.radial_segments.max(3);
    let ring = radial + 1;

    let mut vertices = Vec::with_capacity(((tubular + 1) * ring) as usize);
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * params.p as f32 * TAU;

        // Frame from the curve point and a point slightly ahead of it
        let p1 = params.curve_point(u);
        let p2 = params.curve_point(u + 0.01);
        let tangent = p2 - p1;
        let bitangent = tangent.cross(p2 + p1);
        let normal = bitangent.cross(tangent);
        let bitangent = bitangent.normalize();
        let normal = normal.normalize();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -params.tube * v.cos();
            let cy = params.tube * v.sin();

            let position = p1 + normal * cx + bitangent * cy;
            vertices.push(Vertex::new(position, (position - p1).normalize()));
        }
    }

    let mut indices = Vec::with_capacity((tubular * radial * 6) as usize);
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = ring * (j - 1) + (i - 1);
            let b = ring * j + (i - 1);
            let c = ring * j + i;
            let d = ring * (j - 1) + i;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let mesh = sphere(1.0, 32, 32);
        assert_eq!(mesh.vertices.len(), 33 * 33);
        assert_eq!(mesh.triangle_count(), 2 * 32 * 32 - 2 * 32);
    }

    #[test]
    fn test_sphere_radius() {
        let mesh = sphere(2.5, 16, 8);
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.position).length();
            assert!((len - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_torus_knot_counts() {
        let mesh = torus_knot(&TorusKnotParams::default());
        assert_eq!(mesh.vertices.len(), 129 * 33);
        assert_eq!(mesh.triangle_count(), 2 * 128 * 32);
    }

    #[test]
    fn test_torus_knot_curve_closes() {
        let params = TorusKnotParams::default();
        let start = params.curve_point(0.0);
        let end = params.curve_point(params.p as f32 * TAU);
        assert!((start - end).length() < 1e-4);
    }

    #[test]
    fn test_torus_knot_surface_sits_on_tube() {
        let params = TorusKnotParams::default();
        let mesh = torus_knot(&params);
        let ring = (params.radial_segments + 1) as usize;

        // Every vertex of the first ring is one tube radius from the curve start
        let centre = params.curve_point(0.0);
        for v in &mesh.vertices[..ring] {
            let d = (Vec3::from_array(v.position) - centre).length();
            assert!((d - params.tube).abs() < 1e-4);
        }
    }
}
