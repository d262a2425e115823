use figure_lab::geometry::{cuboid, shape_mesh, Geometry, Mesh};
use figure_lab::ShapeKind;
use glam::Vec3;

#[cfg(test)]
mod geometry_tests {
    use super::*;

    fn assert_well_formed(mesh: &Mesh) {
        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.vertices.len(), "index {} out of range", i);
        }
        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-3, "normal {:?} not unit length", n);
        }
    }

    /// Every non-degenerate face of a convex mesh around the origin winds outward
    fn assert_outward(mesh: &Mesh) {
        for [a, b, c] in mesh.triangles() {
            let face = (b - a).cross(c - a);
            if face.length_squared() < 1e-12 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(face.dot(centroid) > 0.0, "inward face at {:?}", centroid);
        }
    }

    #[test]
    fn test_every_shape_is_well_formed() {
        for shape in ShapeKind::ALL {
            assert_well_formed(&shape_mesh(shape));
        }
    }

    #[test]
    fn test_convex_shapes_wind_outward() {
        for shape in [
            ShapeKind::Sphere,
            ShapeKind::Octahedron,
            ShapeKind::Dodecahedron,
            ShapeKind::Icosahedron,
        ] {
            assert_outward(&shape_mesh(shape));
        }
        assert_outward(&cuboid(22.0, 2.0, 1.0));
    }

    #[test]
    fn test_polyhedra_face_counts() {
        assert_eq!(shape_mesh(ShapeKind::Octahedron).triangle_count(), 8);
        assert_eq!(shape_mesh(ShapeKind::Icosahedron).triangle_count(), 20);
        // 12 pentagons, 3 triangles each
        assert_eq!(shape_mesh(ShapeKind::Dodecahedron).triangle_count(), 36);
    }

    #[test]
    fn test_figures_fit_in_unit_scale_bounds() {
        for shape in ShapeKind::ALL {
            let mesh = shape_mesh(shape);
            let extent = mesh
                .vertices
                .iter()
                .map(|v| Vec3::from_array(v.position).length())
                .fold(0.0_f32, f32::max);
            assert!(extent > 0.5 && extent < 1.3, "{} extent {}", shape, extent);
        }
    }

    #[test]
    fn test_plane_geometry_is_centered() {
        let mesh = Geometry::Plane { width: 20.0, height: 20.0 }.build();
        let (min, max) = mesh.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from_array(v.position);
                (lo.min(p), hi.max(p))
            },
        );
        assert_eq!(min, Vec3::new(-10.0, -10.0, 0.0));
        assert_eq!(max, Vec3::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_same_geometry_builds_identical_meshes() {
        let a = Geometry::Shape(ShapeKind::TorusKnot).build();
        let b = Geometry::Shape(ShapeKind::TorusKnot).build();
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.indices, b.indices);
    }
}
