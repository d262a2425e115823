use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::lab::{
    BarrierSpec, GroupSpec, AMBIENT_INTENSITY, BARRIERS, BARRIER_COLOR, DIRECTIONAL_INTENSITY,
    DIRECTIONAL_POSITION, GROUND_COLOR, GROUND_SIZE, GROUND_Y, LAB_GROUPS,
};
use crate::camera::CameraConfig;
use crate::figure::{FigureAnimator, FigureSet};
use crate::geometry::Geometry;
use crate::math::{Color, Transform};
use crate::scene::{Light, MeshDesc};
use crate::traits::SceneGraph;

/// Assembles the static scene: ground, barriers, lights, figure groups, camera
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    groups: Vec<GroupSpec>,
    barriers: Vec<BarrierSpec>,
    camera: CameraConfig,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Builder loaded with the lab layout
    pub fn new() -> Self {
        Self {
            groups: LAB_GROUPS.to_vec(),
            barriers: BARRIERS.to_vec(),
            camera: CameraConfig::default(),
        }
    }

    pub fn groups(&self) -> &[GroupSpec] {
        &self.groups
    }

    /// Populate `graph` and return the animators that drive the figures
    pub fn build<G: SceneGraph + ?Sized>(&self, graph: &mut G) -> FigureSet {
        self.add_ground(graph);
        self.add_barriers(graph);
        self.add_lights(graph);
        let figures = self.add_groups(graph);
        graph.set_camera(self.camera);

        log::info!(
            "Scene built: {} groups, {} figures, {} barriers",
            self.groups.len(),
            figures.len(),
            self.barriers.len()
        );
        figures
    }

    fn add_ground<G: SceneGraph + ?Sized>(&self, graph: &mut G) {
        graph.add_mesh(MeshDesc {
            name: "ground".to_string(),
            geometry: Geometry::Plane {
                width: GROUND_SIZE,
                height: GROUND_SIZE,
            },
            color: GROUND_COLOR,
            transform: Transform::from_position(Vec3::new(0.0, GROUND_Y, 0.0))
                .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            group: None,
            cast_shadow: false,
            receive_shadow: true,
        });
    }

    fn add_barriers<G: SceneGraph + ?Sized>(&self, graph: &mut G) {
        for (i, barrier) in self.barriers.iter().enumerate() {
            graph.add_mesh(MeshDesc {
                name: format!("barrier-{}", i),
                geometry: Geometry::Box {
                    width: barrier.size.x,
                    height: barrier.size.y,
                    depth: barrier.size.z,
                },
                color: BARRIER_COLOR,
                transform: Transform::from_position(barrier.position)
                    .with_rotation(barrier.rotation),
                group: None,
                cast_shadow: true,
                receive_shadow: true,
            });
        }
    }

    fn add_lights<G: SceneGraph + ?Sized>(&self, graph: &mut G) {
        graph.add_light(Light::Ambient {
            color: Color::WHITE,
            intensity: AMBIENT_INTENSITY,
        });
        graph.add_light(Light::Directional {
            color: Color::WHITE,
            intensity: DIRECTIONAL_INTENSITY,
            position: DIRECTIONAL_POSITION,
            target: Vec3::ZERO,
            cast_shadow: true,
        });
    }

    fn add_groups<G: SceneGraph + ?Sized>(&self, graph: &mut G) -> FigureSet {
        let mut figures = FigureSet::new();
        for (g, group) in self.groups.iter().enumerate() {
            let group_id = graph.add_group(Transform::from_position(group.origin));
            for (f, spec) in group.figures.iter().enumerate() {
                let node = graph.add_mesh(MeshDesc {
                    name: format!("group-{}/{}-{}", g, spec.shape, f),
                    geometry: Geometry::Shape(spec.shape),
                    color: spec.color,
                    transform: spec.initial_transform(),
                    group: Some(group_id),
                    cast_shadow: true,
                    receive_shadow: true,
                });
                figures.push(node, FigureAnimator::new(*spec));
            }
        }
        figures
    }
}
