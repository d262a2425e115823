use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::camera::CameraConfig;
use crate::geometry::Geometry;
use crate::math::{Color, Transform};
use crate::traits::SceneGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GroupId(pub usize);

/// A mesh node: geometry, flat material colour, local transform and shadow flags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshDesc {
    pub name: String,
    pub geometry: Geometry,
    pub color: Color,
    pub transform: Transform,
    pub group: Option<GroupId>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
        target: Vec3,
        cast_shadow: bool,
    },
}

/// CPU-side scene graph the renderer draws from
#[derive(Debug, Clone, Default)]
pub struct Scene {
    groups: Vec<Transform>,
    nodes: Vec<MeshDesc>,
    lights: Vec<Light>,
    camera: CameraConfig,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[MeshDesc] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &MeshDesc {
        &self.nodes[id.0]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn groups(&self) -> &[Transform] {
        &self.groups
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    /// Group transform (or identity) applied on top of the node's local transform
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.transform.matrix();
        match node.group {
            Some(group) => self.groups[group.0].matrix() * local,
            None => local,
        }
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// Summed ambient contribution as (linear colour * intensity)
    pub fn ambient(&self) -> [f32; 3] {
        self.lights
            .iter()
            .filter_map(|light| match light {
                Light::Ambient { color, intensity } => {
                    Some(color.to_linear().map(|c| c * intensity))
                }
                _ => None,
            })
            .fold([0.0; 3], |acc, c| [acc[0] + c[0], acc[1] + c[1], acc[2] + c[2]])
    }

    /// The first directional light, which is the one that drives shadows
    pub fn key_light(&self) -> Option<&Light> {
        self.lights
            .iter()
            .find(|light| matches!(light, Light::Directional { .. }))
    }
}

impl SceneGraph for Scene {
    fn add_group(&mut self, transform: Transform) -> GroupId {
        self.groups.push(transform);
        GroupId(self.groups.len() - 1)
    }

    fn add_mesh(&mut self, mesh: MeshDesc) -> NodeId {
        self.nodes.push(mesh);
        NodeId(self.nodes.len() - 1)
    }

    fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    fn set_camera(&mut self, camera: CameraConfig) {
        self.camera = camera;
    }

    fn transform(&self, node: NodeId) -> &Transform {
        &self.nodes[node.0].transform
    }

    fn transform_mut(&mut self, node: NodeId) -> &mut Transform {
        &mut self.nodes[node.0].transform
    }
}

/// Serializable view of a scene at one instant
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub camera: CameraConfig,
    pub lights: Vec<Light>,
    pub groups: Vec<Vec3>,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub name: String,
    pub geometry: Geometry,
    pub color: Color,
    pub group: Option<GroupId>,
    pub local: Transform,
    pub world_position: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Scene {
    pub fn snapshot(&self, frame: u64) -> SceneSnapshot {
        SceneSnapshot {
            frame,
            camera: self.camera,
            lights: self.lights.clone(),
            groups: self.groups.iter().map(|g| g.position).collect(),
            nodes: self
                .node_ids()
                .map(|id| {
                    let node = self.node(id);
                    NodeSnapshot {
                        name: node.name.clone(),
                        geometry: node.geometry,
                        color: node.color,
                        group: node.group,
                        local: node.transform,
                        world_position: self.world_position(id),
                        cast_shadow: node.cast_shadow,
                        receive_shadow: node.receive_shadow,
                    }
                })
                .collect(),
        }
    }
}
