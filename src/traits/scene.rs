use crate::camera::CameraConfig;
use crate::math::Transform;
use crate::scene::{GroupId, Light, MeshDesc, NodeId};

/// What the scene logic needs from a scene graph host
///
/// Meshes are created once; afterwards only their transforms change.
pub trait SceneGraph {
    /// Create a positioned cluster that child meshes are placed relative to
    fn add_group(&mut self, transform: Transform) -> GroupId;

    /// Create a mesh node
    fn add_mesh(&mut self, mesh: MeshDesc) -> NodeId;

    fn add_light(&mut self, light: Light);

    fn set_camera(&mut self, camera: CameraConfig);

    fn transform(&self, node: NodeId) -> &Transform;

    fn transform_mut(&mut self, node: NodeId) -> &mut Transform;
}

